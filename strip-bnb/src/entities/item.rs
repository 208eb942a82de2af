/// Rectangular item to be packed into the strip. Items cannot be rotated.
/// Two items with identical dimensions are still distinct items, identified by their `id`.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Item {
    /// Position of the item in the input sequence
    pub id: usize,
    pub width: f32,
    pub height: f32,
}

impl Item {
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether `self` and `other` are interchangeable in a packing.
    pub fn same_dimensions(&self, other: &Item) -> bool {
        self.width == other.width && self.height == other.height
    }
}
