use crate::entities::PlacedItem;
use std::time::Instant;

/// A complete packing of all items of an [`SPInstance`](crate::entities::SPInstance).
#[derive(Debug, Clone)]
pub struct SPSolution {
    pub strip_width: f32,
    /// Height of the packing, the objective to minimize
    pub height: f32,
    /// Placed items, in the order they were inserted during the search
    pub placed_items: Vec<PlacedItem>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl SPSolution {
    /// Fraction of the used strip area covered by items.
    /// Zero for an empty packing.
    pub fn density(&self) -> f32 {
        let used_area = self.strip_width * self.height;
        match used_area > 0.0 {
            true => {
                let item_area: f32 = self.placed_items.iter().map(|pi| pi.rect.area()).sum();
                item_area / used_area
            }
            false => 0.0,
        }
    }
}
