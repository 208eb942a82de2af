use crate::geometry::primitives::Rect;
use std::fmt::Display;

/// An [`Item`](crate::entities::Item) placed in the strip.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct PlacedItem {
    /// The id of the item in the instance
    pub item_id: usize,
    /// The region of the strip occupied by the item
    pub rect: Rect,
}

impl Display for PlacedItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item {}: {}", self.item_id, self.rect)
    }
}
