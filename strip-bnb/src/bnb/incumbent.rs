//! Best complete packing found so far during a search.
//!
//! The incumbent height acts as the upper bound of the branch-and-bound:
//! a branch is only explored while its running height is strictly lower.

use crate::entities::PlacedItem;
use crate::util::FPA;

#[derive(Debug, Clone)]
pub struct Incumbent {
    height: f32,
    placed_items: Vec<PlacedItem>,
}

impl Default for Incumbent {
    fn default() -> Self {
        Self::new()
    }
}

impl Incumbent {
    /// Creates an empty incumbent with an infinite height.
    pub fn new() -> Self {
        Self {
            height: f32::INFINITY,
            placed_items: vec![],
        }
    }

    /// Whether a (partial) packing of `height` could still improve on the incumbent.
    #[inline(always)]
    pub fn is_improved_by(&self, height: f32) -> bool {
        FPA(height) < FPA(self.height)
    }

    /// Replaces the incumbent if `height` is strictly lower. Returns whether it was replaced.
    pub fn try_update(&mut self, height: f32, placed_items: &[PlacedItem]) -> bool {
        match self.is_improved_by(height) {
            true => {
                debug_assert!(height <= self.height);
                self.height = height;
                self.placed_items.clear();
                self.placed_items.extend_from_slice(placed_items);
                true
            }
            false => false,
        }
    }

    pub fn is_set(&self) -> bool {
        self.height.is_finite()
    }

    /// Returns the height and packing, or `None` if no complete packing was ever registered.
    pub fn into_result(self) -> Option<(f32, Vec<PlacedItem>)> {
        match self.is_set() {
            true => Some((self.height, self.placed_items)),
            false => None,
        }
    }
}
