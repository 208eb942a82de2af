use crate::geometry::primitives::{Point, Rect};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Height of a (partial) packing together with the corner points of its skyline.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerSet {
    pub height: f32,
    /// Candidate anchors for the next item, ordered left to right (strictly increasing x)
    pub points: Vec<Point>,
}

/// Computes the height and the corner points of a packing.
///
/// `sorted` must be in skyline order: descending by top edge (`y + h`).
/// The scan selects the *extreme items*, those whose right edge strictly exceeds every right edge scanned before them.
/// Together they form a staircase profile, descending from left to right.
/// A corner point lies at the foot of every step: `(0, top(e_1))`, `(right(e_{i-1}), top(e_i))` and `(right(e_m), 0)`.
pub fn compute_corners(sorted: &[Rect]) -> CornerSet {
    debug_assert!(is_skyline_ordered(sorted));

    if sorted.is_empty() {
        return CornerSet {
            height: 0.0,
            points: vec![Point(0.0, 0.0)],
        };
    }

    let mut points = Vec::with_capacity(sorted.len() + 1);
    let mut x_reached = 0.0;
    for rect in sorted {
        if rect.x_max() > x_reached {
            //extreme item: its step starts where the previous one ended
            points.push(Point(x_reached, rect.y_max()));
            x_reached = rect.x_max();
        }
    }
    points.push(Point(x_reached, 0.0));

    let height = points.iter().map(|p| p.y()).fold(0.0, f32::max);

    CornerSet { height, points }
}

/// Sorts rectangles in skyline order. The sort is stable: rectangles with equal tops keep their relative order.
pub fn sort_skyline(rects: &mut [Rect]) {
    rects.sort_by_key(|r| Reverse(OrderedFloat(r.y_max())));
}

pub fn is_skyline_ordered(rects: &[Rect]) -> bool {
    rects.windows(2).all(|w| w[0].y_max() >= w[1].y_max())
}

/// The placed rectangles of a partial packing, kept in skyline order.
///
/// Insertion puts a rectangle behind all rectangles with an equal or higher top,
/// which is the position a stable re-sort of the packing (with the new rectangle appended) would give it.
/// Consequently the corners are identical to those obtained by sorting the packing from scratch at every node.
#[derive(Debug, Clone, Default)]
pub struct Skyline {
    rects: Vec<Rect>,
}

impl Skyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rects: Vec::with_capacity(capacity),
        }
    }

    /// Inserts `rect` and returns its index, required to [`remove`](Skyline::remove) it again.
    pub fn insert(&mut self, rect: Rect) -> usize {
        let idx = self.rects.partition_point(|r| r.y_max() >= rect.y_max());
        self.rects.insert(idx, rect);
        idx
    }

    /// Removes the rectangle inserted at `idx`.
    /// Only valid when every rectangle inserted after it has already been removed.
    pub fn remove(&mut self, idx: usize) -> Rect {
        self.rects.remove(idx)
    }

    pub fn corners(&self) -> CornerSet {
        compute_corners(&self.rects)
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
