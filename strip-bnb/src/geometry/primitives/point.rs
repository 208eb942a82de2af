use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Geometric primitive representing a point.
/// Within the search it is used as a corner point: a candidate anchor for the bottom-left corner of the next item.
#[derive(Debug, Clone, PartialEq, Copy, Serialize, Deserialize)]
pub struct Point(pub f32, pub f32);

impl Point {
    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.0
    }

    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.1
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f32, f32)> for Point {
    fn from(p: (f32, f32)) -> Self {
        Point(p.0, p.1)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
