use crate::geometry::primitives::Point;
use crate::util::FPA;
use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

///Axis-aligned rectangle, anchored at its bottom-left corner.
///Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl Rect {
    pub fn try_new(x: f32, y: f32, w: f32, h: f32) -> Result<Self> {
        ensure!(
            [x, y, w, h].iter().all(|v| v.is_finite()),
            "invalid rectangle, non-finite value: x: {x}, y: {y}, w: {w}, h: {h}"
        );
        ensure!(
            x >= 0.0 && y >= 0.0 && w > 0.0 && h > 0.0,
            "invalid rectangle, x: {x}, y: {y}, w: {w}, h: {h}"
        );
        Ok(Rect { x, y, w, h })
    }

    /// Creates a rectangle of `w` by `h` with its bottom-left corner at `anchor`.
    pub fn at(anchor: Point, w: f32, h: f32) -> Result<Self> {
        Rect::try_new(anchor.x(), anchor.y(), w, h)
    }

    /// Skips validation, for anchors and dimensions that were validated upstream.
    #[inline(always)]
    pub(crate) fn at_unchecked(anchor: Point, w: f32, h: f32) -> Self {
        debug_assert!(Rect::at(anchor, w, h).is_ok());
        Rect {
            x: anchor.x(),
            y: anchor.y(),
            w,
            h,
        }
    }

    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline(always)]
    pub fn width(&self) -> f32 {
        self.w
    }

    #[inline(always)]
    pub fn height(&self) -> f32 {
        self.h
    }

    /// x-coordinate of the right edge
    #[inline(always)]
    pub fn x_max(&self) -> f32 {
        self.x + self.w
    }

    /// y-coordinate of the top edge
    #[inline(always)]
    pub fn y_max(&self) -> f32 {
        self.y + self.h
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// Whether the interiors of `self` and `other` intersect.
    /// Touching edges, within floating point tolerance, do not count as an overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        FPA(self.x) < FPA(other.x_max())
            && FPA(other.x) < FPA(self.x_max())
            && FPA(self.y) < FPA(other.y_max())
            && FPA(other.y) < FPA(self.y_max())
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}x{} @ ({}, {})]", self.w, self.h, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 0.0, 0.0, 1.0; "zero width")]
    #[test_case(0.0, 0.0, 1.0, -1.0; "negative height")]
    #[test_case(-1.0, 0.0, 1.0, 1.0; "negative x")]
    #[test_case(0.0, f32::NAN, 1.0, 1.0; "nan y")]
    #[test_case(0.0, 0.0, f32::INFINITY, 1.0; "infinite width")]
    fn rejects_invalid(x: f32, y: f32, w: f32, h: f32) {
        assert!(Rect::try_new(x, y, w, h).is_err());
    }

    #[test]
    fn edges() {
        let r = Rect::try_new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(r.x_max(), 4.0);
        assert_eq!(r.y_max(), 6.0);
        assert_eq!(r.area(), 12.0);
    }

    #[test]
    fn touching_is_not_overlapping() {
        let a = Rect::try_new(0.0, 0.0, 2.0, 2.0).unwrap();
        let right = Rect::try_new(2.0, 0.0, 2.0, 2.0).unwrap();
        let above = Rect::try_new(0.0, 2.0, 2.0, 2.0).unwrap();
        let inside = Rect::try_new(1.0, 1.0, 2.0, 2.0).unwrap();
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&above));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }
}
