use crate::entities::Item;
use crate::error::{InvalidInput, SolveError};
use crate::util::FPA;

/// Instance of the Strip Packing Problem: a set of items to be packed into a single strip
/// with a fixed width and variable height.
#[derive(Debug, Clone)]
pub struct SPInstance {
    strip_width: f32,
    items: Vec<Item>,
}

impl SPInstance {
    /// Creates a validated instance, the item ids are assigned in order of `dimensions`.
    /// Zero items is a valid (degenerate) instance.
    pub fn new(strip_width: f32, dimensions: &[(f32, f32)]) -> Result<Self, SolveError> {
        if !(strip_width.is_finite() && strip_width > 0.0) {
            return Err(InvalidInput::StripWidth(strip_width).into());
        }

        let items = dimensions
            .iter()
            .enumerate()
            .map(|(id, &(width, height))| {
                let valid = |v: f32| v.is_finite() && v > 0.0;
                match valid(width) && valid(height) {
                    true => Ok(Item { id, width, height }),
                    false => Err(InvalidInput::ItemDimensions {
                        item_id: id,
                        width,
                        height,
                    }),
                }
            })
            .collect::<Result<Vec<Item>, InvalidInput>>()?;

        Ok(Self { strip_width, items })
    }

    pub fn strip_width(&self) -> f32 {
        self.strip_width
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn item_area(&self) -> f32 {
        self.items.iter().map(Item::area).sum()
    }

    /// Returns the first item which does not fit in the strip, if any.
    pub fn too_wide_item(&self) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| FPA(item.width) > FPA(self.strip_width))
    }

    /// Trivial lower bound on the height of any packing: the tallest item and the area bound.
    pub fn height_lower_bound(&self) -> f32 {
        let tallest = self.items.iter().map(|i| i.height).fold(0.0, f32::max);
        f32::max(tallest, self.item_area() / self.strip_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0; "zero")]
    #[test_case(-3.0; "negative")]
    #[test_case(f32::NAN; "nan")]
    fn invalid_strip_width(width: f32) {
        let err = SPInstance::new(width, &[(1.0, 1.0)]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test_case((0.0, 1.0); "zero width")]
    #[test_case((1.0, 0.0); "zero height")]
    #[test_case((-1.0, 2.0); "negative width")]
    fn invalid_item(dims: (f32, f32)) {
        let err = SPInstance::new(5.0, &[(1.0, 1.0), dims]).unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidInput(InvalidInput::ItemDimensions {
                item_id: 1,
                width: dims.0,
                height: dims.1
            })
        );
    }

    #[test]
    fn duplicates_are_distinct_items() {
        let instance = SPInstance::new(4.0, &[(2.0, 1.0), (2.0, 1.0)]).unwrap();
        assert_eq!(instance.n_items(), 2);
        assert_eq!(instance.item(0).id, 0);
        assert_eq!(instance.item(1).id, 1);
        assert!(instance.item(0).same_dimensions(instance.item(1)));
    }

    #[test]
    fn too_wide_item_is_found() {
        let instance = SPInstance::new(4.0, &[(2.0, 1.0), (5.0, 1.0), (6.0, 1.0)]).unwrap();
        assert_eq!(instance.too_wide_item().map(|i| i.id), Some(1));
    }

    #[test]
    fn lower_bound() {
        let instance = SPInstance::new(5.0, &[(3.0, 2.0), (2.0, 2.0), (2.0, 3.0)]).unwrap();
        assert_eq!(instance.height_lower_bound(), 16.0 / 5.0);
    }
}
