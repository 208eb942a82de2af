use crate::entities::{PlacedItem, SPInstance, SPSolution};
use crate::util::FPA;
use itertools::Itertools;
use log::error;
use ordered_float::OrderedFloat;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and tests

pub fn solution_is_valid(instance: &SPInstance, solution: &SPSolution) -> bool {
    FPA(solution.strip_width) == FPA(instance.strip_width())
        && items_within_strip(&solution.placed_items, solution.strip_width, solution.height)
        && items_disjoint(&solution.placed_items)
        && all_items_placed_once(instance, &solution.placed_items)
        && height_matches(&solution.placed_items, solution.height)
}

pub fn items_within_strip(placed_items: &[PlacedItem], strip_width: f32, height: f32) -> bool {
    match placed_items.iter().find(|pi| {
        FPA(pi.rect.x_max()) > FPA(strip_width) || FPA(pi.rect.y_max()) > FPA(height)
    }) {
        Some(pi) => {
            error!("{pi} exceeds the strip [0, {strip_width}] x [0, {height}]");
            false
        }
        None => true,
    }
}

pub fn items_disjoint(placed_items: &[PlacedItem]) -> bool {
    match placed_items
        .iter()
        .tuple_combinations()
        .find(|(a, b)| a.rect.overlaps(&b.rect))
    {
        Some((a, b)) => {
            error!("{a} overlaps with {b}");
            false
        }
        None => true,
    }
}

/// Every item is placed exactly once, with its own dimensions.
pub fn all_items_placed_once(instance: &SPInstance, placed_items: &[PlacedItem]) -> bool {
    let ids = placed_items.iter().map(|pi| pi.item_id).sorted().collect_vec();
    if ids != (0..instance.n_items()).collect_vec() {
        error!("placed item ids {ids:?} do not match the {} items", instance.n_items());
        return false;
    }
    placed_items.iter().all(|pi| {
        let item = instance.item(pi.item_id);
        item.width == pi.rect.width() && item.height == pi.rect.height()
    })
}

/// Same multiset of (width, height) in both sequences.
pub fn dimensions_match(a: &[(f32, f32)], b: &[(f32, f32)]) -> bool {
    let key = |&(w, h): &(f32, f32)| (OrderedFloat(w), OrderedFloat(h));
    a.iter().map(key).sorted().collect_vec() == b.iter().map(key).sorted().collect_vec()
}

pub fn height_matches(placed_items: &[PlacedItem], height: f32) -> bool {
    let max_y = placed_items
        .iter()
        .map(|pi| pi.rect.y_max())
        .fold(0.0, f32::max);
    FPA(max_y) == FPA(height)
}
