use crate::bnb::budget::{AbortReason, BudgetMonitor, SearchBudget};
use crate::bnb::incumbent::Incumbent;
use crate::bnb::skyline::Skyline;
use crate::bnb::stats::BnbStats;
use crate::entities::{PlacedItem, SPInstance, SPSolution};
use crate::error::SolveError;
use crate::geometry::primitives::{Point, Rect};
use crate::util::assertions;
use crate::util::{BnbConfig, FPA};
use log::{debug, info, warn};
use std::time::Instant;

/// How the search ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    /// The search tree was exhausted: the solution is optimal.
    OptimalityProven,
    /// The search budget ran out: the solution is the best one found, but possibly not optimal.
    Aborted(AbortReason),
}

/// Result of a successful solve.
#[derive(Debug, Clone)]
pub struct BnbOutcome {
    pub solution: SPSolution,
    pub termination: Termination,
    pub stats: BnbStats,
}

impl BnbOutcome {
    pub fn is_optimal(&self) -> bool {
        self.termination == Termination::OptimalityProven
    }
}

/// Exact branch-and-bound solver for the Strip Packing Problem.
///
/// Every unplaced item is tried at every corner point of the skyline of the current partial packing.
/// A branch is pruned as soon as its running height is not strictly lower than that of the best complete packing found so far.
pub struct BnbSolver {
    pub instance: SPInstance,
    pub config: BnbConfig,
}

impl BnbSolver {
    pub fn new(instance: SPInstance, config: BnbConfig) -> Self {
        Self { instance, config }
    }

    pub fn solve(&self) -> Result<BnbOutcome, SolveError> {
        if let Some(item) = self.instance.too_wide_item() {
            warn!(
                "[BnB] item {} (width {}) does not fit in the strip (width {})",
                item.id,
                item.width,
                self.instance.strip_width()
            );
            return Err(SolveError::Infeasible {
                item_id: item.id,
                item_width: item.width,
                strip_width: self.instance.strip_width(),
            });
        }

        info!(
            "[BnB] solving instance with {} items, strip width {}, height lower bound {:.3}",
            self.instance.n_items(),
            self.instance.strip_width(),
            self.instance.height_lower_bound()
        );

        let mut state = SearchState::new(&self.instance, &self.config);
        let root_corners = state.skyline.corners();
        state.search(&root_corners.points);

        let SearchState {
            incumbent,
            mut stats,
            monitor,
            abort,
            ..
        } = state;
        stats.elapsed = monitor.elapsed();

        let termination = match abort {
            None => Termination::OptimalityProven,
            Some(reason) => Termination::Aborted(reason),
        };

        let (height, placed_items) = match (incumbent.into_result(), abort) {
            (Some(result), _) => result,
            (None, Some(reason)) => {
                warn!("[BnB] search aborted without any complete packing: {reason}");
                return Err(SolveError::BudgetExhausted(reason));
            }
            (None, None) => {
                //cannot happen once the width pre-check passed: stacking all items always fits
                let item = self.instance.items()[0];
                return Err(SolveError::Infeasible {
                    item_id: item.id,
                    item_width: item.width,
                    strip_width: self.instance.strip_width(),
                });
            }
        };

        let solution = SPSolution {
            strip_width: self.instance.strip_width(),
            height,
            placed_items,
            time_stamp: Instant::now(),
        };

        debug_assert!(assertions::solution_is_valid(&self.instance, &solution));

        match termination {
            Termination::OptimalityProven => info!(
                "[BnB] optimal height {} found ({stats})",
                solution.height
            ),
            Termination::Aborted(reason) => warn!(
                "[BnB] search aborted ({reason}), best height found {} is not proven optimal ({stats})",
                solution.height
            ),
        }

        Ok(BnbOutcome {
            solution,
            termination,
            stats,
        })
    }
}

/// Mutable state of a single search.
/// The partial packing is modified under a strict stack discipline:
/// every placement pushed before a recursive call is popped after it returns.
struct SearchState<'a> {
    instance: &'a SPInstance,
    break_symmetries: bool,
    /// Placed items, in insertion order
    stack: Vec<PlacedItem>,
    /// Same rectangles as `stack`, in skyline order
    skyline: Skyline,
    placed: Vec<bool>,
    /// For every item, the closest preceding item with identical dimensions
    prev_twin: Vec<Option<usize>>,
    incumbent: Incumbent,
    stats: BnbStats,
    monitor: BudgetMonitor,
    abort: Option<AbortReason>,
}

impl<'a> SearchState<'a> {
    fn new(instance: &'a SPInstance, config: &BnbConfig) -> Self {
        let n = instance.n_items();
        let items = instance.items();
        let prev_twin = (0..n)
            .map(|i| (0..i).rev().find(|&j| items[j].same_dimensions(&items[i])))
            .collect();

        Self {
            instance,
            break_symmetries: config.break_symmetries,
            stack: Vec::with_capacity(n),
            skyline: Skyline::with_capacity(n),
            placed: vec![false; n],
            prev_twin,
            incumbent: Incumbent::new(),
            stats: BnbStats::default(),
            monitor: BudgetMonitor::start(SearchBudget::from(config)),
            abort: None,
        }
    }

    fn search(&mut self, corners: &[Point]) {
        self.stats.on_node(self.stack.len());
        if let Some(reason) = self.monitor.on_node(self.stats.nodes_explored) {
            self.abort = Some(reason);
            return;
        }

        if self.stack.len() == self.instance.n_items() {
            self.register_complete_packing();
            return;
        }

        let strip_width = self.instance.strip_width();

        for item_id in 0..self.instance.n_items() {
            if self.placed[item_id] || self.has_unplaced_twin(item_id) {
                continue;
            }
            let item = *self.instance.item(item_id);

            for &corner in corners {
                if self.abort.is_some() {
                    return;
                }
                if FPA(corner.x() + item.width) > FPA(strip_width) {
                    self.stats.on_pruning_width();
                    continue;
                }

                let rect = Rect::at_unchecked(corner, item.width, item.height);
                self.stack.push(PlacedItem { item_id, rect });
                let sky_idx = self.skyline.insert(rect);

                let next = self.skyline.corners();
                if self.incumbent.is_improved_by(next.height) {
                    self.placed[item_id] = true;
                    self.search(&next.points);
                    self.placed[item_id] = false;
                } else {
                    self.stats.on_pruning_bound();
                }

                self.skyline.remove(sky_idx);
                self.stack.pop();
            }
        }
    }

    /// With symmetry breaking enabled, an item is skipped while an identical item with a lower id is still unplaced.
    /// Both would root identical subtrees, up to swapping their ids.
    fn has_unplaced_twin(&self, item_id: usize) -> bool {
        if !self.break_symmetries {
            return false;
        }
        let mut twin = self.prev_twin[item_id];
        while let Some(t) = twin {
            if !self.placed[t] {
                return true;
            }
            twin = self.prev_twin[t];
        }
        false
    }

    fn register_complete_packing(&mut self) {
        let height = self
            .stack
            .iter()
            .map(|pi| pi.rect.y_max())
            .fold(0.0, f32::max);

        let improved = self.incumbent.try_update(height, &self.stack);
        self.stats.on_complete_packing(improved);
        if improved {
            debug!(
                "[BnB] new incumbent with height {} after {} nodes",
                height, self.stats.nodes_explored
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnb::skyline::{compute_corners, sort_skyline};
    use crate::error::InvalidInput;
    use itertools::Itertools;

    fn solve(strip_width: f32, dims: &[(f32, f32)]) -> Result<BnbOutcome, SolveError> {
        let instance = SPInstance::new(strip_width, dims)?;
        BnbSolver::new(instance, BnbConfig::default()).solve()
    }

    #[test]
    fn empty_instance() {
        let outcome = solve(3.0, &[]).unwrap();
        assert!(outcome.is_optimal());
        assert_eq!(outcome.solution.height, 0.0);
        assert!(outcome.solution.placed_items.is_empty());
        assert_eq!(outcome.solution.density(), 0.0);
    }

    #[test]
    fn single_item_at_origin() {
        let outcome = solve(10.0, &[(4.0, 7.0)]).unwrap();
        assert_eq!(outcome.solution.height, 7.0);
        let placed = outcome.solution.placed_items;
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].item_id, 0);
        assert_eq!((placed[0].rect.x(), placed[0].rect.y()), (0.0, 0.0));
    }

    #[test]
    fn full_width_items_stack() {
        let outcome = solve(4.0, &[(4.0, 1.0), (4.0, 2.5), (4.0, 3.0)]).unwrap();
        assert_eq!(outcome.solution.height, 6.5);
    }

    #[test]
    fn small_reference_instance() {
        let outcome = solve(5.0, &[(3.0, 2.0), (2.0, 2.0), (2.0, 3.0)]).unwrap();
        assert!(outcome.is_optimal());
        assert_eq!(outcome.solution.height, 4.0);
        assert!(assertions::solution_is_valid(
            &SPInstance::new(5.0, &[(3.0, 2.0), (2.0, 2.0), (2.0, 3.0)]).unwrap(),
            &outcome.solution
        ));
    }

    #[test]
    fn too_wide_item_is_infeasible() {
        let err = solve(5.0, &[(3.0, 2.0), (6.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            SolveError::Infeasible {
                item_id: 1,
                item_width: 6.0,
                strip_width: 5.0
            }
        );
    }

    #[test]
    fn invalid_input_is_rejected_before_search() {
        let err = solve(-1.0, &[(3.0, 2.0)]).unwrap_err();
        assert_eq!(err, SolveError::InvalidInput(InvalidInput::StripWidth(-1.0)));
    }

    #[test]
    fn identical_items_all_placed() {
        let outcome = solve(4.0, &[(2.0, 2.0); 4]).unwrap();
        assert_eq!(outcome.solution.height, 4.0);
        let ids = outcome
            .solution
            .placed_items
            .iter()
            .map(|pi| pi.item_id)
            .sorted()
            .collect_vec();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn placements_follow_insertion_order() {
        // replaying the packing in its order must place every item on a corner of the previous packing
        let instance =
            SPInstance::new(6.0, &[(3.0, 2.0), (2.0, 4.0), (4.0, 1.0), (1.0, 3.0)]).unwrap();
        let outcome = BnbSolver::new(instance, BnbConfig::default()).solve().unwrap();

        let mut replay: Vec<Rect> = vec![];
        for pi in &outcome.solution.placed_items {
            let mut sorted = replay.clone();
            sort_skyline(&mut sorted);
            let corners = compute_corners(&sorted);
            assert!(corners
                .points
                .contains(&Point(pi.rect.x(), pi.rect.y())));
            replay.push(pi.rect);
        }
    }

    #[test]
    fn deterministic() {
        let dims = [(2.0, 3.0), (3.0, 1.0), (1.0, 1.0), (2.0, 2.0), (3.0, 2.0)];
        let a = solve(5.0, &dims).unwrap();
        let b = solve(5.0, &dims).unwrap();
        assert_eq!(a.solution.height, b.solution.height);
        assert_eq!(a.solution.placed_items, b.solution.placed_items);
        assert_eq!(a.stats.nodes_explored, b.stats.nodes_explored);
    }

    #[test]
    fn symmetry_breaking_keeps_the_optimum() {
        let dims = [(2.0, 1.0), (1.0, 2.0), (2.0, 1.0), (1.0, 2.0), (2.0, 1.0)];
        let instance = SPInstance::new(3.0, &dims).unwrap();

        let plain = BnbSolver::new(instance.clone(), BnbConfig::default())
            .solve()
            .unwrap();
        let config = BnbConfig {
            break_symmetries: true,
            ..BnbConfig::default()
        };
        let broken = BnbSolver::new(instance, config).solve().unwrap();

        assert_eq!(plain.solution.height, broken.solution.height);
        assert!(broken.stats.nodes_explored < plain.stats.nodes_explored);
    }

    #[test]
    fn node_limit_returns_best_so_far() {
        let dims = [(2.0, 3.0), (3.0, 1.0), (1.0, 1.0), (2.0, 2.0), (3.0, 2.0)];
        let instance = SPInstance::new(5.0, &dims).unwrap();
        // the first dive reaches a complete packing after n + 1 nodes
        let config = BnbConfig {
            node_limit: Some(dims.len() as u64 + 1),
            ..BnbConfig::default()
        };
        let outcome = BnbSolver::new(instance.clone(), config).solve().unwrap();
        assert_eq!(
            outcome.termination,
            Termination::Aborted(AbortReason::NodeLimit(dims.len() as u64 + 1))
        );
        assert!(!outcome.is_optimal());
        assert!(assertions::solution_is_valid(&instance, &outcome.solution));
    }

    #[test]
    fn node_limit_without_solution() {
        let instance = SPInstance::new(5.0, &[(2.0, 3.0), (3.0, 1.0), (1.0, 1.0)]).unwrap();
        let config = BnbConfig {
            node_limit: Some(2),
            ..BnbConfig::default()
        };
        let err = BnbSolver::new(instance, config).solve().unwrap_err();
        assert_eq!(err, SolveError::BudgetExhausted(AbortReason::NodeLimit(2)));
    }
}
