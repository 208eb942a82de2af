use std::fmt::{Display, Formatter};
use std::time::Duration;
use thousands::Separable;

/// Statistics collected during a branch-and-bound search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BnbStats {
    /// Search nodes visited, the root included
    pub nodes_explored: u64,
    /// Item-corner combinations rejected because the item would stick out of the strip
    pub prunings_width: u64,
    /// Placements rejected because the running height could not beat the incumbent
    pub prunings_bound: u64,
    /// Complete packings reached
    pub complete_packings: u64,
    /// Complete packings which improved the incumbent
    pub improvements: u64,
    /// Number of items placed at the deepest node
    pub max_depth: usize,
    pub elapsed: Duration,
}

impl BnbStats {
    #[inline]
    pub fn on_node(&mut self, depth: usize) {
        self.nodes_explored += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_pruning_width(&mut self) {
        self.prunings_width += 1;
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound += 1;
    }

    #[inline]
    pub fn on_complete_packing(&mut self, improved: bool) {
        self.complete_packings += 1;
        if improved {
            self.improvements += 1;
        }
    }
}

impl Display for BnbStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} width prunings, {} bound prunings, {} complete packings ({} improving), max depth {}, {:.3}ms",
            self.nodes_explored.separate_with_commas(),
            self.prunings_width.separate_with_commas(),
            self.prunings_bound.separate_with_commas(),
            self.complete_packings.separate_with_commas(),
            self.improvements,
            self.max_depth,
            self.elapsed.as_secs_f64() * 1000.0
        )
    }
}
