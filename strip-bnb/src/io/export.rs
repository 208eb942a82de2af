use crate::bnb::{BnbOutcome, BnbStats};
use crate::entities::PlacedItem;
use crate::io::ext_repr::{ExtBnbStats, ExtPlacedItem, ExtSPSolution, ExtStatus};
use std::time::Instant;

/// Exports the solution of a [`BnbOutcome`] out of the library
pub fn export(outcome: &BnbOutcome, epoch: Instant) -> ExtSPSolution {
    let solution = &outcome.solution;
    let status = match outcome.is_optimal() {
        true => ExtStatus::Optimal,
        false => ExtStatus::Aborted,
    };

    ExtSPSolution {
        strip_width: solution.strip_width,
        height: solution.height,
        density: solution.density(),
        status,
        run_time_ms: solution.time_stamp.duration_since(epoch).as_millis() as u64,
        stats: export_stats(&outcome.stats),
        placed_items: solution.placed_items.iter().map(export_placed_item).collect(),
    }
}

pub fn export_placed_item(pi: &PlacedItem) -> ExtPlacedItem {
    ExtPlacedItem {
        item_id: pi.item_id as u64,
        x: pi.rect.x(),
        y: pi.rect.y(),
        width: pi.rect.width(),
        height: pi.rect.height(),
    }
}

pub fn export_stats(stats: &BnbStats) -> ExtBnbStats {
    ExtBnbStats {
        nodes_explored: stats.nodes_explored,
        prunings_width: stats.prunings_width,
        prunings_bound: stats.prunings_bound,
        complete_packings: stats.complete_packings,
        improvements: stats.improvements,
    }
}
