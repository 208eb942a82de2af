use crate::util::BnbConfig;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// Limits on the amount of work a single search may perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchBudget {
    pub node_limit: Option<u64>,
    pub time_limit: Option<Duration>,
    /// Number of nodes between two clock reads
    pub check_interval: u64,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self {
            node_limit: None,
            time_limit: None,
            check_interval: 1_000,
        }
    }
}

impl From<&BnbConfig> for SearchBudget {
    fn from(config: &BnbConfig) -> Self {
        Self {
            node_limit: config.node_limit,
            time_limit: config.time_limit(),
            check_interval: config.check_interval.max(1),
        }
    }
}

/// Why a search stopped before proving optimality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbortReason {
    NodeLimit(u64),
    TimeLimit(Duration),
}

impl Display for AbortReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NodeLimit(n) => write!(f, "node limit of {n} reached"),
            Self::TimeLimit(d) => write!(f, "time limit of {:.3}s exceeded", d.as_secs_f64()),
        }
    }
}

/// Tracks a [`SearchBudget`] during a search.
/// The clock is only read every `check_interval` nodes to keep the overhead per node negligible.
#[derive(Debug)]
pub struct BudgetMonitor {
    budget: SearchBudget,
    start: Instant,
    nodes_since_check: u64,
}

impl BudgetMonitor {
    pub fn start(budget: SearchBudget) -> Self {
        Self {
            budget,
            start: Instant::now(),
            nodes_since_check: 0,
        }
    }

    /// Registers the visit of a node, returns the reason to abort if the budget is exhausted.
    pub fn on_node(&mut self, nodes_explored: u64) -> Option<AbortReason> {
        if let Some(limit) = self.budget.node_limit
            && nodes_explored > limit
        {
            return Some(AbortReason::NodeLimit(limit));
        }

        self.nodes_since_check += 1;
        if self.nodes_since_check >= self.budget.check_interval {
            self.nodes_since_check = 0;
            if let Some(limit) = self.budget.time_limit
                && self.start.elapsed() > limit
            {
                return Some(AbortReason::TimeLimit(limit));
            }
        }
        None
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_aborts() {
        let mut monitor = BudgetMonitor::start(SearchBudget::unlimited());
        assert!((1..10_000).all(|n| monitor.on_node(n).is_none()));
    }

    #[test]
    fn node_limit() {
        let budget = SearchBudget {
            node_limit: Some(3),
            ..SearchBudget::unlimited()
        };
        let mut monitor = BudgetMonitor::start(budget);
        assert_eq!(monitor.on_node(3), None);
        assert_eq!(monitor.on_node(4), Some(AbortReason::NodeLimit(3)));
    }

    #[test]
    fn time_limit_checked_at_interval() {
        let budget = SearchBudget {
            node_limit: None,
            time_limit: Some(Duration::ZERO),
            check_interval: 2,
        };
        let mut monitor = BudgetMonitor::start(budget);
        std::thread::sleep(Duration::from_millis(1));
        assert_eq!(monitor.on_node(1), None);
        assert_eq!(
            monitor.on_node(2),
            Some(AbortReason::TimeLimit(Duration::ZERO))
        );
    }

    #[test]
    fn from_config() {
        let config = BnbConfig {
            node_limit: Some(10),
            time_limit_sec: Some(1.5),
            check_interval: 0,
            break_symmetries: false,
        };
        let budget = SearchBudget::from(&config);
        assert_eq!(budget.node_limit, Some(10));
        assert_eq!(budget.time_limit, Some(Duration::from_millis(1500)));
        assert_eq!(budget.check_interval, 1);
    }
}
