mod budget;
mod incumbent;
mod solver;
mod stats;

/// Skyline and corner point computation
pub mod skyline;

#[doc(inline)]
pub use budget::{AbortReason, BudgetMonitor, SearchBudget};
#[doc(inline)]
pub use incumbent::Incumbent;
#[doc(inline)]
pub use solver::{BnbOutcome, BnbSolver, Termination};
#[doc(inline)]
pub use stats::BnbStats;
