use crate::bnb::AbortReason;
use std::fmt::{Display, Formatter};

/// Reasons for which a strip packing instance cannot be solved.
/// No partial solution is ever returned together with an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The instance is malformed, detected before any search work.
    InvalidInput(InvalidInput),
    /// An item can never be placed because it is wider than the strip.
    Infeasible {
        item_id: usize,
        item_width: f32,
        strip_width: f32,
    },
    /// The search budget ran out before a single complete packing was found.
    BudgetExhausted(AbortReason),
}

/// Details about a malformed instance.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// The strip width is not a finite, strictly positive number.
    StripWidth(f32),
    /// An item has a width or height which is not a finite, strictly positive number.
    ItemDimensions {
        item_id: usize,
        width: f32,
        height: f32,
    },
}

impl SolveError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SolveError::InvalidInput(_))
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, SolveError::Infeasible { .. })
    }
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StripWidth(w) => write!(f, "strip width must be strictly positive, got {w}"),
            Self::ItemDimensions {
                item_id,
                width,
                height,
            } => write!(
                f,
                "item {item_id} must have a strictly positive width and height, got ({width}, {height})"
            ),
        }
    }
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Self::Infeasible {
                item_id,
                item_width,
                strip_width,
            } => write!(
                f,
                "infeasible instance: item {item_id} (width {item_width}) does not fit in a strip of width {strip_width}"
            ),
            Self::BudgetExhausted(reason) => {
                write!(f, "no complete packing found before the search was aborted: {reason}")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

impl std::error::Error for SolveError {}

impl From<InvalidInput> for SolveError {
    fn from(e: InvalidInput) -> Self {
        SolveError::InvalidInput(e)
    }
}
