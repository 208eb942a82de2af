//! Exact solver for the rectangular Strip Packing Problem (2SP) without rotation.
//!
//! Rectangles are placed one by one at the corner points of the skyline formed by the
//! rectangles already placed. The search enumerates every item at every corner point and
//! prunes each branch whose running height cannot improve on the incumbent.

/// Corner-point branch-and-bound search
pub mod bnb;

/// Entities to model the Strip Packing Problem
pub mod entities;

/// Errors reported by the solver
pub mod error;

/// Geometric primitives
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
