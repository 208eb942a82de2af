/// Set of geometric primitives
pub mod primitives;
