use serde::{Deserialize, Serialize};

/// External representation of an [`SPInstance`](crate::entities::SPInstance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSPInstance {
    /// The name of the instance
    #[serde(default)]
    pub name: String,
    /// The fixed width of the strip
    pub strip_width: f32,
    /// The items to be packed. Their ids define the input order
    pub items: Vec<ExtItem>,
}

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    /// Unique identifier of the item, consecutive starting from 0
    pub id: u64,
    pub width: f32,
    pub height: f32,
}

/// External representation of an [`SPSolution`](crate::entities::SPSolution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSPSolution {
    pub strip_width: f32,
    /// Height of the packing
    pub height: f32,
    /// Sum of the area of the items divided by the area of the strip up to `height`
    pub density: f32,
    pub status: ExtStatus,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
    pub stats: ExtBnbStats,
    /// Placed items, in the order in which they were placed
    pub placed_items: Vec<ExtPlacedItem>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtStatus {
    /// The packing is proven to be optimal
    Optimal,
    /// The search was aborted, the packing is the best one found
    Aborted,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedItem {
    /// The id of the item in the instance
    pub item_id: u64,
    /// Bottom-left corner of the item
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// External representation of [`BnbStats`](crate::bnb::BnbStats).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBnbStats {
    pub nodes_explored: u64,
    pub prunings_width: u64,
    pub prunings_bound: u64,
    pub complete_packings: u64,
    pub improvements: u64,
}
