mod instance;
mod item;
mod placed_item;
mod solution;

#[doc(inline)]
pub use instance::SPInstance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use placed_item::PlacedItem;
#[doc(inline)]
pub use solution::SPSolution;
