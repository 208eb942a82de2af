/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::BnbConfig;
#[doc(inline)]
pub use fpa::FPA;
