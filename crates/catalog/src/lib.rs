//! Flooring catalog domain module.
//!
//! This crate contains the product catalog and the cost estimate, implemented
//! purely as deterministic domain logic (no IO, no terminal, no storage).

pub mod catalog;
pub mod estimate;
mod numeric;
pub mod product;

pub use catalog::{Catalog, Listing, Selection};
pub use estimate::{Cost, SquareFootage};
pub use product::{Colors, Product, UnitPrice};
