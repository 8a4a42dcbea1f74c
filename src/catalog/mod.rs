//! Product catalog module.
//!
//! Contains the product record type and the immutable catalog store.

mod product;
mod store;

pub use product::Product;
pub use store::{Catalog, CatalogSource, ProductRecord};
