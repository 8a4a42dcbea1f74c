//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Submitting a cart order with no entries.
    #[error("Cart is empty: add products before submitting an order")]
    EmptyCart,

    /// Cart entry index out of range.
    #[error("Cart entry index {index} out of range (cart has {len} entries)")]
    EntryOutOfRange { index: usize, len: usize },

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Failed to load or parse the catalog source.
    #[error("Catalog load error: {0}")]
    CatalogLoad(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::CatalogLoad(e.to_string())
    }
}
