//! Immutable catalog store.
//!
//! The catalog is supplied once at startup (typically from a JSON
//! source) and never mutated afterwards. Products keep their source
//! order; the filter relies on that order being stable.

use crate::catalog::Product;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Wire-format product record, as found in the catalog source.
///
/// Prices appear as decimal euro amounts in the source and are
/// converted to cents-based [`Money`] when the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub img: String,
    pub customizable: bool,
}

impl ProductRecord {
    fn into_product(self, currency: Currency) -> Product {
        Product {
            id: ProductId::new(self.id),
            title: self.title,
            category: self.category,
            price: Money::from_decimal(self.price, currency),
            img: self.img,
            customizable: self.customizable,
        }
    }
}

/// Wire-format catalog source: the category taxonomy plus the product
/// list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSource {
    pub categories: Vec<String>,
    pub products: Vec<ProductRecord>,
}

/// The read-only product catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog from in-memory products and category labels.
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Build a catalog from a parsed source, pricing in the given
    /// currency.
    pub fn from_source(source: CatalogSource, currency: Currency) -> Self {
        let products = source
            .products
            .into_iter()
            .map(|r| r.into_product(currency))
            .collect();
        Self::new(products, source.categories)
    }

    /// Parse a JSON catalog source, pricing in euros.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let source: CatalogSource = serde_json::from_str(json)?;
        Ok(Self::from_source(source, Currency::EUR))
    }

    /// All products, in source order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// The category taxonomy, in source order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
