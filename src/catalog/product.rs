//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Bookmark category; customizable bookmarks skip the personalization
/// offer because their personalization is already part of the base design.
const BOOKMARK_CATEGORY: &str = "Marcap\u{e1}ginas";

/// A product in the catalog.
///
/// Products are immutable once the catalog is built; all of them exist
/// before any session starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier, stable for the process lifetime.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Category label, drawn from the catalog's category list.
    pub category: String,
    /// Price of the product.
    pub price: Money,
    /// Display asset reference (URI or path).
    pub img: String,
    /// Whether the product supports personalization add-ons.
    pub customizable: bool,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        img: impl Into<String>,
        customizable: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            price,
            img: img.into(),
            customizable,
        }
    }

    /// Whether the personalization offer applies to this product.
    pub fn personalizable(&self) -> bool {
        self.customizable && self.category != BOOKMARK_CATEGORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(category: &str, customizable: bool) -> Product {
        Product::new(
            "prod-1",
            "Llavero Pikachu",
            category,
            Money::new(500, Currency::EUR),
            "/img/llavero-pikachu.webp",
            customizable,
        )
    }

    #[test]
    fn test_product_creation() {
        let p = product("Llaveros", true);
        assert_eq!(p.id.as_str(), "prod-1");
        assert_eq!(p.title, "Llavero Pikachu");
        assert_eq!(p.price.amount_cents, 500);
    }

    #[test]
    fn test_personalizable() {
        assert!(product("Llaveros", true).personalizable());
        assert!(!product("Llaveros", false).personalizable());
        assert!(!product("Marcap\u{e1}ginas", true).personalizable());
    }
}
