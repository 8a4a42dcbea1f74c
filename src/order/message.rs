//! Order message composition.
//!
//! The two message variants share one tagged union and one `render`
//! implementation, so the formatting contract lives in exactly one
//! place.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// One listed product line in a cart-order message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product title at composition time.
    pub title: String,
    /// Product price at composition time.
    pub price: Money,
}

/// An order message ready to render.
///
/// Ephemeral: a snapshot taken at the moment of submission, alive only
/// for the duration of message composition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum OrderMessage {
    /// An order built from cart entries, with the computed total.
    CartOrder {
        lines: Vec<OrderLine>,
        total: Money,
    },
    /// A free-text custom inquiry from the contact path. No product
    /// list, no total.
    CustomInquiry { name: String, message: String },
}

impl OrderMessage {
    /// Snapshot a cart into an order message.
    ///
    /// Refuses an empty cart: a cart order with no products and a
    /// €0.00 total is never emitted.
    pub fn from_cart(cart: &Cart) -> Result<Self, StoreError> {
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        let lines = cart
            .entries()
            .iter()
            .map(|e| OrderLine {
                title: e.title.clone(),
                price: e.price,
            })
            .collect();
        Ok(OrderMessage::CartOrder {
            lines,
            total: cart.total(),
        })
    }

    /// Build a cart-order message for a single ad-hoc product.
    pub fn single_product(product: &Product) -> Self {
        OrderMessage::CartOrder {
            lines: vec![OrderLine {
                title: product.title.clone(),
                price: product.price,
            }],
            total: product.price,
        }
    }

    /// Build a custom inquiry message.
    pub fn inquiry(name: impl Into<String>, message: impl Into<String>) -> Self {
        OrderMessage::CustomInquiry {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Render the message text.
    pub fn render(&self, config: &StoreConfig) -> String {
        match self {
            OrderMessage::CartOrder { lines, total } => {
                let mut product_list = String::new();
                for (index, line) in lines.iter().enumerate() {
                    if index > 0 {
                        product_list.push('\n');
                    }
                    let _ = write!(
                        product_list,
                        "{}. {} - {}",
                        index + 1,
                        line.title,
                        line.price.display()
                    );
                }
                format!(
                    "Hola, quiero hacer un pedido desde {}:\n\n\
                     Productos:\n{}\n\n\
                     Total: {}\n\n\
                     Por favor, confirmar disponibilidad y tiempo de entrega.",
                    config.store_name,
                    product_list,
                    total.display()
                )
            }
            OrderMessage::CustomInquiry { name, message } => {
                format!(
                    "Hola, quiero hacer una consulta desde {} de un pedido personalizado:\n\n\
                     Nombre: {}\n\n\
                     Mensaje:\n{}",
                    config.store_name, name, message
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn config() -> StoreConfig {
        StoreConfig::default()
    }

    fn product(title: &str, cents: i64) -> Product {
        Product::new(
            "prod-1",
            title,
            "Llaveros",
            Money::new(cents, Currency::EUR),
            "/img/test.webp",
            false,
        )
    }

    #[test]
    fn test_cart_order_message_format() {
        let mut cart = Cart::default();
        cart.add(&product("Llavero Pikachu", 500));

        let message = OrderMessage::from_cart(&cart).unwrap().render(&config());
        assert!(message.contains("1. Llavero Pikachu - \u{20ac}5.00"));
        assert!(message.contains("Total: \u{20ac}5.00"));
        assert!(message.starts_with("Hola, quiero hacer un pedido desde Infantes 3D:"));
        assert!(message.ends_with("Por favor, confirmar disponibilidad y tiempo de entrega."));
    }

    #[test]
    fn test_cart_order_numbers_lines_in_order() {
        let mut cart = Cart::default();
        cart.add(&product("Llavero Pikachu", 500));
        cart.add(&product("Figura Drag\u{f3}n", 1250));

        let message = OrderMessage::from_cart(&cart).unwrap().render(&config());
        assert!(message.contains(
            "Productos:\n1. Llavero Pikachu - \u{20ac}5.00\n2. Figura Drag\u{f3}n - \u{20ac}12.50"
        ));
        assert!(message.contains("Total: \u{20ac}17.50"));
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let cart = Cart::default();
        let err = OrderMessage::from_cart(&cart).unwrap_err();
        assert!(matches!(err, StoreError::EmptyCart));
    }

    #[test]
    fn test_single_product_message() {
        let message = OrderMessage::single_product(&product("Llavero Pikachu", 500));
        let text = message.render(&config());
        assert!(text.contains("1. Llavero Pikachu - \u{20ac}5.00"));
        assert!(text.contains("Total: \u{20ac}5.00"));
    }

    #[test]
    fn test_custom_inquiry_message() {
        let message = OrderMessage::inquiry("Ana", "Quiero un llavero rosa");
        let text = message.render(&config());

        assert!(text.starts_with(
            "Hola, quiero hacer una consulta desde Infantes 3D de un pedido personalizado:"
        ));
        assert!(text.contains("Nombre: Ana"));
        assert!(text.contains("Mensaje:\nQuiero un llavero rosa"));
        assert!(!text.contains("Productos:"));
        assert!(!text.contains("Total:"));
    }

    #[test]
    fn test_snapshot_is_independent_of_cart() {
        let mut cart = Cart::default();
        cart.add(&product("Llavero Pikachu", 500));
        let message = OrderMessage::from_cart(&cart).unwrap();

        cart.clear();
        let text = message.render(&config());
        assert!(text.contains("Total: \u{20ac}5.00"));
    }
}
