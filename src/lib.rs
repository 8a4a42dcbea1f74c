//! Storefront catalog, cart, and order-message core.
//!
//! This crate provides the domain logic behind a small artisan
//! storefront:
//!
//! - **Catalog**: immutable product list with a category taxonomy
//! - **Filter**: pure search-term + category filtering over the catalog
//! - **Cart**: ordered, duplicate-permitting ledger with on-demand totals
//! - **Order**: message composition and hand-off to an external
//!   messaging channel
//!
//! # Example
//!
//! ```rust
//! use tienda_commerce::prelude::*;
//!
//! let catalog = Catalog::new(
//!     vec![Product::new(
//!         "llavero-pikachu",
//!         "Llavero Pikachu",
//!         "Llaveros",
//!         Money::new(500, Currency::EUR),
//!         "/img/pikachu.webp",
//!         false,
//!     )],
//!     vec!["Llaveros".to_string()],
//! );
//!
//! let mut store = Storefront::new(StoreConfig::default(), catalog);
//! let mut notifier = TracingNotifier;
//! store.add_to_cart(&ProductId::new("llavero-pikachu"), &mut notifier)?;
//! assert_eq!(store.cart().total().display(), "€5.00");
//! # Ok::<(), tienda_commerce::StoreError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod order;
pub mod session;

pub use error::StoreError;
pub use ids::{EntryId, ProductId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::{EntryId, ProductId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogSource, Product, ProductRecord};

    // Filter
    pub use crate::filter::{CategorySelection, FilterState};

    // Cart
    pub use crate::cart::{Cart, CartEntry};

    // Order
    pub use crate::order::{
        whatsapp_url, ChannelOpener, Notice, NoticeKind, Notifier, OrderLine, OrderMessage,
        Submission, SubmissionState, TracingNotifier,
    };

    // Session
    pub use crate::config::StoreConfig;
    pub use crate::session::{InquiryDraft, Storefront};
}
