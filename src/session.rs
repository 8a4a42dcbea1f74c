//! Storefront session.
//!
//! The single logical actor of the system: one browser-session worth of
//! state (catalog, filter, cart, inquiry draft) behind synchronous
//! methods. Every operation completes before the next one is accepted;
//! there is no interleaving and nothing survives the session.

use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::filter::FilterState;
use crate::ids::{EntryId, ProductId};
use crate::order::{
    whatsapp_url, ChannelOpener, Notice, Notifier, OrderMessage, Submission, SubmissionState,
};
use serde::{Deserialize, Serialize};

/// Draft of a custom inquiry (contact form state).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryDraft {
    pub name: String,
    pub message: String,
}

impl InquiryDraft {
    /// Clear both fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One storefront session.
pub struct Storefront {
    config: StoreConfig,
    catalog: Catalog,
    filter: FilterState,
    cart: Cart,
    inquiry: InquiryDraft,
}

impl Storefront {
    /// Open a session over a catalog.
    pub fn new(config: StoreConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            filter: FilterState::new(),
            cart: Cart::default(),
            inquiry: InquiryDraft::default(),
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The catalog. Read-only for the whole session.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current filter state.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current inquiry draft.
    pub fn inquiry(&self) -> &InquiryDraft {
        &self.inquiry
    }

    // --- filtering -------------------------------------------------------

    /// Update the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.set_search_term(term);
    }

    /// Select a category by label.
    pub fn select_category(&mut self, label: impl Into<String>) {
        self.filter.select_category(label);
    }

    /// Clear the category restriction.
    pub fn select_all_categories(&mut self) {
        self.filter.select_all();
    }

    /// The visible subset of the catalog under the current filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.catalog)
    }

    // --- cart ------------------------------------------------------------

    /// Add a catalog product to the cart and notify the user.
    ///
    /// Returns the new entry count.
    pub fn add_to_cart(
        &mut self,
        product_id: &ProductId,
        notifier: &mut impl Notifier,
    ) -> Result<usize, StoreError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?
            .clone();
        self.cart.add(&product);
        notifier.notify(Notice::success(
            "A\u{f1}adido al carrito",
            format!("{} se ha a\u{f1}adido correctamente.", product.title),
        ));
        Ok(self.cart.len())
    }

    /// Remove a cart entry by its ID. Returns true if removed.
    pub fn remove_from_cart(&mut self, entry_id: &EntryId) -> bool {
        self.cart.remove_entry(entry_id)
    }

    /// Remove a cart entry by position; out-of-range indices no-op.
    pub fn remove_from_cart_at(&mut self, index: usize) {
        self.cart.remove_at_lenient(index);
    }

    /// Empty the cart. An explicit user action; dispatch never does
    /// this implicitly.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // --- submission ------------------------------------------------------

    /// Submit the cart as an order.
    ///
    /// Composes the order message from a snapshot of the cart, escapes
    /// it, and hands it to the channel exactly once. The cart is left
    /// untouched either way. Returns the attempt's terminal state.
    pub fn submit_order(
        &mut self,
        channel: &mut impl ChannelOpener,
        notifier: &mut impl Notifier,
    ) -> SubmissionState {
        let mut submission = Submission::new();
        submission.begin();

        match OrderMessage::from_cart(&self.cart) {
            Ok(message) => {
                self.dispatch(&message, channel);
                notifier.notify(Notice::success(
                    "Redirigiendo a WhatsApp",
                    "Se abrir\u{e1} una ventana con tu pedido preparado.",
                ));
                submission.mark_dispatched();
            }
            Err(StoreError::EmptyCart) => {
                tracing::warn!("order submission rejected: empty cart");
                notifier.notify(Notice::error(
                    "Carrito vac\u{ed}o",
                    "A\u{f1}ade productos antes de enviar el pedido.",
                ));
                submission.mark_rejected();
            }
            Err(err) => {
                // from_cart only fails on an empty cart today.
                tracing::warn!(error = %err, "order submission rejected");
                notifier.notify(Notice::error("Pedido rechazado", err.to_string()));
                submission.mark_rejected();
            }
        }
        submission.state()
    }

    /// Submit a direct inquiry for a single catalog product.
    pub fn submit_product_order(
        &mut self,
        product_id: &ProductId,
        channel: &mut impl ChannelOpener,
        notifier: &mut impl Notifier,
    ) -> Result<SubmissionState, StoreError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;
        let message = OrderMessage::single_product(product);

        let mut submission = Submission::new();
        submission.begin();
        self.dispatch(&message, channel);
        notifier.notify(Notice::success(
            "Redirigiendo a WhatsApp",
            "Se abrir\u{e1} una ventana con tu pedido preparado.",
        ));
        submission.mark_dispatched();
        Ok(submission.state())
    }

    /// Set the inquiry draft name.
    pub fn set_inquiry_name(&mut self, name: impl Into<String>) {
        self.inquiry.name = name.into();
    }

    /// Set the inquiry draft message body.
    pub fn set_inquiry_message(&mut self, message: impl Into<String>) {
        self.inquiry.message = message.into();
    }

    /// Submit the inquiry draft as a custom-request message.
    ///
    /// Always dispatches (the contact path has no validation rule in
    /// the core) and resets the draft afterwards.
    pub fn submit_inquiry(
        &mut self,
        channel: &mut impl ChannelOpener,
        notifier: &mut impl Notifier,
    ) -> SubmissionState {
        let message = OrderMessage::inquiry(self.inquiry.name.clone(), self.inquiry.message.clone());

        let mut submission = Submission::new();
        submission.begin();
        self.dispatch(&message, channel);
        notifier.notify(Notice::success(
            "Redirigiendo a WhatsApp",
            "Se abrir\u{e1} una ventana con tu mensaje preparado.",
        ));
        submission.mark_dispatched();
        self.inquiry.reset();
        submission.state()
    }

    fn dispatch(&self, message: &OrderMessage, channel: &mut impl ChannelOpener) {
        let text = message.render(&self.config);
        let url = whatsapp_url(&self.config.whatsapp_number, &text);
        tracing::info!(url_len = url.len(), "dispatching message to channel");
        channel.open(&url);
    }
}
