//! Cart ledger.
//!
//! An ordered, duplicate-permitting collection of selected products.
//! Entries are tagged with a synthetic, session-monotonic [`EntryId`] at
//! add time, so id-based removal stays unambiguous when the same product
//! appears more than once. Positional removal is kept as well because it
//! is part of the observable contract.

use crate::catalog::Product;
use crate::error::StoreError;
use crate::ids::{EntryId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A single cart entry.
///
/// Denormalized: title and price are copied from the product at add
/// time so the entry renders without a catalog lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// Synthetic entry identifier, unique within the cart.
    pub entry_id: EntryId,
    /// The product this entry refers to.
    pub product_id: ProductId,
    /// Product title at add time.
    pub title: String,
    /// Product price at add time.
    pub price: Money,
}

/// The cart ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
    next_entry_id: u64,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart pricing in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            entries: Vec::new(),
            next_entry_id: 1,
            currency,
        }
    }

    /// Append a product to the end of the ledger.
    ///
    /// Never deduplicates: adding the same product twice produces two
    /// distinct entries. Returns the new entry's ID.
    pub fn add(&mut self, product: &Product) -> EntryId {
        let entry_id = EntryId::new(self.next_entry_id);
        self.next_entry_id += 1;
        self.entries.push(CartEntry {
            entry_id,
            product_id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
        });
        tracing::debug!(
            entry_id = %entry_id,
            product_id = %product.id,
            entries = self.entries.len(),
            "cart entry added"
        );
        entry_id
    }

    /// Remove the entry at the given position.
    ///
    /// Returns the removed entry, or `EntryOutOfRange` for an
    /// out-of-bounds index. UI paths that want the original no-op
    /// behavior should use [`Cart::remove_at_lenient`].
    pub fn remove_at(&mut self, index: usize) -> Result<CartEntry, StoreError> {
        if index >= self.entries.len() {
            return Err(StoreError::EntryOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let entry = self.entries.remove(index);
        tracing::debug!(entry_id = %entry.entry_id, index, "cart entry removed");
        Ok(entry)
    }

    /// Remove the entry at the given position, ignoring out-of-bounds
    /// indices.
    pub fn remove_at_lenient(&mut self, index: usize) -> Option<CartEntry> {
        self.remove_at(index).ok()
    }

    /// Remove an entry by its ID. Returns true if an entry was removed.
    pub fn remove_entry(&mut self, entry_id: &EntryId) -> bool {
        match self.entries.iter().position(|e| &e.entry_id == entry_id) {
            Some(index) => {
                self.entries.remove(index);
                tracing::debug!(entry_id = %entry_id, "cart entry removed");
                true
            }
            None => false,
        }
    }

    /// Empty the ledger unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
        tracing::debug!("cart cleared");
    }

    /// Sum of entry prices. Recomputed on every call; zero for an empty
    /// ledger. A straight sum: no discount or rounding logic.
    pub fn total(&self) -> Money {
        let cents = self.entries.iter().map(|e| e.price.amount_cents).sum();
        Money::new(cents, self.currency)
    }

    /// Current entries, in add order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// The entry at a position, if any.
    pub fn get(&self, index: usize) -> Option<&CartEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Human-readable cart summary, e.g. "3 productos en tu carrito".
    pub fn summary(&self) -> String {
        match self.entries.len() {
            0 => "Tu carrito est\u{e1} vac\u{ed}o".to_string(),
            1 => "1 producto en tu carrito".to_string(),
            n => format!("{} productos en tu carrito", n),
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::EUR)
    }
}
