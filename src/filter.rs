//! Catalog filtering.
//!
//! Derives the visible subset of the catalog from a free-text search
//! term and a selected category. Filtering is a pure function of
//! (catalog, filter state): stable, deterministic, and idempotent.

use crate::catalog::{Catalog, Product};
use serde::{Deserialize, Serialize};

/// The selected category dimension of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CategorySelection {
    /// No category restriction.
    #[default]
    All,
    /// Restrict to a category label.
    Category(String),
}

impl CategorySelection {
    /// Whether a product category passes this selection.
    ///
    /// A selected label matches by substring, not strict equality, so a
    /// label can match compound category strings in the catalog. The
    /// match is case-sensitive, mirroring the storefront it was lifted
    /// from.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Category(label) => category.contains(label.as_str()),
        }
    }

    /// Display label for the selection.
    pub fn display_name(&self) -> &str {
        match self {
            CategorySelection::All => "Todos",
            CategorySelection::Category(label) => label,
        }
    }
}

/// Transient filter state: a search term and a category selection.
///
/// Initialized to ("", All); mutated on every keystroke or category
/// click; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterState {
    /// Free-text search term, matched case-insensitively.
    pub search_term: String,
    /// Selected category.
    pub category: CategorySelection,
}

impl FilterState {
    /// Create the initial filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Select a category by label.
    pub fn select_category(&mut self, label: impl Into<String>) {
        self.category = CategorySelection::Category(label.into());
    }

    /// Clear the category restriction.
    pub fn select_all(&mut self) {
        self.category = CategorySelection::All;
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a product passes both filter dimensions.
    ///
    /// The search term matches case-insensitively against either the
    /// title or the category; an empty term matches everything.
    pub fn matches(&self, product: &Product) -> bool {
        let term = self.search_term.to_lowercase();
        let matches_search = term.is_empty()
            || product.title.to_lowercase().contains(&term)
            || product.category.to_lowercase().contains(&term);
        matches_search && self.category.matches(&product.category)
    }

    /// Compute the visible subset of the catalog.
    ///
    /// Preserves catalog order; zero matches yields an empty vec.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let visible: Vec<&Product> = catalog.iter().filter(|p| self.matches(p)).collect();
        tracing::debug!(
            search_term = %self.search_term,
            category = %self.category.display_name(),
            matched = visible.len(),
            "filter recomputed"
        );
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn catalog() -> Catalog {
        let products = vec![
            Product::new(
                "llavero-pikachu",
                "Llavero Pikachu",
                "Llaveros",
                Money::new(500, Currency::EUR),
                "/img/pikachu.webp",
                false,
            ),
            Product::new(
                "figura-dragon",
                "Figura Drag\u{f3}n Articulado",
                "Figuras",
                Money::new(1250, Currency::EUR),
                "/img/dragon.webp",
                true,
            ),
            Product::new(
                "marcapaginas-gato",
                "Marcap\u{e1}ginas Gato",
                "Marcap\u{e1}ginas y Llaveros",
                Money::new(300, Currency::EUR),
                "/img/gato.webp",
                true,
            ),
        ];
        let categories = vec![
            "Llaveros".to_string(),
            "Figuras".to_string(),
            "Marcap\u{e1}ginas".to_string(),
        ];
        Catalog::new(products, categories)
    }

    #[test]
    fn test_initial_state_matches_everything() {
        let catalog = catalog();
        let state = FilterState::new();
        assert_eq!(state.apply(&catalog).len(), catalog.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.set_search_term("PIKACHU");
        let visible = state.apply(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Llavero Pikachu");
    }

    #[test]
    fn test_search_matches_category_text() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.set_search_term("figuras");
        let visible = state.apply(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].category, "Figuras");
    }

    #[test]
    fn test_category_selection_is_substring_match() {
        let catalog = catalog();
        let mut state = FilterState::new();
        // "Llaveros" appears inside the compound category
        // "Marcapáginas y Llaveros", so both products match.
        state.select_category("Llaveros");
        let visible = state.apply(&catalog);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_both_dimensions_must_hold() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.set_search_term("gato");
        state.select_category("Figuras");
        assert!(state.apply(&catalog).is_empty());
    }

    #[test]
    fn test_zero_matches_yields_empty() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.set_search_term("no existe");
        assert!(state.apply(&catalog).is_empty());
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.select_category("Llaveros");
        let visible = state.apply(&catalog);
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["llavero-pikachu", "marcapaginas-gato"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.set_search_term("llavero");
        let first = state.apply(&catalog);

        // Filtering the already-filtered set with the same parameters
        // keeps every product.
        let second: Vec<&Product> = first
            .iter()
            .copied()
            .filter(|p| state.matches(*p))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_excluded_product_fails_a_dimension() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.set_search_term("llavero");
        state.select_category("Figuras");
        let visible = state.apply(&catalog);

        for product in catalog.iter() {
            if visible.iter().any(|v| v.id == product.id) {
                assert!(state.matches(product));
            } else {
                assert!(!state.matches(product));
            }
        }
    }

    #[test]
    fn test_reset() {
        let mut state = FilterState::new();
        state.set_search_term("algo");
        state.select_category("Figuras");
        state.reset();
        assert_eq!(state, FilterState::default());
        assert_eq!(state.category.display_name(), "Todos");
    }
}
