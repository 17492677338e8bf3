//! Per-session application state.
//!
//! One explicit struct handed to whatever layer renders it, rather than
//! ambient globals. Everything in a [`Session`] is ephemeral: the search
//! term, the collapse set, the auto-calculate flag, and the draft all die
//! with the session. Only the catalog it was built from came out of the
//! store.

use crate::draft::{self, Draft};
use crate::model::{OrderLine, Product};
use rust_decimal::Decimal;
use std::collections::HashSet;

pub struct Session {
    catalog: Vec<Product>,
    draft: Draft,
    search: String,
    auto_calculate: bool,
    collapsed: HashSet<String>,
}

impl Session {
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            draft: Draft::new(),
            search: String::new(),
            auto_calculate: true,
            collapsed: HashSet::new(),
        }
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn replace_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    // --- search filter ---

    pub fn set_search(&mut self, term: &str) {
        self.search = term.trim().to_lowercase();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// A product is visible when its "name - size" label contains the
    /// current search term, case-insensitively. Hidden products stay in the
    /// catalog and keep their draft quantities; they are only excluded from
    /// rendering and from the total.
    pub fn is_visible(&self, product: &Product) -> bool {
        self.search.is_empty() || product.label().to_lowercase().contains(&self.search)
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.iter().filter(|p| self.is_visible(p)).collect()
    }

    // --- totals ---

    pub fn total(&self) -> Decimal {
        draft::total(&self.catalog, &self.draft, |p| self.is_visible(p))
    }

    pub fn auto_calculate(&self) -> bool {
        self.auto_calculate
    }

    pub fn set_auto_calculate(&mut self, on: bool) {
        self.auto_calculate = on;
    }

    // --- collapse state (per session, never persisted) ---

    pub fn toggle_collapsed(&mut self, category: &str) {
        if !self.collapsed.remove(category) {
            self.collapsed.insert(category.to_string());
        }
    }

    pub fn is_collapsed(&self, category: &str) -> bool {
        self.collapsed.contains(category)
    }

    /// Order lines for saving: the whole draft, not just the visible part.
    /// Hiding a card mid-search does not silently drop it from the order.
    pub fn lines(&self) -> Vec<OrderLine> {
        self.draft.lines(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: "milk".into(),
                name: "Milk".into(),
                size: "500ml".into(),
                price: Decimal::new(25, 0),
                category: "Milk".into(),
            },
            Product {
                id: "butter".into(),
                name: "Butter".into(),
                size: "100g".into(),
                price: Decimal::new(60, 0),
                category: "Butter".into(),
            },
        ]
    }

    #[test]
    fn search_matches_the_composed_label() {
        let mut session = Session::new(catalog());
        session.set_search("500");
        let visible: Vec<&str> = session
            .visible_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(visible, vec!["milk"]);

        session.set_search("BUTTER");
        assert_eq!(session.visible_products().len(), 1);

        session.set_search("");
        assert_eq!(session.visible_products().len(), 2);
    }

    #[test]
    fn total_skips_hidden_but_lines_keep_them() {
        let mut session = Session::new(catalog());
        session.draft_mut().set_quantity("milk", 2);
        session.draft_mut().set_quantity("butter", 1);

        session.set_search("milk");
        assert_eq!(session.total(), Decimal::new(50, 0));

        // The saved order still carries the hidden butter line.
        assert_eq!(session.lines().len(), 2);
    }

    #[test]
    fn collapse_toggles_per_category() {
        let mut session = Session::new(catalog());
        assert!(!session.is_collapsed("Milk"));
        session.toggle_collapsed("Milk");
        assert!(session.is_collapsed("Milk"));
        assert!(!session.is_collapsed("Butter"));
        session.toggle_collapsed("Milk");
        assert!(!session.is_collapsed("Milk"));
    }
}
