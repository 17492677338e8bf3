//! The in-progress, unsaved quantity selection for the current session.
//!
//! The draft is the source of truth for quantities — the view layer is a
//! projection of this map, never the other way around. It is ephemeral:
//! nothing here touches the store, and a draft is lost when the session
//! ends unless it was saved as an order.

use crate::model::{HistoryEntry, OrderLine, Product};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Draft {
    quantities: BTreeMap<String, u32>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a draft from a saved order, the one way quantities survive a
    /// session boundary.
    pub fn from_entry(entry: &HistoryEntry) -> Self {
        let quantities = entry
            .items
            .iter()
            .map(|line| (line.id.clone(), line.quantity))
            .collect();
        Self { quantities }
    }

    pub fn quantity(&self, id: &str) -> u32 {
        self.quantities.get(id).copied().unwrap_or(0)
    }

    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.quantities.remove(id);
        } else {
            self.quantities.insert(id.to_string(), quantity);
        }
    }

    pub fn increment(&mut self, id: &str) {
        let q = self.quantity(id).saturating_add(1);
        self.set_quantity(id, q);
    }

    /// Decrement at 0 is a no-op.
    pub fn decrement(&mut self, id: &str) {
        let q = self.quantity(id);
        if q > 0 {
            self.set_quantity(id, q - 1);
        }
    }

    /// Direct numeric entry: clamped to >= 0 on read, non-numeric input
    /// treated as 0.
    pub fn enter(&mut self, id: &str, raw: &str) {
        let quantity = raw.trim().parse::<u32>().unwrap_or(0);
        self.set_quantity(id, quantity);
    }

    pub fn reset(&mut self) {
        self.quantities.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Snapshot the draft as order lines, prices taken from the catalog at
    /// this moment. Zero-quantity entries never appear; drafted ids with no
    /// catalog product are skipped. Line order follows catalog order.
    pub fn lines(&self, catalog: &[Product]) -> Vec<OrderLine> {
        catalog
            .iter()
            .filter_map(|p| {
                let quantity = self.quantity(&p.id);
                (quantity > 0).then(|| OrderLine {
                    id: p.id.clone(),
                    price: p.price,
                    quantity,
                })
            })
            .collect()
    }
}

/// The total calculator: sum of quantity x price over every catalog product
/// the visibility predicate admits. Pure, full precision; rounding happens
/// only at display time.
pub fn total<F>(catalog: &[Product], draft: &Draft, visible: F) -> Decimal
where
    F: Fn(&Product) -> bool,
{
    catalog
        .iter()
        .filter(|p| visible(p))
        .map(|p| p.price * Decimal::from(draft.quantity(&p.id)))
        .sum()
}
