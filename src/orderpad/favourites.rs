//! Favourites ranking, derived from the order history on every render.
//!
//! Never cached: the ranking always reflects the latest history and the
//! current catalog membership.

use crate::model::{HistoryEntry, Product};

const TOP_N: usize = 5;

/// Rank the most frequently ordered products.
///
/// Each appearance of a product id in an order counts once, regardless of
/// quantity. Ties keep first-encountered order, walking the history as
/// stored (most recent first). The top 5 ids are cut before resolving
/// against the catalog, so a dangling id shortens the result rather than
/// promoting the sixth.
pub fn rank(history: &[HistoryEntry], catalog: &[Product]) -> Vec<Product> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in history {
        for line in &entry.items {
            match counts.iter_mut().find(|(id, _)| *id == line.id) {
                Some((_, count)) => *count += 1,
                None => counts.push((&line.id, 1)),
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(TOP_N)
        .filter_map(|(id, _)| catalog.iter().find(|p| p.id == id).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderLine;
    use rust_decimal::Decimal;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            size: "1kg".to_string(),
            price: Decimal::new(10, 0),
            category: "Dairy".to_string(),
        }
    }

    fn order(ids: &[(&str, u32)]) -> HistoryEntry {
        let items = ids
            .iter()
            .map(|(id, quantity)| OrderLine {
                id: id.to_string(),
                price: Decimal::new(10, 0),
                quantity: *quantity,
            })
            .collect();
        HistoryEntry::new(Decimal::new(10, 0), items)
    }

    #[test]
    fn ranks_by_order_appearances_not_quantity() {
        let catalog = vec![product("a"), product("b")];
        // "a" appears in two orders with quantity 1, "b" in one with 99.
        let history = vec![
            order(&[("a", 1), ("b", 99)]),
            order(&[("a", 1)]),
        ];

        let ranked = rank(&history, &catalog);
        assert_eq!(ranked[0].id, "a");
        assert_eq!(ranked[1].id, "b");
    }

    #[test]
    fn never_returns_more_than_five() {
        let ids = ["a", "b", "c", "d", "e", "f", "g"];
        let catalog: Vec<Product> = ids.iter().map(|id| product(id)).collect();
        let history = vec![order(
            &ids.iter().map(|id| (*id, 1)).collect::<Vec<_>>(),
        )];

        assert_eq!(rank(&history, &catalog).len(), 5);
    }

    #[test]
    fn dangling_ids_are_dropped_after_the_cut() {
        let catalog = vec![product("live")];
        // Five dead ids outrank the live one; the live product ranks sixth
        // and must NOT be promoted into the shortened result.
        let history = vec![
            order(&[("d1", 1), ("d2", 1), ("d3", 1), ("d4", 1), ("d5", 1)]),
            order(&[("d1", 1), ("d2", 1), ("d3", 1), ("d4", 1), ("d5", 1)]),
            order(&[("live", 1)]),
        ];

        assert!(rank(&history, &catalog).is_empty());
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let catalog = vec![product("x"), product("y"), product("z")];
        let history = vec![order(&[("y", 1), ("x", 1), ("z", 1)])];

        let ranked = rank(&history, &catalog);
        let ids: Vec<&str> = ranked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["y", "x", "z"]);
    }

    #[test]
    fn empty_history_yields_no_favourites() {
        let catalog = vec![product("a")];
        assert!(rank(&[], &catalog).is_empty());
    }
}
