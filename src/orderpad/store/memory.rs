use super::DataStore;
use crate::error::Result;
use crate::model::{HistoryEntry, Product, Theme};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    catalog: Vec<Product>,
    history: Vec<HistoryEntry>,
    theme: Option<Theme>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_catalog(&self) -> Result<Vec<Product>> {
        Ok(self.catalog.clone())
    }

    fn save_catalog(&mut self, products: &[Product]) -> Result<()> {
        self.catalog = products.to_vec();
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.history.clone())
    }

    fn save_history(&mut self, entries: &[HistoryEntry]) -> Result<()> {
        self.history = entries.to_vec();
        Ok(())
    }

    fn load_theme(&self) -> Result<Option<Theme>> {
        Ok(self.theme)
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = Some(theme);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::OrderLine;
    use rust_decimal::Decimal;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_product(mut self, id: &str, name: &str, price: i64) -> Self {
            let mut catalog = self.store.load_catalog().unwrap();
            catalog.push(Product {
                id: id.to_string(),
                name: name.to_string(),
                size: "500ml".to_string(),
                price: Decimal::new(price, 0),
                category: "Dairy".to_string(),
            });
            self.store.save_catalog(&catalog).unwrap();
            self
        }

        /// Prepend a saved order made of (product id, quantity) pairs, prices
        /// snapshotted from the current catalog (or 0 for dangling ids).
        pub fn with_order(mut self, items: &[(&str, u32)]) -> Self {
            let catalog = self.store.load_catalog().unwrap();
            let lines: Vec<OrderLine> = items
                .iter()
                .map(|(id, quantity)| OrderLine {
                    id: id.to_string(),
                    price: catalog
                        .iter()
                        .find(|p| p.id == *id)
                        .map(|p| p.price)
                        .unwrap_or_default(),
                    quantity: *quantity,
                })
                .collect();
            let total = lines
                .iter()
                .map(|l| l.price * Decimal::from(l.quantity))
                .sum();
            let mut history = self.store.load_history().unwrap();
            history.insert(0, HistoryEntry::new(total, lines));
            self.store.save_history(&history).unwrap();
            self
        }
    }
}
