use super::DataStore;
use crate::error::{OrderPadError, Result};
use crate::model::{HistoryEntry, Product, Theme};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const CATALOG_FILE: &str = "catalog.json";
const HISTORY_FILE: &str = "history.json";
const THEME_FILE: &str = "theme.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(OrderPadError::Io)?;
        }
        Ok(())
    }

    fn read_document<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(OrderPadError::Io)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        let value = serde_json::from_str(&content).map_err(OrderPadError::Serialization)?;
        Ok(Some(value))
    }

    fn write_document<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(OrderPadError::Serialization)?;
        fs::write(self.root.join(file), content).map_err(OrderPadError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_catalog(&self) -> Result<Vec<Product>> {
        Ok(self.read_document(CATALOG_FILE)?.unwrap_or_default())
    }

    fn save_catalog(&mut self, products: &[Product]) -> Result<()> {
        self.write_document(CATALOG_FILE, &products)
    }

    fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.read_document(HISTORY_FILE)?.unwrap_or_default())
    }

    fn save_history(&mut self, entries: &[HistoryEntry]) -> Result<()> {
        self.write_document(HISTORY_FILE, &entries)
    }

    fn load_theme(&self) -> Result<Option<Theme>> {
        self.read_document(THEME_FILE)
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.write_document(THEME_FILE, &theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderLine;
    use rust_decimal::Decimal;

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("orderpad"));
        (dir, store)
    }

    #[test]
    fn absent_keys_read_as_empty() {
        let (_dir, store) = store();
        assert!(store.load_catalog().unwrap().is_empty());
        assert!(store.load_history().unwrap().is_empty());
        assert!(store.load_theme().unwrap().is_none());
    }

    #[test]
    fn catalog_round_trips() {
        let (_dir, mut store) = store();
        let products = vec![Product {
            id: "milk-500".into(),
            name: "Milk".into(),
            size: "500ml".into(),
            price: Decimal::new(25, 0),
            category: "Dairy".into(),
        }];
        store.save_catalog(&products).unwrap();
        assert_eq!(store.load_catalog().unwrap(), products);
    }

    #[test]
    fn history_round_trips_in_order() {
        let (_dir, mut store) = store();
        let entries = vec![
            HistoryEntry::new(
                Decimal::new(75, 0),
                vec![OrderLine {
                    id: "milk-500".into(),
                    price: Decimal::new(25, 0),
                    quantity: 3,
                }],
            ),
            HistoryEntry::new(Decimal::new(60, 0), vec![]),
        ];
        store.save_history(&entries).unwrap();
        let loaded = store.load_history().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn theme_round_trips() {
        let (_dir, mut store) = store();
        store.save_theme(Theme::Light).unwrap();
        assert_eq!(store.load_theme().unwrap(), Some(Theme::Light));
    }
}
