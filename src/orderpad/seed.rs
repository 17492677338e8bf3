//! The seed catalog document.
//!
//! The catalog is seeded exactly once, when the persisted catalog is absent
//! or empty. A seed document is a JSON sequence of product records: either
//! the bundled default or any file the user points at.

use crate::error::{OrderPadError, Result};
use crate::model::Product;
use std::fs;
use std::path::PathBuf;

const DEFAULT_DOCUMENT: &str = include_str!("../../assets/products.json");

pub struct SeedCatalog {
    path: Option<PathBuf>,
}

impl SeedCatalog {
    /// The catalog document shipped with the binary.
    pub fn bundled() -> Self {
        Self { path: None }
    }

    /// A user-supplied catalog document.
    pub fn from_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Retrieve and parse the document. Callers treat failure as non-fatal:
    /// the catalog is left empty and the user sees a warning.
    pub fn fetch(&self) -> Result<Vec<Product>> {
        let content = match &self.path {
            Some(path) => fs::read_to_string(path).map_err(OrderPadError::Io)?,
            None => DEFAULT_DOCUMENT.to_string(),
        };
        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(OrderPadError::Serialization)?;
        Ok(products)
    }
}
