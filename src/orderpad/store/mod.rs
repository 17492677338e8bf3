//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts the durable store everything persisted
//! lives in. Three logical keys exist — the catalog, the order history, and
//! the theme preference — and the absence of a key always reads as "empty".
//!
//! Storage is behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON document per key under
//!   the data directory:
//!
//! ```text
//! <data dir>/
//! ├── catalog.json    # Vec<Product>
//! ├── history.json    # Vec<HistoryEntry>, most-recent-first
//! ├── theme.json      # Theme
//! └── config.json     # OrderPadConfig (managed by config.rs, not the store)
//! ```
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests, no persistence.
//!
//! Writes are whole-document: every operation is atomic at the granularity
//! of one persisted write, which is all a single-threaded caller needs.

use crate::error::Result;
use crate::model::{HistoryEntry, Product, Theme};

pub mod fs;
pub mod memory;

/// Abstract interface over the three persisted keys.
pub trait DataStore {
    /// Read the full catalog; an absent key is an empty catalog.
    fn load_catalog(&self) -> Result<Vec<Product>>;

    /// Replace the persisted catalog.
    fn save_catalog(&mut self, products: &[Product]) -> Result<()>;

    /// Read the full history, most-recent-first; absent key is empty.
    fn load_history(&self) -> Result<Vec<HistoryEntry>>;

    /// Replace the persisted history.
    fn save_history(&mut self, entries: &[HistoryEntry]) -> Result<()>;

    /// Read the theme preference, `None` if never set.
    fn load_theme(&self) -> Result<Option<Theme>>;

    /// Persist the theme preference.
    fn save_theme(&mut self, theme: Theme) -> Result<()>;
}
