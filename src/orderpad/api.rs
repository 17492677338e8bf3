//! # API Facade
//!
//! The single entry point for all orderpad operations, regardless of the
//! UI driving them. The facade dispatches to the command layer, normalizes
//! inputs (display indexes, filter strings), and returns structured
//! `Result<CmdResult>` values — no stdout, no formatting, no terminal
//! assumptions.
//!
//! `OrderPadApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{OrderLine, Theme};
use crate::seed::SeedCatalog;
use crate::store::DataStore;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

pub struct OrderPadApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DataStore> OrderPadApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load the catalog, seeding it on first use.
    pub fn load_catalog(&mut self, seed: &SeedCatalog) -> Result<commands::CmdResult> {
        commands::catalog::load(&mut self.store, seed)
    }

    /// The grouped catalog view (favourites first), optionally filtered.
    pub fn catalog_view(&self, search: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, search)
    }

    pub fn add_product(
        &mut self,
        name: String,
        size: String,
        price: Decimal,
        category: String,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, size, price, category)
    }

    pub fn remove_product(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn save_order(&mut self, lines: &[OrderLine], total: Decimal) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, lines, total)
    }

    pub fn history(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<commands::CmdResult> {
        commands::history::run(&self.store, from, to)
    }

    pub fn view_entries(&self, indexes: &[usize]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, indexes)
    }

    pub fn delete_entries(&mut self, indexes: &[usize]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, indexes)
    }

    pub fn export_csv(&self, filter: &str, out_dir: &Path) -> Result<commands::CmdResult> {
        let catalog = commands::list::run(&self.store, None)?.catalog;
        commands::export::run(&self.store, &catalog, filter, out_dir)
    }

    pub fn load_last(&self) -> Result<commands::CmdResult> {
        commands::load_last::run(&self.store)
    }

    pub fn theme(&mut self, set: Option<Theme>) -> Result<commands::CmdResult> {
        commands::theme::run(&mut self.store, set)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DisplayEntry, EntryDetail, MessageLevel};
