use crate::config::OrderPadConfig;
use crate::draft::Draft;
use crate::model::{Product, Theme};
use std::path::PathBuf;

pub mod add;
pub mod catalog;
pub mod config;
pub mod delete;
pub mod export;
pub mod history;
pub mod list;
pub mod load_last;
pub mod remove;
pub mod save;
pub mod theme;
pub mod view;

pub use history::DisplayEntry;
pub use list::{CatalogView, CategoryGroup};
pub use view::EntryDetail;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub catalog: Vec<Product>,
    pub view: Option<CatalogView>,
    pub entries: Vec<DisplayEntry>,
    pub details: Vec<EntryDetail>,
    pub draft: Option<Draft>,
    pub exported: Option<PathBuf>,
    pub theme: Option<Theme>,
    pub config: Option<OrderPadConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_catalog(mut self, catalog: Vec<Product>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_view(mut self, view: CatalogView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_draft(mut self, draft: Draft) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: OrderPadConfig) -> Self {
        self.config = Some(config);
        self
    }
}
