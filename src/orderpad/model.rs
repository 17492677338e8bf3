use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A purchasable catalog item. Immutable once created; there is no edit
/// operation, only add and remove.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub size: String,
    pub price: Decimal,
    pub category: String,
}

impl Product {
    /// Create a user-added product with a freshly generated id.
    ///
    /// Seeded products keep the ids from the catalog document; only products
    /// created through the add form go through here.
    pub fn new(name: String, size: String, price: Decimal, category: String) -> Self {
        Self {
            id: format!("custom-{}", Uuid::new_v4().simple()),
            name,
            size,
            price,
            category,
        }
    }

    /// The composed display label, also the string the search filter runs on.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.size)
    }
}

/// One line of a saved order. `id` references a `Product` by value and may
/// dangle if the product is later removed from the catalog; `price` is a
/// snapshot taken at sale time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// An immutable record of a finalized order.
///
/// `total` equals the sum of `price * quantity` over `items`, computed at
/// save time and never recomputed. Entries are keyed by `id`, not by their
/// timestamp, so two saves in the same millisecond stay distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub total: Decimal,
    pub items: Vec<OrderLine>,
}

impl HistoryEntry {
    pub fn new(total: Decimal, items: Vec<OrderLine>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            total,
            items,
        }
    }
}

/// The single persisted display preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}
