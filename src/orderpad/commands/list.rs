use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favourites;
use crate::model::Product;
use crate::store::DataStore;
use std::collections::BTreeMap;

pub const FAVOURITES_TITLE: &str = "My Favourites";

/// The render model for the catalog: categories sorted alphabetically, with
/// a synthetic favourites group prepended when non-empty.
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub groups: Vec<CategoryGroup>,
}

#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub title: String,
    pub is_favourites: bool,
    pub products: Vec<Product>,
}

impl CatalogView {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Build the grouped catalog view. The favourites ranking is recomputed on
/// every call, never cached. A search term hides non-matching products from
/// every group, favourites included; groups left empty are dropped.
pub fn run<S: DataStore>(store: &S, search: Option<&str>) -> Result<CmdResult> {
    let catalog = store.load_catalog()?;
    let history = store.load_history()?;

    let term = search.unwrap_or("").trim().to_lowercase();
    let matches = |p: &Product| term.is_empty() || p.label().to_lowercase().contains(&term);

    let mut groups = Vec::new();

    let favourites: Vec<Product> = favourites::rank(&history, &catalog)
        .into_iter()
        .filter(|p| matches(p))
        .collect();
    if !favourites.is_empty() {
        groups.push(CategoryGroup {
            title: FAVOURITES_TITLE.to_string(),
            is_favourites: true,
            products: favourites,
        });
    }

    let mut by_category: BTreeMap<&str, Vec<Product>> = BTreeMap::new();
    for product in catalog.iter().filter(|p| matches(p)) {
        by_category
            .entry(product.category.as_str())
            .or_default()
            .push(product.clone());
    }
    for (category, products) in by_category {
        groups.push(CategoryGroup {
            title: category.to_string(),
            is_favourites: false,
            products,
        });
    }

    let mut result = CmdResult::default().with_catalog(catalog);
    if groups.is_empty() {
        let message = if term.is_empty() {
            "No products in the catalog."
        } else {
            "No products match the search."
        };
        result.add_message(CmdMessage::info(message));
    }
    result.view = Some(CatalogView { groups });
    Ok(result)
}
