use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Remove a product from the catalog. No-op if the id is unknown.
///
/// History entries referencing the id are left alone; their line items keep
/// the dangling reference by design.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut catalog = store.load_catalog()?;
    let mut result = CmdResult::default();

    match catalog.iter().position(|p| p.id == id) {
        Some(pos) => {
            let removed = catalog.remove(pos);
            store.save_catalog(&catalog)?;
            result.add_message(CmdMessage::success(format!(
                "Removed {} ({})",
                removed.label(),
                removed.id
            )));
            result.catalog.push(removed);
        }
        None => {
            result.add_message(CmdMessage::warning(format!("No product with id {}", id)));
        }
    }

    Ok(result)
}
