use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::seed::SeedCatalog;
use crate::store::DataStore;

/// Load the catalog, seeding it from the catalog document on first use.
///
/// An already-populated catalog is returned unchanged; the seed document is
/// consulted only when the persisted catalog is absent or empty. Seed
/// failure is non-fatal: the catalog stays empty and the caller gets a
/// warning message.
pub fn load<S: DataStore>(store: &mut S, seed: &SeedCatalog) -> Result<CmdResult> {
    let persisted = store.load_catalog()?;
    if !persisted.is_empty() {
        return Ok(CmdResult::default().with_catalog(persisted));
    }

    match seed.fetch() {
        Ok(products) => {
            store.save_catalog(&products)?;
            let mut result = CmdResult::default().with_catalog(products);
            result.add_message(CmdMessage::info("Seeded the product catalog."));
            Ok(result)
        }
        Err(e) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!(
                "Could not load products: {}. Starting with an empty catalog.",
                e
            )));
            Ok(result)
        }
    }
}
