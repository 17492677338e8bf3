use crate::commands::CmdResult;
use crate::error::{OrderPadError, Result};
use crate::model::{HistoryEntry, Product};
use crate::store::DataStore;
use rust_decimal::Decimal;

/// One saved order resolved for display: each line carries the product
/// name as the current catalog knows it, or "Unknown" where the reference
/// dangles.
#[derive(Debug, Clone)]
pub struct EntryDetail {
    pub entry: HistoryEntry,
    pub lines: Vec<LineDetail>,
}

#[derive(Debug, Clone)]
pub struct LineDetail {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

pub fn line_details(entry: &HistoryEntry, catalog: &[Product]) -> Vec<LineDetail> {
    entry
        .items
        .iter()
        .map(|line| LineDetail {
            name: catalog
                .iter()
                .find(|p| p.id == line.id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            quantity: line.quantity,
            price: line.price,
        })
        .collect()
}

pub fn run<S: DataStore>(store: &S, indexes: &[usize]) -> Result<CmdResult> {
    let catalog = store.load_catalog()?;
    let entries = store.load_history()?;

    let mut result = CmdResult::default();
    for &index in indexes {
        let entry = index
            .checked_sub(1)
            .and_then(|i| entries.get(i))
            .ok_or(OrderPadError::EntryNotFound(index))?;
        result.details.push(EntryDetail {
            entry: entry.clone(),
            lines: line_details(entry, &catalog),
        });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_names_from_the_current_catalog() {
        let fixture = StoreFixture::new()
            .with_product("milk", "Milk", 25)
            .with_order(&[("milk", 3)]);
        let store = fixture.store;

        let result = run(&store, &[1]).unwrap();
        assert_eq!(result.details.len(), 1);
        assert_eq!(result.details[0].lines[0].name, "Milk");
        assert_eq!(result.details[0].lines[0].quantity, 3);
    }

    #[test]
    fn dangling_references_resolve_to_unknown() {
        let fixture = StoreFixture::new()
            .with_product("milk", "Milk", 25)
            .with_order(&[("milk", 3)]);
        let mut store = fixture.store;
        store.save_catalog(&[]).unwrap();

        let result = run(&store, &[1]).unwrap();
        assert_eq!(result.details[0].lines[0].name, "Unknown");
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let store = StoreFixture::new().store;
        assert!(run(&store, &[1]).is_err());
    }
}
