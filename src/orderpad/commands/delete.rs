use crate::commands::{history, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Delete saved orders by display index. An empty selection is a
/// user-visible notification and a no-op; the destructive confirmation
/// step lives in the CLI layer, which only calls this once confirmed.
pub fn run<S: DataStore>(store: &mut S, indexes: &[usize]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if indexes.is_empty() {
        result.add_message(CmdMessage::warning("No records selected."));
        return Ok(result);
    }

    let keys = history::resolve_keys(store, indexes)?;
    let mut entries = store.load_history()?;
    let before = entries.len();
    entries.retain(|e| !keys.contains(&e.id));
    store.save_history(&entries)?;

    let removed = before - entries.len();
    result.add_message(CmdMessage::success(format!(
        "Deleted {} record{}.",
        removed,
        if removed == 1 { "" } else { "s" }
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn store_with_orders(count: usize) -> crate::store::memory::InMemoryStore {
        let mut fixture = StoreFixture::new().with_product("milk", "Milk", 25);
        for _ in 0..count {
            fixture = fixture.with_order(&[("milk", 1)]);
        }
        fixture.store
    }

    #[test]
    fn deletes_all_selected_entries() {
        let mut store = store_with_orders(3);
        let all = store.load_history().unwrap();

        run(&mut store, &[1, 3]).unwrap();

        let remaining = store.load_history().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, all[1].id);
    }

    #[test]
    fn empty_selection_is_a_no_op() {
        let mut store = store_with_orders(2);
        let result = run(&mut store, &[]).unwrap();
        assert_eq!(store.load_history().unwrap().len(), 2);
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }

    #[test]
    fn unknown_index_fails_without_mutating() {
        let mut store = store_with_orders(2);
        assert!(run(&mut store, &[1, 9]).is_err());
        assert_eq!(store.load_history().unwrap().len(), 2);
    }
}
