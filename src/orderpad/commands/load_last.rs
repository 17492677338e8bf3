use crate::commands::{CmdMessage, CmdResult};
use crate::draft::Draft;
use crate::error::Result;
use crate::store::DataStore;

/// Rebuild a draft from the most recent saved order.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let history = store.load_history()?;

    let mut result = CmdResult::default();
    match history.first() {
        Some(entry) => {
            result.draft = Some(Draft::from_entry(entry));
            result.add_message(CmdMessage::success("Last order loaded."));
        }
        None => {
            result.add_message(CmdMessage::info("No saved orders."));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn loads_quantities_from_the_most_recent_order() {
        let fixture = StoreFixture::new()
            .with_product("milk", "Milk", 25)
            .with_product("butter", "Butter", 60)
            .with_order(&[("milk", 3)])
            .with_order(&[("butter", 2)]);
        let store = fixture.store;

        let draft = run(&store).unwrap().draft.unwrap();
        assert_eq!(draft.quantity("butter"), 2);
        assert_eq!(draft.quantity("milk"), 0);
    }

    #[test]
    fn empty_history_returns_no_draft() {
        let store = StoreFixture::new().store;
        let result = run(&store).unwrap();
        assert!(result.draft.is_none());
        assert_eq!(result.messages.len(), 1);
    }
}
