use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::store::DataStore;

/// Get or set the persisted theme preference. Reading an unset preference
/// yields the default.
pub fn run<S: DataStore>(store: &mut S, set: Option<Theme>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match set {
        Some(theme) => {
            store.save_theme(theme)?;
            result.add_message(CmdMessage::success(format!("Theme set to {}.", theme)));
            result.theme = Some(theme);
        }
        None => {
            result.theme = Some(store.load_theme()?.unwrap_or_default());
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn unset_preference_reads_as_default() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, None).unwrap();
        assert_eq!(result.theme, Some(Theme::Dark));
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut store = InMemoryStore::new();
        run(&mut store, Some(Theme::Light)).unwrap();
        let result = run(&mut store, None).unwrap();
        assert_eq!(result.theme, Some(Theme::Light));
    }
}
