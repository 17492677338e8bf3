use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OrderPadError, Result};
use crate::model::HistoryEntry;
use crate::store::DataStore;
use chrono::{Local, NaiveDate, NaiveDateTime};
use uuid::Uuid;

/// A history entry paired with its 1-based display index, most recent
/// first. Indexes are what the user types to view or delete entries; they
/// are resolved back to entry keys before anything is mutated.
#[derive(Debug, Clone)]
pub struct DisplayEntry {
    pub index: usize,
    pub entry: HistoryEntry,
}

pub fn index_entries(entries: Vec<HistoryEntry>) -> Vec<DisplayEntry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| DisplayEntry {
            index: i + 1,
            entry,
        })
        .collect()
}

/// Resolve display indexes against the full listing into entry keys.
pub fn resolve_keys<S: DataStore>(store: &S, indexes: &[usize]) -> Result<Vec<Uuid>> {
    let entries = store.load_history()?;
    indexes
        .iter()
        .map(|&i| {
            entries
                .get(i.checked_sub(1).ok_or(OrderPadError::EntryNotFound(i))?)
                .map(|e| e.id)
                .ok_or(OrderPadError::EntryNotFound(i))
        })
        .collect()
}

/// List saved orders, most recent first, optionally bounded by dates.
///
/// Bounds are inclusive and compared on local-day boundaries: the start
/// floors to 00:00:00.000 and the end ceils to 23:59:59.999.
pub fn run<S: DataStore>(
    store: &S,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<CmdResult> {
    let start = from.and_then(|d| d.and_hms_milli_opt(0, 0, 0, 0));
    let end = to.and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999));

    let in_range = |entry: &HistoryEntry| {
        let local: NaiveDateTime = entry.date.with_timezone(&Local).naive_local();
        start.is_none_or(|s| local >= s) && end.is_none_or(|e| local <= e)
    };

    let listed: Vec<DisplayEntry> = index_entries(store.load_history()?)
        .into_iter()
        .filter(|de| in_range(&de.entry))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No saved records."));
    }
    result.entries = listed;
    Ok(result)
}
