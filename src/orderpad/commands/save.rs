use crate::commands::history::DisplayEntry;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{HistoryEntry, OrderLine};
use crate::store::DataStore;
use rust_decimal::Decimal;

/// Only the most recent orders are kept; saving past the cap evicts the
/// oldest entry.
pub const MAX_ENTRIES: usize = 20;

/// Finalize an order. Zero-quantity lines are dropped first; an order that
/// is empty after that, or whose total is not positive, is a benign no-op.
/// Otherwise the entry is prepended to the history and persisted.
pub fn run<S: DataStore>(store: &mut S, lines: &[OrderLine], total: Decimal) -> Result<CmdResult> {
    let items: Vec<OrderLine> = lines.iter().filter(|l| l.quantity > 0).cloned().collect();

    let mut result = CmdResult::default();
    if items.is_empty() || total <= Decimal::ZERO {
        result.add_message(CmdMessage::info("Cannot save an empty order."));
        return Ok(result);
    }

    let entry = HistoryEntry::new(total, items);
    let mut history = store.load_history()?;
    history.insert(0, entry.clone());
    history.truncate(MAX_ENTRIES);
    store.save_history(&history)?;

    result.add_message(CmdMessage::success("Order saved."));
    result.entries.push(DisplayEntry { index: 1, entry });
    Ok(result)
}
