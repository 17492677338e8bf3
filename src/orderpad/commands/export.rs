use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OrderPadError, Result};
use crate::model::{HistoryEntry, Product};
use crate::store::DataStore;
use chrono::{Datelike, Local};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::path::Path;

/// Export one month of history as a CSV document.
///
/// The filter is a `month-year` string ("7-2025"). A malformed filter, or
/// one matching no entries, aborts before any file is created. Matching
/// entries are written ascending by date to
/// `OrderPad_History_<month>-<year>.csv` under `out_dir`.
pub fn run<S: DataStore>(
    store: &S,
    catalog: &[Product],
    filter: &str,
    out_dir: &Path,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some((month, year)) = parse_filter(filter) else {
        result.add_message(CmdMessage::error(format!(
            "Invalid month-year filter: {} (expected e.g. 7-2025)",
            filter
        )));
        return Ok(result);
    };

    let mut matching: Vec<HistoryEntry> = store
        .load_history()?
        .into_iter()
        .filter(|e| {
            let local = e.date.with_timezone(&Local);
            local.month() == month && local.year() == year
        })
        .collect();

    if matching.is_empty() {
        result.add_message(CmdMessage::error(format!(
            "No records found for {}-{}.",
            month, year
        )));
        return Ok(result);
    }

    matching.sort_by_key(|e| e.date);

    let path = out_dir.join(format!("OrderPad_History_{}-{}.csv", month, year));
    let file = File::create(&path).map_err(OrderPadError::Io)?;
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(file);

    writer.write_record(["Date", "Total Amount", "Products"])?;
    for entry in &matching {
        let date = entry.date.with_timezone(&Local).format("%d/%m/%Y");
        let products = product_list(entry, catalog);
        writer.write_record([
            date.to_string(),
            format!("{:.2}", entry.total),
            products,
        ])?;
    }
    writer.flush().map_err(OrderPadError::Io)?;

    result.add_message(CmdMessage::success(format!(
        "Exported {} record{} to {}",
        matching.len(),
        if matching.len() == 1 { "" } else { "s" },
        path.display()
    )));
    result.exported = Some(path);
    Ok(result)
}

/// Parse "month-year" into (1..=12, four-digit year).
fn parse_filter(filter: &str) -> Option<(u32, i32)> {
    let (month, year) = filter.trim().split_once('-')?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    if !(1..=12).contains(&month) || !(1000..=9999).contains(&year) {
        return None;
    }
    Some((month, year))
}

/// "3 x Milk; 2 x Butter" — names resolved against the current catalog.
fn product_list(entry: &HistoryEntry, catalog: &[Product]) -> String {
    entry
        .items
        .iter()
        .map(|line| {
            let name = catalog
                .iter()
                .find(|p| p.id == line.id)
                .map(|p| p.name.as_str())
                .unwrap_or("Unknown");
            format!("{} x {}", line.quantity, name)
        })
        .collect::<Vec<_>>()
        .join("; ")
}
