use chrono::{DateTime, Local, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use orderpad::api::{CmdMessage, MessageLevel, OrderPadApi};
use orderpad::commands::config::ConfigAction;
use orderpad::commands::{CatalogView, DisplayEntry, EntryDetail};
use orderpad::config::OrderPadConfig;
use orderpad::draft::{self, Draft};
use orderpad::error::{OrderPadError, Result};
use orderpad::model::{Product, Theme};
use orderpad::seed::SeedCatalog;
use orderpad::session::Session;
use orderpad::store::fs::FileStore;
use rust_decimal::Decimal;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
mod shell;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub(crate) struct AppContext {
    pub(crate) api: OrderPadApi<FileStore>,
    pub(crate) seed: SeedCatalog,
    pub(crate) currency: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::Shell) => shell::run(&mut ctx),
        Some(Commands::Total {
            quantities,
            from_last,
        }) => handle_total(&mut ctx, quantities, from_last),
        Some(Commands::Save {
            quantities,
            from_last,
        }) => handle_save(&mut ctx, quantities, from_last),
        Some(Commands::Add {
            name,
            size,
            price,
            category,
        }) => handle_add(&mut ctx, name, size, price, category),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::History { from, to }) => handle_history(&ctx, from, to),
        Some(Commands::View { indexes }) => handle_view(&ctx, indexes),
        Some(Commands::Delete { indexes, yes }) => handle_delete(&mut ctx, indexes, yes),
        Some(Commands::Export { filter, out }) => handle_export(&ctx, filter, out),
        Some(Commands::Load) => handle_load(&ctx),
        Some(Commands::Theme { theme }) => handle_theme(&mut ctx, theme),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "orderpad", "orderpad")
            .ok_or_else(|| OrderPadError::Store("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = OrderPadConfig::load(&data_dir).unwrap_or_default();
    let seed = match cli.seed.clone().or_else(|| config.seed_path.clone()) {
        Some(path) => SeedCatalog::from_path(path),
        None => SeedCatalog::bundled(),
    };

    let store = FileStore::new(data_dir.clone());
    let api = OrderPadApi::new(store, data_dir);

    Ok(AppContext {
        api,
        seed,
        currency: config.currency,
    })
}

/// Load the catalog (seeding on first use) and surface any seed warnings.
pub(crate) fn load_catalog(ctx: &mut AppContext) -> Result<Vec<Product>> {
    let result = ctx.api.load_catalog(&ctx.seed)?;
    print_messages(&result.messages);
    Ok(result.catalog)
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    load_catalog(ctx)?;
    let result = ctx.api.catalog_view(search.as_deref())?;
    if let Some(view) = &result.view {
        print_view(view, None, &ctx.currency);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_total(ctx: &mut AppContext, quantities: Vec<String>, from_last: bool) -> Result<()> {
    let catalog = load_catalog(ctx)?;
    let Some(draft) = build_draft(ctx, &catalog, &quantities, from_last)? else {
        return Ok(());
    };

    let total = draft::total(&catalog, &draft, |_| true);
    println!("Total: {}", format_amount(&ctx.currency, total).bold());
    Ok(())
}

fn handle_save(ctx: &mut AppContext, quantities: Vec<String>, from_last: bool) -> Result<()> {
    let catalog = load_catalog(ctx)?;
    let Some(draft) = build_draft(ctx, &catalog, &quantities, from_last)? else {
        return Ok(());
    };

    let lines = draft.lines(&catalog);
    let total = draft::total(&catalog, &draft, |_| true);
    let result = ctx.api.save_order(&lines, total)?;
    print_messages(&result.messages);
    Ok(())
}

/// Assemble a draft from ID=QTY pairs, optionally starting from the last
/// saved order. Returns None when --from-last found no history (the message
/// has already been printed).
fn build_draft(
    ctx: &AppContext,
    catalog: &[Product],
    quantities: &[String],
    from_last: bool,
) -> Result<Option<Draft>> {
    let mut draft = if from_last {
        let result = ctx.api.load_last()?;
        match result.draft {
            Some(draft) => draft,
            None => {
                print_messages(&result.messages);
                return Ok(None);
            }
        }
    } else {
        Draft::new()
    };

    for pair in quantities {
        let (id, quantity) = pair.split_once('=').ok_or_else(|| {
            OrderPadError::Api(format!("Invalid quantity {} (expected ID=QTY)", pair))
        })?;
        if !catalog.iter().any(|p| p.id == id) {
            return Err(OrderPadError::ProductNotFound(id.to_string()));
        }
        let quantity: u32 = quantity
            .parse()
            .map_err(|_| OrderPadError::Api(format!("Invalid quantity in {}", pair)))?;
        draft.set_quantity(id, quantity);
    }

    Ok(Some(draft))
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    size: String,
    price: Decimal,
    category: String,
) -> Result<()> {
    load_catalog(ctx)?;
    let result = ctx.api.add_product(name, size, price, category)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: String) -> Result<()> {
    load_catalog(ctx)?;
    let result = ctx.api.remove_product(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_history(
    ctx: &AppContext,
    from: Option<chrono::NaiveDate>,
    to: Option<chrono::NaiveDate>,
) -> Result<()> {
    let result = ctx.api.history(from, to)?;
    print_entries(&result.entries, &ctx.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, indexes: Vec<usize>) -> Result<()> {
    let result = ctx.api.view_entries(&indexes)?;
    print_details(&result.details, &ctx.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<usize>, yes: bool) -> Result<()> {
    if !indexes.is_empty() && !yes {
        let prompt = format!(
            "Delete {} saved record{}?",
            indexes.len(),
            if indexes.len() == 1 { "" } else { "s" }
        );
        if !confirm(&prompt)? {
            println!("{}", "Nothing deleted.".dimmed());
            return Ok(());
        }
    }

    let result = ctx.api.delete_entries(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, filter: String, out: Option<PathBuf>) -> Result<()> {
    let out_dir = match out {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(OrderPadError::Io)?,
    };
    let result = ctx.api.export_csv(&filter, &out_dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_load(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.load_last()?;
    if let Some(draft) = &result.draft {
        let catalog = ctx.api.catalog_view(None)?.catalog;
        for line in draft.lines(&catalog) {
            println!("{}={}", line.id, line.quantity);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, theme: Option<String>) -> Result<()> {
    let set = match theme {
        Some(value) => Some(
            value
                .parse::<Theme>()
                .map_err(OrderPadError::Api)?,
        ),
        None => None,
    };
    let result = ctx.api.theme(set)?;
    if result.messages.is_empty() {
        if let Some(theme) = result.theme {
            println!("theme = {}", theme);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("currency"), None) => ConfigAction::ShowKey("currency".to_string()),
        (Some("currency"), Some(v)) => ConfigAction::SetCurrency(v),
        (Some("seed-path"), None) => ConfigAction::ShowKey("seed-path".to_string()),
        (Some("seed-path"), Some(v)) => ConfigAction::SetSeedPath(PathBuf::from(v)),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("currency = {}", config.currency);
        match &config.seed_path {
            Some(path) => println!("seed-path = {}", path.display()),
            None => println!("seed-path = (bundled)"),
        }
    }
    print_messages(&result.messages);
    Ok(())
}

// --- output ---

const LABEL_WIDTH: usize = 44;
const AMOUNT_WIDTH: usize = 9;
const STAR_MARKER: &str = "★";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn format_amount(currency: &str, amount: Decimal) -> String {
    format!("{} {:>width$}", currency, format!("{:.2}", amount), width = AMOUNT_WIDTH)
}

/// Render the grouped catalog. With a session, each line carries its draft
/// quantity and collapsed groups show only their header.
pub(crate) fn print_view(view: &CatalogView, session: Option<&Session>, currency: &str) {
    for group in &view.groups {
        let collapsed = session.is_some_and(|s| s.is_collapsed(&group.title));
        let header = if group.is_favourites {
            format!("{} {}", STAR_MARKER.yellow(), group.title.bold())
        } else {
            group.title.bold().to_string()
        };
        let toggle = if session.is_some() {
            if collapsed { "▸ " } else { "▾ " }
        } else {
            ""
        };
        println!("\n{}{}", toggle.dimmed(), header);

        if collapsed {
            continue;
        }
        for product in &group.products {
            let label = truncate_to_width(&product.label(), LABEL_WIDTH);
            let padding = LABEL_WIDTH.saturating_sub(label.width());
            let quantity = match session {
                Some(s) => {
                    let q = s.draft().quantity(&product.id);
                    if q > 0 {
                        format!("[{:>3}] ", q).bold().to_string()
                    } else {
                        "[  0] ".dimmed().to_string()
                    }
                }
                None => String::new(),
            };
            println!(
                "  {}{}{}  {}  {}",
                quantity,
                label,
                " ".repeat(padding),
                format_amount(currency, product.price),
                product.id.dimmed()
            );
        }
    }
}

pub(crate) fn print_entries(entries: &[DisplayEntry], currency: &str) {
    for de in entries {
        let local = de.entry.date.with_timezone(&Local);
        println!(
            "{:>3}. {}  {}  {}",
            de.index,
            local.format("%d/%m/%Y %H:%M"),
            format_amount(currency, de.entry.total),
            format_time_ago(de.entry.date).dimmed()
        );
    }
}

pub(crate) fn print_details(details: &[EntryDetail], currency: &str) {
    for (i, detail) in details.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let local = detail.entry.date.with_timezone(&Local);
        println!("{}", format!("Order of {}", local.format("%d/%m/%Y %H:%M")).bold());
        for line in &detail.lines {
            let label = truncate_to_width(&line.name, LABEL_WIDTH);
            let padding = LABEL_WIDTH.saturating_sub(label.width());
            println!(
                "  {}{}  {:>3} x {}",
                label,
                " ".repeat(padding),
                line.quantity,
                format_amount(currency, line.price)
            );
        }
        println!("  Total: {}", format_amount(currency, detail.entry.total).bold());
    }
}

pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

fn confirm(prompt: &str) -> Result<bool> {
    let term = console::Term::stdout();
    term.write_str(&format!("{} [y/N] ", prompt))
        .map_err(OrderPadError::Io)?;
    let line = term.read_line().map_err(OrderPadError::Io)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
