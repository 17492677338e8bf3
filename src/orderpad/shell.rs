//! The interactive ordering session. Draft quantities live only for the
//! lifetime of one shell run; saving is the only way they outlive it.

use crate::{format_amount, load_catalog, print_entries, print_messages, print_view, AppContext};
use colored::*;
use console::Term;
use orderpad::error::{OrderPadError, Result};
use orderpad::model::Product;
use orderpad::session::Session;
use rust_decimal::Decimal;

pub(crate) fn run(ctx: &mut AppContext) -> Result<()> {
    let catalog = load_catalog(ctx)?;
    let mut session = Session::new(catalog);
    let term = Term::stdout();

    println!(
        "{}",
        "Interactive order pad. Type `help` for commands, `quit` to leave.".dimmed()
    );
    render(ctx, &session)?;

    loop {
        term.write_str("orderpad> ").map_err(OrderPadError::Io)?;
        let line = term.read_line().map_err(OrderPadError::Io)?;
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        let rest: Vec<&str> = parts.collect();

        match cmd {
            "quit" | "exit" | "q" => break,
            "help" => print_help(),
            "list" | "ls" => render(ctx, &session)?,
            "search" => {
                session.set_search(&rest.join(" "));
                render(ctx, &session)?;
            }
            "+" => step(ctx, &mut session, &rest, true)?,
            "-" => step(ctx, &mut session, &rest, false)?,
            "set" => set_quantity(ctx, &mut session, &rest)?,
            "total" => print_total(ctx, &session),
            "auto" => toggle_auto(ctx, &mut session, &rest),
            "save" => save(ctx, &mut session)?,
            "load" => load_last(ctx, &mut session)?,
            "reset" => {
                session.draft_mut().reset();
                println!("{}", "Reset successfully.".green());
                maybe_print_total(ctx, &session);
            }
            "collapse" => {
                session.toggle_collapsed(&rest.join(" "));
                render(ctx, &session)?;
            }
            "history" => {
                let result = ctx.api.history(None, None)?;
                print_entries(&result.entries, &ctx.currency);
                print_messages(&result.messages);
            }
            other => println!("{}", format!("Unknown command: {}", other).yellow()),
        }
    }

    Ok(())
}

fn render(ctx: &AppContext, session: &Session) -> Result<()> {
    let search = Some(session.search()).filter(|s| !s.is_empty());
    let result = ctx.api.catalog_view(search)?;
    if let Some(view) = &result.view {
        print_view(view, Some(session), &ctx.currency);
    }
    print_messages(&result.messages);
    maybe_print_total(ctx, session);
    Ok(())
}

fn print_total(ctx: &AppContext, session: &Session) {
    println!(
        "Total: {}",
        format_amount(&ctx.currency, session.total()).bold()
    );
}

fn maybe_print_total(ctx: &AppContext, session: &Session) {
    if session.auto_calculate() {
        print_total(ctx, session);
    }
}

fn step(ctx: &AppContext, session: &mut Session, query: &[&str], up: bool) -> Result<()> {
    let Some(id) = resolve(session, query) else {
        return Ok(());
    };
    if up {
        session.draft_mut().increment(&id);
    } else {
        session.draft_mut().decrement(&id);
    }
    maybe_print_total(ctx, session);
    Ok(())
}

fn set_quantity(ctx: &AppContext, session: &mut Session, args: &[&str]) -> Result<()> {
    let Some((raw, query)) = args.split_last() else {
        println!("{}", "Usage: set <product> <quantity>".yellow());
        return Ok(());
    };
    let Some(id) = resolve(session, query) else {
        return Ok(());
    };
    session.draft_mut().enter(&id, raw);
    maybe_print_total(ctx, session);
    Ok(())
}

fn toggle_auto(ctx: &AppContext, session: &mut Session, args: &[&str]) {
    match args.first() {
        Some(&"on") => {
            session.set_auto_calculate(true);
            print_total(ctx, session);
        }
        Some(&"off") => session.set_auto_calculate(false),
        _ => println!(
            "auto-calculate is {}",
            if session.auto_calculate() { "on" } else { "off" }
        ),
    }
}

fn save(ctx: &mut AppContext, session: &mut Session) -> Result<()> {
    let lines = session.lines();
    let total = lines
        .iter()
        .map(|l| l.price * Decimal::from(l.quantity))
        .sum();
    let result = ctx.api.save_order(&lines, total)?;
    print_messages(&result.messages);
    // Refresh so a new favourite shows up right away.
    if !result.entries.is_empty() {
        render(ctx, session)?;
    }
    Ok(())
}

fn load_last(ctx: &mut AppContext, session: &mut Session) -> Result<()> {
    let result = ctx.api.load_last()?;
    if let Some(draft) = result.draft {
        session.replace_draft(draft);
    }
    print_messages(&result.messages);
    maybe_print_total(ctx, session);
    Ok(())
}

/// Match a product by exact id first, then by a case-insensitive substring
/// of its "name - size" label. Anything but exactly one match prints a hint
/// and resolves to nothing.
fn resolve(session: &Session, query: &[&str]) -> Option<String> {
    let query = query.join(" ");
    if query.is_empty() {
        println!("{}", "Which product?".yellow());
        return None;
    }

    if let Some(p) = session.catalog().iter().find(|p| p.id == query) {
        return Some(p.id.clone());
    }

    let q = query.to_lowercase();
    let matches: Vec<&Product> = session
        .catalog()
        .iter()
        .filter(|p| p.label().to_lowercase().contains(&q))
        .collect();

    match matches.len() {
        0 => {
            println!("{}", format!("No product matches '{}'", query).yellow());
            None
        }
        1 => Some(matches[0].id.clone()),
        n => {
            println!(
                "{}",
                format!("'{}' is ambiguous ({} matches); use the id", query, n).yellow()
            );
            None
        }
    }
}

fn print_help() {
    println!("  list              redraw the catalog");
    println!("  search [term]     filter products (empty term clears)");
    println!("  + <product>       increment quantity");
    println!("  - <product>       decrement quantity");
    println!("  set <product> <n> set quantity directly");
    println!("  total             print the running total");
    println!("  auto on|off       toggle auto-calculate");
    println!("  save              save the order to history");
    println!("  load              load the most recent order");
    println!("  reset             zero all quantities");
    println!("  collapse <group>  collapse or expand a category");
    println!("  history           list saved orders");
    println!("  quit              leave the shell");
}
