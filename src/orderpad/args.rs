use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "orderpad",
    bin_name = "orderpad",
    version,
    about = "Order pad and price calculator for small retail catalogs",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Seed the catalog from this document instead of the bundled one
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub seed: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the catalog, grouped by category with favourites first
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Hide products whose "name - size" label does not contain the term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Start an interactive ordering session
    #[command(display_order = 2)]
    Shell,

    /// Compute the total for a set of quantities
    #[command(display_order = 3)]
    Total {
        /// ID=QTY pairs (e.g. milk-taaza-500=3)
        #[arg(value_name = "ID=QTY", num_args = 0..)]
        quantities: Vec<String>,

        /// Start from the most recent saved order
        #[arg(long)]
        from_last: bool,
    },

    /// Save an order to history
    #[command(display_order = 4)]
    Save {
        /// ID=QTY pairs (e.g. milk-taaza-500=3)
        #[arg(value_name = "ID=QTY", num_args = 0..)]
        quantities: Vec<String>,

        /// Start from the most recent saved order
        #[arg(long)]
        from_last: bool,
    },

    /// Add a product to the catalog
    #[command(display_order = 10)]
    Add {
        name: String,
        size: String,
        price: Decimal,
        category: String,
    },

    /// Remove a product from the catalog
    #[command(alias = "rm", display_order = 11)]
    Remove {
        /// Product id (shown by list)
        id: String,
    },

    /// List saved orders
    #[command(display_order = 20)]
    History {
        /// Earliest local day to include (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        from: Option<NaiveDate>,

        /// Latest local day to include (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        to: Option<NaiveDate>,
    },

    /// View saved orders in detail
    #[command(alias = "v", display_order = 21)]
    View {
        /// Indexes from the history listing (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Delete saved orders
    #[command(display_order = 22)]
    Delete {
        /// Indexes from the history listing (e.g. 1 3)
        #[arg(required = false, num_args = 0..)]
        indexes: Vec<usize>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export one month of history as a CSV file
    #[command(display_order = 23)]
    Export {
        /// Month-year filter, e.g. 7-2025
        filter: String,

        /// Directory to write the file into (defaults to the current dir)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Print the most recent order as ID=QTY pairs
    #[command(display_order = 24)]
    Load,

    /// Get or set the theme preference
    #[command(display_order = 30)]
    Theme {
        /// "light" or "dark" (omit to print the current theme)
        theme: Option<String>,
    },

    /// Get or set configuration
    #[command(display_order = 31)]
    Config {
        /// Configuration key (currency, seed-path)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
