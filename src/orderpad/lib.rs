//! # Orderpad Architecture
//!
//! Orderpad is a **UI-agnostic order-entry library**. The CLI binary is one
//! client of it; the same core could sit behind any other surface.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, shell.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → entry keys)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns Rust types                  │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait over three persisted keys       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session State
//!
//! The draft — the in-progress quantity selection — never touches the
//! store. [`session::Session`] owns it together with the search filter,
//! the auto-calculate flag, and per-category collapse state, and the view
//! layer renders from that struct alone. Saving an order is the only way
//! draft state outlives a session, and loading the last order is the only
//! way it comes back.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Product`, `HistoryEntry`, `Theme`)
//! - [`draft`]: The ephemeral quantity map and the total calculator
//! - [`session`]: Per-session application state
//! - [`favourites`]: History-derived product ranking
//! - [`seed`]: The seed catalog document
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod favourites;
pub mod model;
pub mod seed;
pub mod session;
pub mod store;
