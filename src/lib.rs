//! Entries API: minimal CRUD backend over a single SQLite table.

pub mod config;
pub mod csrf;
pub mod entry;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use entry::{Entry, EntrySummary, NewEntry};
pub use error::AppError;
pub use routes::{app, common_routes, entry_routes};
pub use service::EntryService;
pub use state::AppState;
pub use store::{connect, ensure_entries_table};
