//! Tourbook - tour agency record keeping and contract generation.
//!
//! Stores tourists and their bookings in a single-file SQLite database
//! and renders contract documents by substituting `{{token}}`
//! placeholders in text templates.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Tourist and booking record types
//! - [`db`] - SQLite connections, schema and row models
//! - [`store`] - Persistence operations over the two tables
//! - [`document`] - Template filling and contract rendering
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command definitions and handlers
//!
//! # Example
//!
//! ```no_run
//! use tourbook::domain::NewTourist;
//! use tourbook::store::SqliteStore;
//!
//! # fn main() -> tourbook::error::Result<()> {
//! let store = SqliteStore::new("tour_agency.db");
//! store.initialise()?;
//! let id = store.add_tourist(&NewTourist {
//!     first_name: "Ana".into(),
//!     last_name: "Popescu".into(),
//!     passport_number: "X123".into(),
//!     phone: None,
//!     email: None,
//!     date_of_birth: None,
//!     notes: None,
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod document;
pub mod domain;
pub mod error;
pub mod store;
