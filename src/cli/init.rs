//! Handler for the `init-db` command.

use tracing::debug;

use crate::cli::output;
use crate::error::Result;
use crate::store::SqliteStore;

/// Execute the init-db command.
pub fn execute(store: &SqliteStore) -> Result<()> {
    store.initialise()?;
    debug!(database = store.database_url(), "schema initialised");
    output::ok(&format!("Database initialised at {}", store.database_url()));
    Ok(())
}
