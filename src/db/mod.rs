//! Database layer: scoped connections and schema initialisation.
//!
//! Every caller opens its own connection and drops it when the
//! operation finishes; nothing is pooled or cached between calls.

pub mod model;
pub mod schema;

use diesel::connection::SimpleConnection;
use diesel::define_sql_function;
use diesel::prelude::*;

use crate::error::{Result, StoreError};

define_sql_function! {
    /// Rowid of the most recent successful INSERT on this connection.
    fn last_insert_rowid() -> diesel::sql_types::Integer;
}

const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS tourist (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    passport_number TEXT NOT NULL UNIQUE,
    phone TEXT,
    email TEXT,
    date_of_birth TEXT,
    notes TEXT
);
CREATE TABLE IF NOT EXISTS booking (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tourist_id INTEGER NOT NULL REFERENCES tourist(id) ON DELETE CASCADE,
    destination TEXT NOT NULL,
    start_date TEXT NOT NULL,
    end_date TEXT NOT NULL,
    price REAL NOT NULL,
    description TEXT
);
";

/// Open a connection to the store at `database_url`.
///
/// SQLite leaves foreign key enforcement off per connection, so it is
/// switched on before the connection is handed out.
pub fn connect(database_url: &str) -> Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    conn.batch_execute("PRAGMA foreign_keys = ON;")
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    Ok(conn)
}

/// Create the `tourist` and `booking` tables if they do not exist.
///
/// Idempotent: calling this on an already-initialised store is a no-op.
pub fn initialise(database_url: &str) -> Result<()> {
    let mut conn = connect(database_url)?;
    conn.batch_execute(SCHEMA_SQL)
        .map_err(|e| StoreError::Database(e.to_string()))?;
    Ok(())
}

/// Id assigned by the most recent INSERT on `conn`.
pub(crate) fn last_assigned_id(conn: &mut SqliteConnection) -> Result<i32> {
    diesel::select(last_insert_rowid())
        .get_result::<i32>(conn)
        .map_err(|e| StoreError::Database(e.to_string()).into())
}
