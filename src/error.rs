use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Persistence errors raised by the SQLite store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Unique constraint on the passport number was violated.
    #[error("passport number '{passport}' is already registered")]
    DuplicatePassport { passport: String },

    /// Foreign key constraint was violated: the referenced tourist row
    /// does not exist.
    #[error("booking references unknown tourist id {tourist_id}")]
    UnknownTourist { tourist_id: i32 },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),
}

/// Document generation errors.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("template not found: {}", path.display())]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write document to {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    /// A command needed a tourist that the passport lookup did not find.
    #[error("tourist with passport '{passport}' not found")]
    TouristNotFound { passport: String },

    /// A command needed a booking that the id lookup did not find.
    #[error("booking {id} not found")]
    BookingNotFound { id: i32 },

    /// A booking row exists but its tourist row is gone.
    #[error("tourist associated with booking {booking_id} not found")]
    BookingTouristMissing { booking_id: i32 },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
