//! Persistence layer over the SQLite store.
//!
//! Every operation is a single self-contained unit of work: it opens
//! its own connection, executes, and releases the connection on every
//! exit path. No rows are cached between calls.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::db;
use crate::db::model::{BookingRow, NewBookingRow, NewTouristRow, TouristRow};
use crate::db::schema::{booking, tourist};
use crate::domain::{Booking, NewBooking, NewTourist, Tourist};
use crate::error::{Result, StoreError};

/// SQLite-backed store for tourists and bookings.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    database_url: String,
}

impl SqliteStore {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Location of the underlying database file.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Create the schema if it does not exist yet. Idempotent.
    pub fn initialise(&self) -> Result<()> {
        db::initialise(&self.database_url)
    }

    fn connect(&self) -> Result<SqliteConnection> {
        db::connect(&self.database_url)
    }

    /// Insert a tourist and return the id assigned by the store.
    pub fn add_tourist(&self, new: &NewTourist) -> Result<i32> {
        let mut conn = self.connect()?;

        diesel::insert_into(tourist::table)
            .values(NewTouristRow::from(new))
            .execute(&mut conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    StoreError::DuplicatePassport {
                        passport: new.passport_number.clone(),
                    }
                }
                other => StoreError::Database(other.to_string()),
            })?;

        let id = db::last_assigned_id(&mut conn)?;
        debug!(id, passport = %new.passport_number, "tourist inserted");
        Ok(id)
    }

    /// Exact-match lookup by passport number. Absent rows are `Ok(None)`.
    pub fn tourist_by_passport(&self, passport: &str) -> Result<Option<Tourist>> {
        let mut conn = self.connect()?;

        let row: Option<TouristRow> = tourist::table
            .filter(tourist::passport_number.eq(passport))
            .select(TouristRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.map(Tourist::from))
    }

    /// Lookup by surrogate id. Absent rows are `Ok(None)`.
    pub fn tourist_by_id(&self, id: i32) -> Result<Option<Tourist>> {
        let mut conn = self.connect()?;

        let row: Option<TouristRow> = tourist::table
            .find(id)
            .select(TouristRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.map(Tourist::from))
    }

    /// All tourists ordered by last name ascending, tie-broken by id.
    pub fn list_tourists(&self) -> Result<Vec<Tourist>> {
        let mut conn = self.connect()?;

        let rows: Vec<TouristRow> = tourist::table
            .order((tourist::last_name.asc(), tourist::id.asc()))
            .select(TouristRow::as_select())
            .load(&mut conn)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Tourist::from).collect())
    }

    /// Delete a tourist by id; its bookings are removed by the schema's
    /// ON DELETE CASCADE. Returns whether a row was deleted.
    ///
    /// Not surfaced through any command; the CLI never deletes records.
    pub fn delete_tourist(&self, id: i32) -> Result<bool> {
        let mut conn = self.connect()?;

        let deleted = diesel::delete(tourist::table.find(id))
            .execute(&mut conn)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(deleted > 0)
    }

    /// Insert a booking and return the id assigned by the store.
    pub fn add_booking(&self, new: &NewBooking) -> Result<i32> {
        let mut conn = self.connect()?;

        diesel::insert_into(booking::table)
            .values(NewBookingRow::from(new))
            .execute(&mut conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                    StoreError::UnknownTourist {
                        tourist_id: new.tourist_id,
                    }
                }
                other => StoreError::Database(other.to_string()),
            })?;

        let id = db::last_assigned_id(&mut conn)?;
        debug!(id, tourist_id = new.tourist_id, "booking inserted");
        Ok(id)
    }

    /// Lookup by surrogate id. Absent rows are `Ok(None)`.
    pub fn booking_by_id(&self, id: i32) -> Result<Option<Booking>> {
        let mut conn = self.connect()?;

        let row: Option<BookingRow> = booking::table
            .find(id)
            .select(BookingRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.map(Booking::from))
    }

    /// All bookings for one tourist, ordered by start date ascending.
    ///
    /// Materialized per call; the result is a finite snapshot, not a
    /// live cursor shared across calls.
    pub fn bookings_for_tourist(&self, tourist_id: i32) -> Result<Vec<Booking>> {
        let mut conn = self.connect()?;

        let rows: Vec<BookingRow> = booking::table
            .filter(booking::tourist_id.eq(tourist_id))
            .order(booking::start_date.asc())
            .select(BookingRow::as_select())
            .load(&mut conn)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }
}
