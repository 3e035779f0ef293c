//! Domain types for tourists and bookings.

use chrono::NaiveDate;

/// A customer record, identified uniquely by passport number.
#[derive(Debug, Clone, PartialEq)]
pub struct Tourist {
    /// Surrogate id assigned by the store, immutable once created.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub passport_number: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// A tourist that has not been persisted yet, so no id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTourist {
    pub first_name: String,
    pub last_name: String,
    pub passport_number: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// A single trip reservation belonging to exactly one tourist.
///
/// No ordering is enforced between `start_date` and `end_date`.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    /// Surrogate id assigned by the store.
    pub id: i32,
    pub tourist_id: i32,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    pub description: Option<String>,
}

/// A booking that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub tourist_id: i32,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    pub description: Option<String>,
}
