//! Database row types for the Diesel schema.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{booking, tourist};
use crate::domain::{Booking, NewBooking, NewTourist, Tourist};

/// Database row for a tourist (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = tourist)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TouristRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub passport_number: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Database row for a tourist (insertable, id assigned by the store).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = tourist)]
pub struct NewTouristRow {
    pub first_name: String,
    pub last_name: String,
    pub passport_number: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Database row for a booking (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = booking)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BookingRow {
    pub id: i32,
    pub tourist_id: i32,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    pub description: Option<String>,
}

/// Database row for a booking (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = booking)]
pub struct NewBookingRow {
    pub tourist_id: i32,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    pub description: Option<String>,
}

impl From<TouristRow> for Tourist {
    fn from(row: TouristRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            passport_number: row.passport_number,
            phone: row.phone,
            email: row.email,
            date_of_birth: row.date_of_birth,
            notes: row.notes,
        }
    }
}

impl From<&NewTourist> for NewTouristRow {
    fn from(tourist: &NewTourist) -> Self {
        Self {
            first_name: tourist.first_name.clone(),
            last_name: tourist.last_name.clone(),
            passport_number: tourist.passport_number.clone(),
            phone: tourist.phone.clone(),
            email: tourist.email.clone(),
            date_of_birth: tourist.date_of_birth,
            notes: tourist.notes.clone(),
        }
    }
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id,
            tourist_id: row.tourist_id,
            destination: row.destination,
            start_date: row.start_date,
            end_date: row.end_date,
            price: row.price,
            description: row.description,
        }
    }
}

impl From<&NewBooking> for NewBookingRow {
    fn from(booking: &NewBooking) -> Self {
        Self {
            tourist_id: booking.tourist_id,
            destination: booking.destination.clone(),
            start_date: booking.start_date,
            end_date: booking.end_date,
            price: booking.price,
            description: booking.description.clone(),
        }
    }
}
