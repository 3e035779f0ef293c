//! Handlers for the booking commands.

use tracing::debug;

use crate::cli::{output, AddBookingArgs, ListBookingsArgs};
use crate::domain::NewBooking;
use crate::error::{Error, Result};
use crate::store::SqliteStore;

/// Execute the add-booking command.
///
/// The tourist is resolved by passport first; an unknown passport is a
/// terminal failure before anything is inserted.
pub fn add(store: &SqliteStore, args: &AddBookingArgs) -> Result<()> {
    let tourist = store
        .tourist_by_passport(&args.passport)?
        .ok_or_else(|| Error::TouristNotFound {
            passport: args.passport.clone(),
        })?;

    let new = NewBooking {
        tourist_id: tourist.id,
        destination: args.destination.clone(),
        start_date: args.start_date,
        end_date: args.end_date,
        price: args.price,
        description: args.description.clone(),
    };

    let id = store.add_booking(&new)?;
    debug!(id, tourist_id = tourist.id, "booking created");
    output::ok(&format!(
        "Booking created with id {id} for tourist {} {}",
        tourist.last_name, tourist.first_name
    ));
    Ok(())
}

/// Execute the list-bookings command.
pub fn list(store: &SqliteStore, args: &ListBookingsArgs) -> Result<()> {
    let tourist = store
        .tourist_by_passport(&args.passport)?
        .ok_or_else(|| Error::TouristNotFound {
            passport: args.passport.clone(),
        })?;

    let bookings = store.bookings_for_tourist(tourist.id)?;
    if bookings.is_empty() {
        output::note("No bookings found for tourist.");
        return Ok(());
    }

    for booking in &bookings {
        output::note(&format!(
            "[{}] {} | {} - {} | Price: {:.2}",
            booking.id, booking.destination, booking.start_date, booking.end_date, booking.price,
        ));
    }
    Ok(())
}
