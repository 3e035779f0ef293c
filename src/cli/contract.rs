//! Handler for the `generate-contract` command.

use tracing::debug;

use crate::cli::{output, GenerateContractArgs};
use crate::document::render_booking_contract;
use crate::error::{Error, Result};
use crate::store::SqliteStore;

/// Execute the generate-contract command.
///
/// A missing booking, or a missing tourist behind the booking, is a
/// terminal failure.
pub fn execute(store: &SqliteStore, args: &GenerateContractArgs) -> Result<()> {
    let booking = store
        .booking_by_id(args.booking_id)?
        .ok_or(Error::BookingNotFound { id: args.booking_id })?;

    let tourist = store
        .tourist_by_id(booking.tourist_id)?
        .ok_or(Error::BookingTouristMissing {
            booking_id: booking.id,
        })?;

    let output_path = render_booking_contract(&tourist, &booking, &args.template, &args.output)?;

    debug!(booking_id = booking.id, output = %output_path.display(), "contract generated");
    output::ok(&format!("Document generated at {}", output_path.display()));
    Ok(())
}
