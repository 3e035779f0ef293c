//! Booking contract rendering.

use std::path::{Path, PathBuf};

use super::{fill_template, Context, FieldValue};
use crate::domain::{Booking, Tourist};
use crate::error::Result;

/// Render a booking contract from a template.
///
/// Builds a flat context with every tourist field under
/// `tourist_<field>` and every booking field under `booking_<field>`,
/// then delegates to [`fill_template`].
pub fn render_booking_contract(
    tourist: &Tourist,
    booking: &Booking,
    template_path: &Path,
    output_path: &Path,
) -> Result<PathBuf> {
    let context = contract_context(tourist, booking);
    fill_template(template_path, output_path, &context)
}

fn contract_context(tourist: &Tourist, booking: &Booking) -> Context {
    let mut context = Context::new();

    context.insert("tourist_id".into(), FieldValue::Id(tourist.id));
    context.insert("tourist_first_name".into(), tourist.first_name.clone().into());
    context.insert("tourist_last_name".into(), tourist.last_name.clone().into());
    context.insert(
        "tourist_passport_number".into(),
        tourist.passport_number.clone().into(),
    );
    context.insert("tourist_phone".into(), tourist.phone.clone().into());
    context.insert("tourist_email".into(), tourist.email.clone().into());
    context.insert("tourist_date_of_birth".into(), tourist.date_of_birth.into());
    context.insert("tourist_notes".into(), tourist.notes.clone().into());

    context.insert("booking_id".into(), FieldValue::Id(booking.id));
    context.insert("booking_tourist_id".into(), FieldValue::Id(booking.tourist_id));
    context.insert("booking_destination".into(), booking.destination.clone().into());
    context.insert("booking_start_date".into(), booking.start_date.into());
    context.insert("booking_end_date".into(), booking.end_date.into());
    context.insert("booking_price".into(), booking.price.into());
    context.insert("booking_description".into(), booking.description.clone().into());

    context
}
