//! Handlers for the tourist commands.

use tracing::debug;

use crate::cli::{output, AddTouristArgs};
use crate::domain::NewTourist;
use crate::error::Result;
use crate::store::SqliteStore;

/// Execute the add-tourist command.
pub fn add(store: &SqliteStore, args: &AddTouristArgs) -> Result<()> {
    let new = NewTourist {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        passport_number: args.passport.clone(),
        phone: args.phone.clone(),
        email: args.email.clone(),
        date_of_birth: args.date_of_birth,
        notes: args.notes.clone(),
    };

    let id = store.add_tourist(&new)?;
    debug!(id, passport = %args.passport, "tourist created");
    output::ok(&format!("Tourist created with id {id}"));
    Ok(())
}

/// Execute the list-tourists command.
pub fn list(store: &SqliteStore) -> Result<()> {
    let tourists = store.list_tourists()?;
    if tourists.is_empty() {
        output::note("No tourists found.");
        return Ok(());
    }

    for tourist in &tourists {
        let dob = tourist
            .date_of_birth
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".into());
        output::note(&format!(
            "[{}] {} {} | Passport: {} | Phone: {} | DOB: {}",
            tourist.id,
            tourist.last_name,
            tourist.first_name,
            tourist.passport_number,
            tourist.phone.as_deref().unwrap_or("-"),
            dob,
        ));
    }
    Ok(())
}
