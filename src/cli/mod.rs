//! Command-line interface definitions.

pub mod booking;
pub mod contract;
pub mod init;
pub mod output;
pub mod tourist;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tourbook - tour agency records and contract generation.
#[derive(Parser, Debug)]
#[command(name = "tourbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "tourbook.toml", global = true)]
    pub config: PathBuf,

    /// Path to the SQLite database file (overrides config)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialise the database schema
    InitDb,

    /// Create a new tourist
    AddTourist(AddTouristArgs),

    /// List all tourists
    ListTourists,

    /// Create a new booking for a tourist
    AddBooking(AddBookingArgs),

    /// List bookings for a tourist
    ListBookings(ListBookingsArgs),

    /// Generate a contract document from a template
    GenerateContract(GenerateContractArgs),
}

/// Arguments for the `add-tourist` subcommand.
#[derive(Args, Debug)]
pub struct AddTouristArgs {
    pub first_name: String,

    pub last_name: String,

    /// Passport number (unique across all tourists)
    pub passport: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Date of birth in ISO format (YYYY-MM-DD)
    #[arg(long, value_parser = parse_iso_date)]
    pub date_of_birth: Option<NaiveDate>,

    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for the `add-booking` subcommand.
#[derive(Args, Debug)]
pub struct AddBookingArgs {
    /// Passport number of the tourist
    pub passport: String,

    pub destination: String,

    /// Start date in ISO format (YYYY-MM-DD)
    #[arg(value_parser = parse_iso_date)]
    pub start_date: NaiveDate,

    /// End date in ISO format (YYYY-MM-DD)
    #[arg(value_parser = parse_iso_date)]
    pub end_date: NaiveDate,

    pub price: f64,

    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for the `list-bookings` subcommand.
#[derive(Args, Debug)]
pub struct ListBookingsArgs {
    /// Passport number of the tourist
    pub passport: String,
}

/// Arguments for the `generate-contract` subcommand.
#[derive(Args, Debug)]
pub struct GenerateContractArgs {
    pub booking_id: i32,

    /// Path to the contract template
    pub template: PathBuf,

    /// Where to save the generated document
    pub output: PathBuf,
}

/// Parse a calendar date, rejecting anything that is not `YYYY-MM-DD`.
fn parse_iso_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("date must be in ISO format (YYYY-MM-DD), got '{value}'"))
}
