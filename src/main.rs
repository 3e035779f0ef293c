use clap::Parser;

use tourbook::cli::{self, output, Cli, Commands};
use tourbook::config::Config;
use tourbook::store::SqliteStore;

fn main() {
    let cli = Cli::parse();

    let mut config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides
    if let Some(ref database) = cli.database {
        config.database.path = database.clone();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    config.init_logging();

    let store = SqliteStore::new(config.database.path.to_string_lossy().into_owned());

    let result = match &cli.command {
        Commands::InitDb => cli::init::execute(&store),
        Commands::AddTourist(args) => cli::tourist::add(&store, args),
        Commands::ListTourists => cli::tourist::list(&store),
        Commands::AddBooking(args) => cli::booking::add(&store, args),
        Commands::ListBookings(args) => cli::booking::list(&store, args),
        Commands::GenerateContract(args) => cli::contract::execute(&store, args),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
