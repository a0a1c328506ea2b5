//! Ticket purchase command.
//!
//! Runs one purchase through the in-process collaborators and prints the
//! receipt, or the reason the purchase was rejected.
//!
//! # Usage
//!
//! ```bash
//! # Account 1: two adults, one child, one infant
//! cargo run --bin ticketing -- 1 ADULT=2 CHILD=1 INFANT=1
//!
//! # Account taken from TICKETING_ACCOUNT_ID (default 1)
//! cargo run --bin ticketing -- ADULT=1
//! ```

use cinema_tickets::domain::environment::SystemClock;
use cinema_tickets::{
    Config, LoggingPaymentCharger, LoggingSeatAllocator, PurchaseArgs, TicketEnvironment,
    TicketService, parse_args,
};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let PurchaseArgs { account_id, requests } =
        match parse_args(std::env::args().skip(1), config.default_account_id) {
            Ok(parsed) => parsed,
            Err(err) => {
                eprintln!("{err}");
                eprintln!("Usage: ticketing [ACCOUNT_ID] TYPE=COUNT...");
                return Ok(ExitCode::from(2));
            },
        };

    tracing::debug!(account_id, lines = requests.len(), "Submitting purchase");

    let service = TicketService::new(TicketEnvironment::new(
        LoggingPaymentCharger::new(),
        LoggingSeatAllocator::new(),
        SystemClock,
    ));

    match service.purchase_tickets(account_id, &requests) {
        Ok(receipt) => {
            println!("{}", serde_json::to_string_pretty(&receipt)?);
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => {
            eprintln!("Purchase rejected: {err}");
            Ok(ExitCode::FAILURE)
        },
    }
}
