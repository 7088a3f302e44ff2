use std::process::exit;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phonebook::prelude::run_app;

/// Initialize tracing with the PHONEBOOK_LOG environment variable.
/// Defaults to "info" when unset.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("PHONEBOOK_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() {
    init_tracing();

    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        exit(1);
    }
}
