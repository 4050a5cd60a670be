//! Terminal blackjack.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{EnvFilter, prelude::*};
use twentyone::{Console, RoundError, Session, SessionOptions, TableError};

/// Environment variable that fixes the shuffle seed.
const SEED_VAR: &str = "BLACKJACK_SEED";

fn main() -> ExitCode {
    init_logging();

    let seed = seed();
    tracing::debug!(seed, "starting session");

    let mut session = Session::new(SessionOptions::default(), seed);
    let mut console = Console::stdio();

    match session.run(&mut console) {
        Ok(end) => {
            tracing::info!(?end, bankroll = session.bankroll(), "session over");
            ExitCode::SUCCESS
        }
        Err(RoundError::Table(TableError::InputClosed)) => {
            tracing::info!(bankroll = session.bankroll(), "input closed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("session failed: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn seed() -> u64 {
    std::env::var(SEED_VAR)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        })
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
