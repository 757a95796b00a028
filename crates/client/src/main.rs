//! Mystic Dice Adventure terminal entry point.

use std::io;

use anyhow::Result;
use mystic_client::{CliApp, ClientConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    logging::setup_logging();

    let config = ClientConfig::from_env();
    tracing::debug!(?config, "client configuration");

    let setup = config.load_setup()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    CliApp::new(setup, stdin.lock(), stdout.lock()).run()
}
