// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, build the API client, hand both to
//   `run`.
// - Returns `anyhow::Result`, so any error is printed with its cause chain
//   and the process exits non-zero.

use anyhow::Context;
use bsky_scream::{config, run, ApiClient};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    config::load_dotenv();

    let api = ApiClient::new()?;
    run(config::env_lookup, &api).context("failed to post scream")?;

    println!("Message posted successfully!");
    Ok(())
}
