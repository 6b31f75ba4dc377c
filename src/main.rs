//! # newsboard
//!
//! A content updater and preview server for a static personal site. The
//! updater fetches recent news for two fixed topics, renders each article
//! into an HTML card, and splices the cards into marked sections of the
//! site's `index.html`; the server hosts the site directory locally so the
//! result can be checked in a browser.
//!
//! ## Usage
//!
//! ```sh
//! # Refresh the news sections (reads NEWS_API_KEY from the environment)
//! newsboard update --file site/index.html
//!
//! # Preview the result
//! newsboard serve --root site
//! ```
//!
//! ## Architecture
//!
//! The update run is a straight pipeline:
//! 1. **Fetch**: query the news provider for both sections concurrently
//! 2. **Render**: turn each article list into card markup
//! 3. **Patch**: splice the cards into the document and refresh the
//!    "Last Updated" line
//! 4. **Write**: write the document back whole

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod api;
mod cli;
mod models;
mod outputs;
mod server;
mod update;
mod utils;

use cli::{Cli, Command};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("newsboard starting up");

    let args = Cli::parse();
    debug!(?args.command, "Parsed CLI arguments");

    let result = match args.command {
        Command::Update { file, news_api_key } => {
            update::run(&file, news_api_key.as_deref()).await
        }
        Command::Serve { addr, root } => server::run(addr, root).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Run failed");
        return Err(e);
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
