//! Command-line interface definitions for newsboard.
//!
//! This module defines the CLI arguments and subcommands using the `clap`
//! crate. The API key can be provided via a flag or the `NEWS_API_KEY`
//! environment variable.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for the newsboard application.
///
/// Two subcommands, one per entry point: `update` refreshes the news
/// sections of the site document, `serve` runs the local preview server.
///
/// # Examples
///
/// ```sh
/// # Refresh index.html in the current directory
/// newsboard update
///
/// # Refresh a specific file with an explicit key
/// newsboard update --file site/index.html --news-api-key YOUR_KEY
///
/// # Preview the site on the default loopback address
/// newsboard serve --root site
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch fresh news and patch the site document in place
    Update {
        /// Path to the HTML document to update
        #[arg(short, long, default_value = "index.html")]
        file: String,

        /// News provider API key
        #[arg(long, env = "NEWS_API_KEY")]
        news_api_key: Option<String>,
    },

    /// Serve the site directory over HTTP
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        /// Directory to serve files from
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
}
