//! The update run: fetch news for each section and patch the document.
//!
//! One public entry point, [`run`], executes the whole sequence described
//! in the module docs of [`crate::outputs`]:
//!
//! 1. compute the 14-day lookback window
//! 2. fetch both section queries concurrently, failing the run if either
//!    request errors (a credential-less or error-status fetch yields an
//!    empty list instead, see [`crate::api::fetch_news`])
//! 3. read the document, splice cards into every section that got
//!    articles, and refresh the "Last Updated" line
//! 4. write the document back whole
//!
//! Nothing is persisted until the final write, so any failure before it
//! leaves the file untouched.

use std::error::Error;

use chrono::{Local, Utc};
use futures::future::try_join_all;
use tokio::fs;
use tracing::{info, instrument};

use crate::api;
use crate::models::{Article, Section};
use crate::outputs::cards::build_cards;
use crate::outputs::document::{refresh_timestamp, replace_section_cards};
use crate::utils::{format_long_date, lookback_date};

/// The site's two news sections and the provider queries that fill them.
const SECTIONS: [Section; 2] = [
    Section {
        id: "us",
        query: r#"autonomous driving Waymo OR Tesla OR NVIDIA OR "self-driving""#,
        emoji: "🇺🇸",
    },
    Section {
        id: "china",
        query: r#"China "autonomous vehicle" OR "self-driving" BYD OR Baidu OR DeepSeek"#,
        emoji: "🇨🇳",
    },
];

/// How many days back the provider search window reaches.
const LOOKBACK_DAYS: i64 = 14;

/// Sent with every provider request; the API rejects the default client UA.
const USER_AGENT: &str = "Mozilla/5.0";

/// Refreshes the news sections of the document at `html_path`.
///
/// # Arguments
///
/// * `html_path` - Path to the HTML document to patch in place.
/// * `api_key` - Provider credential; `None` leaves all sections as-is
///   and still refreshes the timestamp.
///
/// # Returns
///
/// `Ok(())` once the document has been written back. Network errors,
/// unreadable response bodies, and file I/O errors abort the run before
/// the write.
#[instrument(level = "info", skip_all, fields(file = %html_path))]
pub async fn run(html_path: &str, api_key: Option<&str>) -> Result<(), Box<dyn Error>> {
    let from = lookback_date(Utc::now(), LOOKBACK_DAYS);
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    let fetches = SECTIONS
        .iter()
        .map(|section| api::fetch_news(&client, api_key, section.query, &from));
    let fetched = try_join_all(fetches).await?;

    let document = fs::read_to_string(html_path).await?;
    let patched = patch_document(document, &fetched);
    fs::write(html_path, &patched).await?;

    info!(file = html_path, "document written");
    Ok(())
}

/// Applies every section splice plus the timestamp refresh to `document`.
///
/// `fetched` holds one article list per entry of [`SECTIONS`], in order.
/// Sections with an empty list keep their current cards.
fn patch_document(mut document: String, fetched: &[Vec<Article>]) -> String {
    for (section, articles) in SECTIONS.iter().zip(fetched) {
        if articles.is_empty() {
            info!(section = section.id, "no articles; section left as-is");
            continue;
        }
        let cards = build_cards(articles, section.emoji);
        document = replace_section_cards(&document, section.id, &cards);
        info!(
            section = section.id,
            count = articles.len(),
            "section refreshed"
        );
    }

    let today = format_long_date(Local::now().date_naive());
    refresh_timestamp(&document, &today)
}
