//! Client for the news provider's search endpoint.
//!
//! One entry point, [`fetch_news`], performs the whole exchange for a single
//! section: build the query, read the body, parse the envelope, and apply
//! the in-band error rules. The provider reports most failures inside a
//! well-formed JSON body, so only a body that fails to parse is treated as
//! a hard error; a missing credential or an `"error"` status degrades to an
//! empty article list and the run carries on.

use std::error::Error;

use tracing::{info, instrument, warn};

use crate::models::{Article, NewsResponse};

/// The provider's full-archive search endpoint.
const NEWS_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// How many articles each section requests and renders.
pub const PAGE_SIZE: usize = 5;

/// Fetches recent English-language articles for one search query.
///
/// # Arguments
///
/// * `client` - Shared HTTP client.
/// * `api_key` - Provider credential, if one is configured.
/// * `query` - Free-text search query for the section.
/// * `from` - Start of the search window, as `YYYY-MM-DD`.
///
/// # Returns
///
/// Up to [`PAGE_SIZE`] articles with usable titles, newest first. The list
/// is empty when no credential is configured or the provider reported an
/// in-band error; both cases are logged as warnings.
#[instrument(level = "info", skip_all, fields(query = query))]
pub async fn fetch_news(
    client: &reqwest::Client,
    api_key: Option<&str>,
    query: &str,
    from: &str,
) -> Result<Vec<Article>, Box<dyn Error>> {
    let Some(key) = api_key else {
        warn!("no API credential configured; section keeps its current content");
        return Ok(Vec::new());
    };

    let page_size = PAGE_SIZE.to_string();
    let body = client
        .get(NEWS_ENDPOINT)
        .query(&[
            ("q", query),
            ("from", from),
            ("sortBy", "publishedAt"),
            ("language", "en"),
            ("pageSize", page_size.as_str()),
            ("apiKey", key),
        ])
        .send()
        .await?
        .text()
        .await?;

    let articles = articles_from_body(&body)?;
    info!(count = articles.len(), "fetched articles");

    Ok(articles)
}

/// Turns a raw response body into displayable articles.
///
/// A body that does not parse as the provider's envelope is a hard error.
/// A well-formed envelope with a non-`"ok"` status is not: the provider's
/// code and message are logged and the result is an empty list, so the
/// caller's run continues with that section unchanged.
fn articles_from_body(body: &str) -> Result<Vec<Article>, Box<dyn Error>> {
    let response: NewsResponse = serde_json::from_str(body)?;

    if response.status != "ok" {
        warn!(
            code = response.code.as_deref().unwrap_or("unknown"),
            message = response.message.as_deref().unwrap_or(""),
            "provider reported an error; section keeps its current content"
        );
        return Ok(Vec::new());
    }

    Ok(select_articles(response.articles))
}

/// Drops articles without a usable title and caps the list at [`PAGE_SIZE`].
///
/// The provider keeps withdrawn articles in result lists under a placeholder
/// title, and it may return more rows than requested; both are trimmed here
/// so rendering only ever sees displayable articles.
fn select_articles(articles: Vec<Article>) -> Vec<Article> {
    articles
        .into_iter()
        .filter(Article::has_usable_title)
        .take(PAGE_SIZE)
        .collect()
}
