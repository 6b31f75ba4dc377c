//! Data models for the news provider's wire format and the site's sections.
//!
//! This module defines the structures deserialized from the news API and the
//! static table entry describing one patchable region of the site:
//! - [`NewsResponse`]: the provider's top-level JSON envelope
//! - [`Article`]: one article as returned by the provider
//! - [`ArticleSource`]: the provider's nested source object
//! - [`Section`]: one named region of the HTML document with its search query
//!
//! Every provider field is optional because the API emits explicit `null`s
//! for missing data; rendering code supplies the documented defaults
//! ("News" for the source name, "#" for the URL).

use serde::Deserialize;

/// Placeholder title the provider substitutes for withdrawn articles.
const REMOVED_TITLE: &str = "[Removed]";

/// Top-level response envelope from the news provider.
///
/// The provider reports errors in-band: `status` is `"ok"` or `"error"`,
/// and on error `code`/`message` describe the cause while `articles` is
/// absent. All of that is modeled here so a well-formed error payload can
/// be logged and treated as an empty result rather than a parse failure.
#[derive(Debug, Deserialize)]
pub struct NewsResponse {
    /// `"ok"` on success, `"error"` otherwise.
    pub status: String,
    /// Machine-readable error code, present when `status` is `"error"`.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable error message, present when `status` is `"error"`.
    #[serde(default)]
    pub message: Option<String>,
    /// The returned articles; empty or absent on error.
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// One article as returned by the provider.
///
/// Field names follow the provider's camelCase JSON via serde renaming.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline text.
    #[serde(default)]
    pub title: Option<String>,
    /// Short summary; often null for syndicated content.
    #[serde(default)]
    pub description: Option<String>,
    /// Leading body text; used when `description` is null.
    #[serde(default)]
    pub content: Option<String>,
    /// Publication instant as an ISO 8601 string.
    #[serde(default)]
    pub published_at: Option<String>,
    /// Publishing outlet.
    #[serde(default)]
    pub source: Option<ArticleSource>,
    /// Canonical article URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// The provider's nested source object.
#[derive(Debug, Deserialize)]
pub struct ArticleSource {
    /// Outlet display name, e.g. "Reuters".
    #[serde(default)]
    pub name: Option<String>,
}

impl Article {
    /// Whether this article carries a real title.
    ///
    /// The provider keeps withdrawn articles in result lists with the
    /// literal title `[Removed]`; those and empty titles are dropped
    /// before rendering.
    pub fn has_usable_title(&self) -> bool {
        match self.title.as_deref().map(str::trim) {
            Some("") | None => false,
            Some(title) => title != REMOVED_TITLE,
        }
    }

    /// The text used for the card summary: the description when present
    /// and non-empty, otherwise the content, otherwise an empty string.
    pub fn summary_text(&self) -> &str {
        match self.description.as_deref() {
            Some(desc) if !desc.is_empty() => desc,
            _ => self.content.as_deref().unwrap_or(""),
        }
    }

    /// The outlet display name, defaulting to "News".
    pub fn source_name(&self) -> &str {
        self.source
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("News")
    }

    /// The article link, defaulting to "#".
    pub fn link(&self) -> &str {
        self.url.as_deref().filter(|u| !u.is_empty()).unwrap_or("#")
    }
}

/// One patchable region of the site document.
///
/// Each section pairs a document id (the `<div id="...">` marker) with the
/// provider query that fills it and the emoji shown in the card image
/// placeholder.
#[derive(Debug)]
pub struct Section {
    /// The `id` attribute of the section's marker div.
    pub id: &'static str,
    /// Free-text provider query for this section.
    pub query: &'static str,
    /// Emoji rendered in the card's image slot.
    pub emoji: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_with_title(title: Option<&str>) -> Article {
        Article {
            title: title.map(str::to_string),
            description: None,
            content: None,
            published_at: None,
            source: None,
            url: None,
        }
    }

    #[test]
    fn test_response_deserialization_ok() {
        let json = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": {"id": null, "name": "Reuters"},
                    "author": "A. Writer",
                    "title": "Robotaxis expand",
                    "description": "A short summary",
                    "url": "https://example.com/a",
                    "urlToImage": null,
                    "publishedAt": "2025-05-06T14:30:00Z",
                    "content": "Body text..."
                },
                {
                    "source": {"id": null, "name": null},
                    "title": null,
                    "description": null,
                    "url": null,
                    "publishedAt": null,
                    "content": null
                }
            ]
        }"#;

        let resp: NewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.articles.len(), 2);
        assert_eq!(resp.articles[0].title.as_deref(), Some("Robotaxis expand"));
        assert_eq!(resp.articles[0].source_name(), "Reuters");
        assert!(resp.articles[1].title.is_none());
    }

    #[test]
    fn test_response_deserialization_error_payload() {
        let json = r#"{
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid"
        }"#;

        let resp: NewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, "error");
        assert_eq!(resp.code.as_deref(), Some("apiKeyInvalid"));
        assert!(resp.articles.is_empty());
    }

    #[test]
    fn test_has_usable_title() {
        assert!(article_with_title(Some("Real headline")).has_usable_title());
        assert!(!article_with_title(Some("[Removed]")).has_usable_title());
        assert!(!article_with_title(Some("")).has_usable_title());
        assert!(!article_with_title(Some("   ")).has_usable_title());
        assert!(!article_with_title(None).has_usable_title());
    }

    #[test]
    fn test_summary_text_prefers_description() {
        let mut article = article_with_title(Some("t"));
        article.description = Some("the description".to_string());
        article.content = Some("the content".to_string());
        assert_eq!(article.summary_text(), "the description");

        article.description = Some(String::new());
        assert_eq!(article.summary_text(), "the content");

        article.description = None;
        article.content = None;
        assert_eq!(article.summary_text(), "");
    }

    #[test]
    fn test_source_name_default() {
        let mut article = article_with_title(Some("t"));
        assert_eq!(article.source_name(), "News");

        article.source = Some(ArticleSource { name: None });
        assert_eq!(article.source_name(), "News");

        article.source = Some(ArticleSource {
            name: Some("Ars Technica".to_string()),
        });
        assert_eq!(article.source_name(), "Ars Technica");
    }

    #[test]
    fn test_link_default() {
        let mut article = article_with_title(Some("t"));
        assert_eq!(article.link(), "#");

        article.url = Some("https://example.com/story".to_string());
        assert_eq!(article.link(), "https://example.com/story");
    }
}
