//! Article-to-card HTML rendering.
//!
//! Pure string building, no I/O. Each article becomes one
//! `<article class="news-card">` fragment carrying the image placeholder,
//! source/date metadata, headline, summary, and link. The card body uses
//! only `span`/`h3`/`p`/`a` elements: the section splice in
//! [`crate::outputs::document`] keys on the first run of closing `</div>`
//! tags after the card grid, so card markup must never contain one.

use crate::models::Article;
use crate::utils::{escape_quotes, format_publish_date, truncate_chars};

/// Maximum headline length in characters, before escaping.
const TITLE_MAX: usize = 80;

/// Maximum summary length in characters, before escaping.
const SUMMARY_MAX: usize = 200;

/// Renders a list of articles as the card markup for one section.
///
/// # Arguments
///
/// * `articles` - Articles to render, in display order.
/// * `emoji` - Placeholder shown in each card's image slot.
///
/// # Returns
///
/// The concatenated card fragments separated by newlines, or an empty
/// string for an empty list (the caller skips the section in that case).
pub fn build_cards(articles: &[Article], emoji: &str) -> String {
    articles
        .iter()
        .map(|article| render_card(article, emoji))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one article as a card fragment.
///
/// Title and summary are truncated by character count first and
/// quote-escaped second, so the visible length is exact and only the
/// entity expansion can push the string longer. Angle brackets are left
/// untouched.
fn render_card(article: &Article, emoji: &str) -> String {
    let title = escape_quotes(&truncate_chars(
        article.title.as_deref().unwrap_or(""),
        TITLE_MAX,
    ));
    let summary = escape_quotes(&truncate_chars(article.summary_text(), SUMMARY_MAX));
    let meta = match article.published_at.as_deref() {
        Some(raw) => format!("{} · {}", article.source_name(), format_publish_date(raw)),
        None => article.source_name().to_string(),
    };

    format!(
        r#"<article class="news-card">
    <span class="news-image">{emoji}</span>
    <span class="news-meta">{meta}</span>
    <h3 class="news-title">{title}</h3>
    <p class="news-summary">{summary}</p>
    <a class="news-link" href="{href}" target="_blank" rel="noopener">Read more &rarr;</a>
</article>"#,
        emoji = emoji,
        meta = meta,
        title = title,
        summary = summary,
        href = article.link(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleSource;

    fn sample_article() -> Article {
        Article {
            title: Some("Robotaxi fleet doubles".to_string()),
            description: Some("The fleet grew again this quarter.".to_string()),
            content: None,
            published_at: Some("2025-05-06T14:30:00Z".to_string()),
            source: Some(ArticleSource {
                name: Some("Reuters".to_string()),
            }),
            url: Some("https://example.com/fleet".to_string()),
        }
    }

    #[test]
    fn test_card_contains_all_fields() {
        let card = render_card(&sample_article(), "🇺🇸");

        assert!(card.contains("🇺🇸"));
        assert!(card.contains("Reuters · May 6, 2025"));
        assert!(card.contains("Robotaxi fleet doubles"));
        assert!(card.contains("The fleet grew again this quarter."));
        assert!(card.contains(r#"href="https://example.com/fleet""#));
    }

    #[test]
    fn test_card_defaults_for_missing_fields() {
        let article = Article {
            title: Some("Bare headline".to_string()),
            description: None,
            content: None,
            published_at: None,
            source: None,
            url: None,
        };

        let card = render_card(&article, "🇨🇳");
        assert!(card.contains(">News<"));
        assert!(!card.contains("·"));
        assert!(card.contains(r##"href="#""##));
    }

    #[test]
    fn test_title_truncated_at_80_chars() {
        let mut article = sample_article();
        article.title = Some("a".repeat(100));

        let card = render_card(&article, "🇺🇸");
        assert!(card.contains(&"a".repeat(80)));
        assert!(!card.contains(&"a".repeat(81)));
    }

    #[test]
    fn test_summary_truncated_at_200_chars() {
        let mut article = sample_article();
        article.description = Some("b".repeat(250));

        let card = render_card(&article, "🇺🇸");
        assert!(card.contains(&"b".repeat(200)));
        assert!(!card.contains(&"b".repeat(201)));
    }

    #[test]
    fn test_quotes_escaped_after_truncation() {
        // One quote then 90 a's: the 80-char cut keeps the quote plus 79
        // a's, and only then does the quote expand to an entity. Escaping
        // first would leave just 74 a's after the cut.
        let mut article = sample_article();
        article.title = Some(format!("\"{}", "a".repeat(90)));

        let card = render_card(&article, "🇺🇸");
        assert!(card.contains(&format!("&quot;{}", "a".repeat(79))));
        assert!(!card.contains(&"a".repeat(80)));
    }

    #[test]
    fn test_angle_brackets_pass_through_unescaped() {
        // Documented gap: only double quotes are escaped.
        let mut article = sample_article();
        article.title = Some("<b>Bold</b> claim".to_string());

        let card = render_card(&article, "🇺🇸");
        assert!(card.contains("<b>Bold</b> claim"));
        assert!(!card.contains("&lt;"));
    }

    #[test]
    fn test_empty_list_renders_empty_string() {
        assert_eq!(build_cards(&[], "🇺🇸"), "");
    }

    #[test]
    fn test_build_cards_renders_each_article() {
        let articles = vec![sample_article(), sample_article(), sample_article()];
        let cards = build_cards(&articles, "🇺🇸");
        assert_eq!(cards.matches("<article class=\"news-card\"").count(), 3);
    }

    #[test]
    fn test_card_markup_contains_no_closing_divs() {
        // Section splicing locates the end of the card grid by the first run
        // of closing div tags, so the markup template must not emit any.
        // Article text can still smuggle one in through the escaping gap.
        let cards = build_cards(&[sample_article(), sample_article()], "🇺🇸");
        assert!(!cards.contains("</div>"));

        let mut article = sample_article();
        article.title = Some("Closing </div> in a headline".to_string());
        assert!(build_cards(&[article], "🇺🇸").contains("</div>"));
    }
}
