//! In-place patching of the site's HTML document.
//!
//! The document is treated as text, never parsed. Two operations:
//!
//! - [`replace_section_cards`]: swap the contents of one section's card
//!   grid for freshly rendered markup
//! - [`refresh_timestamp`]: rewrite the "Last Updated" line
//!
//! # Section matching
//!
//! A section is located by its marker: `<div id="{id}" class="section...">`
//! followed (lazily, across newlines) by the section's `<div
//! class="card-grid">`. The end of the grid is the first run of three
//! closing `</div>` tags separated only by whitespace, which closes the
//! grid, the container, and the section in that order. Only the first
//! match is replaced. Because the closing run is captured and re-emitted
//! verbatim and card markup contains no `</div>`, splicing the same cards
//! twice yields byte-identical output.
//!
//! # Failure mode
//!
//! When the marker does not match (id typo, markup drift), the input is
//! returned unchanged and nothing is logged. A caller cannot distinguish
//! that from a successful splice.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Matches the "Last Updated" label and everything up to the next tag.
static LAST_UPDATED: Lazy<Regex> = Lazy::new(|| Regex::new(r"Last Updated: [^<]*").unwrap());

/// Replaces the card-grid contents of one section with `cards`.
///
/// # Arguments
///
/// * `document` - The full HTML document text.
/// * `section_id` - The `id` attribute of the section's marker div.
/// * `cards` - Pre-rendered card markup, inserted verbatim.
///
/// # Returns
///
/// The patched document, or the input unchanged when the section marker
/// is not found.
pub fn replace_section_cards(document: &str, section_id: &str, cards: &str) -> String {
    let pattern = format!(
        r#"(?s)(<div id="{}" class="section[^"]*">.*?<div class="card-grid">).*?(</div>\s*</div>\s*</div>)"#,
        regex::escape(section_id)
    );
    let section = Regex::new(&pattern).unwrap();

    section
        .replace(document, |caps: &regex::Captures| {
            format!("{}\n{}\n{}", &caps[1], cards, &caps[2])
        })
        .into_owned()
}

/// Rewrites the first "Last Updated" line to show `today`.
///
/// # Arguments
///
/// * `document` - The full HTML document text.
/// * `today` - Today's date, already formatted as "Month D, YYYY".
///
/// # Returns
///
/// The patched document, or the input unchanged when the label is absent.
pub fn refresh_timestamp(document: &str, today: &str) -> String {
    let line = format!("Last Updated: {today}");
    LAST_UPDATED
        .replace(document, NoExpand(&line))
        .into_owned()
}
