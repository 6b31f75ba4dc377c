//! HTML generation for the site's news sections.
//!
//! This module contains the submodules that turn fetched articles into the
//! markup spliced back into the static document:
//!
//! # Submodules
//!
//! - [`cards`]: Renders a list of articles as card markup for one section
//! - [`document`]: Splices card markup and the "Last Updated" line into the
//!   existing HTML document in place
//!
//! # Document Structure
//!
//! The document is never parsed as a tree. Each section is located by its
//! marker (`<div id="..." class="section...">` through
//! `<div class="card-grid">`) and everything between that marker and the
//! section's closing tags is replaced wholesale:
//!
//! ```text
//! <div id="us" class="section">
//!   <div class="container">
//!     <h2>...</h2>
//!     <div class="card-grid">
//!       <article class="news-card">...</article>   <- replaced
//!     </div>
//!   </div>
//! </div>
//! ```

pub mod cards;
pub mod document;
