//! Content-Type lookup by file extension.
//!
//! Anything not in the table is served as `application/octet-stream` so
//! binary assets pass through as raw bytes instead of being mislabeled
//! as text.

/// Returns the Content-Type for a file extension.
///
/// # Arguments
///
/// * `extension` - The file extension, without the dot, if the path has one.
///
/// # Returns
///
/// A static Content-Type string; `application/octet-stream` for unknown
/// or missing extensions.
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Pages and styles
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Media and documents
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("pdf") => "application/pdf",

        _ => "application/octet-stream",
    }
}
