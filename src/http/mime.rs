//! Content type inference from file extensions.

/// Served when the extension is missing or unknown.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

const CONTENT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("txt", "text/plain"),
];

/// Returns the MIME type for a resolved file path.
///
/// The extension is everything after the last `.` in the whole path,
/// compared case-insensitively.
///
/// ```
/// # use docroot::http::mime::content_type_for;
/// assert_eq!(content_type_for("./www/style.CSS"), "text/css");
/// assert_eq!(content_type_for("./www/noext"), "text/plain");
/// ```
pub fn content_type_for(path: &str) -> &'static str {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return DEFAULT_CONTENT_TYPE;
    };
    let ext = ext.to_ascii_lowercase();

    CONTENT_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
