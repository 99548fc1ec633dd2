//! Subtitle derivation from hierarchical path strings
//!
//! A note block's `path` is a breadcrumb like
//! "Foundations of Web Technologies > Client-Side Scripting > Use Cases";
//! its subtitle is the last segment of that breadcrumb.

/// Delimiter separating path segments
pub const PATH_DELIMITER: &str = " > ";

/// Derive a subtitle from a hierarchical path string.
///
/// Returns `None` when the path is absent or empty. Otherwise splits on the
/// exact `" > "` delimiter and returns the last segment with surrounding
/// whitespace removed; a path with no delimiter yields the whole trimmed
/// string. A last segment that trims to nothing also yields `None`, so the
/// caller never sees an empty subtitle.
pub fn extract_subtitle(path: Option<&str>) -> Option<String> {
    let path = path?;
    if path.is_empty() {
        return None;
    }

    let last = path.rsplit(PATH_DELIMITER).next().unwrap_or(path);
    let trimmed = last.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
