/// Path utilities for turning catch-all request paths into segments
///
/// Nothing here allocates unless the input needs fixing or decoding.

use std::borrow::Cow;

pub mod hierarchy;
pub use hierarchy::PathHierarchy;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use paperpath_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/punjab/9th"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("punjab")); // Missing leading /
/// assert!(!is_valid_path("/punjab/")); // Trailing /
/// assert!(!is_valid_path("/punjab//9th")); // Double //
/// assert!(!is_valid_path("/punjab\\9th")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already valid.
///
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
///
/// # Examples
///
/// ```
/// use paperpath_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/mdcat"), Cow::Borrowed("/mdcat")));
/// assert_eq!(normalize_path("mdcat/2023/"), "/mdcat/2023");
/// assert_eq!(normalize_path("\\o-level\\notes"), "/o-level/notes");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Splits a raw path into URL-decoded segments
///
/// Segments that are not valid percent-encoded UTF-8 are kept as written.
/// The root path yields no segments.
///
/// # Examples
///
/// ```
/// use paperpath_router::path::split_segments;
///
/// assert_eq!(split_segments("/punjab//9th/"), vec!["punjab", "9th"]);
/// assert_eq!(split_segments("/past%20papers"), vec!["past papers"]);
/// assert!(split_segments("/").is_empty());
/// ```
pub fn split_segments(path: &str) -> Vec<String> {
    normalize_path(path)
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| match urlencoding::decode(segment) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => segment.to_string(),
        })
        .collect()
}
