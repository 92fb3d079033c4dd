pub mod classify;
pub mod resolve;
pub mod taxonomy;
pub mod title;

use paperpath_router::split_segments;

/// Turns command-line input into segments
///
/// A single argument containing `/` is a request path; anything else is
/// taken as one segment per argument.
pub fn segments_from_args(input: &[String]) -> Vec<String> {
    match input {
        [path] if path.contains('/') => split_segments(path),
        segments => segments.to_vec(),
    }
}
