//! Display helpers for document URIs

use url::Url;

/// Short form of `uri` for list details: `parent/basename`.
///
/// Falls back to the raw string when it does not parse or has no path.
pub fn compact_uri(uri: &str) -> String {
    let Ok(url) = Url::parse(uri) else {
        return uri.to_string();
    };

    let segments: Vec<&str> = match url.path_segments() {
        Some(segments) => segments.filter(|s| !s.is_empty()).collect(),
        None => return uri.to_string(),
    };

    match segments.as_slice() {
        [] => uri.to_string(),
        [name] => (*name).to_string(),
        [.., parent, name] => format!("{}/{}", parent, name),
    }
}
