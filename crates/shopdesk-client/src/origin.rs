//! Cross-origin acceptance check.

use reqwest::header::{ACCESS_CONTROL_ALLOW_ORIGIN, HeaderMap};

/// Whether the response headers admit requests from `origin`.
///
/// Accepts an exact (case-insensitive, trailing-slash tolerant) match or
/// the `*` wildcard.
pub fn origin_allowed(headers: &HeaderMap, origin: &str) -> bool {
    let Some(allowed) = headers
        .get(ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let allowed = allowed.trim();
    allowed == "*"
        || allowed
            .trim_end_matches('/')
            .eq_ignore_ascii_case(origin.trim().trim_end_matches('/'))
}
