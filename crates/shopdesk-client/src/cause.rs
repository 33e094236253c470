//! Transport failure classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Best guess at why a request never produced an HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikelyCause {
    /// The API is down, unreachable, or not configured to accept this client.
    ServerUnavailable,
    /// The console is not running from an origin the API allows.
    DisallowedOrigin,
}

impl LikelyCause {
    /// Operator-facing explanation.
    pub fn message(&self) -> &'static str {
        match self {
            Self::ServerUnavailable => {
                "the server is unreachable or misconfigured; check that the API is running and allows cross-origin requests"
            }
            Self::DisallowedOrigin => {
                "the console is not served from an allowed origin; run it from a local server or set api.client_origin"
            }
        }
    }
}

impl fmt::Display for LikelyCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Classify a failure that happened before any response was received.
///
/// Timeouts always point at the server. Otherwise the client origin decides:
/// a deployed origin (https or a render.com host) means the API side is at
/// fault, while a local or plain-http origin most likely is not allowed.
/// With no origin configured there is no cross-origin policy in play.
pub fn classify_transport_failure(origin: Option<&str>, timed_out: bool) -> LikelyCause {
    if timed_out {
        return LikelyCause::ServerUnavailable;
    }

    match origin {
        None => LikelyCause::ServerUnavailable,
        Some(origin) if is_deployed_origin(origin) => LikelyCause::ServerUnavailable,
        Some(_) => LikelyCause::DisallowedOrigin,
    }
}

fn is_deployed_origin(origin: &str) -> bool {
    let origin = origin.trim().to_ascii_lowercase();
    origin.starts_with("https://") || origin.contains("render.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_origin_is_outage() {
        assert_eq!(
            classify_transport_failure(None, false),
            LikelyCause::ServerUnavailable
        );
    }

    #[test]
    fn test_deployed_origin_blames_server() {
        assert_eq!(
            classify_transport_failure(Some("https://admin.example.com"), false),
            LikelyCause::ServerUnavailable
        );
        assert_eq!(
            classify_transport_failure(Some("http://shop.onrender.com"), false),
            LikelyCause::ServerUnavailable
        );
    }

    #[test]
    fn test_local_origin_blames_client() {
        assert_eq!(
            classify_transport_failure(Some("http://localhost:5500"), false),
            LikelyCause::DisallowedOrigin
        );
        assert_eq!(
            classify_transport_failure(Some("null"), false),
            LikelyCause::DisallowedOrigin
        );
    }

    #[test]
    fn test_timeout_blames_server() {
        assert_eq!(
            classify_transport_failure(Some("http://localhost:5500"), true),
            LikelyCause::ServerUnavailable
        );
    }
}
