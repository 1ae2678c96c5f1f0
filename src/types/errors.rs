use std::fmt;

// === NavError ===

/// Errors related to navigation target resolution.
///
/// This is the one failure that propagates: almost everything else in the
/// protocol degrades silently (missing fields, malformed parameters), but a
/// link `href` or reported location that cannot be resolved into a URL has no
/// meaningful fallback.
#[derive(Debug)]
pub enum NavError {
    /// The target could not be parsed or resolved against its base URL.
    InvalidTarget(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::InvalidTarget(msg) => write!(f, "Invalid navigation target: {}", msg),
        }
    }
}

impl std::error::Error for NavError {}

impl From<url::ParseError> for NavError {
    fn from(e: url::ParseError) -> Self {
        NavError::InvalidTarget(e.to_string())
    }
}
