//! Error types for route resolution and configuration.

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, RouterError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Navigation kept redirecting without reaching a route that proceeds.
    #[error("Redirect loop: navigation to {path} did not settle after {hops} redirects")]
    RedirectLoop { path: String, hops: u8 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RouterError {
    fn from(err: serde_json::Error) -> Self {
        RouterError::Config(err.to_string())
    }
}
