//! Error type shared by the core and the browser front-end.

use thiserror::Error;

/// Everything that can go wrong while assembling or animating the page.
///
/// The type is `Clone` because image loads are shared futures: every waiter
/// on the same path receives its own copy of the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FestError {
    /// Navigation target rejected before any DOM lookup.
    #[error("invalid section anchor `{0}`: only letters, digits, `-` and `_` are allowed")]
    InvalidAnchor(String),

    /// Asset path that cannot be resolved under the base URL.
    #[error("invalid asset path `{0}`")]
    InvalidAssetPath(String),

    /// The browser reported an error while decoding an image.
    #[error("failed to load image `{path}`")]
    ImageLoad {
        /// Fully resolved path that failed.
        path: String,
    },

    /// A cube frame failed in the compact and in the fallback format.
    #[error("frame {index} could not be loaded in any format")]
    FrameExhausted {
        /// Frame index within the sequence.
        index: usize,
    },

    /// Malformed or inconsistent site configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A browser API needed by a widget is missing.
    #[error("browser API unavailable: {0}")]
    Unavailable(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FestError>;

impl From<serde_json::Error> for FestError {
    fn from(err: serde_json::Error) -> Self {
        FestError::Config(err.to_string())
    }
}
