//! Error types for app-mount.

use thiserror::Error;

/// Result type for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Errors that can occur while bootstrapping an application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// An application has already been mounted through this guard.
    #[error("Application is already mounted")]
    AlreadyMounted,

    /// No element matches the anchor selector.
    #[error("Mount anchor '{0}' not found in document")]
    AnchorNotFound(String),

    /// More than one element matches the anchor selector.
    #[error("Mount anchor '{selector}' is not unique: {count} elements match")]
    AnchorNotUnique {
        /// Selector that was queried.
        selector: String,
        /// Number of matching elements.
        count: usize,
    },

    /// The only match for the anchor selector cannot host an application,
    /// e.g. an SVG element.
    #[error("Mount anchor '{0}' is not an HTML element")]
    AnchorNotMountable(String),

    /// The anchor selector is not a plain `#id` selector.
    #[error("Invalid anchor selector: {0}")]
    InvalidSelector(String),

    /// A stylesheet id is not a plain identifier.
    #[error("Invalid stylesheet: {0}")]
    InvalidStylesheet(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host document rejected an operation.
    #[error("Host error: {0}")]
    Host(String),
}

impl From<serde_json::Error> for BootstrapError {
    fn from(err: serde_json::Error) -> Self {
        BootstrapError::Config(err.to_string())
    }
}

impl BootstrapError {
    /// Whether the error concerns the mount anchor rather than the
    /// environment or configuration.
    pub fn is_anchor_error(&self) -> bool {
        matches!(
            self,
            BootstrapError::AnchorNotFound(_)
                | BootstrapError::AnchorNotUnique { .. }
                | BootstrapError::AnchorNotMountable(_)
        )
    }
}
