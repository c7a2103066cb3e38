//! Error types for Foliobar core operations.
//!
//! Runtime lookups (scroll offsets, section geometry) never fail: a missing
//! element is skipped. Only configuration can be rejected.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a navigation configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The navigation has no sections at all.
    #[error("Navigation must declare at least one section")]
    NoSections,

    /// A section id cannot be used as a DOM element id.
    #[error("Invalid section id: {0:?}")]
    InvalidSectionId(String),

    /// The same section id is declared twice.
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    /// The default active section is not one of the declared sections.
    #[error("Default section is not declared: {0}")]
    UnknownDefaultSection(String),

    /// A pixel measurement is negative or not finite.
    #[error("Invalid value for {field}: {value}")]
    InvalidMeasurement {
        /// Name of the configuration field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The configuration could not be parsed.
    #[error("Failed to parse navigation config: {0}")]
    Parse(#[from] serde_json::Error),
}
