//! Domain error types
//!
//! The error hierarchy for the rate engine. All errors are domain-specific
//! and don't expose third-party types.

use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the crate. It wraps the
/// subsystem-specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum RateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Service catalog and guideline errors
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Shipment packing errors
    #[error("Packing error: {0}")]
    Packing(#[from] PackingError),

    /// Postage assessment (carrier API) errors
    #[error("Postage assessment error: {0}")]
    Assessment(#[from] AssessmentError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Service catalog and package guideline errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested service key is not in the catalog
    #[error("Requested service '{0}' does not exist")]
    UnknownService(String),

    /// A package fails the carrier's size guidelines
    #[error("Package exceeds Australia Post's size guidelines: {0}")]
    PackageSize(String),
}

/// Shipment packing errors
#[derive(Debug, Error)]
pub enum PackingError {
    /// No candidate box can hold the item in any orientation
    #[error("Item '{item}' is too large for every available package type")]
    ItemTooLarge { item: String },

    /// A package type failed guideline validation at admission time
    #[error("Invalid package type '{label}': {reason}")]
    InvalidPackageType { label: String, reason: String },
}

/// Carrier API errors
///
/// Errors that occur when building requests for or talking to the AusPost
/// Postage Assessment Calculator API. These don't expose HTTP client types.
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// Empty or missing API key
    #[error("No AusPost PAC API key provided, please set one")]
    MissingApiKey,

    /// A required request field was not supplied to the builder
    #[error("Required request field '{0}' is not set")]
    FieldNotSet(&'static str),

    /// The shipment has no recipient address to classify
    #[error("Package destination could not be determined")]
    DestinationUndetermined,

    /// Failed to reach the carrier API
    #[error("Failed to connect to the AusPost API: {0}")]
    ConnectionFailed(String),

    /// Non-success HTTP status from the carrier
    #[error("AusPost API error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// The carrier reply is missing expected fields
    #[error("Invalid AusPost API response: {0}")]
    InvalidResponse(String),

    /// The carrier call exceeded the configured timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for RateError {
    fn from(err: std::io::Error) -> Self {
        RateError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RateError {
    fn from(err: serde_json::Error) -> Self {
        RateError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RateError {
    fn from(err: toml::de::Error) -> Self {
        RateError::Configuration(format!("TOML parse error: {err}"))
    }
}
