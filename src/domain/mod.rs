//! Domain models and types
//!
//! The domain layer provides:
//! - **Measurement value types** ([`Length`], [`Weight`], [`Volume`])
//! - **Money** ([`Price`], [`RoundingMode`])
//! - **Shipment data** ([`Shipment`], [`OrderItem`], [`Address`])
//! - **Error types** ([`RateError`] and the subsystem error enums)
//! - **Result type alias** ([`Result`])

pub mod address;
pub mod errors;
pub mod money;
pub mod order;
pub mod result;
pub mod units;

// Re-export commonly used types for convenience
pub use address::{Address, PostalAddress};
pub use errors::{AssessmentError, PackingError, RateError, ServiceError};
pub use money::{Price, RoundingMode, AUD};
pub use order::{Dimensions, OrderItem, Shipment};
pub use result::Result;
pub use units::{Length, LengthUnit, Volume, VolumeUnit, Weight, WeightUnit};
