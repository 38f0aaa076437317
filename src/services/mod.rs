//! Postage services
//!
//! The static service catalog and the carrier's package guidelines.

pub mod catalog;
pub mod guidelines;

pub use catalog::{
    Destination, MaxDimensions, ServiceCatalog, ServiceDefinition, ServiceType,
};
pub use guidelines::{
    cubic_weight, max_parcel_dimensions, shipping_weight, validate_package_size, ParcelLimits,
    CUBIC_WEIGHT_DENSITY,
};
