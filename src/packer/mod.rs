//! Shipment packing
//!
//! A generic 3D bin-packing solver plus the adapters that feed it order
//! items and configured package types.

pub mod boxpacker;
pub mod shipment;

pub use boxpacker::{PackBox, PackItem, Packed, Packer};
pub use shipment::{PackageType, PackedBox, ShipmentPacker};
