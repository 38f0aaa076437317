//! Shipment packing
//!
//! Adapts order items and configured package types into the generic packer
//! and normalises its output into [`PackedBox`] values the rate pipeline
//! consumes. All conversions round up: the solver only deals in whole
//! millimetres and grams.

use crate::domain::errors::PackingError;
use crate::domain::order::OrderItem;
use crate::domain::units::{Length, LengthUnit, Volume, VolumeUnit, Weight, WeightUnit};
use crate::packer::boxpacker::{PackBox, PackItem, Packed, Packer};
use crate::services::catalog::Destination;
use crate::services::guidelines;
use serde::{Deserialize, Serialize};

/// A configured box the store packs shipments into.
///
/// Dimensions are inner dimensions; the weight is the empty (tare) weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageType {
    pub label: String,
    pub length: Length,
    pub width: Length,
    pub height: Length,
    pub weight: Weight,
}

/// One physical box after packing.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedBox {
    reference: String,
    weight: Weight,
    length: Length,
    width: Length,
    height: Length,
    volume: Volume,
    items: Vec<String>,
    remaining_weight: Weight,
    utilization: f64,
}

impl PackedBox {
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Gross weight, box included.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn width(&self) -> Length {
        self.width
    }

    pub fn height(&self) -> Length {
        self.height
    }

    /// Inner volume of the box.
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Descriptions of the items placed in this box.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn remaining_weight(&self) -> Weight {
        self.remaining_weight
    }

    /// Item volume over box volume, as a percentage.
    pub fn utilization(&self) -> f64 {
        self.utilization
    }
}

/// Packs one shipment's items into boxes valid for a destination.
#[derive(Debug)]
pub struct ShipmentPacker {
    destination: Destination,
    packer: Packer,
}

impl ShipmentPacker {
    pub fn new(destination: Destination) -> Self {
        Self {
            destination,
            packer: Packer::new(),
        }
    }

    /// Admits a candidate package type.
    ///
    /// The type must pass the carrier guidelines for this packer's
    /// destination; failures are returned for the caller to log and skip.
    pub fn add_package_type(&mut self, package_type: &PackageType) -> Result<(), PackingError> {
        guidelines::validate_package_size(
            &package_type.length,
            &package_type.width,
            &package_type.height,
            self.destination,
        )
        .map_err(|e| PackingError::InvalidPackageType {
            label: package_type.label.clone(),
            reason: e.to_string(),
        })?;

        let max_weight = guidelines::max_parcel_dimensions(self.destination)
            .weight
            .convert(WeightUnit::Gram)
            .number()
            .ceil() as u64;

        self.packer.add_box(PackBox {
            reference: package_type.label.clone(),
            inner_width: ceil_mm(&package_type.width),
            inner_length: ceil_mm(&package_type.length),
            inner_depth: ceil_mm(&package_type.height),
            empty_weight: ceil_g(&package_type.weight),
            max_weight,
        });
        Ok(())
    }

    /// Admits one unit of an order item.
    ///
    /// Call once per unit; quantity expansion is the caller's concern.
    /// Missing weight or dimensions default to zero.
    pub fn add_order_item(&mut self, item: &OrderItem) {
        let (width, length, depth, volume) = match &item.dimensions {
            Some(dimensions) => {
                let raw_volume = Volume::from_dimensions(
                    &dimensions.length,
                    &dimensions.width,
                    &dimensions.height,
                );
                (
                    ceil_mm(&dimensions.width),
                    ceil_mm(&dimensions.length),
                    ceil_mm(&dimensions.height),
                    raw_volume.number().ceil() as u64,
                )
            }
            None => (0, 0, 0, 0),
        };

        let weight = item.weight.as_ref().map_or(0, ceil_g);

        self.packer.add_item(PackItem {
            description: item.title.clone(),
            width,
            length,
            depth,
            weight,
            volume,
        });
    }

    /// Runs the packing and normalises the result.
    pub fn pack(self) -> Result<Vec<PackedBox>, PackingError> {
        let packed = self.packer.pack()?;
        Ok(packed.into_iter().map(normalize).collect())
    }
}

fn normalize(packed: Packed) -> PackedBox {
    let box_spec = &packed.box_spec;
    let box_volume = box_spec.inner_volume();
    let utilization = if box_volume > 0 {
        packed.items_volume() as f64 / box_volume as f64 * 100.0
    } else {
        0.0
    };
    let gross_weight = packed.gross_weight();

    PackedBox {
        reference: box_spec.reference.clone(),
        weight: Weight::new(gross_weight as f64, WeightUnit::Gram),
        length: Length::new(box_spec.inner_length as f64, LengthUnit::Millimeter),
        width: Length::new(box_spec.inner_width as f64, LengthUnit::Millimeter),
        height: Length::new(box_spec.inner_depth as f64, LengthUnit::Millimeter),
        volume: Volume::new(box_volume as f64, VolumeUnit::CubicMillimeter),
        items: packed
            .items
            .iter()
            .map(|item| item.description.clone())
            .collect(),
        remaining_weight: Weight::new(
            box_spec.max_weight.saturating_sub(gross_weight) as f64,
            WeightUnit::Gram,
        ),
        utilization,
    }
}

fn ceil_mm(length: &Length) -> u64 {
    length.convert(LengthUnit::Millimeter).number().ceil() as u64
}

fn ceil_g(weight: &Weight) -> u64 {
    weight.convert(WeightUnit::Gram).number().ceil() as u64
}
