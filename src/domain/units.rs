//! Physical measurement value types
//!
//! Unit-aware wrappers for the lengths, weights and volumes that flow through
//! packing and rate requests. Conversions between the metric units used here
//! are exact powers of ten.

use serde::{Deserialize, Serialize};

/// Supported length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
}

impl LengthUnit {
    fn millimeters(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 1.0,
            LengthUnit::Centimeter => 10.0,
            LengthUnit::Meter => 1000.0,
        }
    }
}

/// Supported weight units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
}

impl WeightUnit {
    fn grams(self) -> f64 {
        match self {
            WeightUnit::Gram => 1.0,
            WeightUnit::Kilogram => 1000.0,
        }
    }
}

/// Supported volume units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[serde(rename = "mm3")]
    CubicMillimeter,
    #[serde(rename = "cm3")]
    CubicCentimeter,
    #[serde(rename = "m3")]
    CubicMeter,
}

impl VolumeUnit {
    fn cubic_millimeters(self) -> f64 {
        match self {
            VolumeUnit::CubicMillimeter => 1.0,
            VolumeUnit::CubicCentimeter => 1_000.0,
            VolumeUnit::CubicMeter => 1_000_000_000.0,
        }
    }
}

/// A length with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    number: f64,
    unit: LengthUnit,
}

impl Length {
    pub fn new(number: f64, unit: LengthUnit) -> Self {
        Self { number, unit }
    }

    /// The numeric value in the current unit.
    pub fn number(&self) -> f64 {
        self.number
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Converts to another unit.
    pub fn convert(&self, unit: LengthUnit) -> Length {
        let millimeters = self.number * self.unit.millimeters();
        Length::new(millimeters / unit.millimeters(), unit)
    }
}

/// A weight with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    number: f64,
    unit: WeightUnit,
}

impl Weight {
    pub fn new(number: f64, unit: WeightUnit) -> Self {
        Self { number, unit }
    }

    pub fn number(&self) -> f64 {
        self.number
    }

    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    pub fn convert(&self, unit: WeightUnit) -> Weight {
        let grams = self.number * self.unit.grams();
        Weight::new(grams / unit.grams(), unit)
    }
}

/// A volume with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    number: f64,
    unit: VolumeUnit,
}

impl Volume {
    pub fn new(number: f64, unit: VolumeUnit) -> Self {
        Self { number, unit }
    }

    /// Volume of a cuboid from its three edges.
    pub fn from_dimensions(length: &Length, width: &Length, height: &Length) -> Volume {
        let product = length.convert(LengthUnit::Millimeter).number()
            * width.convert(LengthUnit::Millimeter).number()
            * height.convert(LengthUnit::Millimeter).number();
        Volume::new(product, VolumeUnit::CubicMillimeter)
    }

    pub fn number(&self) -> f64 {
        self.number
    }

    pub fn unit(&self) -> VolumeUnit {
        self.unit
    }

    pub fn convert(&self, unit: VolumeUnit) -> Volume {
        let cubic_millimeters = self.number * self.unit.cubic_millimeters();
        Volume::new(cubic_millimeters / unit.cubic_millimeters(), unit)
    }
}
