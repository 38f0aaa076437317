//! Package guidelines
//!
//! Australia Post's physical limits for parcels, and the weight-by-volume
//! equivalence the carrier charges bulky, low-density parcels at.
//!
//! See <https://auspost.com.au/parcels-mail/postage-tips-guides/size-weight-guidelines>

use crate::domain::errors::ServiceError;
use crate::domain::units::{Length, LengthUnit, Volume, VolumeUnit, Weight, WeightUnit};
use crate::services::catalog::Destination;

/// The density (kg per cubic metre) AusPost uses to calculate cubic weight.
pub const CUBIC_WEIGHT_DENSITY: f64 = 250.0;

/// Cubic weight only ever replaces an actual weight above this floor.
const CUBIC_WEIGHT_FLOOR_KG: f64 = 1.0;

/// Maximum parcel dimensions for one destination.
///
/// Domestic parcels are bounded by volume, international ones by girth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParcelLimits {
    pub length: Length,
    pub weight: Weight,
    pub volume: Option<Volume>,
    pub girth: Option<Length>,
}

/// Maximum package dimensions supported by AusPost for a destination.
pub fn max_parcel_dimensions(destination: Destination) -> ParcelLimits {
    match destination {
        Destination::Domestic => ParcelLimits {
            length: Length::new(105.0, LengthUnit::Centimeter),
            weight: Weight::new(22.0, WeightUnit::Kilogram),
            volume: Some(Volume::new(0.25, VolumeUnit::CubicMeter)),
            girth: None,
        },
        Destination::International => ParcelLimits {
            length: Length::new(105.0, LengthUnit::Centimeter),
            weight: Weight::new(20.0, WeightUnit::Kilogram),
            volume: None,
            girth: Some(Length::new(140.0, LengthUnit::Centimeter)),
        },
    }
}

/// The volumetric-equivalent weight of a parcel.
pub fn cubic_weight(volume: &Volume) -> Weight {
    let cubic_meters = volume.convert(VolumeUnit::CubicMeter).number();
    Weight::new(cubic_meters * CUBIC_WEIGHT_DENSITY, WeightUnit::Kilogram)
}

/// The weight a parcel is charged at.
///
/// Cubic weight applies only when the parcel already weighs more than 1kg and
/// its cubic weight exceeds the actual weight; small, light parcels are always
/// charged at actual weight.
pub fn shipping_weight(volume: &Volume, actual: &Weight) -> Weight {
    let actual_kg = actual.convert(WeightUnit::Kilogram);
    let cubic = cubic_weight(volume);

    if actual_kg.number() > CUBIC_WEIGHT_FLOOR_KG && cubic.number() > actual_kg.number() {
        cubic
    } else {
        actual_kg
    }
}

/// Confirms a package meets AusPost's size guidelines for the destination.
///
/// Every edge is checked against the maximum length. Domestic parcels are
/// additionally bounded by total volume and by the cubic weight of that
/// volume; international parcels by the girth of every edge pair.
pub fn validate_package_size(
    length: &Length,
    width: &Length,
    height: &Length,
    destination: Destination,
) -> Result<(), ServiceError> {
    let limits = max_parcel_dimensions(destination);
    let max_length_mm = limits.length.convert(LengthUnit::Millimeter).number();

    let edges = [("length", length), ("width", width), ("height", height)];
    for (name, edge) in edges {
        let edge_mm = edge.convert(LengthUnit::Millimeter).number();
        if edge_mm > max_length_mm {
            return Err(ServiceError::PackageSize(format!(
                "{name} of {edge_mm:.0}mm exceeds the maximum of {max_length_mm:.0}mm \
                 for {destination} parcels"
            )));
        }
    }

    match destination {
        Destination::Domestic => {
            let volume = Volume::from_dimensions(length, width, height);

            if let Some(max_volume) = limits.volume {
                let volume_m3 = volume.convert(VolumeUnit::CubicMeter).number();
                let max_m3 = max_volume.convert(VolumeUnit::CubicMeter).number();
                if volume_m3 > max_m3 {
                    return Err(ServiceError::PackageSize(format!(
                        "volume of {volume_m3:.3}m3 exceeds the maximum of {max_m3:.2}m3 \
                         for domestic parcels"
                    )));
                }
            }

            let cubic = cubic_weight(&volume);
            let max_kg = limits.weight.convert(WeightUnit::Kilogram).number();
            if cubic.number() > max_kg {
                return Err(ServiceError::PackageSize(format!(
                    "cubic weight of {:.1}kg exceeds the maximum of {max_kg:.0}kg \
                     for domestic parcels",
                    cubic.number()
                )));
            }
        }
        Destination::International => {
            if let Some(max_girth) = limits.girth {
                let max_girth_mm = max_girth.convert(LengthUnit::Millimeter).number();
                let pairs = [(length, width), (length, height), (width, height)];
                for (a, b) in pairs {
                    let girth_mm = (a.convert(LengthUnit::Millimeter).number()
                        + b.convert(LengthUnit::Millimeter).number())
                        * 2.0;
                    if girth_mm > max_girth_mm {
                        return Err(ServiceError::PackageSize(format!(
                            "girth of {girth_mm:.0}mm exceeds the maximum of \
                             {max_girth_mm:.0}mm for international parcels"
                        )));
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn cm(value: f64) -> Length {
        Length::new(value, LengthUnit::Centimeter)
    }

    #[test]
    fn test_cubic_weight_formula() {
        let volume = Volume::new(0.01, VolumeUnit::CubicMeter);
        let weight = cubic_weight(&volume);
        assert_eq!(weight.number(), 2.5);
        assert_eq!(weight.unit(), WeightUnit::Kilogram);
    }

    #[test_case(0.5, 5.0, 0.5 ; "light parcels never charged at cubic weight")]
    #[test_case(2.0, 5.0, 5.0 ; "cubic weight replaces heavier actual weight")]
    #[test_case(6.0, 5.0, 6.0 ; "actual weight wins when it exceeds cubic")]
    fn test_shipping_weight_selection(actual_kg: f64, cubic_kg: f64, expected_kg: f64) {
        // A volume whose cubic weight is exactly cubic_kg.
        let volume = Volume::new(cubic_kg / CUBIC_WEIGHT_DENSITY, VolumeUnit::CubicMeter);
        let actual = Weight::new(actual_kg, WeightUnit::Kilogram);
        assert_eq!(shipping_weight(&volume, &actual).number(), expected_kg);
    }

    #[test]
    fn test_max_length_rejected_for_both_destinations() {
        for destination in [Destination::Domestic, Destination::International] {
            let result = validate_package_size(&cm(110.0), &cm(10.0), &cm(10.0), destination);
            assert!(result.is_err(), "110cm edge must fail for {destination}");
        }
    }

    #[test]
    fn test_domestic_volume_limit() {
        // 100 x 60 x 50cm = 0.3m3, over the 0.25m3 cap.
        let err =
            validate_package_size(&cm(100.0), &cm(60.0), &cm(50.0), Destination::Domestic)
                .unwrap_err();
        assert!(err.to_string().contains("volume"));
    }

    #[test]
    fn test_domestic_cubic_weight_limit() {
        // 100 x 50 x 20cm = 0.1m3: under the volume cap, but 25kg cubic
        // weight is over the 22kg cap.
        let err =
            validate_package_size(&cm(100.0), &cm(50.0), &cm(20.0), Destination::Domestic)
                .unwrap_err();
        assert!(err.to_string().contains("cubic weight"));
    }

    #[test]
    fn test_international_girth_limit() {
        // (40 + 40) * 2 = 160cm girth, over the 140cm cap; edges all legal.
        let err = validate_package_size(
            &cm(40.0),
            &cm(40.0),
            &cm(10.0),
            Destination::International,
        )
        .unwrap_err();
        assert!(err.to_string().contains("girth"));
    }

    #[test]
    fn test_girth_boundary_is_inclusive() {
        // (40 + 30) * 2 = 140cm exactly; only exceeding the cap fails.
        assert!(validate_package_size(
            &cm(40.0),
            &cm(30.0),
            &cm(20.0),
            Destination::International
        )
        .is_ok());
    }

    #[test]
    fn test_ordinary_box_passes() {
        assert!(
            validate_package_size(&cm(30.0), &cm(30.0), &cm(30.0), Destination::Domestic).is_ok()
        );
    }
}
