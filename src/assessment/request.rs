//! Carrier API requests
//!
//! One request is built per (service, packed box) pair. The builder validates
//! every required field at `build` time, so an incomplete request fails
//! before any network activity, and the built [`RateRequest`] is immutable.

use crate::domain::address::Address;
use crate::domain::errors::AssessmentError;
use crate::domain::money::Price;
use crate::domain::units::{LengthUnit, WeightUnit};
use crate::packer::shipment::PackedBox;
use crate::services::catalog::{ServiceDefinition, ServiceType};
use crate::services::guidelines;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Wire name for the sub-option code; the catalog's internal key differs.
const SUBOPTION_KEY: &str = "suboption_code";
const OPTION_KEY: &str = "option_code";

/// Insurance settings for a rate calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsuranceOptions {
    pub enabled: bool,
    /// Fraction of the order total to cover, e.g. 0.01 for 1%.
    pub percentage: Decimal,
    /// Clamp the cover amount to the service's extra-cover cap.
    pub cap_to_limit: bool,
}

impl InsuranceOptions {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            percentage: Decimal::ZERO,
            cap_to_limit: true,
        }
    }
}

/// Package dimensions in the form the PAC API takes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestDimensions {
    /// Whole centimetres, rounded up.
    pub length: u32,
    pub width: u32,
    pub height: u32,
    /// Chargeable weight in kilograms.
    pub weight: f64,
}

/// Builder for [`RateRequest`]; every field is required.
#[derive(Debug, Default)]
pub struct RateRequestBuilder {
    package_type: Option<ServiceType>,
    address: Option<Address>,
    packed_box: Option<PackedBox>,
    service_definition: Option<&'static ServiceDefinition>,
    order_total: Option<Price>,
    insurance: Option<InsuranceOptions>,
}

impl RateRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package_type(mut self, package_type: ServiceType) -> Self {
        self.package_type = Some(package_type);
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn packed_box(mut self, packed_box: PackedBox) -> Self {
        self.packed_box = Some(packed_box);
        self
    }

    pub fn service_definition(mut self, definition: &'static ServiceDefinition) -> Self {
        self.service_definition = Some(definition);
        self
    }

    pub fn order_total(mut self, order_total: Price) -> Self {
        self.order_total = Some(order_total);
        self
    }

    pub fn insurance(mut self, insurance: InsuranceOptions) -> Self {
        self.insurance = Some(insurance);
        self
    }

    /// Validates and builds the request.
    ///
    /// Fails with [`AssessmentError::FieldNotSet`] naming the first missing
    /// field.
    pub fn build(self) -> Result<RateRequest, AssessmentError> {
        Ok(RateRequest {
            package_type: self
                .package_type
                .ok_or(AssessmentError::FieldNotSet("package_type"))?,
            address: self.address.ok_or(AssessmentError::FieldNotSet("address"))?,
            packed_box: self
                .packed_box
                .ok_or(AssessmentError::FieldNotSet("packed_box"))?,
            service_definition: self
                .service_definition
                .ok_or(AssessmentError::FieldNotSet("service_definition"))?,
            order_total: self
                .order_total
                .ok_or(AssessmentError::FieldNotSet("order_total"))?,
            insurance: self
                .insurance
                .ok_or(AssessmentError::FieldNotSet("insurance_options"))?,
        })
    }
}

/// A fully-populated postage assessment request.
#[derive(Debug, Clone)]
pub struct RateRequest {
    package_type: ServiceType,
    address: Address,
    packed_box: PackedBox,
    service_definition: &'static ServiceDefinition,
    order_total: Price,
    insurance: InsuranceOptions,
}

impl RateRequest {
    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn packed_box(&self) -> &PackedBox {
        &self.packed_box
    }

    pub fn service_definition(&self) -> &'static ServiceDefinition {
        self.service_definition
    }

    pub fn service_code(&self) -> &'static str {
        self.service_definition.service_code
    }

    /// Whether the shipment stays within the store's country.
    pub fn is_domestic(&self) -> Result<bool, AssessmentError> {
        self.address
            .is_domestic()
            .ok_or(AssessmentError::DestinationUndetermined)
    }

    pub fn is_parcel(&self) -> bool {
        self.package_type == ServiceType::Parcel
    }

    /// The packed box in API units: whole centimetres and the chargeable
    /// weight (actual or cubic, whichever the guidelines pick) in kilograms.
    pub fn dimensions(&self) -> RequestDimensions {
        let actual = self.packed_box.weight().convert(WeightUnit::Kilogram);
        let chargeable = guidelines::shipping_weight(&self.packed_box.volume(), &actual);

        RequestDimensions {
            length: ceil_cm(self.packed_box.length().convert(LengthUnit::Centimeter).number()),
            width: ceil_cm(self.packed_box.width().convert(LengthUnit::Centimeter).number()),
            height: ceil_cm(self.packed_box.height().convert(LengthUnit::Centimeter).number()),
            weight: chargeable.convert(WeightUnit::Kilogram).number(),
        }
    }

    /// Option and sub-option codes under their wire names, empties omitted.
    pub fn extra_service_options(&self) -> Vec<(&'static str, &'static str)> {
        let mut extra = Vec::with_capacity(2);
        if let Some(option_code) = self.service_definition.option_code {
            extra.push((OPTION_KEY, option_code));
        }
        if let Some(sub_option_code) = self.service_definition.sub_option_code {
            extra.push((SUBOPTION_KEY, sub_option_code));
        }
        extra
    }

    /// The extra cover to request, in whole dollars.
    ///
    /// Zero when the service has no extra-cover cap or insurance is off.
    /// Otherwise a percentage of the order total, clamped to the service cap
    /// when limiting is enabled, rounded up to the next whole dollar.
    pub fn insurance_amount(&self) -> u64 {
        let max_extra_cover = self.service_definition.extra_cover;
        if max_extra_cover == 0 {
            return 0;
        }
        if !self.insurance.enabled {
            return 0;
        }

        let mut amount = self.order_total.amount() * self.insurance.percentage;

        if self.insurance.cap_to_limit {
            let max = Decimal::from(max_extra_cover);
            if amount > max {
                amount = max;
            }
        }

        amount.ceil().to_u64().unwrap_or(0)
    }
}

fn ceil_cm(value: f64) -> u32 {
    value.ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::PostalAddress;
    use crate::domain::money::AUD;
    use crate::domain::order::{Dimensions, OrderItem, Shipment};
    use crate::domain::units::{Length, Weight};
    use crate::services::catalog::{Destination, ServiceCatalog};
    use crate::packer::shipment::{PackageType, ShipmentPacker};
    use rust_decimal_macros::dec;

    fn packed_box(edge_cm: f64, item_weight_kg: f64) -> PackedBox {
        let mut packer = ShipmentPacker::new(Destination::Domestic);
        packer
            .add_package_type(&PackageType {
                label: "box".to_string(),
                length: Length::new(edge_cm, LengthUnit::Centimeter),
                width: Length::new(edge_cm, LengthUnit::Centimeter),
                height: Length::new(edge_cm, LengthUnit::Centimeter),
                weight: Weight::new(0.0, WeightUnit::Gram),
            })
            .unwrap();
        packer.add_order_item(&OrderItem {
            title: "Item".to_string(),
            quantity: 1,
            weight: Some(Weight::new(item_weight_kg, WeightUnit::Kilogram)),
            dimensions: Some(Dimensions {
                length: Length::new(10.0, LengthUnit::Centimeter),
                width: Length::new(10.0, LengthUnit::Centimeter),
                height: Length::new(10.0, LengthUnit::Centimeter),
            }),
            unit_price: None,
        });
        packer.pack().unwrap().remove(0)
    }

    fn domestic_address() -> Address {
        Address::from_shipment(&Shipment {
            store_address: PostalAddress {
                postal_code: "3000".to_string(),
                country_code: "AU".to_string(),
            },
            shipping_address: Some(PostalAddress {
                postal_code: "2000".to_string(),
                country_code: "AU".to_string(),
            }),
            items: Vec::new(),
            order_total: Price::zero(AUD),
        })
    }

    fn builder(service_id: &str, order_total: Decimal) -> RateRequestBuilder {
        let definition = ServiceCatalog::get(service_id).unwrap();
        RateRequestBuilder::new()
            .package_type(definition.service_type)
            .address(domestic_address())
            .packed_box(packed_box(30.0, 1.0))
            .service_definition(definition)
            .order_total(Price::new(order_total, AUD))
    }

    #[test]
    fn test_missing_field_named() {
        let err = RateRequestBuilder::new().build().unwrap_err();
        assert!(matches!(err, AssessmentError::FieldNotSet("package_type")));

        let err = RateRequestBuilder::new()
            .package_type(ServiceType::Parcel)
            .build()
            .unwrap_err();
        assert!(matches!(err, AssessmentError::FieldNotSet("address")));
    }

    #[test]
    fn test_insurance_options_required() {
        let err = builder("AUS_SERVICE_OPTION_INS", dec!(100))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::FieldNotSet("insurance_options")
        ));
    }

    #[test]
    fn test_dimensions_use_shipping_weight() {
        let definition = ServiceCatalog::get("AUS_SERVICE_OPTION_STANDARD").unwrap();
        let request = RateRequestBuilder::new()
            .package_type(definition.service_type)
            .address(domestic_address())
            .packed_box(packed_box(30.0, 1.2))
            .service_definition(definition)
            .order_total(Price::new(dec!(100), AUD))
            .insurance(InsuranceOptions::disabled())
            .build()
            .unwrap();

        let dimensions = request.dimensions();
        assert_eq!(dimensions.length, 30);
        assert_eq!(dimensions.width, 30);
        assert_eq!(dimensions.height, 30);
        // 30cm cube = 0.027m3 -> 6.75kg cubic weight, above the 1.2kg actual.
        assert!((dimensions.weight - 6.75).abs() < 1e-9);
    }

    #[test]
    fn test_light_parcel_keeps_actual_weight() {
        let definition = ServiceCatalog::get("AUS_SERVICE_OPTION_STANDARD").unwrap();
        let request = RateRequestBuilder::new()
            .package_type(definition.service_type)
            .address(domestic_address())
            .packed_box(packed_box(30.0, 0.5))
            .service_definition(definition)
            .order_total(Price::new(dec!(50), AUD))
            .insurance(InsuranceOptions::disabled())
            .build()
            .unwrap();

        // Under the 1kg floor, cubic weight never applies.
        assert!((request.dimensions().weight - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_extra_service_options_key_translation() {
        let request = builder("AUS_SERVICE_OPTION_INS", dec!(100))
            .insurance(InsuranceOptions::disabled())
            .build()
            .unwrap();

        let options = request.extra_service_options();
        assert_eq!(
            options,
            vec![
                ("option_code", "AUS_SERVICE_OPTION_STANDARD"),
                ("suboption_code", "AUS_SERVICE_OPTION_EXTRA_COVER"),
            ]
        );
    }

    #[test]
    fn test_options_omitted_when_absent() {
        let request = builder("INT_PARCEL_AIR_OWN_PACKAGING", dec!(100))
            .insurance(InsuranceOptions::disabled())
            .build()
            .unwrap();
        assert!(request.extra_service_options().is_empty());
    }

    #[test]
    fn test_insurance_zero_when_service_has_no_cover() {
        let request = builder("AUS_SERVICE_OPTION_STANDARD", dec!(10_000))
            .insurance(InsuranceOptions {
                enabled: true,
                percentage: dec!(0.01),
                cap_to_limit: true,
            })
            .build()
            .unwrap();
        assert_eq!(request.insurance_amount(), 0);
    }

    #[test]
    fn test_insurance_zero_when_disabled() {
        let request = builder("AUS_SERVICE_OPTION_INS", dec!(10_000))
            .insurance(InsuranceOptions::disabled())
            .build()
            .unwrap();
        assert_eq!(request.insurance_amount(), 0);
    }

    #[test]
    fn test_insurance_under_cap() {
        // $10,000 x 1% = $100, under the $300 cap.
        let request = builder("AUS_SERVICE_OPTION_INS", dec!(10_000))
            .insurance(InsuranceOptions {
                enabled: true,
                percentage: dec!(0.01),
                cap_to_limit: true,
            })
            .build()
            .unwrap();
        assert_eq!(request.insurance_amount(), 100);
    }

    #[test]
    fn test_insurance_clamped_to_cap() {
        // $10,000 x 50% = $5,000, clamped to the $300 cap.
        let request = builder("AUS_SERVICE_OPTION_INS", dec!(10_000))
            .insurance(InsuranceOptions {
                enabled: true,
                percentage: dec!(0.5),
                cap_to_limit: true,
            })
            .build()
            .unwrap();
        assert_eq!(request.insurance_amount(), 300);
    }

    #[test]
    fn test_insurance_uncapped_when_limit_off() {
        let request = builder("AUS_SERVICE_OPTION_INS", dec!(10_000))
            .insurance(InsuranceOptions {
                enabled: true,
                percentage: dec!(0.5),
                cap_to_limit: false,
            })
            .build()
            .unwrap();
        assert_eq!(request.insurance_amount(), 5_000);
    }

    #[test]
    fn test_insurance_rounds_up_to_whole_dollars() {
        // $123.45 x 10% = $12.345 -> $13.
        let request = builder("AUS_SERVICE_OPTION_INS", dec!(123.45))
            .insurance(InsuranceOptions {
                enabled: true,
                percentage: dec!(0.1),
                cap_to_limit: true,
            })
            .build()
            .unwrap();
        assert_eq!(request.insurance_amount(), 13);
    }

    #[test]
    fn test_is_domestic_and_is_parcel() {
        let request = builder("AUS_SERVICE_OPTION_STANDARD", dec!(100))
            .insurance(InsuranceOptions::disabled())
            .build()
            .unwrap();
        assert!(request.is_domestic().unwrap());
        assert!(request.is_parcel());
    }

    #[test]
    fn test_destination_undetermined_without_recipient() {
        let definition = ServiceCatalog::get("AUS_SERVICE_OPTION_STANDARD").unwrap();
        let empty_address = Address::from_shipment(&Shipment {
            store_address: PostalAddress {
                postal_code: "3000".to_string(),
                country_code: "AU".to_string(),
            },
            shipping_address: None,
            items: Vec::new(),
            order_total: Price::zero(AUD),
        });

        let request = RateRequestBuilder::new()
            .package_type(definition.service_type)
            .address(empty_address)
            .packed_box(packed_box(30.0, 1.0))
            .service_definition(definition)
            .order_total(Price::zero(AUD))
            .insurance(InsuranceOptions::disabled())
            .build()
            .unwrap();

        assert!(matches!(
            request.is_domestic(),
            Err(AssessmentError::DestinationUndetermined)
        ));
    }
}
