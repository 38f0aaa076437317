//! Read-only order data
//!
//! The minimal view of the hosting platform's order model that rate
//! calculation needs: purchasable items with physical data, the store and
//! shipping addresses, and the order total. Measurements are unit-tagged so
//! orders round-trip through JSON the way the platform exports them.

use crate::domain::address::PostalAddress;
use crate::domain::money::Price;
use crate::domain::units::{Length, Weight};
use serde::{Deserialize, Serialize};

/// The three edges of a purchased item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: Length,
    pub width: Length,
    pub height: Length,
}

/// One purchasable line item on the order.
///
/// Weight and dimensions are optional; products without physical data pack as
/// zero-sized items. A quantity of N occupies N packing slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub title: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Price>,
}

/// Everything rate calculation reads from an order shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub store_address: PostalAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<PostalAddress>,
    pub items: Vec<OrderItem>,
    pub order_total: Price,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::units::{LengthUnit, WeightUnit};
    use rust_decimal_macros::dec;

    #[test]
    fn test_shipment_json_round_trip() {
        let shipment = Shipment {
            store_address: PostalAddress {
                postal_code: "3000".to_string(),
                country_code: "AU".to_string(),
            },
            shipping_address: Some(PostalAddress {
                postal_code: "2000".to_string(),
                country_code: "AU".to_string(),
            }),
            items: vec![OrderItem {
                title: "Coffee grinder".to_string(),
                quantity: 2,
                weight: Some(Weight::new(1.2, WeightUnit::Kilogram)),
                dimensions: Some(Dimensions {
                    length: Length::new(20.0, LengthUnit::Centimeter),
                    width: Length::new(15.0, LengthUnit::Centimeter),
                    height: Length::new(25.0, LengthUnit::Centimeter),
                }),
                unit_price: Some(Price::new(dec!(89.95), crate::domain::money::AUD)),
            }],
            order_total: Price::new(dec!(179.90), crate::domain::money::AUD),
        };

        let json = serde_json::to_string(&shipment).unwrap();
        let parsed: Shipment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, shipment);
    }

    #[test]
    fn test_item_without_physical_data() {
        let json = r#"{"title":"Gift card","quantity":1}"#;
        let item: OrderItem = serde_json::from_str(json).unwrap();
        assert!(item.weight.is_none());
        assert!(item.dimensions.is_none());
    }
}
