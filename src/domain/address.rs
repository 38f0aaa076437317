//! Shipment addresses
//!
//! The shipper (store) side always has an address; the recipient side may be
//! absent while a cart has no delivery details yet. Postcodes are coerced to
//! integers the way the carrier API expects them.

use crate::domain::order::Shipment;
use serde::{Deserialize, Serialize};

/// A bare postal address: postcode plus ISO country code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub postal_code: String,
    pub country_code: String,
}

/// The address pair for one rate calculation.
///
/// Derived fresh from a shipment per calculation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    shipper: PostalAddress,
    recipient: Option<PostalAddress>,
}

impl Address {
    pub fn from_shipment(shipment: &Shipment) -> Self {
        Self {
            shipper: shipment.store_address.clone(),
            recipient: shipment.shipping_address.clone(),
        }
    }

    /// Whether the shipment has no recipient address yet.
    pub fn is_empty(&self) -> bool {
        self.recipient.is_none()
    }

    /// Whether the recipient is in the same country as the shipper.
    ///
    /// `None` when there is no recipient address to compare against.
    pub fn is_domestic(&self) -> Option<bool> {
        self.recipient
            .as_ref()
            .map(|recipient| recipient.country_code == self.shipper.country_code)
    }

    pub fn shipper_postcode(&self) -> u32 {
        coerce_postcode(&self.shipper.postal_code)
    }

    pub fn recipient_postcode(&self) -> Option<u32> {
        self.recipient
            .as_ref()
            .map(|recipient| coerce_postcode(&recipient.postal_code))
    }

    pub fn recipient_country_code(&self) -> Option<&str> {
        self.recipient
            .as_ref()
            .map(|recipient| recipient.country_code.as_str())
    }
}

/// Integer coercion: leading digits of the trimmed input, 0 otherwise.
fn coerce_postcode(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
