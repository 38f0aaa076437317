//! Service catalog
//!
//! The static table of every supported Australia Post postage product: a
//! service key maps to carrier service/option/sub-option codes, destination,
//! type, an extra-cover cap and (for letters) per-service maximum dimensions.
//! Destinations and types are closed enums; unknown values never get past the
//! parse boundary.

use crate::domain::errors::ServiceError;
use serde::{Deserialize, Serialize};

/// Carrier service codes used by the catalog.
pub mod codes {
    pub const AUS_PARCEL_REGULAR: &str = "AUS_PARCEL_REGULAR";
    pub const AUS_PARCEL_EXPRESS: &str = "AUS_PARCEL_EXPRESS";
    pub const AUS_PARCEL_COURIER: &str = "AUS_PARCEL_COURIER";

    pub const AUS_LETTER_REGULAR_SMALL: &str = "AUS_LETTER_REGULAR_SMALL";
    pub const AUS_LETTER_REGULAR_LARGE: &str = "AUS_LETTER_REGULAR_LARGE";
    pub const AUS_LETTER_PRIORITY_SMALL: &str = "AUS_LETTER_PRIORITY_SMALL";
    pub const AUS_LETTER_PRIORITY_LARGE_500: &str = "AUS_LETTER_PRIORITY_LARGE_500";
    pub const AUS_LETTER_EXPRESS_SMALL: &str = "AUS_LETTER_EXPRESS_SMALL";
    pub const AUS_LETTER_EXPRESS_MEDIUM: &str = "AUS_LETTER_EXPRESS_MEDIUM";
    pub const AUS_LETTER_EXPRESS_LARGE: &str = "AUS_LETTER_EXPRESS_LARGE";

    pub const INT_PARCEL_SEA_OWN_PACKAGING: &str = "INT_PARCEL_SEA_OWN_PACKAGING";
    pub const INT_PARCEL_AIR_OWN_PACKAGING: &str = "INT_PARCEL_AIR_OWN_PACKAGING";
    pub const INT_PARCEL_STD_OWN_PACKAGING: &str = "INT_PARCEL_STD_OWN_PACKAGING";
    pub const INT_PARCEL_EXP_OWN_PACKAGING: &str = "INT_PARCEL_EXP_OWN_PACKAGING";
    pub const INT_PARCEL_COR_OWN_PACKAGING: &str = "INT_PARCEL_COR_OWN_PACKAGING";

    pub const INT_LETTER_AIR_OWN_PACKAGING_LIGHT: &str = "INT_LETTER_AIR_OWN_PACKAGING_LIGHT";
    pub const INT_LETTER_AIR_OWN_PACKAGING_MEDIUM: &str = "INT_LETTER_AIR_OWN_PACKAGING_MEDIUM";
    pub const INT_LETTER_AIR_OWN_PACKAGING_HEAVY: &str = "INT_LETTER_AIR_OWN_PACKAGING_HEAVY";
    pub const INT_LETTER_REG_SMALL_ENVELOPE: &str = "INT_LETTER_REG_SMALL_ENVELOPE";
    pub const INT_LETTER_REG_LARGE_ENVELOPE: &str = "INT_LETTER_REG_LARGE_ENVELOPE";
    pub const INT_LETTER_EXP_OWN_PACKAGING: &str = "INT_LETTER_EXP_OWN_PACKAGING";
    pub const INT_LETTER_COR_OWN_PACKAGING: &str = "INT_LETTER_COR_OWN_PACKAGING";
}

/// Carrier service option codes.
pub mod options {
    pub const STANDARD: &str = "AUS_SERVICE_OPTION_STANDARD";
    pub const SIGNATURE_ON_DELIVERY: &str = "AUS_SERVICE_OPTION_SIGNATURE_ON_DELIVERY";
    pub const EXTRA_COVER: &str = "AUS_SERVICE_OPTION_EXTRA_COVER";
    pub const REGISTERED_POST: &str = "AUS_SERVICE_OPTION_REGISTERED_POST";
    pub const DELIVERY_CONFIRMATION: &str = "AUS_SERVICE_OPTION_DELIVERY_CONFIRMATION";
    pub const PERSON_TO_PERSON: &str = "AUS_SERVICE_OPTION_PERSON_TO_PERSON";
    pub const INT_SIGNATURE_ON_DELIVERY: &str = "INT_SIGNATURE_ON_DELIVERY";
    pub const INT_EXTRA_COVER: &str = "INT_EXTRA_COVER";
}

/// Where a shipment is going, relative to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Domestic,
    International,
}

impl Destination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Domestic => "domestic",
            Destination::International => "international",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a service ships parcels or letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Parcel,
    Letter,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Parcel => "parcel",
            ServiceType::Letter => "letter",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-service maximum dimensions, in whole millimetres and grams.
///
/// Letter services are bounded by envelope sizes rather than the parcel
/// guidelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxDimensions {
    pub length_mm: u32,
    pub width_mm: u32,
    pub thickness_mm: u32,
    pub weight_g: u32,
}

/// One purchasable postage product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDefinition {
    /// Internal service key.
    pub id: &'static str,
    /// Human-readable label shown against the quoted rate.
    pub description: &'static str,
    pub service_type: ServiceType,
    pub destination: Destination,
    /// Carrier service code sent to the PAC API.
    pub service_code: &'static str,
    pub option_code: Option<&'static str>,
    pub sub_option_code: Option<&'static str>,
    /// Maximum extra cover in whole AUD; 0 means the service has none.
    pub extra_cover: u32,
    pub max_dimensions: Option<MaxDimensions>,
}

const LETTER_SMALL: MaxDimensions = MaxDimensions {
    length_mm: 240,
    width_mm: 130,
    thickness_mm: 5,
    weight_g: 250,
};

const LETTER_SMALL_THICK: MaxDimensions = MaxDimensions {
    length_mm: 240,
    width_mm: 130,
    thickness_mm: 20,
    weight_g: 500,
};

const LETTER_LARGE: MaxDimensions = MaxDimensions {
    length_mm: 360,
    width_mm: 260,
    thickness_mm: 20,
    weight_g: 500,
};

/// All supported AusPost services, in stable catalog order.
static DEFINITIONS: &[ServiceDefinition] = &[
    // Domestic parcel services.
    ServiceDefinition {
        id: "AUS_SERVICE_OPTION_STANDARD",
        description: "Australia Post Standard Post - 2-6 Days",
        service_type: ServiceType::Parcel,
        destination: Destination::Domestic,
        service_code: codes::AUS_PARCEL_REGULAR,
        option_code: Some(options::STANDARD),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "AUS_SERVICE_OPTION_SIGNATURE",
        description: "Australia Post Standard Post, Signature required - 2-6 Days",
        service_type: ServiceType::Parcel,
        destination: Destination::Domestic,
        service_code: codes::AUS_PARCEL_REGULAR,
        option_code: Some(options::SIGNATURE_ON_DELIVERY),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "AUS_SERVICE_OPTION_INS",
        description: "Australia Post Standard Post (Insured) - 2-6 Days",
        service_type: ServiceType::Parcel,
        destination: Destination::Domestic,
        service_code: codes::AUS_PARCEL_REGULAR,
        option_code: Some(options::STANDARD),
        sub_option_code: Some(options::EXTRA_COVER),
        extra_cover: 300,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "AUS_SERVICE_OPTION_SIG_INS",
        description: "Australia Post Standard Post (Insured), Signature required - 2-6 Days",
        service_type: ServiceType::Parcel,
        destination: Destination::Domestic,
        service_code: codes::AUS_PARCEL_REGULAR,
        option_code: Some(options::SIGNATURE_ON_DELIVERY),
        sub_option_code: Some(options::EXTRA_COVER),
        extra_cover: 5000,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "AUS_PARCEL_EXPRESS",
        description: "Australia Post Express Post - 1-3 Days",
        service_type: ServiceType::Parcel,
        destination: Destination::Domestic,
        service_code: codes::AUS_PARCEL_EXPRESS,
        option_code: Some(options::STANDARD),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "AUS_PARCEL_EXPRESS_SIGNATURE",
        description: "Australia Post Express Post, Signature required - 1-3 Days",
        service_type: ServiceType::Parcel,
        destination: Destination::Domestic,
        service_code: codes::AUS_PARCEL_EXPRESS,
        option_code: Some(options::SIGNATURE_ON_DELIVERY),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "AUS_PARCEL_EXPRESS_INS",
        description: "Australia Post Express Post (Insured) - 1-3 Days",
        service_type: ServiceType::Parcel,
        destination: Destination::Domestic,
        service_code: codes::AUS_PARCEL_EXPRESS,
        option_code: Some(options::STANDARD),
        sub_option_code: Some(options::EXTRA_COVER),
        extra_cover: 300,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "AUS_PARCEL_EXPRESS_SIG_INS",
        description: "Australia Post Express Post (Insured), Signature required - 1-3 Days",
        service_type: ServiceType::Parcel,
        destination: Destination::Domestic,
        service_code: codes::AUS_PARCEL_EXPRESS,
        option_code: Some(options::SIGNATURE_ON_DELIVERY),
        sub_option_code: Some(options::EXTRA_COVER),
        extra_cover: 5000,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "AUS_PARCEL_COURIER",
        description: "Australia Post Courier Post - Same Day Delivery",
        service_type: ServiceType::Parcel,
        destination: Destination::Domestic,
        service_code: codes::AUS_PARCEL_COURIER,
        option_code: Some(options::STANDARD),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "AUS_PARCEL_COUR_INS",
        description: "Australia Post Courier Post (Insured) - Same Day Delivery",
        service_type: ServiceType::Parcel,
        destination: Destination::Domestic,
        service_code: codes::AUS_PARCEL_COURIER,
        option_code: Some(options::STANDARD),
        sub_option_code: Some(options::EXTRA_COVER),
        extra_cover: 5000,
        max_dimensions: None,
    },
    // International parcel services.
    ServiceDefinition {
        id: "INT_PARCEL_SEA_OWN_PACKAGING",
        description: "Australia Post International Economy Sea - 30+ Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_SEA_OWN_PACKAGING,
        option_code: None,
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "INT_PARCEL_SEA_OWN_PACK_SIG",
        description: "Australia Post International Economy Sea, Signature required - 30+ Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_SEA_OWN_PACKAGING,
        option_code: Some(options::INT_SIGNATURE_ON_DELIVERY),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "INT_PARCEL_SEA_OWN_PACK_INS",
        description: "Australia Post International Economy Sea (Insured) - 30+ Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_SEA_OWN_PACKAGING,
        option_code: Some(options::INT_EXTRA_COVER),
        sub_option_code: None,
        extra_cover: 5000,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "INT_PARCEL_AIR_OWN_PACKAGING",
        description: "Australia Post International Economy Air - 10+ Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_AIR_OWN_PACKAGING,
        option_code: None,
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "INT_PARCEL_AIR_OWN_PACK_SIG",
        description: "Australia Post International Economy Air, Signature required - 10+ Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_AIR_OWN_PACKAGING,
        option_code: Some(options::INT_SIGNATURE_ON_DELIVERY),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "INT_PARCEL_AIR_OWN_PACK_INS",
        description: "Australia Post International Economy Air (Insured) - 10+ Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_AIR_OWN_PACKAGING,
        option_code: Some(options::INT_EXTRA_COVER),
        sub_option_code: None,
        extra_cover: 5000,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "INT_PARCEL_STD_OWN_PACKAGING",
        description: "Australia Post International Standard - 6+ Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_STD_OWN_PACKAGING,
        option_code: None,
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "INT_PARCEL_STD_OWN_PACK_SIG",
        description: "Australia Post International Standard, Signature required - 6+ Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_STD_OWN_PACKAGING,
        option_code: Some(options::INT_SIGNATURE_ON_DELIVERY),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "INT_PARCEL_STD_OWN_PACK_INS",
        description: "Australia Post International Standard (Insured) - 6+ Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_STD_OWN_PACKAGING,
        option_code: Some(options::INT_EXTRA_COVER),
        sub_option_code: None,
        extra_cover: 5000,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "INT_PARCEL_EXP_OWN_PACKAGING",
        description: "Australia Post International Express - 2-4 Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_EXP_OWN_PACKAGING,
        option_code: None,
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "INT_PARCEL_EXP_OWN_PACK_INS",
        description: "Australia Post International Express (Insured) - 2-4 Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_EXP_OWN_PACKAGING,
        option_code: Some(options::INT_EXTRA_COVER),
        sub_option_code: None,
        extra_cover: 5000,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "INT_PARCEL_COR_OWN_PACKAGING",
        description: "Australia Post International Courier - 1-2 Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_COR_OWN_PACKAGING,
        option_code: None,
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: None,
    },
    ServiceDefinition {
        id: "INT_PARCEL_COR_OWN_PACK_INS",
        description: "Australia Post International Courier (Insured) - 1-2 Days",
        service_type: ServiceType::Parcel,
        destination: Destination::International,
        service_code: codes::INT_PARCEL_COR_OWN_PACKAGING,
        option_code: Some(options::INT_EXTRA_COVER),
        sub_option_code: None,
        extra_cover: 5000,
        max_dimensions: None,
    },
    // Domestic letter services.
    ServiceDefinition {
        id: "L_AUS_LETTER_SM",
        description: "Australia Post Standard Letter - 2-6 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_REGULAR_SMALL,
        option_code: Some(options::STANDARD),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(LETTER_SMALL),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_SM_PRIORITY",
        description: "Australia Post Standard Letter Priority - 1-4 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_PRIORITY_SMALL,
        option_code: Some(options::STANDARD),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(LETTER_SMALL),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_LG",
        description: "Australia Post Standard Letter - 2-6 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_REGULAR_LARGE,
        option_code: Some(options::STANDARD),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(LETTER_LARGE),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_LG_PRIORITY",
        description: "Australia Post Standard Letter Priority - 1-4 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_PRIORITY_LARGE_500,
        option_code: Some(options::STANDARD),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(LETTER_LARGE),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_SM_REG_POST",
        description: "Australia Post Registered Post Letter - 2-6 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_REGULAR_SMALL,
        option_code: Some(options::REGISTERED_POST),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(LETTER_SMALL_THICK),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_SM_REG_CONF",
        description: "Australia Post Registered Post Letter - Confirmation - 2-6 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_REGULAR_SMALL,
        option_code: Some(options::REGISTERED_POST),
        sub_option_code: Some(options::DELIVERY_CONFIRMATION),
        extra_cover: 0,
        max_dimensions: Some(LETTER_SMALL_THICK),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_SM_REG_P2P",
        description: "Australia Post Registered Post Letter - Person to Person - 2-6 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_REGULAR_SMALL,
        option_code: Some(options::REGISTERED_POST),
        sub_option_code: Some(options::PERSON_TO_PERSON),
        extra_cover: 0,
        max_dimensions: Some(LETTER_SMALL_THICK),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_LG_REG_POST",
        description: "Australia Post Registered Post Letter Large - 2-6 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_REGULAR_LARGE,
        option_code: Some(options::REGISTERED_POST),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(LETTER_LARGE),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_LG_REG_POST_CONF",
        description: "Australia Post Registered Post Letter Large - Confirmation - 2-6 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_REGULAR_LARGE,
        option_code: Some(options::REGISTERED_POST),
        sub_option_code: Some(options::DELIVERY_CONFIRMATION),
        extra_cover: 0,
        max_dimensions: Some(LETTER_LARGE),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_LG_REG_P2P",
        description: "Australia Post Registered Post Letter - Person to Person - 2-6 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_REGULAR_LARGE,
        option_code: Some(options::REGISTERED_POST),
        sub_option_code: Some(options::PERSON_TO_PERSON),
        extra_cover: 0,
        max_dimensions: Some(LETTER_LARGE),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_SM_EXP_POST",
        description: "Australia Post Express Post Envelope Small - 1-3 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_EXPRESS_SMALL,
        option_code: Some(options::STANDARD),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(MaxDimensions {
            length_mm: 220,
            width_mm: 110,
            thickness_mm: 20,
            weight_g: 500,
        }),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_SM_EXP_SIG",
        description: "Australia Post Express Post Envelope Small - Signature - 1-3 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_EXPRESS_SMALL,
        option_code: Some(options::SIGNATURE_ON_DELIVERY),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(MaxDimensions {
            length_mm: 220,
            width_mm: 110,
            thickness_mm: 20,
            weight_g: 500,
        }),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_MD_EXP",
        description: "Australia Post Express Post Envelope Medium - 1-3 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_EXPRESS_MEDIUM,
        option_code: Some(options::STANDARD),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(MaxDimensions {
            length_mm: 229,
            width_mm: 162,
            thickness_mm: 20,
            weight_g: 500,
        }),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_MD_EXP_SIG",
        description: "Australia Post Express Post Envelope Medium - Signature - 1-3 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_EXPRESS_MEDIUM,
        option_code: Some(options::SIGNATURE_ON_DELIVERY),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(MaxDimensions {
            length_mm: 229,
            width_mm: 162,
            thickness_mm: 20,
            weight_g: 500,
        }),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_LG_EXPRESS_POST",
        description: "Australia Post Express Post Envelope Large - 1-3 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_EXPRESS_LARGE,
        option_code: Some(options::STANDARD),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(MaxDimensions {
            length_mm: 353,
            width_mm: 250,
            thickness_mm: 20,
            weight_g: 500,
        }),
    },
    ServiceDefinition {
        id: "L_AUS_LETTER_LG_EXP_POST_SIG",
        description: "Australia Post Express Post Envelope Large - Signature - 1-3 Days",
        service_type: ServiceType::Letter,
        destination: Destination::Domestic,
        service_code: codes::AUS_LETTER_EXPRESS_LARGE,
        option_code: Some(options::SIGNATURE_ON_DELIVERY),
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(MaxDimensions {
            length_mm: 353,
            width_mm: 250,
            thickness_mm: 20,
            weight_g: 500,
        }),
    },
    // International letter services.
    ServiceDefinition {
        id: "L_INTL_SERVICE_AIR_MAIL_LGT",
        description: "Australia Post Air Mail Light - 6+ Days",
        service_type: ServiceType::Letter,
        destination: Destination::International,
        service_code: codes::INT_LETTER_AIR_OWN_PACKAGING_LIGHT,
        option_code: None,
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(MaxDimensions {
            length_mm: 360,
            width_mm: 260,
            thickness_mm: 20,
            weight_g: 50,
        }),
    },
    ServiceDefinition {
        id: "L_INTL_SERVICE_AIR_MAIL_MED",
        description: "Australia Post Air Mail Medium - 6+ Days",
        service_type: ServiceType::Letter,
        destination: Destination::International,
        service_code: codes::INT_LETTER_AIR_OWN_PACKAGING_MEDIUM,
        option_code: None,
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(MaxDimensions {
            length_mm: 360,
            width_mm: 260,
            thickness_mm: 20,
            weight_g: 250,
        }),
    },
    ServiceDefinition {
        id: "L_INTL_SERVICE_AIR_MAIL_HVY",
        description: "Australia Post Air Mail Heavy - 6+ Days",
        service_type: ServiceType::Letter,
        destination: Destination::International,
        service_code: codes::INT_LETTER_AIR_OWN_PACKAGING_HEAVY,
        option_code: None,
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(LETTER_LARGE),
    },
    ServiceDefinition {
        id: "L_INT_LETTER_REG_SMALL",
        description: "Australia Post International Registered Prepaid DL Envelope - 6+ Days",
        service_type: ServiceType::Letter,
        destination: Destination::International,
        service_code: codes::INT_LETTER_REG_SMALL_ENVELOPE,
        option_code: None,
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(MaxDimensions {
            length_mm: 240,
            width_mm: 130,
            thickness_mm: 5,
            weight_g: 500,
        }),
    },
    ServiceDefinition {
        id: "L_INT_LETTER_REG_LARGE",
        description: "Australia Post International Registered Prepaid B4 Envelope - 6+ Days",
        service_type: ServiceType::Letter,
        destination: Destination::International,
        service_code: codes::INT_LETTER_REG_LARGE_ENVELOPE,
        option_code: None,
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(MaxDimensions {
            length_mm: 265,
            width_mm: 250,
            thickness_mm: 20,
            weight_g: 500,
        }),
    },
    ServiceDefinition {
        id: "L_INT_LET_EXP_OWN_PKG",
        description: "Australia Post International Express Letter - 2+ Days",
        service_type: ServiceType::Letter,
        destination: Destination::International,
        service_code: codes::INT_LETTER_EXP_OWN_PACKAGING,
        option_code: None,
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(LETTER_LARGE),
    },
    ServiceDefinition {
        id: "L_INT_LET_EXP_OWN_PKG_INS",
        description: "Australia Post International Express Letter (Insured) - 2+ Days",
        service_type: ServiceType::Letter,
        destination: Destination::International,
        service_code: codes::INT_LETTER_EXP_OWN_PACKAGING,
        option_code: Some(options::INT_EXTRA_COVER),
        sub_option_code: None,
        extra_cover: 5000,
        max_dimensions: Some(LETTER_LARGE),
    },
    ServiceDefinition {
        id: "L_INT_LET_COR_OWN_PKG",
        description: "Australia Post International Courier Letter - 2+ Days",
        service_type: ServiceType::Letter,
        destination: Destination::International,
        service_code: codes::INT_LETTER_COR_OWN_PACKAGING,
        option_code: None,
        sub_option_code: None,
        extra_cover: 0,
        max_dimensions: Some(LETTER_LARGE),
    },
    ServiceDefinition {
        id: "L_INT_LET_COR_OWN_PKG_INS",
        description: "Australia Post International Courier Letter (Insured) - 2+ Days",
        service_type: ServiceType::Letter,
        destination: Destination::International,
        service_code: codes::INT_LETTER_COR_OWN_PACKAGING,
        option_code: Some(options::INT_EXTRA_COVER),
        sub_option_code: None,
        extra_cover: 5000,
        max_dimensions: Some(LETTER_LARGE),
    },
];

/// Lookup and filtering over the static service table.
pub struct ServiceCatalog;

impl ServiceCatalog {
    /// All defined services, in stable catalog order.
    pub fn all() -> &'static [ServiceDefinition] {
        DEFINITIONS
    }

    /// Check if a service key exists.
    pub fn has_service(key: &str) -> bool {
        DEFINITIONS.iter().any(|definition| definition.id == key)
    }

    /// Get a service definition by key.
    pub fn get(key: &str) -> Result<&'static ServiceDefinition, ServiceError> {
        DEFINITIONS
            .iter()
            .find(|definition| definition.id == key)
            .ok_or_else(|| ServiceError::UnknownService(key.to_string()))
    }

    /// All services matching the given type and/or destination filters.
    pub fn filtered(
        service_type: Option<ServiceType>,
        destination: Option<Destination>,
    ) -> Vec<&'static ServiceDefinition> {
        DEFINITIONS
            .iter()
            .filter(|definition| {
                service_type.map_or(true, |t| definition.service_type == t)
                    && destination.map_or(true, |d| definition.destination == d)
            })
            .collect()
    }

    /// Definitions for a set of service keys.
    ///
    /// With `ignore_missing`, unknown keys are silently dropped instead of
    /// failing the whole lookup.
    pub fn by_keys(
        keys: &[String],
        ignore_missing: bool,
    ) -> Result<Vec<&'static ServiceDefinition>, ServiceError> {
        let mut definitions = Vec::with_capacity(keys.len());
        for key in keys {
            match Self::get(key) {
                Ok(definition) => definitions.push(definition),
                Err(_) if ignore_missing => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(definitions)
    }
}
