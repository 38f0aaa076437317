//! Configuration schema types
//!
//! The typed configuration surface of the rate engine: API credentials,
//! enabled services and package types, and the pricing options.

use crate::config::secret::SecretString;
use crate::domain::money::RoundingMode;
use crate::domain::units::{Length, Weight};
use crate::packer::shipment::PackageType;
use crate::services::catalog::{Destination, ServiceCatalog};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesConfig {
    /// PAC API credentials and connection settings
    pub api: ApiConfig,

    /// Enabled service keys, matched against the service catalog
    #[serde(default)]
    pub services: Vec<String>,

    /// The store's box inventory
    #[serde(default)]
    pub package_types: Vec<PackageTypeConfig>,

    /// Which package types may be used per destination
    #[serde(default)]
    pub enabled_package_types: EnabledPackageTypes,

    /// Pricing and logging options
    #[serde(default)]
    pub options: OptionsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RatesConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if any configuration values are invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.api.validate()?;

        for key in &self.services {
            if !ServiceCatalog::has_service(key) {
                return Err(format!("Unknown service '{key}' in [services]"));
            }
        }

        let mut seen = Vec::new();
        for package_type in &self.package_types {
            package_type.validate()?;
            if seen.contains(&&package_type.key) {
                return Err(format!("Duplicate package type key '{}'", package_type.key));
            }
            seen.push(&package_type.key);
        }

        self.enabled_package_types
            .validate(&self.package_types)?;
        self.options.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Whether an API key is present at all.
    pub fn has_api_key(&self) -> bool {
        !self.api.api_key.expose_secret().is_empty()
    }
}

/// PAC API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Developer API key
    pub api_key: SecretString,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-call timeout in seconds; bounds each carrier call so one slow
    /// service cannot stall the whole calculation
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ApiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("api.base_url must not be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("api.timeout_seconds must be at least 1".to_string());
        }
        Ok(())
    }
}

/// One configured box in the store's inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageTypeConfig {
    /// Stable key referenced by `enabled_package_types`
    pub key: String,
    pub label: String,
    pub destination: Destination,
    pub dimensions: PackageDimensionsConfig,
    pub weight: Weight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDimensionsConfig {
    pub length: Length,
    pub width: Length,
    pub height: Length,
}

impl PackageTypeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.key.trim().is_empty() {
            return Err("package type key must not be empty".to_string());
        }
        for (name, length) in [
            ("length", &self.dimensions.length),
            ("width", &self.dimensions.width),
            ("height", &self.dimensions.height),
        ] {
            if length.number() <= 0.0 {
                return Err(format!(
                    "package type '{}': {name} must be positive",
                    self.key
                ));
            }
        }
        if self.weight.number() < 0.0 {
            return Err(format!(
                "package type '{}': weight must not be negative",
                self.key
            ));
        }
        Ok(())
    }

    pub fn to_package_type(&self) -> PackageType {
        PackageType {
            label: self.label.clone(),
            length: self.dimensions.length,
            width: self.dimensions.width,
            height: self.dimensions.height,
            weight: self.weight,
        }
    }
}

/// Package type keys enabled per destination.
///
/// An empty list means every package type for that destination is fair game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnabledPackageTypes {
    #[serde(default)]
    pub domestic: Vec<String>,
    #[serde(default)]
    pub international: Vec<String>,
}

impl EnabledPackageTypes {
    fn validate(&self, package_types: &[PackageTypeConfig]) -> Result<(), String> {
        for key in self.domestic.iter().chain(&self.international) {
            if !package_types.iter().any(|p| &p.key == key) {
                return Err(format!(
                    "enabled_package_types references unknown package type '{key}'"
                ));
            }
        }
        Ok(())
    }

    pub fn for_destination(&self, destination: Destination) -> &[String] {
        match destination {
            Destination::Domestic => &self.domestic,
            Destination::International => &self.international,
        }
    }
}

/// Pricing options and API logging flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Request extra cover on services that support it
    #[serde(default)]
    pub insurance: bool,

    /// Fraction of the order total to cover, e.g. 0.01 for 1%
    #[serde(default)]
    pub insurance_percentage: Decimal,

    /// Clamp cover to the per-service extra-cover cap
    #[serde(default = "default_true")]
    pub insurance_limit: bool,

    /// Multiplier applied to raw postage when greater than 1.0
    #[serde(default = "default_rate_multiplier")]
    pub rate_multiplier: Decimal,

    /// Rounding mode applied after the multiplier
    #[serde(default)]
    pub round: RoundingMode,

    /// API payload logging flags
    #[serde(default)]
    pub log: LogOptions,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            insurance: false,
            insurance_percentage: Decimal::ZERO,
            insurance_limit: true,
            rate_multiplier: default_rate_multiplier(),
            round: RoundingMode::default(),
            log: LogOptions::default(),
        }
    }
}

impl OptionsConfig {
    fn validate(&self) -> Result<(), String> {
        let minimum = Decimal::new(1, 1);
        if self.rate_multiplier < minimum {
            return Err("options.rate_multiplier must be at least 0.1".to_string());
        }
        if self.insurance
            && (self.insurance_percentage <= Decimal::ZERO
                || self.insurance_percentage > Decimal::ONE)
        {
            return Err(
                "options.insurance_percentage must be within (0, 1] when insurance is enabled"
                    .to_string(),
            );
        }
        Ok(())
    }
}

/// Verbose logging of outbound requests / inbound responses
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LogOptions {
    #[serde(default)]
    pub request: bool,
    #[serde(default)]
    pub response: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write JSON logs to a rolling file in addition to the console
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for rolling log files
    #[serde(default = "default_log_path")]
    pub file_path: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_enabled: false,
            file_path: default_log_path(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    crate::assessment::client::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_rate_multiplier() -> Decimal {
    Decimal::ONE
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}
