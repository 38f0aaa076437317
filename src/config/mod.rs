//! Configuration management
//!
//! TOML-backed configuration with environment variable substitution and
//! secret handling for the API key.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApiConfig, EnabledPackageTypes, LogOptions, LoggingConfig, OptionsConfig,
    PackageDimensionsConfig, PackageTypeConfig, RatesConfig,
};
pub use secret::{SecretString, SecretValue};
