//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");

        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                println!("Configuration is invalid:");
                println!("  {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Summary:");
        println!("  API base URL: {}", config.api.base_url);
        println!("  API key: {}", if config.has_api_key() { "set" } else { "MISSING" });
        println!("  Timeout: {}s", config.api.timeout_seconds);
        println!("  Enabled services: {}", config.services.len());
        println!("  Package types: {}", config.package_types.len());
        println!("  Insurance: {}", config.options.insurance);
        println!("  Rate multiplier: {}", config.options.rate_multiplier);
        println!("  Rounding: {:?}", config.options.round);

        Ok(0)
    }
}
