//! Quote command implementation
//!
//! Loads an order shipment from a JSON file and prints a rate for every
//! enabled service that can carry it.

use crate::assessment::PacClient;
use crate::config::load_config;
use crate::core::RateCalculator;
use crate::domain::Shipment;
use clap::Args;
use secrecy::ExposeSecret;
use std::sync::Arc;
use std::time::Duration;

/// Arguments for the quote command
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Path to the order shipment JSON file
    #[arg(short, long)]
    pub order: String,
}

impl QuoteArgs {
    /// Execute the quote command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let contents = std::fs::read_to_string(&self.order)?;
        let shipment: Shipment = serde_json::from_str(&contents)?;

        tracing::info!(
            order = %self.order,
            items = shipment.items.len(),
            "Quoting shipment"
        );

        let client = PacClient::new(
            config.api.api_key.expose_secret().as_ref(),
            Duration::from_secs(config.api.timeout_seconds),
        )?
        .with_base_url(&config.api.base_url);

        let calculator = RateCalculator::new(config, Arc::new(client));
        let rates = calculator.calculate_rates(&shipment).await?;

        if rates.is_empty() {
            println!("No rates available for this shipment.");
            return Ok(0);
        }

        println!("{:<32} {:>12}  {}", "SERVICE", "PRICE", "LABEL");
        for rate in &rates {
            println!(
                "{:<32} {:>12}  {}",
                rate.service_id,
                rate.amount.to_string(),
                rate.label
            );
        }

        Ok(0)
    }
}
