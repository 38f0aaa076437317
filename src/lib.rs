// AusPost Rates - Australia Post postage rate engine
// Licensed under the MIT License

//! # AusPost Rates
//!
//! A postage rate engine for Australia Post: packs an order's items into the
//! fewest boxes that pass the carrier's size guidelines, then prices every
//! enabled postage service through the Postage Assessment Calculator (PAC)
//! API.
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The rate calculation orchestrator
//! - [`packer`] - 3D bin packing and the shipment adapters
//! - [`services`] - Service catalog and carrier package guidelines
//! - [`assessment`] - PAC API request assembly, client and response parsing
//! - [`domain`] - Core domain types: units, money, addresses, orders, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use auspost_rates::assessment::PacClient;
//! use auspost_rates::config::load_config;
//! use auspost_rates::core::RateCalculator;
//! use auspost_rates::domain::Shipment;
//! use secrecy::ExposeSecret;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example(shipment: Shipment) -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("rates.toml")?;
//! let client = PacClient::new(
//!     config.api.api_key.expose_secret().as_ref(),
//!     Duration::from_secs(config.api.timeout_seconds),
//! )?;
//!
//! let calculator = RateCalculator::new(config, Arc::new(client));
//! let rates = calculator.calculate_rates(&shipment).await?;
//!
//! for rate in rates {
//!     println!("{}: {}", rate.label, rate.amount);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure semantics
//!
//! A missing API key fails the whole calculation before any network
//! activity; a shipment without a recipient address quietly yields no rates.
//! Everything else - an item too large for every box, a carrier call that
//! errors, a malformed reply - is scoped to the service being priced: that
//! service is logged and skipped, and the remaining services still quote.
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::RateError`]:
//!
//! ```rust,no_run
//! use auspost_rates::domain::RateError;
//!
//! fn example() -> Result<(), RateError> {
//!     let config = auspost_rates::config::load_config("rates.toml")?;
//!     Ok(())
//! }
//! ```

pub mod assessment;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod packer;
pub mod services;
