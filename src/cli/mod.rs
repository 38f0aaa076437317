//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// AusPost Rates - postage quoting tool
#[derive(Parser, Debug)]
#[command(name = "auspost-rates")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "rates.toml", env = "AUSPOST_RATES_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "AUSPOST_RATES_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Quote shipping rates for an order file
    Quote(commands::quote::QuoteArgs),

    /// List the service catalog
    Services(commands::services::ServicesArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_quote() {
        let cli = Cli::parse_from(["auspost-rates", "quote", "--order", "order.json"]);
        assert_eq!(cli.config, "rates.toml");
        assert!(matches!(cli.command, Commands::Quote(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from([
            "auspost-rates",
            "--config",
            "custom.toml",
            "validate-config",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_services() {
        let cli = Cli::parse_from(["auspost-rates", "services", "--destination", "domestic"]);
        assert!(matches!(cli.command, Commands::Services(_)));
    }
}
