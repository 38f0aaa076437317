//! Services command implementation
//!
//! Lists the postage service catalog, optionally filtered by destination
//! and type.

use crate::services::catalog::{Destination, ServiceCatalog, ServiceType};
use clap::Args;

/// Arguments for the services command
#[derive(Args, Debug)]
pub struct ServicesArgs {
    /// Filter by destination (domestic, international)
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Filter by service type (parcel, letter)
    #[arg(short = 't', long = "type")]
    pub service_type: Option<String>,
}

impl ServicesArgs {
    /// Execute the services command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let destination = match self.destination.as_deref() {
            Some("domestic") => Some(Destination::Domestic),
            Some("international") => Some(Destination::International),
            Some(other) => {
                eprintln!("Unknown destination '{other}', expected domestic or international");
                return Ok(2);
            }
            None => None,
        };

        let service_type = match self.service_type.as_deref() {
            Some("parcel") => Some(ServiceType::Parcel),
            Some("letter") => Some(ServiceType::Letter),
            Some(other) => {
                eprintln!("Unknown service type '{other}', expected parcel or letter");
                return Ok(2);
            }
            None => None,
        };

        let definitions = ServiceCatalog::filtered(service_type, destination);

        println!(
            "{:<32} {:<8} {:<14} {:>6}  {}",
            "KEY", "TYPE", "DESTINATION", "COVER", "DESCRIPTION"
        );
        for definition in &definitions {
            println!(
                "{:<32} {:<8} {:<14} {:>6}  {}",
                definition.id,
                definition.service_type.to_string(),
                definition.destination.to_string(),
                definition.extra_cover,
                definition.description
            );
        }
        println!("\n{} service(s)", definitions.len());

        Ok(0)
    }
}
