//! Rate calculator - the orchestrator of the quoting pipeline
//!
//! One pass per enabled service: resolve package types for the service's
//! destination, pack the order items, price every packed box through the
//! carrier, adjust, and aggregate. Packing and carrier failures are scoped
//! to the service that hit them; the caller only ever sees a shorter rate
//! list, never a hard failure, unless configuration is missing outright.

use crate::assessment::client::PostageApi;
use crate::assessment::request::{InsuranceOptions, RateRequestBuilder};
use crate::config::RatesConfig;
use crate::domain::address::Address;
use crate::domain::errors::RateError;
use crate::domain::money::{Price, AUD};
use crate::domain::order::{OrderItem, Shipment};
use crate::domain::result::Result;
use crate::packer::shipment::{PackageType, PackedBox, ShipmentPacker};
use crate::services::catalog::{Destination, ServiceCatalog, ServiceDefinition};
use rust_decimal::Decimal;
use std::sync::Arc;

/// One quoted shipping option.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingRate {
    pub service_id: String,
    pub label: String,
    pub amount: Price,
}

/// Computes shipping rates for order shipments.
pub struct RateCalculator {
    config: RatesConfig,
    client: Arc<dyn PostageApi>,
}

impl RateCalculator {
    pub fn new(config: RatesConfig, client: Arc<dyn PostageApi>) -> Self {
        Self { config, client }
    }

    /// Calculates a rate for every enabled service that can carry the
    /// shipment.
    ///
    /// Returns an empty list when the shipment has no recipient address yet.
    ///
    /// # Errors
    ///
    /// Fails fast with [`RateError::Configuration`] when no API key is
    /// configured. Per-service packing and carrier errors are logged and
    /// skip only the affected service.
    pub async fn calculate_rates(&self, shipment: &Shipment) -> Result<Vec<ShippingRate>> {
        if !self.config.has_api_key() {
            return Err(RateError::Configuration(
                "The AusPost shipping method is not configured: missing API key".to_string(),
            ));
        }

        let address = Address::from_shipment(shipment);
        if address.is_empty() {
            tracing::debug!("Shipment has no recipient address yet, returning no rates");
            return Ok(Vec::new());
        }

        let mut rates = Vec::new();

        'services: for definition in ServiceCatalog::all() {
            if !self.is_enabled(definition) {
                continue;
            }

            let package_types = self.enabled_package_types(definition.destination);

            let packed_boxes =
                match self.pack_order(&package_types, &shipment.items, definition.destination) {
                    Ok(boxes) => boxes,
                    Err(e) => {
                        tracing::warn!(
                            service_id = definition.id,
                            error = %e,
                            "No package type large enough could be found, skipping service"
                        );
                        continue;
                    }
                };

            let mut total = Price::zero(AUD);

            for packed_box in packed_boxes {
                self.log_request(definition, &packed_box);

                let request = RateRequestBuilder::new()
                    .package_type(definition.service_type)
                    .address(address.clone())
                    .packed_box(packed_box)
                    .service_definition(definition)
                    .order_total(shipment.order_total.clone())
                    .insurance(self.insurance_options())
                    .build()?;

                let response = match self.client.calculate_postage(&request).await {
                    Ok(response) => response,
                    Err(e) => {
                        tracing::warn!(
                            service_id = definition.id,
                            error = %e,
                            "Error fetching rates from AusPost, skipping service"
                        );
                        continue 'services;
                    }
                };

                if self.config.options.log.response {
                    tracing::info!(
                        service_id = definition.id,
                        payload = %response.raw(),
                        "Received AusPost PAC API response"
                    );
                }

                let postage = match response.total_cost() {
                    Ok(cost) => cost,
                    Err(e) => {
                        tracing::warn!(
                            service_id = definition.id,
                            error = %e,
                            "Error fetching rates from AusPost, skipping service"
                        );
                        continue 'services;
                    }
                };

                total = total.add(&self.modified_postage_cost(Price::new(postage, AUD)));
            }

            rates.push(ShippingRate {
                service_id: definition.id.to_string(),
                label: definition.description.to_string(),
                amount: total,
            });
        }

        Ok(rates)
    }

    fn is_enabled(&self, definition: &ServiceDefinition) -> bool {
        self.config
            .services
            .iter()
            .any(|key| key == definition.id)
    }

    /// The store's package types valid for a destination.
    ///
    /// An empty enabled list leaves every package type for the destination
    /// in play.
    fn enabled_package_types(&self, destination: Destination) -> Vec<PackageType> {
        let enabled = self.config.enabled_package_types.for_destination(destination);
        self.config
            .package_types
            .iter()
            .filter(|package_type| package_type.destination == destination)
            .filter(|package_type| enabled.is_empty() || enabled.contains(&package_type.key))
            .map(|package_type| package_type.to_package_type())
            .collect()
    }

    /// Packs the order items, expanded by quantity, into boxes valid for the
    /// destination. Invalid package types are logged and skipped.
    fn pack_order(
        &self,
        package_types: &[PackageType],
        items: &[OrderItem],
        destination: Destination,
    ) -> std::result::Result<Vec<PackedBox>, crate::domain::errors::PackingError> {
        let mut packer = ShipmentPacker::new(destination);

        for package_type in package_types {
            if let Err(e) = packer.add_package_type(package_type) {
                tracing::warn!(error = %e, "Invalid package type skipped");
            }
        }

        for item in items {
            for _ in 0..item.quantity {
                packer.add_order_item(item);
            }
        }

        packer.pack()
    }

    /// Applies the configured multiplier and rounding to a raw postage cost.
    ///
    /// The multiplier only ever marks prices up; values at or below 1.0 are
    /// a no-op before rounding.
    fn modified_postage_cost(&self, postage: Price) -> Price {
        let multiplier = self.config.options.rate_multiplier;
        let postage = if multiplier > Decimal::ONE {
            postage.multiply(multiplier)
        } else {
            postage
        };
        postage.round(self.config.options.round)
    }

    fn insurance_options(&self) -> InsuranceOptions {
        InsuranceOptions {
            enabled: self.config.options.insurance,
            percentage: self.config.options.insurance_percentage,
            cap_to_limit: self.config.options.insurance_limit,
        }
    }

    fn log_request(&self, definition: &ServiceDefinition, packed_box: &PackedBox) {
        if self.config.options.log.request {
            tracing::info!(
                service_id = definition.id,
                service_code = definition.service_code,
                box_reference = packed_box.reference(),
                weight_g = packed_box.weight().number(),
                utilization = format!("{:.1}%", packed_box.utilization()),
                "Sending AusPost PAC API request"
            );
        }
    }
}
