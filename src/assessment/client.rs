//! AusPost PAC client
//!
//! The HTTP client for the Postage Assessment Calculator API. The endpoint
//! path is derived from the request itself: parcel or letter, domestic or
//! international. Authentication is a developer API key sent with every call
//! in the `AUTH-KEY` header.
//!
//! See <https://developers.auspost.com.au/apis/pac/getting-started>

use crate::assessment::request::RateRequest;
use crate::assessment::response::PostageResponse;
use crate::domain::errors::AssessmentError;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

/// Production endpoint for the PAC API.
pub const DEFAULT_BASE_URL: &str = "https://digitalapi.auspost.com.au";

/// The seam the rate calculator drives.
///
/// Implementations must be safe to share across concurrent calculations.
#[async_trait]
pub trait PostageApi: Send + Sync {
    /// Performs one postage calculation call.
    ///
    /// Transport errors propagate to the caller; it is the caller's
    /// responsibility to catch them and skip the affected service.
    async fn calculate_postage(
        &self,
        request: &RateRequest,
    ) -> Result<PostageResponse, AssessmentError>;
}

/// PAC API client backed by reqwest.
#[derive(Debug)]
pub struct PacClient {
    api_key: Secret<String>,
    base_url: String,
    client: Client,
}

impl PacClient {
    /// Creates a client with the given API key and per-call timeout.
    ///
    /// # Errors
    ///
    /// Fails with [`AssessmentError::MissingApiKey`] when the key is empty.
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, AssessmentError> {
        if api_key.trim().is_empty() {
            return Err(AssessmentError::MissingApiKey);
        }

        let client = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AssessmentError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            api_key: Secret::new(api_key.to_string()),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        })
    }

    /// Overrides the API base URL. Used against test servers.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `/postage/{parcel|letter}/{domestic|international}/calculate.json`
    fn endpoint_path(parcel: bool, domestic: bool) -> String {
        format!(
            "/postage/{}/{}/calculate.json",
            if parcel { "parcel" } else { "letter" },
            if domestic { "domestic" } else { "international" },
        )
    }

    fn query_params(
        request: &RateRequest,
        domestic: bool,
    ) -> Result<Vec<(String, String)>, AssessmentError> {
        let dimensions = request.dimensions();
        let mut params = vec![
            ("service_code".to_string(), request.service_code().to_string()),
            ("length".to_string(), dimensions.length.to_string()),
            ("width".to_string(), dimensions.width.to_string()),
            ("height".to_string(), dimensions.height.to_string()),
            ("weight".to_string(), format_weight(dimensions.weight)),
        ];

        let address = request.address();
        if domestic {
            params.push((
                "from_postcode".to_string(),
                address.shipper_postcode().to_string(),
            ));
            params.push((
                "to_postcode".to_string(),
                address
                    .recipient_postcode()
                    .ok_or(AssessmentError::DestinationUndetermined)?
                    .to_string(),
            ));
        } else {
            params.push((
                "country_code".to_string(),
                address
                    .recipient_country_code()
                    .ok_or(AssessmentError::DestinationUndetermined)?
                    .to_string(),
            ));
        }

        for (key, value) in request.extra_service_options() {
            params.push((key.to_string(), value.to_string()));
        }

        let extra_cover = request.insurance_amount();
        if extra_cover > 0 {
            params.push(("extra_cover".to_string(), extra_cover.to_string()));
        }

        Ok(params)
    }
}

#[async_trait]
impl PostageApi for PacClient {
    async fn calculate_postage(
        &self,
        request: &RateRequest,
    ) -> Result<PostageResponse, AssessmentError> {
        let domestic = request.is_domestic()?;
        let path = Self::endpoint_path(request.is_parcel(), domestic);
        let params = Self::query_params(request, domestic)?;
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(
            url = %url,
            service_code = request.service_code(),
            "Calling AusPost PAC API"
        );

        let response = self
            .client
            .get(&url)
            .header("AUTH-KEY", self.api_key.expose_secret().as_str())
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AssessmentError::Timeout(e.to_string())
                } else {
                    AssessmentError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssessmentError::ServerError {
                status: status.as_u16(),
                message: body,
            });
        }

        let raw = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AssessmentError::InvalidResponse(e.to_string()))?;

        Ok(PostageResponse::new(raw))
    }
}

/// Weights go on the wire as plain decimals, not scientific notation.
fn format_weight(weight_kg: f64) -> String {
    let formatted = format!("{weight_kg:.3}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        let err = PacClient::new("  ", Duration::from_secs(30)).unwrap_err();
        assert!(matches!(err, AssessmentError::MissingApiKey));
    }

    #[test]
    fn test_endpoint_path_composition() {
        assert_eq!(
            PacClient::endpoint_path(true, true),
            "/postage/parcel/domestic/calculate.json"
        );
        assert_eq!(
            PacClient::endpoint_path(true, false),
            "/postage/parcel/international/calculate.json"
        );
        assert_eq!(
            PacClient::endpoint_path(false, true),
            "/postage/letter/domestic/calculate.json"
        );
        assert_eq!(
            PacClient::endpoint_path(false, false),
            "/postage/letter/international/calculate.json"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = PacClient::new("key", Duration::from_secs(30))
            .unwrap()
            .with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_weight_formatting() {
        assert_eq!(format_weight(6.75), "6.75");
        assert_eq!(format_weight(0.5), "0.5");
        assert_eq!(format_weight(2.0), "2");
        assert_eq!(format_weight(1.125), "1.125");
    }
}
