//! Carrier API responses
//!
//! A thin wrapper around the raw PAC reply. The only field the pipeline
//! reads is `postage_result.total_cost`; anything else stays available for
//! diagnostic logging.

use crate::domain::errors::AssessmentError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A raw PAC API reply.
#[derive(Debug, Clone, PartialEq)]
pub struct PostageResponse {
    raw: serde_json::Value,
}

impl PostageResponse {
    pub fn new(raw: serde_json::Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    /// The total postage cost from the reply.
    ///
    /// The API returns the cost as a decimal string; numbers are accepted
    /// too.
    pub fn total_cost(&self) -> Result<Decimal, AssessmentError> {
        let result = self.raw.get("postage_result").ok_or_else(|| {
            AssessmentError::InvalidResponse(
                "API response does not include a valid result".to_string(),
            )
        })?;

        let cost = result.get("total_cost").ok_or_else(|| {
            AssessmentError::InvalidResponse(
                "API response does not include a total cost".to_string(),
            )
        })?;

        match cost {
            serde_json::Value::String(s) => Decimal::from_str(s).map_err(|e| {
                AssessmentError::InvalidResponse(format!("unparseable total cost '{s}': {e}"))
            }),
            serde_json::Value::Number(n) => Decimal::from_str(&n.to_string()).map_err(|e| {
                AssessmentError::InvalidResponse(format!("unparseable total cost '{n}': {e}"))
            }),
            other => Err(AssessmentError::InvalidResponse(format!(
                "total cost has unexpected type: {other}"
            ))),
        }
    }
}
