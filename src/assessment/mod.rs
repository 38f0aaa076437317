//! Postage assessment
//!
//! The AusPost Postage Assessment Calculator (PAC) integration: request
//! assembly, the HTTP client, and response parsing.

pub mod client;
pub mod request;
pub mod response;

pub use client::{PacClient, PostageApi, DEFAULT_BASE_URL};
pub use request::{InsuranceOptions, RateRequest, RateRequestBuilder, RequestDimensions};
pub use response::PostageResponse;
