//! HTTP-level tests for the PAC client
//!
//! Drives the real reqwest client against a mock server, asserting the
//! endpoint path, query parameters and authentication header that reach the
//! wire.

use auspost_rates::assessment::{
    InsuranceOptions, PacClient, PostageApi, RateRequest, RateRequestBuilder,
};
use auspost_rates::domain::errors::AssessmentError;
use auspost_rates::domain::{
    Address, Dimensions, Length, LengthUnit, OrderItem, PostalAddress, Price, Shipment, Weight,
    WeightUnit, AUD,
};
use auspost_rates::packer::{PackageType, PackedBox, ShipmentPacker};
use auspost_rates::services::catalog::{Destination, ServiceCatalog};
use mockito::Matcher;
use rust_decimal_macros::dec;
use std::time::Duration;

fn packed_box(destination: Destination) -> PackedBox {
    let mut packer = ShipmentPacker::new(destination);
    packer
        .add_package_type(&PackageType {
            label: "Medium Box".to_string(),
            length: Length::new(30.0, LengthUnit::Centimeter),
            width: Length::new(30.0, LengthUnit::Centimeter),
            height: Length::new(30.0, LengthUnit::Centimeter),
            weight: Weight::new(0.0, WeightUnit::Gram),
        })
        .unwrap();
    packer.add_order_item(&OrderItem {
        title: "Coffee grinder".to_string(),
        quantity: 1,
        weight: Some(Weight::new(1.2, WeightUnit::Kilogram)),
        dimensions: Some(Dimensions {
            length: Length::new(10.0, LengthUnit::Centimeter),
            width: Length::new(10.0, LengthUnit::Centimeter),
            height: Length::new(10.0, LengthUnit::Centimeter),
        }),
        unit_price: None,
    });
    packer.pack().unwrap().remove(0)
}

fn address(recipient_postcode: &str, recipient_country: &str) -> Address {
    Address::from_shipment(&Shipment {
        store_address: PostalAddress {
            postal_code: "3000".to_string(),
            country_code: "AU".to_string(),
        },
        shipping_address: Some(PostalAddress {
            postal_code: recipient_postcode.to_string(),
            country_code: recipient_country.to_string(),
        }),
        items: Vec::new(),
        order_total: Price::zero(AUD),
    })
}

fn request(service_id: &str, recipient: (&str, &str), insurance: InsuranceOptions) -> RateRequest {
    let definition = ServiceCatalog::get(service_id).unwrap();
    RateRequestBuilder::new()
        .package_type(definition.service_type)
        .address(address(recipient.0, recipient.1))
        .packed_box(packed_box(definition.destination))
        .service_definition(definition)
        .order_total(Price::new(dec!(10_000), AUD))
        .insurance(insurance)
        .build()
        .unwrap()
}

#[tokio::test]
async fn domestic_parcel_call_hits_the_domestic_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/postage/parcel/domestic/calculate.json")
        .match_header("AUTH-KEY", "test-key")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("service_code".into(), "AUS_PARCEL_REGULAR".into()),
            Matcher::UrlEncoded("length".into(), "30".into()),
            Matcher::UrlEncoded("width".into(), "30".into()),
            Matcher::UrlEncoded("height".into(), "30".into()),
            // 0.027m3 box -> 6.75kg cubic weight beats the 1.2kg actual.
            Matcher::UrlEncoded("weight".into(), "6.75".into()),
            Matcher::UrlEncoded("from_postcode".into(), "3000".into()),
            Matcher::UrlEncoded("to_postcode".into(), "2000".into()),
            Matcher::UrlEncoded("option_code".into(), "AUS_SERVICE_OPTION_STANDARD".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"postage_result":{"total_cost":"13.80"}}"#)
        .create_async()
        .await;

    let client = PacClient::new("test-key", Duration::from_secs(5))
        .unwrap()
        .with_base_url(&server.url());
    let request = request(
        "AUS_SERVICE_OPTION_STANDARD",
        ("2000", "AU"),
        InsuranceOptions::disabled(),
    );

    let response = client.calculate_postage(&request).await.unwrap();
    assert_eq!(response.total_cost().unwrap(), dec!(13.80));
    mock.assert_async().await;
}

#[tokio::test]
async fn international_parcel_call_sends_country_code() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/postage/parcel/international/calculate.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded(
                "service_code".into(),
                "INT_PARCEL_AIR_OWN_PACKAGING".into(),
            ),
            Matcher::UrlEncoded("country_code".into(), "US".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"postage_result":{"total_cost":"45.60"}}"#)
        .create_async()
        .await;

    let client = PacClient::new("test-key", Duration::from_secs(5))
        .unwrap()
        .with_base_url(&server.url());
    let request = request(
        "INT_PARCEL_AIR_OWN_PACKAGING",
        ("90210", "US"),
        InsuranceOptions::disabled(),
    );

    let response = client.calculate_postage(&request).await.unwrap();
    assert_eq!(response.total_cost().unwrap(), dec!(45.60));
    mock.assert_async().await;
}

#[tokio::test]
async fn insured_service_sends_extra_cover_and_suboption() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/postage/parcel/domestic/calculate.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("option_code".into(), "AUS_SERVICE_OPTION_STANDARD".into()),
            Matcher::UrlEncoded(
                "suboption_code".into(),
                "AUS_SERVICE_OPTION_EXTRA_COVER".into(),
            ),
            // $10,000 x 1% = $100, under the $300 cap.
            Matcher::UrlEncoded("extra_cover".into(), "100".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"postage_result":{"total_cost":"16.20"}}"#)
        .create_async()
        .await;

    let client = PacClient::new("test-key", Duration::from_secs(5))
        .unwrap()
        .with_base_url(&server.url());
    let request = request(
        "AUS_SERVICE_OPTION_INS",
        ("2000", "AU"),
        InsuranceOptions {
            enabled: true,
            percentage: dec!(0.01),
            cap_to_limit: true,
        },
    );

    client.calculate_postage(&request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/postage/parcel/domestic/calculate.json")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"error":{"errorMessage":"Please enter a valid Service code."}}"#)
        .create_async()
        .await;

    let client = PacClient::new("test-key", Duration::from_secs(5))
        .unwrap()
        .with_base_url(&server.url());
    let request = request(
        "AUS_SERVICE_OPTION_STANDARD",
        ("2000", "AU"),
        InsuranceOptions::disabled(),
    );

    let err = client.calculate_postage(&request).await.unwrap_err();
    match err {
        AssessmentError::ServerError { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("valid Service code"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_connection_error() {
    // Nothing listens on this port.
    let client = PacClient::new("test-key", Duration::from_secs(1))
        .unwrap()
        .with_base_url("http://127.0.0.1:1");
    let request = request(
        "AUS_SERVICE_OPTION_STANDARD",
        ("2000", "AU"),
        InsuranceOptions::disabled(),
    );

    let err = client.calculate_postage(&request).await.unwrap_err();
    assert!(matches!(
        err,
        AssessmentError::ConnectionFailed(_) | AssessmentError::Timeout(_)
    ));
}
