//! Integration tests for the reader façade HTTP surface.
//!
//! The gateway is replaced with an in-process double that records every call
//! it receives, so each test can assert both the HTTP contract and the exact
//! request forwarded upstream.

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use pay_api::{create_router, AppConfig, AppState};
use pay_core::{
    PaymentError, PaymentResult, ReaderCheckout, ReaderGateway, ReaderRegistration,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

const MERCHANT_CODE: &str = "MC1001";

#[derive(Debug, Clone, PartialEq)]
enum GatewayCall {
    List {
        merchant_code: String,
    },
    CreateReader {
        merchant_code: String,
        pairing_code: String,
        name: String,
    },
    CreateCheckout {
        merchant_code: String,
        reader_id: String,
        currency: String,
        minor_unit: u8,
        value: i64,
        description: Option<String>,
    },
}

/// Recording gateway double; fails every call when `fail` is set
struct RecordingGateway {
    fail: bool,
    calls: Mutex<Vec<GatewayCall>>,
}

impl RecordingGateway {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            fail,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: GatewayCall) -> PaymentResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            Err(PaymentError::Provider {
                provider: "sumup".to_string(),
                message: "simulated upstream failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ReaderGateway for RecordingGateway {
    async fn list_readers(&self, merchant_code: &str) -> PaymentResult<Value> {
        self.record(GatewayCall::List {
            merchant_code: merchant_code.to_string(),
        })?;
        Ok(json!({"items": [{"id": "rdr_1", "name": "Counter 1"}]}))
    }

    async fn create_reader(
        &self,
        merchant_code: &str,
        registration: &ReaderRegistration,
    ) -> PaymentResult<Value> {
        self.record(GatewayCall::CreateReader {
            merchant_code: merchant_code.to_string(),
            pairing_code: registration.pairing_code.clone(),
            name: registration.name.clone(),
        })?;
        Ok(json!({"id": "rdr_9", "name": registration.name, "status": "paired"}))
    }

    async fn create_reader_checkout(
        &self,
        merchant_code: &str,
        reader_id: &str,
        checkout: &ReaderCheckout,
    ) -> PaymentResult<Value> {
        self.record(GatewayCall::CreateCheckout {
            merchant_code: merchant_code.to_string(),
            reader_id: reader_id.to_string(),
            currency: checkout.total_amount.currency.as_str().to_string(),
            minor_unit: checkout.total_amount.minor_unit,
            value: checkout.total_amount.value,
            description: checkout.description.clone(),
        })?;
        Ok(json!({"data": {"client_transaction_id": "txn_1"}}))
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

fn test_server(gateway: Arc<RecordingGateway>) -> TestServer {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        merchant_code: MERCHANT_CODE.to_string(),
        environment: "test".to_string(),
    };
    let state = AppState::with_gateway(gateway, config);
    TestServer::new(create_router(state)).unwrap()
}

// =============================================================================
// GET /readers
// =============================================================================

#[tokio::test]
async fn list_readers_passes_payload_through() {
    let gateway = RecordingGateway::new(false);
    let server = test_server(gateway.clone());

    let response = server.get("/readers").await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({"items": [{"id": "rdr_1", "name": "Counter 1"}]}));
    assert_eq!(
        gateway.calls(),
        vec![GatewayCall::List {
            merchant_code: MERCHANT_CODE.to_string()
        }]
    );
}

#[tokio::test]
async fn list_readers_upstream_failure_is_generic_500() {
    let gateway = RecordingGateway::new(true);
    let server = test_server(gateway);

    let response = server.get("/readers").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({"error": "failed to list readers"}));
}

// =============================================================================
// POST /readers
// =============================================================================

#[tokio::test]
async fn register_reader_trims_and_forwards() {
    let gateway = RecordingGateway::new(false);
    let server = test_server(gateway.clone());

    let response = server
        .post("/readers")
        .json(&json!({"pairing_code": "  ABC123 ", "name": " Counter 1 "}))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({"id": "rdr_9", "name": "Counter 1", "status": "paired"}));
    assert_eq!(
        gateway.calls(),
        vec![GatewayCall::CreateReader {
            merchant_code: MERCHANT_CODE.to_string(),
            pairing_code: "ABC123".to_string(),
            name: "Counter 1".to_string(),
        }]
    );
}

#[tokio::test]
async fn register_reader_rejects_blank_fields_without_calling_gateway() {
    let gateway = RecordingGateway::new(false);
    let server = test_server(gateway.clone());

    for body in [
        json!({"pairing_code": "   ", "name": "Counter 1"}),
        json!({"pairing_code": "ABC123", "name": ""}),
        json!({"name": "Counter 1"}),
        json!({}),
    ] {
        let response = server.post("/readers").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({"error": "pairing_code and name are required"}));
    }

    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn register_reader_rejects_malformed_json() {
    let gateway = RecordingGateway::new(false);
    let server = test_server(gateway.clone());

    let response = server
        .post("/readers")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "invalid json"}));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn register_reader_upstream_failure_is_generic_500() {
    let gateway = RecordingGateway::new(true);
    let server = test_server(gateway);

    let response = server
        .post("/readers")
        .json(&json!({"pairing_code": "ABC123", "name": "Counter 1"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({"error": "failed to create reader"}));
}

// =============================================================================
// POST /readers/{reader_id}/checkout
// =============================================================================

#[tokio::test]
async fn checkout_converts_amount_to_minor_units() {
    let gateway = RecordingGateway::new(false);
    let server = test_server(gateway.clone());

    let response = server
        .post("/readers/abc/checkout")
        .json(&json!({"amount": 5}))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({"data": {"client_transaction_id": "txn_1"}}));
    assert_eq!(
        gateway.calls(),
        vec![GatewayCall::CreateCheckout {
            merchant_code: MERCHANT_CODE.to_string(),
            reader_id: "abc".to_string(),
            currency: "EUR".to_string(),
            minor_unit: 2,
            value: 500,
            description: Some("Card reader checkout".to_string()),
        }]
    );
}

#[tokio::test]
async fn checkout_rounding_is_pinned() {
    let gateway = RecordingGateway::new(false);
    let server = test_server(gateway.clone());

    server
        .post("/readers/abc/checkout")
        .json(&json!({"amount": 10.00}))
        .await
        .assert_status(StatusCode::CREATED);
    // 12.345 scales to a float product just under 1234.5
    server
        .post("/readers/abc/checkout")
        .json(&json!({"amount": 12.345}))
        .await
        .assert_status(StatusCode::CREATED);

    let values: Vec<i64> = gateway
        .calls()
        .iter()
        .map(|call| match call {
            GatewayCall::CreateCheckout { value, .. } => *value,
            other => panic!("unexpected call {:?}", other),
        })
        .collect();
    assert_eq!(values, vec![1000, 1234]);
}

#[tokio::test]
async fn checkout_rejects_non_positive_amounts_without_calling_gateway() {
    let gateway = RecordingGateway::new(false);
    let server = test_server(gateway.clone());

    for body in [json!({"amount": 0}), json!({"amount": -3.5})] {
        let response = server.post("/readers/abc/checkout").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({"error": "amount must be a positive number"}));
    }

    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn checkout_rejects_non_numeric_amount_without_calling_gateway() {
    let gateway = RecordingGateway::new(false);
    let server = test_server(gateway.clone());

    let response = server
        .post("/readers/abc/checkout")
        .json(&json!({"amount": "five"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "invalid json"}));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn checkout_rejects_blank_reader_id() {
    let gateway = RecordingGateway::new(false);
    let server = test_server(gateway.clone());

    let response = server
        .post("/readers/%20%20/checkout")
        .json(&json!({"amount": 5}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "readerId is required"}));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn checkout_upstream_failure_is_generic_500() {
    let gateway = RecordingGateway::new(true);
    let server = test_server(gateway);

    let response = server
        .post("/readers/abc/checkout")
        .json(&json!({"amount": 5}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({"error": "failed to create reader checkout"}));
}

// =============================================================================
// Routing misses
// =============================================================================

#[tokio::test]
async fn wrong_suffix_under_readers_is_404() {
    let gateway = RecordingGateway::new(false);
    let server = test_server(gateway.clone());

    let response = server
        .post("/readers/abc/refund")
        .json(&json!({"amount": 5}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "");
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn unmatched_methods_are_404_not_405() {
    let gateway = RecordingGateway::new(false);
    let server = test_server(gateway.clone());

    let response = server.delete("/readers").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "");

    let response = server.get("/readers/abc/checkout").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "");

    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn extra_path_segments_are_404() {
    let gateway = RecordingGateway::new(false);
    let server = test_server(gateway.clone());

    let response = server
        .post("/readers/abc/checkout/extra")
        .json(&json!({"amount": 5}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(gateway.calls().is_empty());
}
