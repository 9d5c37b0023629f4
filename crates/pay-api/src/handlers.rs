//! # Request Handlers
//!
//! Axum request handlers for the reader façade. Each handler validates and
//! normalizes its input, makes at most one gateway call, and converts any
//! failure into a JSON error response on the spot.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pay_core::{Currency, Money, PaymentError, ReaderCheckout, ReaderRegistration};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument};

/// Description attached to every reader checkout
const CHECKOUT_DESCRIPTION: &str = "Card reader checkout";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Register reader request
#[derive(Debug, Deserialize)]
pub struct CreateReaderRequest {
    /// Pairing code shown on the reader's display
    #[serde(default)]
    pub pairing_code: String,
    /// Display name for the reader
    #[serde(default)]
    pub name: String,
}

/// Create reader checkout request
#[derive(Debug, Deserialize)]
pub struct CreateReaderCheckoutRequest {
    /// Amount in decimal currency units (EUR)
    pub amount: f64,
}

/// Error response; the wire contract is exactly `{"error": "<message>"}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: &str) -> HandlerError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// Surface a validation failure with the exact inner message
fn validation_failure(err: PaymentError) -> HandlerError {
    let message = match err {
        PaymentError::InvalidRequest(msg) => msg,
        other => other.to_string(),
    };
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// Log the upstream failure and hand the caller a generic message
fn upstream_failure(context: &'static str, err: PaymentError) -> HandlerError {
    error!("{}: {}", context, err);
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(context)))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "terminal-pay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fallback for unmatched paths and methods: 404 with an empty body
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// List the readers paired with the merchant account
#[instrument(skip(state))]
pub async fn list_readers(
    State(state): State<AppState>,
) -> Result<Json<Value>, HandlerError> {
    let readers = state
        .gateway
        .list_readers(state.merchant_code())
        .await
        .map_err(|e| upstream_failure("failed to list readers", e))?;

    Ok(Json(readers))
}

/// Pair a new reader with the merchant account
#[instrument(skip(state, payload))]
pub async fn create_reader(
    State(state): State<AppState>,
    payload: Result<Json<CreateReaderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), HandlerError> {
    let Json(request) = payload.map_err(|_| bad_request("invalid json"))?;

    let registration = ReaderRegistration::new(&request.pairing_code, &request.name)
        .map_err(validation_failure)?;

    let reader = state
        .gateway
        .create_reader(state.merchant_code(), &registration)
        .await
        .map_err(|e| upstream_failure("failed to create reader", e))?;

    info!("Registered reader '{}'", registration.name);

    Ok((StatusCode::CREATED, Json(reader)))
}

/// Trigger a checkout on a specific reader
#[instrument(skip(state, payload), fields(reader_id = %reader_id))]
pub async fn create_reader_checkout(
    State(state): State<AppState>,
    Path(reader_id): Path<String>,
    payload: Result<Json<CreateReaderCheckoutRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), HandlerError> {
    let reader_id = reader_id.trim();
    if reader_id.is_empty() {
        return Err(bad_request("readerId is required"));
    }

    let Json(request) = payload.map_err(|_| bad_request("invalid json"))?;

    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(bad_request("amount must be a positive number"));
    }

    let checkout = ReaderCheckout::new(Money::from_major_units(request.amount, Currency::EUR))
        .with_description(CHECKOUT_DESCRIPTION);

    info!(
        "Creating checkout of {} on reader {}",
        checkout.total_amount.display(),
        reader_id
    );

    let record = state
        .gateway
        .create_reader_checkout(state.merchant_code(), reader_id, &checkout)
        .await
        .map_err(|e| upstream_failure("failed to create reader checkout", e))?;

    Ok((StatusCode::CREATED, Json(record)))
}
