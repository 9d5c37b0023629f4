//! # pay-api
//!
//! HTTP layer for terminal-pay-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints forwarding to the reader gateway
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/readers` | List readers |
//! | POST | `/readers` | Register a reader |
//! | POST | `/readers/{reader_id}/checkout` | Create a reader checkout |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
