//! # Terminal-Pay RS
//!
//! HTTP façade over the SumUp card-reader API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export SUMUP_API_KEY=sup_sk_...
//! export SUMUP_MERCHANT_CODE=MC1001
//!
//! # Run the server
//! terminal-pay
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state; missing credentials abort here,
    // before any socket is bound
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Merchant: {}", state.config.merchant_code);
    info!("Payment provider: {}", state.gateway.provider_name());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("⚡ terminal-pay listening on http://{}", addr);

    if !is_prod {
        info!("📟 Readers:  GET|POST http://{}/readers", addr);
        info!("💳 Checkout: POST http://{}/readers/{{reader_id}}/checkout", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
