//! Health check and welcome endpoints.
//!
//! Used by load balancers, monitoring and anyone curious enough to open the
//! server root in a browser.

use crate::state::AppState;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"OK"` while the process serves requests
    pub status: &'static str,
    /// Time the check was answered
    pub timestamp: DateTime<Utc>,
    /// Deployment environment (`APP_ENV`)
    pub environment: String,
}

/// Welcome response.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    /// Greeting
    pub message: &'static str,
}

/// Liveness check. Does not touch the store or any external API.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "environment": "development"
/// }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
        environment: state.environment,
    })
}

/// `GET /`
#[allow(clippy::unused_async)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Todo Summary Assistant Backend is running!",
    })
}
