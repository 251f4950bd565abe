//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::planner::{PlanError, Planner};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/itinerary/plan", post(plan_itinerary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan an itinerary through the given addresses.
async fn plan_itinerary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanItineraryResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanItineraryRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid itinerary JSON");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let request = req.into_request().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let planner = Planner::new(state.oracle.as_ref());
    let segments = planner
        .plan_with_cancellation(&request, &state.shutdown)
        .await?;

    Ok(Json(PlanItineraryResponse { segments }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
    BadGateway { message: String },
    Unavailable { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        let message = e.to_string();
        match e {
            PlanError::Validation(_) | PlanError::TimeOutOfRange { .. } => {
                AppError::BadRequest { message }
            }
            PlanError::QueryFailure { .. } => AppError::Unprocessable { message },
            PlanError::Transport { .. } => AppError::BadGateway { message },
            PlanError::Cancelled { .. } => AppError::Unavailable { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        warn!(%status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
