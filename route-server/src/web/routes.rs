//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::planner::Planner;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", post(find_routes))
        .route("/network/summary", post(network_summary))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find ranked routes between two stations.
///
/// A missing origin or destination is not an error: it simply has no
/// routes, like any other unsatisfiable request.
async fn find_routes(
    State(state): State<AppState>,
    payload: Result<Json<FindRoutesRequest>, JsonRejection>,
) -> Result<Json<FindRoutesResponse>, AppError> {
    let Json(req) = payload?;

    let (Some(origin), Some(destination)) = (&req.origin, &req.destination) else {
        return Ok(Json(FindRoutesResponse::empty()));
    };
    let network = req.network.as_ref().unwrap_or(state.network.as_ref());

    let planner = Planner::new(&state.config, &state.palette);
    let result = planner.search(origin, destination, network);

    Ok(Json(FindRoutesResponse::from_result(&result)))
}

/// Summarise a network: size, interchanges and structural problems.
async fn network_summary(
    State(state): State<AppState>,
    payload: Result<Json<NetworkSummaryRequest>, JsonRejection>,
) -> Result<Json<NetworkSummary>, AppError> {
    let Json(req) = payload?;
    let network = req.network.as_ref().unwrap_or(state.network.as_ref());

    Ok(Json(NetworkSummary::from_network(network)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The request body was not acceptable JSON for the endpoint
    InvalidBody { status: StatusCode, message: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // Valid JSON that doesn't fit the request shape is still a bad request
        let status = match &rejection {
            JsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
            _ => rejection.status(),
        };
        AppError::InvalidBody {
            status,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidBody { status, message } => (status, message),
        };

        warn!(%status, %message, "Request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
