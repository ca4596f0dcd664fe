//! HTTP handlers for the crimemap API.
//!
//! Handlers decode the request, run it through validation and the
//! repository traits, and encode the response. They depend only on the
//! traits in `crimemap-core`, never on the concrete storage layer.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;
use utoipa::OpenApi as _;

use crimemap_core::{Category, Crime, CrimeFilter, Error};

use crate::{ApiDoc, AppState};

/// `GET /health` response body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct Health {
    pub healthy: bool,
    pub version: String,
}

/// `GET /health`
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses((status = 200, description = "Service is up", body = Health))
)]
pub async fn health() -> Json<Health> {
    Json(Health {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /getAll`
///
/// Queries crimes inside a bounding box and date range, minus any IDs the
/// client already holds.
#[utoipa::path(
    post,
    path = "/getAll",
    tag = "Crimes",
    request_body = CrimeFilter,
    responses(
        (status = 200, description = "Crimes matching the filter", body = [Crime]),
        (status = 400, description = "Malformed body or invalid filter"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_crimes(
    State(state): State<AppState>,
    payload: Result<Json<CrimeFilter>, JsonRejection>,
) -> Result<Json<Vec<Crime>>, ApiError> {
    let Json(filter) =
        payload.map_err(|e| ApiError::BadRequest(format!("Invalid JSON input: {e}")))?;

    let validated = filter
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let crimes = state.crimes.find_in_region(&validated).await?;
    Ok(Json(crimes))
}

/// `GET /categories`
///
/// Returns the category taxonomy as a nested tree.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Category tree", body = [Category]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let tree = state.categories.fetch_tree().await?;
    Ok(Json(tree))
}

/// `GET /api-docs/openapi.json`
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// HTTP-facing error type.
///
/// Client errors carry their reason verbatim; storage failures are logged
/// with the full cause and surfaced as an opaque 500 so internals never
/// leak to the client.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Storage(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(e) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Storage(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Storage(err) => {
                error!(
                    subsystem = "api",
                    error = %err,
                    "Storage failure while serving request"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
