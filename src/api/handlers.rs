use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{CustomerResponse, GenreUpdateRequest},
};

use super::AppState;

// Health types

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Up,
    Down,
}

#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    pub status: HealthStatus,
    pub details: BTreeMap<&'static str, String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub components: BTreeMap<&'static str, ComponentHealth>,
}

impl HealthResponse {
    fn status_code(&self) -> StatusCode {
        match self.status {
            HealthStatus::Up => StatusCode::OK,
            HealthStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

fn genre_update(
    body: Result<Json<GenreUpdateRequest>, JsonRejection>,
) -> AppResult<GenreUpdateRequest> {
    match body {
        Ok(Json(request)) => Ok(request),
        Err(JsonRejection::MissingJsonContentType(rejection)) => {
            Err(AppError::UnsupportedMediaType(rejection.body_text()))
        }
        Err(rejection) => Err(AppError::InvalidInput(rejection.body_text())),
    }
}

fn customer_id(path: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))
}

// Handlers

/// Aggregate health, including the customer store
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let repository = state.customers.repository();

    let mut details = BTreeMap::new();
    details.insert("store", repository.name().to_string());

    let db_status = match repository.ping().await {
        Ok(()) => HealthStatus::Up,
        Err(e) => {
            // Only the status is reported; the cause stays in the logs
            tracing::warn!(error = %e, store = repository.name(), "Customer store health check failed");
            HealthStatus::Down
        }
    };

    let mut components = BTreeMap::new();
    components.insert(
        "db",
        ComponentHealth {
            status: db_status,
            details,
        },
    );

    let response = HealthResponse {
        status: db_status,
        components,
    };
    (response.status_code(), Json(response))
}

/// Liveness only reports that the process is serving requests
pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Up,
        components: BTreeMap::new(),
    })
}

/// Get a customer with movie recommendations for their favorite genre
pub async fn get_customer(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<CustomerResponse>> {
    let id = customer_id(path)?;
    tracing::info!(request_id = %request_id, customer_id = id, "Fetching customer");

    let response = state.customers.get_customer(id).await?;
    Ok(Json(response))
}

/// Replace a customer's favorite genre
pub async fn update_genre(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<GenreUpdateRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let id = customer_id(path)?;
    let request = genre_update(body)?;

    tracing::info!(
        request_id = %request_id,
        customer_id = id,
        genre = %request.genre,
        "Updating customer genre"
    );

    state.customers.update_genre(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}
