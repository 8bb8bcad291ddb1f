use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Content type for RFC 7807 problem responses
pub const PROBLEM_JSON: &str = "application/problem+json";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Customer [id={0}] is not found")]
    CustomerNotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Movie service error: {0}")]
    MovieService(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// RFC 7807 problem detail body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Request path, filled in by the problem-instance middleware
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetail {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            problem_type: "about:blank".to_string(),
            title: title.into(),
            status: status.as_u16(),
            detail,
            instance: None,
        }
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for ProblemDetail {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(&self)).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
        response.extensions_mut().insert(self);
        response
    }
}

impl AppError {
    /// Maps the error onto its HTTP status and problem title
    pub fn status_and_title(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::CustomerNotFound(_) => (StatusCode::NOT_FOUND, "Customer Not Found"),
            AppError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            AppError::UnsupportedMediaType(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type")
            }
            AppError::MovieService(_) => (StatusCode::BAD_GATEWAY, "Movie Service Unavailable"),
            AppError::HttpClient(e) if e.is_timeout() => {
                (StatusCode::GATEWAY_TIMEOUT, "Movie Service Timeout")
            }
            AppError::HttpClient(_) => (StatusCode::BAD_GATEWAY, "Movie Service Unavailable"),
            AppError::Database(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title) = self.status_and_title();

        let detail = if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
            match self {
                // Internal failures are logged, not leaked
                AppError::Database(_) | AppError::Internal(_) => None,
                other => Some(other.to_string()),
            }
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
            Some(match self {
                AppError::InvalidInput(msg) | AppError::UnsupportedMediaType(msg) => msg,
                other => other.to_string(),
            })
        };

        ProblemDetail::new(status, title, detail).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn problem_of(err: AppError) -> (StatusCode, ProblemDetail, Option<HeaderValue>) {
        let response = err.into_response();
        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let bytes = to_bytes(response.into_body(), 4096).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap(), content_type)
    }

    #[tokio::test]
    async fn test_customer_not_found_problem() {
        let (status, problem, content_type) = problem_of(AppError::CustomerNotFound(10)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(problem.title, "Customer Not Found");
        assert_eq!(problem.status, 404);
        assert_eq!(problem.problem_type, "about:blank");
        assert_eq!(problem.detail.as_deref(), Some("Customer [id=10] is not found"));
        assert_eq!(problem.instance, None);
        assert_eq!(content_type.unwrap(), PROBLEM_JSON);
    }

    #[tokio::test]
    async fn test_problem_is_kept_in_extensions() {
        let response = AppError::CustomerNotFound(3).into_response();
        let problem = response.extensions().get::<ProblemDetail>().unwrap();

        assert_eq!(problem.title, "Customer Not Found");
        assert_eq!(problem.status, 404);
    }

    #[test]
    fn test_instance_serialization() {
        let problem = ProblemDetail::new(StatusCode::NOT_FOUND, "Customer Not Found", None);
        let json = serde_json::to_value(&problem).unwrap();
        assert!(json.get("instance").is_none());

        let json = serde_json::to_value(problem.with_instance("/api/customers/10")).unwrap();
        assert_eq!(json["instance"], "/api/customers/10");
    }

    #[tokio::test]
    async fn test_unsupported_media_type_problem() {
        let (status, problem, _) = problem_of(AppError::UnsupportedMediaType(
            "Expected request with `Content-Type: application/json`".to_string(),
        ))
        .await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(problem.title, "Unsupported Media Type");
    }

    #[tokio::test]
    async fn test_invalid_input_problem() {
        let (status, problem, _) =
            problem_of(AppError::InvalidInput("unknown genre".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(problem.title, "Bad Request");
        assert_eq!(problem.detail.as_deref(), Some("unknown genre"));
    }

    #[tokio::test]
    async fn test_movie_service_problem_is_not_not_found() {
        let (status, problem, _) =
            problem_of(AppError::MovieService("status 500".to_string())).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(problem.title, "Movie Service Unavailable");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let (status, problem, _) =
            problem_of(AppError::Internal("pool exhausted".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(problem.title, "Internal Server Error");
        assert_eq!(problem.detail, None);
    }
}
