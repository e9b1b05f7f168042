use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {}", errors.join("; ")))
            }

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::Sqlx(err) => {
                    error!("❌ Repository failure surfaced to HTTP: {err}");
                    HttpError::Internal("Repository error".into())
                }
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn into_parts(err: HttpError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_message() {
        let err = HttpError::from(ServiceError::NotFound("product not found".into()));
        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.status, "error");
        assert_eq!(body.message, "product not found");
    }

    #[tokio::test]
    async fn already_exists_maps_to_409() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::AlreadyExists(
            "product with id 1 already exists".into(),
        )));
        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.message, "product with id 1 already exists");
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let err = HttpError::from(ServiceError::Validation(vec![
            "name: Name is required".into(),
            "price: Price cannot be negative".into(),
        ]));
        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.message.contains("name: Name is required"));
    }

    #[tokio::test]
    async fn database_errors_hide_details() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::Sqlx(
            sqlx::Error::PoolTimedOut,
        )));
        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Repository error");
    }
}
