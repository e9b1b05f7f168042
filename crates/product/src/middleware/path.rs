use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Path extractor whose rejections use the service's error JSON instead of plain text.
pub struct SimplePath<T>(pub T);

impl<S, T> FromRequestParts<S> for SimplePath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                let payload = json!({
                    "status": "error",
                    "message": rejection.body_text(),
                });
                (rejection.status(), axum::Json(payload))
            })?;

        Ok(Self(value))
    }
}
