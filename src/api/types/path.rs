//! Path extractor whose rejections use the API error envelope

use axum::{
    extract::{path::ErrorKind, rejection::PathRejection, FromRequestParts, Path as AxumPath},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Wrapper around `axum::extract::Path` that reports bad segments as `ApiError`
#[derive(Debug, Clone, Copy, Default)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumPath::<T>::from_request_parts(parts, state).await {
            Ok(AxumPath(value)) => Ok(Path(value)),
            Err(rejection) => {
                let message = rejection_message(&rejection);
                Err(ApiError::bad_request(message).with_code("invalid_path_param"))
            }
        }
    }
}

fn rejection_message(rejection: &PathRejection) -> String {
    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => match err.kind() {
            ErrorKind::ParseErrorAtKey { key, value, .. } => {
                format!("Invalid path parameter '{}': '{}' is not a valid id", key, value)
            }
            ErrorKind::ParseError { value, .. } | ErrorKind::ParseErrorAtIndex { value, .. } => {
                format!("Invalid path parameter: '{}' is not a valid id", value)
            }
            _ => format!("Invalid path parameter: {}", err.body_text()),
        },
        _ => "Invalid path parameters".to_string(),
    }
}
