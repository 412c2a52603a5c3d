//! JSON body extractor that never rejects.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;

/// Extracts the request body as `Option<T>`.
///
/// Yields `None` when the body is empty, is not valid JSON, does not
/// deserialize into `T`, or cannot be read. The `Content-Type` header is not
/// inspected. Handlers decide what a missing payload means instead of axum
/// answering with its own rejection body.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::OptionalJson;
/// use serde_json::Value;
///
/// async fn create(OptionalJson(payload): OptionalJson<Value>) -> String {
///     match payload {
///         Some(value) => value.to_string(),
///         None => "no payload".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Failed to read request body");
                return Ok(OptionalJson(None));
            }
        };

        if bytes.is_empty() {
            return Ok(OptionalJson(None));
        }

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => Ok(OptionalJson(Some(value))),
            Err(e) => {
                tracing::debug!(error = %e, "Request body is not valid JSON");
                Ok(OptionalJson(None))
            }
        }
    }
}
