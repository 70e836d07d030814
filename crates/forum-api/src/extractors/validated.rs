//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies using the validator crate.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use validator::Validate;

use crate::response::ApiError;

/// Client-facing message when a body is not JSON at all
pub const MALFORMED_BODY: &str = "Malformed request body";

/// Validated JSON extractor
///
/// The body is parsed as JSON whatever the `Content-Type` header says.
/// A well-formed document of the wrong shape, or one that fails its
/// validation rules, is `ApiError::Unprocessable`. Bytes that are not JSON
/// at all are `ApiError::Internal`; handlers can relabel them with
/// [`ApiError::with_context`].
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::internal(MALFORMED_BODY, anyhow::anyhow!(e.body_text())))?;

        let value: T = serde_json::from_slice(&bytes).map_err(|e| match e.classify() {
            Category::Data => ApiError::unprocessable(e.to_string()),
            Category::Syntax | Category::Eof | Category::Io => ApiError::internal(MALFORMED_BODY, e),
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
