use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::auth::token::verify_token;

/// Bearer token extractor for protected routes
///
/// Every resource route requires a valid API token; the extractor rejects
/// the request with 401 before the handler body runs.
///
/// Usage:
/// ```rust
/// use teamroster_api::api::middleware::auth::BearerAuth;
///
/// async fn protected_handler(_auth: BearerAuth) -> &'static str {
///     "ok"
/// }
/// ```
pub struct BearerAuth;

#[async_trait]
impl<S> FromRequestParts<S> for BearerAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Extract the authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

        // Extract bearer token
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>"))?;

        // Get expected API token from environment
        let expected = std::env::var("API_TOKEN").unwrap_or_else(|_| "dev-api-token".to_string());

        // Verify the token
        verify_token(token, &expected).map_err(|e| ApiError::unauthorized(e))?;

        Ok(BearerAuth)
    }
}
