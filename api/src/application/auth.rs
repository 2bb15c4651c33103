use axum::{
    extract::{Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use wasfa_core::domain::user::{ports::UserRepository, value_objects::Identity};

use super::http::server::app_state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// The authenticated user id.
    pub sub: Uuid,
    pub exp: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token not found")]
    TokenNotFound,
    #[error("Unknown user")]
    UnknownUser,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::InvalidToken => "Invalid token",
            AuthError::TokenNotFound => "Token not found",
            AuthError::UnknownUser => "Unknown user",
        };

        let error_response = ErrorResponse {
            code: "E_UNAUTHORIZED".to_string(),
            message: message.to_string(),
            status: StatusCode::UNAUTHORIZED.as_u16() as i64,
        };

        let body = serde_json::to_string(&error_response).unwrap_or_else(|_| {
            r#"{"code":"INTERNAL_SERVER_ERROR","message":"Failed to serialize error response"}"#
                .to_string()
        });

        Response::builder()
            .status(StatusCode::UNAUTHORIZED)
            .header("Content-Type", "application/json")
            .body(body.clone().into())
            .unwrap_or_else(|_| Response::new(body.into()))
    }
}

/// Decodes a bearer JWT, loads the user, and injects [`Identity`] into the
/// request extensions. Requests without a valid token continue anonymously;
/// [`RequiredIdentity`] turns that into a 401 where auth is mandatory.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(auth_header) = req.headers().get("authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
        && !token.is_empty()
    {
        let key = DecodingKey::from_secret(state.args.server.jwt_secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);

        if let Ok(data) = decode::<JwtClaims>(token, &key, &validation)
            && let Ok(Some(user)) = state.service.user_repository.get_by_id(data.claims.sub).await
        {
            req.extensions_mut().insert(Identity::User(user));
        }
    }

    Ok(next.run(req).await)
}

/// Extractor for endpoints that demand an authenticated caller.
pub struct RequiredIdentity(pub Identity);

impl<S> axum::extract::FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or(AuthError::TokenNotFound)
    }
}

/// Extractor for public endpoints whose behavior widens when a caller is
/// authenticated.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> axum::extract::FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}
