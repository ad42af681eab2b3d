// src/auth/middleware.rs

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::jwt::JwtService;
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct AuthState {
    pub jwt_service: Arc<JwtService>,
}

/// Validates the bearer token and stores the claims in request extensions
/// for handlers to read the caller's identity from.
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&request)?;
    let claims = auth_state.jwt_service.validate_token(&token)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

fn extract_token(request: &Request) -> AppResult<String> {
    if let Some(auth_header) = request.headers().get(AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::AuthError("Invalid authorization header".to_string()))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(token.trim().to_string());
        }
    }

    Err(AppError::AuthError(
        "Missing authentication token".to_string(),
    ))
}
