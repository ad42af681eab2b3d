// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, Json};

use super::AppState;
use crate::auth::password;
use crate::error::{AppError, AppResult};
use crate::models::{CredentialsRequest, LoginResponse, MessageResponse};

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (username, password) = require_credentials(req)?;

    let password_hash = password::hash_password(&password)?;
    state.store.register_user(&username, password_hash).await?;

    tracing::info!(%username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> AppResult<Json<LoginResponse>> {
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let user = state
        .store
        .find_user(&username)
        .await
        .ok_or_else(|| AppError::AuthError("Invalid username or password".to_string()))?;

    if !password::verify_password(&password, &user.password_hash) {
        return Err(AppError::AuthError(
            "Invalid username or password".to_string(),
        ));
    }

    let access_token = state.jwt.generate_token(&user.username)?;
    Ok(Json(LoginResponse { access_token }))
}

fn require_credentials(req: CredentialsRequest) -> AppResult<(String, String)> {
    match (req.username, req.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok((u, p)),
        _ => Err(AppError::ValidationError(
            "Username and password required".to_string(),
        )),
    }
}
