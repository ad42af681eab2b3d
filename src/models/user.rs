// src/models/user.rs

use serde::{Deserialize, Serialize};

/// A registered account. The record is persisted as-is in the users
/// snapshot and is never returned over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub username: String,
    pub password_hash: String,
}

/// Body of POST /register and POST /login. Fields are optional so that
/// missing input surfaces as a 400/401 from the handler instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
