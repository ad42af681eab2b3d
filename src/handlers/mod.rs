// src/handlers/mod.rs

pub mod auth;
pub mod health;
pub mod tasks;

use std::sync::Arc;

use crate::auth::JwtService;
use crate::storage::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub jwt: Arc<JwtService>,
}
