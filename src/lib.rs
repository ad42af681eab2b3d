// src/lib.rs

pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod storage;

pub use config::Config;
pub use error::{AppError, AppResult};
