// src/config.rs

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Signing secret for bearer tokens. Never baked into the binary;
    /// must arrive via config file or TASKD_AUTH__JWT_SECRET.
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default = "default_expiry_hours")]
    pub token_expiry_hours: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

fn default_expiry_hours() -> i64 {
    24
}

impl Config {
    pub fn load() -> anyhow::Result<Arc<Self>> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .set_default("storage.data_dir", "./data")?
            .set_default("auth.jwt_secret", "")?
            .set_default("auth.token_expiry_hours", 24_i64)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("TASKD").separator("__"))
            .build()?;

        let config: Config = config.try_deserialize()?;

        if config.auth.jwt_secret.is_empty() {
            anyhow::bail!(
                "auth.jwt_secret is not set; supply it via config file or TASKD_AUTH__JWT_SECRET"
            );
        }

        Ok(Arc::new(config))
    }
}
