// src/main.rs

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskd::auth::JwtService;
use taskd::cli::{Cli, CliHandler, Commands};
use taskd::handlers::AppState;
use taskd::storage::Store;
use taskd::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskd=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    tracing::info!("Starting taskd v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {:?}", config.storage.data_dir);

    let store = Arc::new(Store::open(&config.storage.data_dir).await?);

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::User(user_cmd)) => {
            let handler = CliHandler::new(store);
            handler.handle_user_command(user_cmd).await?;
            Ok(())
        }
        Some(Commands::Serve) | None => run_server(config, store).await,
    }
}

async fn run_server(config: Arc<Config>, store: Arc<Store>) -> anyhow::Result<()> {
    let state = AppState {
        store,
        jwt: Arc::new(JwtService::new(&config.auth)),
    };

    let app = taskd::app::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
