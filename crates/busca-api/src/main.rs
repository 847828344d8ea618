mod config;
mod directory;
mod error;
mod routes;

use std::sync::Arc;

use config::AppConfig;
use directory::StudentDirectory;
use routes::{app_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only load .env in development; production uses platform-native env injection.
    #[cfg(debug_assertions)]
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("busca_api=info".parse().expect("valid directive")),
        )
        .init();

    let config = Arc::new(AppConfig::from_env()?);
    tracing::info!("Starting busca-api with config: {:?}", config);

    let directory = StudentDirectory::load(&config.students_file)?;
    tracing::info!(
        "Loaded {} students from {}",
        directory.count(),
        config.students_file.display()
    );

    let state = AppState::new(config, directory);
    let bind_addr = state.config.bind_addr.clone();
    let router = app_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("busca-api listening on {}", bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
