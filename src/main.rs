mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let collections = startup::select_storage(&config).await;
    startup::seed_database(&collections).await?;

    let app = router::router().with_state(AppState::new(collections));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Starting server on http://{}", config.bind_addr);
    tracing::info!("API documentation available at http://{}/api/docs", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
