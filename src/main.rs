use std::sync::Arc;

use exercise_tracker::api::routes::create_routes;
use exercise_tracker::config::{run_migrations, AppConfig, DatabaseConfig};
use exercise_tracker::storage::PgStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let db_config = DatabaseConfig::from_env()?;
    let pool = db_config.create_pool().await?;
    info!("Database connected");

    run_migrations(&pool).await?;

    let app = create_routes(Arc::new(PgStore::new(pool)), &config);

    let listener = TcpListener::bind(config.server_address()).await?;
    info!("Exercise tracker listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
