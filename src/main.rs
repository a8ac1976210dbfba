use std::sync::Arc;

use anyhow::Result;
use courier::{
    config::Config, infrastructure::redis, routes::create_routes, state::AppState,
    usecases::publish::Publisher, utils::shutdown_signal,
};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let config = Arc::new(config);

    let redis_conn = redis::create_connection(&config.redis)?;
    let publisher = Arc::new(Publisher::new(redis_conn, config.channel.clone()));

    let state = AppState::new(config.clone(), publisher);

    let app = create_routes().with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(
        "courier running on {addr}, publishing to {}",
        config.channel
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
