//! Server binary: loads env config, ensures the schema, serves the router.

use entries_api::{app, connect, ensure_entries_table, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("entries_api=info".parse()?))
        .init();

    let config = Config::from_env();
    let pool = connect(&config.database_url).await?;
    ensure_entries_table(&pool).await?;

    let state = AppState { pool };
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
