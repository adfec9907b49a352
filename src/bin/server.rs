//! Listing server: loads `.env`, connects the pool, bootstraps `imoveis`, serves the API.

use imoveis_service::{app, connect_pool, ensure_imoveis_table, AppState, DbConfig, PgPropertyStore, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("imoveis_service=info,tower_http=info")),
        )
        .init();

    let db = DbConfig::from_env()?;
    let server = ServerConfig::from_env()?;
    tracing::info!(config = ?db, "connecting to database");

    let pool = connect_pool(&db).await?;
    ensure_imoveis_table(&pool).await?;

    let state = AppState::new(PgPropertyStore::new(pool));
    let router = app(state, server.body_limit);

    let listener = TcpListener::bind(server.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
