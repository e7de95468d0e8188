//! Task service entry point.

mod model;
mod routes;
mod store;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::routes::build_router;
use crate::store::TaskStore;

/// Port the UI's API client is pointed at.
const BIND_ADDR: &str = "127.0.0.1:8081";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("task_manager_server=debug,tower_http=debug,info")
        }))
        .init();

    let store = TaskStore::new();
    let router = build_router(store);

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    info!(addr = BIND_ADDR, "task service listening");
    axum::serve(listener, router).await?;

    Ok(())
}
