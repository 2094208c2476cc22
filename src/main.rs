use crate::controller::{receive_file, send_file};
use crate::middleware::cors::{apply_cors, method_not_allowed, preflight};
use crate::model::app_state::AppState;
use crate::shared::configuration::initialize;
use crate::shared::constants::{DOWNLOAD_ROUTE, UPLOAD_ROUTE};
use crate::shared::storage::ensure_storage_roots;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod controller;
mod middleware;
mod model;
mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let configuration = initialize()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configuration.log_level.to_lowercase()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    ensure_storage_roots(&configuration)?;

    let app = build_router(AppState::from(&configuration));
    let listener = tokio::net::TcpListener::bind(&configuration.server_bind_point).await?;
    tracing::info!("Serving file transfers on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let max_body_size = state.max_body_size;
    Router::new()
        .route(
            UPLOAD_ROUTE,
            post(receive_file)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            DOWNLOAD_ROUTE,
            post(send_file)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(axum::middleware::from_fn(apply_cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
