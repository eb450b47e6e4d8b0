use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

use crate::{Res, api, config::Config, info, newsapi::NewsApi, success};

/// Builds the relay router around a News API client.
pub fn router(news: NewsApi) -> Router {
    let routes = Router::new()
        .route("/health", get(api::health))
        .route("/fetch_latest", post(api::fetch_latest))
        .route("/fetchnewsbycategory", post(api::fetch_news_by_category))
        .route("/HomeLatest", get(api::home_latest))
        .route("/fetch_trending", get(api::fetch_trending))
        .route("/fetch_Random", post(api::fetch_random))
        .layer(Extension(news));

    layered(routes)
}

/// Wraps routes in the relay's outer layers.
///
/// Any origin may call the relay, and a panicking handler is turned into a
/// 500 response instead of tearing down the connection.
pub fn layered(routes: Router) -> Router {
    routes
        .layer(CatchPanicLayer::new())
        .layer(CorsLayer::permissive())
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn start_api_server(config: Config) -> Res<()> {
    let config = Arc::new(config);
    let news = NewsApi::new(Arc::clone(&config))?;

    let listener = TcpListener::bind(config.server_addr()).await?;
    success!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, router(news))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down...");
    }
}
