use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::data::leaderboard::LeaderboardStore;
use crate::routes;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub leaderboard: Arc<RwLock<LeaderboardStore>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            leaderboard: Arc::new(RwLock::new(LeaderboardStore::new())),
        }
    }
}

/// Create the application router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root_handler))
        .route(
            "/leaderboard",
            get(routes::leaderboard_handler)
                .post(routes::submit_score_handler)
                .delete(routes::clear_leaderboard_handler),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
