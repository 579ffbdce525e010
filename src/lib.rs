pub mod config;
pub mod db;
pub mod logging;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod view;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::Database;
use crate::state::AppState;

pub async fn create_app() -> axum::Router {
    let db = Database::from_env().await.ok().flatten();
    let state = AppState::new(db);

    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
