mod health;
mod words;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/word/create-word", post(words::create_word))
        .route("/api/word/get-words", get(words::get_words))
        .route("/api/word/words-by-day", get(words::words_by_day))
        .route("/api/word/search", get(words::search_words))
        .nest("/health", health::router())
        .fallback(fallback_handler)
        .with_state(state)
}

async fn fallback_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<Option<()>>::fail("找不到資源", None)),
    )
        .into_response()
}
