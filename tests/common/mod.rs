use axum::Router;

pub async fn create_test_app() -> Router {
    std::env::set_var("DATABASE_URL", "");
    std::env::set_var("DB_HOST", "");

    toeic_vocab_backend::create_app().await
}
