use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn get_words_serves_the_seed_list_without_a_store() {
    let app = common::create_test_app().await;

    let response = app.oneshot(get("/api/word/get-words")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["code"], "S");

    let words = body["data"].as_array().unwrap();
    assert_eq!(words.len(), 12);
    assert_eq!(words[0]["engWord"], "resume");
    assert_eq!(words[0]["twWord"], "履歷表");
    assert_eq!(words[0]["day"], 1);
    assert!(words[0]["sentences"][0]["engSentences"]
        .as_str()
        .unwrap()
        .contains("resume"));
}

#[tokio::test]
async fn create_word_rejects_malformed_json() {
    let app = common::create_test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/word/create-word")
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["code"], "F");
    assert_eq!(body["message"], "請求參數不合法");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn create_word_reports_the_missing_field() {
    let app = common::create_test_app().await;

    let request = post_json(
        "/api/word/create-word",
        json!({
            "engWord": "",
            "twWord": "測試",
            "day": 1,
            "sentences": [{ "engSentences": "A test.", "twSentences": "測試。" }]
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["code"], "F");
    assert_eq!(body["message"], "英文單字為必要欄位");
}

#[tokio::test]
async fn create_word_names_the_failing_sentence() {
    let app = common::create_test_app().await;

    let request = post_json(
        "/api/word/create-word",
        json!({
            "engWord": "budget",
            "twWord": "預算",
            "day": 5,
            "sentences": [
                { "engSentences": "The budget is tight.", "twSentences": "預算很緊。" },
                { "engSentences": "Second sentence.", "twSentences": "" }
            ]
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["code"], "F");
    assert_eq!(body["message"], "第 2 個例句的中文句子為必要欄位");
}

#[tokio::test]
async fn create_word_fails_without_a_store() {
    let app = common::create_test_app().await;

    let request = post_json(
        "/api/word/create-word",
        json!({
            "engWord": "budget",
            "twWord": "預算",
            "day": 5,
            "sentences": [{ "engSentences": "The budget is tight.", "twSentences": "預算很緊。" }]
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["code"], "F");
    assert_eq!(body["message"], "無法連接到資料庫");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn words_by_day_filters_the_seed_list() {
    let app = common::create_test_app().await;

    let response = app
        .oneshot(get("/api/word/words-by-day?day=2"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["code"], "S");

    let words = body["data"].as_array().unwrap();
    let spellings: Vec<&str> = words.iter().map(|w| w["engWord"].as_str().unwrap()).collect();
    assert_eq!(spellings, ["interview", "experience", "qualification"]);
}

#[tokio::test]
async fn words_by_day_rejects_a_non_numeric_day() {
    let app = common::create_test_app().await;

    let response = app
        .oneshot(get("/api/word/words-by-day?day=abc"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["code"], "F");
    assert_eq!(body["message"], "學習日期必須為大於0的數字");
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn search_paginates_day_one_words() {
    let app = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(get("/api/word/search?day=1&page=1&pageSize=2"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["code"], "S");
    assert_eq!(body["data"]["total"], 3);

    let words = body["data"]["words"].as_array().unwrap();
    let spellings: Vec<&str> = words.iter().map(|w| w["engWord"].as_str().unwrap()).collect();
    assert_eq!(spellings, ["resume", "opening"]);

    let response = app
        .oneshot(get("/api/word/search?day=1&page=2&pageSize=2"))
        .await
        .unwrap();
    let body = body_json(response).await;
    let words = body["data"]["words"].as_array().unwrap();
    let spellings: Vec<&str> = words.iter().map(|w| w["engWord"].as_str().unwrap()).collect();
    assert_eq!(spellings, ["application"]);
}

#[tokio::test]
async fn search_matches_chinese_keyword_across_all_days() {
    let app = common::create_test_app().await;

    let response = app
        .oneshot(get("/api/word/search?keyword=%E9%9D%A2"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["code"], "S");
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["words"][0]["engWord"], "interview");
}

#[tokio::test]
async fn health_root_responds() {
    let app = common::create_test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "not_configured");
}

#[tokio::test]
async fn unknown_route_is_a_404_envelope() {
    let app = common::create_test_app().await;

    let response = app.oneshot(get("/nonexistent/path")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "F");
}
