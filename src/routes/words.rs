use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::response::ApiResponse;
use crate::seed;
use crate::services::word::{self, CreateWordInput, Word, WordError, WordService};
use crate::state::AppState;
use crate::view::compute_view;

const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    keyword: Option<String>,
    day: Option<String>,
    page: Option<String>,
    page_size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DayParams {
    day: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchData {
    words: Vec<Word>,
    total: usize,
    page: usize,
    page_size: usize,
}

pub async fn create_word(State(state): State<AppState>, req: Request<Body>) -> Response {
    let body_bytes = match split_body(req).await {
        Ok(bytes) => bytes,
        Err(res) => return res,
    };

    let input: CreateWordInput = match serde_json::from_slice(&body_bytes) {
        Ok(input) => input,
        Err(_) => {
            return ApiResponse::<Option<Word>>::fail("請求參數不合法", None).into_response();
        }
    };

    let Some(db) = state.db() else {
        // Demo mode: validation still runs before the write is refused.
        if let Err(err) = word::validate(&input) {
            return create_error_response(err);
        }
        return ApiResponse::<Option<Word>>::fail("無法連接到資料庫", None).into_response();
    };

    match WordService::new(db).create_word(input).await {
        Ok(word) => {
            ApiResponse::success("單字建立成功", Some(word)).into_response()
        }
        Err(err) => create_error_response(err),
    }
}

pub async fn get_words(State(state): State<AppState>) -> Response {
    let Some(db) = state.db() else {
        return ApiResponse::success("", seed::fallback_words()).into_response();
    };

    match WordService::new(db).get_all_words().await {
        Ok(words) => ApiResponse::success("", words).into_response(),
        Err(err) => read_error_response(err),
    }
}

pub async fn words_by_day(
    State(state): State<AppState>,
    Query(params): Query<DayParams>,
) -> Response {
    let day = match params
        .day
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|day| *day >= 1)
    {
        Some(day) => day,
        None => {
            return ApiResponse::<Vec<Word>>::fail("學習日期必須為大於0的數字", Vec::new())
                .into_response();
        }
    };

    let Some(db) = state.db() else {
        let words: Vec<Word> = seed::fallback_words()
            .into_iter()
            .filter(|word| word.day == day)
            .collect();
        return ApiResponse::success("", words).into_response();
    };

    match WordService::new(db).get_words_by_day(day).await {
        Ok(words) => ApiResponse::success("", words).into_response(),
        Err(err) => read_error_response(err),
    }
}

pub async fn search_words(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let keyword = params.keyword.unwrap_or_default();
    let page = parse_or(params.page.as_deref(), 1);
    let page_size = parse_or(params.page_size.as_deref(), DEFAULT_PAGE_SIZE);

    let words = match state.db() {
        Some(db) => match WordService::new(db).get_all_words().await {
            Ok(words) => words,
            Err(err) => return read_error_response(err),
        },
        None => seed::fallback_words(),
    };

    let view = compute_view(&words, &keyword, params.day.as_deref(), page, page_size);

    ApiResponse::success(
        "",
        SearchData {
            words: view.items,
            total: view.total,
            page: page.max(1),
            page_size,
        },
    )
    .into_response()
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(default)
}

fn create_error_response(err: WordError) -> Response {
    match err {
        WordError::Validation(message) => {
            ApiResponse::<Option<Word>>::fail(message, None).into_response()
        }
        WordError::Conflict(message) => {
            ApiResponse::<Option<Word>>::repeat_fail(message, None).into_response()
        }
        WordError::Store(err) => {
            tracing::warn!(error = %err, "create word failed");
            ApiResponse::<Option<Word>>::fail("伺服器內部錯誤", None).into_response()
        }
    }
}

fn read_error_response(err: WordError) -> Response {
    tracing::warn!(error = %err, "word list query failed");
    ApiResponse::<Vec<Word>>::fail("獲取單字資料失敗", Vec::new()).into_response()
}

async fn split_body(req: Request<Body>) -> Result<bytes::Bytes, Response> {
    let body = req.into_body();
    match axum::body::to_bytes(body, 1024 * 1024).await {
        Ok(bytes) => Ok(bytes),
        Err(_) => Err((
            StatusCode::BAD_REQUEST,
            ApiResponse::<Option<Word>>::fail("無效請求", None),
        )
            .into_response()),
    }
}
