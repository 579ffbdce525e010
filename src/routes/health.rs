use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    uptime: u64,
    timestamp: String,
}

async fn root(State(state): State<AppState>) -> Response {
    let database = match state.db() {
        Some(db) => {
            match sqlx::query("SELECT 1").execute(db.pool()).await {
                Ok(_) => DbCheck::Connected,
                Err(err) => {
                    tracing::warn!(error = %err, "health check query failed");
                    DbCheck::Disconnected
                }
            }
        }
        None => DbCheck::NotConfigured,
    };

    let ok = !matches!(database, DbCheck::Disconnected);
    let response = HealthResponse {
        status: if ok { "ok" } else { "degraded" },
        database: database.as_str(),
        uptime: state.uptime_seconds(),
        timestamp: now_iso(),
    };

    let status_code = if ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status_code, Json(response)).into_response()
}

enum DbCheck {
    Connected,
    Disconnected,
    NotConfigured,
}

impl DbCheck {
    fn as_str(&self) -> &'static str {
        match self {
            DbCheck::Connected => "connected",
            DbCheck::Disconnected => "disconnected",
            DbCheck::NotConfigured => "not_configured",
        }
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
