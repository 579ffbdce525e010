use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Outcome code carried by every API envelope. `RepeatFail` marks a
/// unique-constraint conflict (duplicate English word on create).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnCode {
    #[serde(rename = "S")]
    Success,
    #[serde(rename = "F")]
    Fail,
    #[serde(rename = "R")]
    RepeatFail,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub code: ReturnCode,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            code: ReturnCode::Success,
            message: message.into(),
            data,
        }
    }

    pub fn fail(message: impl Into<String>, data: T) -> Self {
        Self {
            code: ReturnCode::Fail,
            message: message.into(),
            data,
        }
    }

    pub fn repeat_fail(message: impl Into<String>, data: T) -> Self {
        Self {
            code: ReturnCode::RepeatFail,
            message: message.into(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
