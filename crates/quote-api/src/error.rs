//! API 에러 응답.
//!
//! 모든 실패 응답은 `{"code": -1, "message": "..."}` 형태의 JSON
//! 본문을 사용합니다. 성공 페이로드의 `code: 0`과 짝을 이룹니다.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

/// API 에러 본문.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    /// 에러 코드 (항상 -1)
    pub code: i32,
    /// 에러 메시지
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: -1,
            message: message.into(),
        }
    }
}

/// 핸들러 공통 결과 타입.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// 400 Bad Request 응답.
pub fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (StatusCode::BAD_REQUEST, Json(ApiError::new(message)))
}

/// 500 Internal Server Error 응답.
pub fn internal_error(message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let error = ApiError::new("ts_code is required");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["code"], -1);
        assert_eq!(json["message"], "ts_code is required");
    }
}
