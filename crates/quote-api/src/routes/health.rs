//! 헬스 체크 endpoint.
//!
//! 서버 생존 여부와 Redis 연결 상태를 보고합니다. Redis가 죽어
//! 있어도 서버 자체는 정상이므로 HTTP 200을 유지합니다.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::state::AppState;

/// Redis ping 대기 한도.
const PING_TIMEOUT: Duration = Duration::from_secs(2);

/// 헬스 체크 응답 구조체.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 서버 상태 (항상 "ok")
    pub status: String,
    /// 상태 메시지
    pub message: String,
    /// Redis 연결 상태 ("connected" | "disconnected")
    pub redis: String,
}

/// 헬스 체크 핸들러.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let redis_up = match &state.cache {
        Some(cache) => tokio::time::timeout(PING_TIMEOUT, cache.ping())
            .await
            .unwrap_or(false),
        None => false,
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Backend is running".to_string(),
        redis: if redis_up { "connected" } else { "disconnected" }.to_string(),
    })
}

/// 헬스 체크 라우터.
pub fn health_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}
