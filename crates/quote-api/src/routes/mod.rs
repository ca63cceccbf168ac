//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/api/health` - 헬스 체크 (서버/Redis 상태)
//! - `/api/stock/list` - 상장 종목 목록 (상위 20개)
//! - `/api/stock/kline` - OHLCV 시세 조회 (cache-aside)

pub mod health;
pub mod stock;

pub use health::{health_router, HealthResponse};
pub use stock::{stock_router, KlineQuery};

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new().nest(
        "/api",
        Router::new()
            .merge(health_router())
            .nest("/stock", stock_router()),
    )
}
