//! # Quote API
//!
//! 시세 프록시의 REST API 서버.
//!
//! Axum 기반으로 다음 엔드포인트를 제공합니다:
//! - `/api/health` - 서버/Redis 상태 확인
//! - `/api/stock/list` - 종목 목록
//! - `/api/stock/kline` - OHLCV 시세 (cache-aside)

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;
