//! 시장 데이터 제공자.
//!
//! 상위 데이터 소스에 대한 추상화와 Tushare HTTP 클라이언트
//! 구현을 제공합니다.

pub mod tushare;

pub use tushare::TushareClient;

use crate::error::Result;
use async_trait::async_trait;
use quote_core::{RawBar, StockBasic};

/// 시장 데이터 제공자 추상화.
///
/// API 핸들러는 이 trait에만 의존하므로 테스트에서 실제 HTTP
/// 호출 없이 mock 구현으로 대체할 수 있습니다.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// 일봉 시세를 조회합니다.
    async fn daily(&self, ts_code: &str, start_date: &str, end_date: &str) -> Result<Vec<RawBar>>;

    /// 주봉 시세를 조회합니다.
    async fn weekly(&self, ts_code: &str, start_date: &str, end_date: &str) -> Result<Vec<RawBar>>;

    /// 월봉 시세를 조회합니다.
    async fn monthly(&self, ts_code: &str, start_date: &str, end_date: &str)
        -> Result<Vec<RawBar>>;

    /// 단일 종목의 기본 정보를 조회합니다.
    async fn stock_basic(&self, ts_code: &str) -> Result<Option<StockBasic>>;

    /// 상장 종목 목록을 조회합니다 (최대 `limit`개).
    async fn stock_list(&self, limit: usize) -> Result<Vec<StockBasic>>;
}
