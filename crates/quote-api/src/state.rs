//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 Arc로 래핑되어 Axum의 State extractor를 통해
//! 핸들러에 주입됩니다. 제공자와 cache는 trait 객체로 보관해
//! 테스트에서 mock으로 대체할 수 있습니다.

use quote_data::{CacheStore, MarketDataProvider};
use std::sync::Arc;

/// 애플리케이션 공유 상태.
#[derive(Clone)]
pub struct AppState {
    /// 상위 시장 데이터 제공자 (Tushare)
    pub provider: Arc<dyn MarketDataProvider>,

    /// Redis cache. 연결에 실패하면 `None`으로 두고 cache 없이 동작합니다.
    pub cache: Option<Arc<dyn CacheStore>>,

    /// cache 항목의 TTL (초 단위)
    pub cache_ttl_secs: u64,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        cache: Option<Arc<dyn CacheStore>>,
        cache_ttl_secs: u64,
    ) -> Self {
        Self {
            provider,
            cache,
            cache_ttl_secs,
        }
    }

    /// cache 구성 여부.
    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }
}
