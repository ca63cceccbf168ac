//! 캐시 및 데이터 제공자 어댑터.
//!
//! 이 crate는 다음을 제공합니다:
//! - 캐시 키 파생 (정렬된 파라미터의 해시)
//! - `CacheStore` trait과 Redis/인메모리 구현
//! - `MarketDataProvider` trait과 Tushare Pro 클라이언트

pub mod cache;
pub mod error;
pub mod provider;

pub use error::{DataError, Result};

// 캐시 타입 재내보내기
pub use cache::key::cache_key;
pub use cache::memory::MemoryStore;
pub use cache::redis::{RedisCache, RedisConfig};
pub use cache::CacheStore;

// 제공자 타입 재내보내기
pub use provider::tushare::TushareClient;
pub use provider::MarketDataProvider;
