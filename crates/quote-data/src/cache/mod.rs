//! 캐시 레이어.
//!
//! 캐시 키 파생과 key-value 저장소 어댑터를 제공합니다.
//! 저장소 장애는 이 경계에서 전부 흡수되어 "미스"로 강등됩니다.
//! 캐시가 없어도 서비스는 정상 동작해야 합니다(단지 캐시되지 않을 뿐).

pub mod key;
pub mod memory;
pub mod redis;

use async_trait::async_trait;
use serde_json::Value;

/// key-value 캐시 저장소 어댑터.
///
/// 모든 메서드는 실패하지 않습니다. 하부 저장소의 어떤 장애(연결,
/// 타임아웃, 디코드)도 호출자에게 전파되지 않고 각각 미스/저장 실패/
/// false로 강등됩니다. 실패는 호출 구현부에서 로깅만 합니다.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// 캐시된 JSON 값을 가져옵니다. 없거나 실패하면 `None`.
    async fn get_value(&self, key: &str) -> Option<Value>;

    /// JSON 값을 TTL과 함께 저장합니다. 저장 성공 여부를 반환합니다.
    async fn put_value(&self, key: &str, value: &Value, ttl_secs: u64) -> bool;

    /// 저장소 생존 확인.
    async fn ping(&self) -> bool;
}
