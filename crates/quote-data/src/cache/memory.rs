//! 인메모리 cache 구현.
//!
//! Redis 없이 단일 프로세스 안에서 동작하는 TTL cache입니다.
//! 로컬 개발과 테스트에서 [`CacheStore`] 자리를 대신합니다.

use crate::cache::CacheStore;
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::time::{Duration, Instant};

/// DashMap 기반 인메모리 cache.
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, (Value, Instant)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 항목 수 (만료 여부 무관).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 만료된 항목을 정리합니다.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.entries.retain(|_, (_, deadline)| *deadline > now);
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get_value(&self, key: &str) -> Option<Value> {
        let entry = self.entries.get(key)?;
        let (value, deadline) = entry.value();
        if *deadline <= Instant::now() {
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(value.clone())
    }

    async fn put_value(&self, key: &str, value: &Value, ttl_secs: u64) -> bool {
        let deadline = Instant::now() + Duration::from_secs(ttl_secs);
        self.entries
            .insert(key.to_string(), (value.clone(), deadline));
        true
    }

    async fn ping(&self) -> bool {
        true
    }
}
