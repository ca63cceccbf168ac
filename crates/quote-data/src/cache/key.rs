//! 캐시 키 파생.
//!
//! 논리적 요청(엔드포인트 + 파라미터 집합)에서 결정적이고 충돌
//! 저항성 있는 고정 길이 키를 만듭니다. 파라미터는 키 이름으로
//! 정렬되므로 삽입 순서와 무관하게 같은 키가 나옵니다.

use sha2::{Digest, Sha256};

/// 캐시 키 생성.
///
/// `(k, v)` 쌍을 키 이름 사전순으로 정렬해 `prefix:k=v:k=v` 형태로
/// 이어붙인 뒤 SHA-256 해시의 소문자 hex(64자)를 반환합니다.
/// 순수 함수이며 빈 파라미터 목록도 유효합니다(`prefix:`만 해시).
pub fn cache_key(prefix: &str, params: &[(&str, &str)]) -> String {
    let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(":");

    let key_str = format!("{}:{}", prefix, joined);

    let mut hasher = Sha256::new();
    hasher.update(key_str.as_bytes());
    hex::encode(hasher.finalize())
}
