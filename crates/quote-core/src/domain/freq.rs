//! 캔들 주기 정의.

use serde::{Deserialize, Serialize};

/// 캔들 주기 (일/주/월).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Freq {
    /// 일봉
    #[default]
    Daily,
    /// 주봉
    Weekly,
    /// 월봉
    Monthly,
}

impl Freq {
    /// 쿼리 파라미터 문자열을 주기로 변환합니다.
    ///
    /// `D`/`W`/`M` 외의 값은 일봉으로 간주합니다 (원본 API의
    /// 관찰된 동작을 유지, 에러가 아님).
    pub fn parse(s: &str) -> Self {
        match s {
            "W" => Freq::Weekly,
            "M" => Freq::Monthly,
            _ => Freq::Daily,
        }
    }

    /// 쿼리/캐시 키에 쓰이는 문자 표현.
    pub fn as_str(&self) -> &'static str {
        match self {
            Freq::Daily => "D",
            Freq::Weekly => "W",
            Freq::Monthly => "M",
        }
    }
}

impl std::fmt::Display for Freq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
