//! 종목 기본 정보 타입.

use serde::{Deserialize, Serialize};

/// 종목 기본 정보.
///
/// 목록 조회와 종목명 조회 양쪽에서 사용되며, 제공자가 채워주지
/// 않는 필드는 Option으로 둡니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockBasic {
    /// 종목 코드 (예: 000001.SZ)
    pub ts_code: String,
    /// 단축 코드 (예: 000001)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// 종목명
    pub name: String,
    /// 지역
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// 업종
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// 시장 구분
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted_in_json() {
        let stock = StockBasic {
            ts_code: "000001.SZ".to_string(),
            symbol: None,
            name: "평안은행".to_string(),
            area: None,
            industry: None,
            market: None,
        };

        let json = serde_json::to_string(&stock).unwrap();
        assert!(!json.contains("area"));
        assert!(json.contains("000001.SZ"));
    }
}
