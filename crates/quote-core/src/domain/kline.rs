//! 캔들(kline) 데이터 타입 및 구조체.
//!
//! 이 모듈은 kline 관련 타입을 정의합니다:
//! - `RawBar` - 데이터 제공자가 반환한 원본 캔들
//! - `NormalizedBar` - 파생 필드가 계산된 응답용 캔들
//! - `KlineSummary` - 최신 캔들 기준 요약 지표
//! - `KlineResponse` - 캐시/응답 단위 페이로드

use serde::{Deserialize, Serialize};

/// 데이터 제공자가 반환한 원본 캔들 한 건.
///
/// `change`/`pct_chg`/`amount`는 제공자가 생략하거나 null로 돌려줄 수
/// 있으므로 Option으로 모델링합니다. "없음"과 "0"은 파생 계산에서
/// 서로 다르게 취급됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBar {
    /// 거래일 (YYYYMMDD)
    pub trade_date: String,
    /// 시가
    pub open: f64,
    /// 고가
    pub high: f64,
    /// 저가
    pub low: f64,
    /// 종가
    pub close: f64,
    /// 거래량
    pub vol: f64,
    /// 거래대금
    pub amount: Option<f64>,
    /// 전일 대비 등락액 (제공자 산출값)
    pub change: Option<f64>,
    /// 전일 대비 등락률 % (제공자 산출값)
    pub pct_chg: Option<f64>,
}

/// 파생 필드가 계산된 응답용 캔들.
///
/// `change`/`change_pct`/`money_flow`는 소수점 둘째 자리로 반올림됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBar {
    /// 거래일 (YYYYMMDD)
    pub date: String,
    /// 시가
    pub open: f64,
    /// 종가
    pub close: f64,
    /// 고가
    pub high: f64,
    /// 저가
    pub low: f64,
    /// 거래량
    pub vol: f64,
    /// 거래대금
    pub amount: f64,
    /// 등락액
    pub change: f64,
    /// 등락률 (%)
    pub change_pct: f64,
    /// 자금 유출입 추정치 (거래대금 × 등락률, 단순화 지표)
    pub money_flow: f64,
}

/// 최신 캔들 기준 요약 지표.
///
/// 날짜 오름차순 정렬 후 마지막 캔들에서 파생됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KlineSummary {
    /// 최신 종가
    pub latest_price: f64,
    /// 등락액 (제공자 값, 없으면 0)
    pub change: f64,
    /// 등락률 % (제공자 값, 없으면 0)
    pub change_pct: f64,
    /// 고가
    pub high: f64,
    /// 저가
    pub low: f64,
    /// 거래량
    pub volume: f64,
    /// 거래일 (YYYYMMDD)
    pub date: String,
}

/// kline 엔드포인트의 응답이자 캐시에 저장되는 페이로드.
///
/// 캐시 미스 시 새로 구성된 뒤 변경되지 않으며, 캐시 히트는
/// 저장된 JSON을 그대로 돌려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KlineResponse {
    /// 응답 코드 (성공 시 0)
    pub code: i64,
    /// 날짜 오름차순 캔들 목록
    pub data: Vec<NormalizedBar>,
    /// 종목명 (조회 실패 시 종목 코드)
    pub name: String,
    /// 최신 캔들 요약. 데이터가 없으면 빈 객체(`{}`)로 직렬화됩니다.
    #[serde(with = "info_object")]
    pub info: Option<KlineSummary>,
    /// 요청 주기 문자열 (D/W/M)
    pub freq: String,
}

impl KlineResponse {
    /// 성공 응답 생성.
    pub fn ok(
        data: Vec<NormalizedBar>,
        name: impl Into<String>,
        info: Option<KlineSummary>,
        freq: impl Into<String>,
    ) -> Self {
        Self {
            code: 0,
            data,
            name: name.into(),
            info,
            freq: freq.into(),
        }
    }
}

/// `info` 필드의 직렬화 규칙.
///
/// `None`은 null이 아니라 빈 JSON 객체(`{}`)로 내보냅니다.
/// 프론트엔드 계약상 `info`는 항상 객체이기 때문입니다.
mod info_object {
    use super::KlineSummary;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<KlineSummary>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(info) => info.serialize(serializer),
            None => serde_json::Map::new().serialize(serializer),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<KlineSummary>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Object(map) if map.is_empty() => Ok(None),
            _ => serde_json::from_value(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
