//! 캔들 정규화 및 파생 지표 계산.
//!
//! 제공자가 돌려준 원본 캔들을 응답 형식으로 변환하면서
//! 등락액/등락률/자금 흐름을 계산합니다. 교차 캔들 상태 없이
//! 캔들 한 건만으로 파생되는 순수 함수입니다.

use super::kline::{KlineSummary, NormalizedBar, RawBar};

/// 소수점 둘째 자리 반올림 (4사5입).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 원본 캔들 목록을 정규화하고 최신 캔들 요약을 만듭니다.
///
/// 처리 순서:
/// 1. 거래일 오름차순 정렬 (제공자의 반환 순서는 보장되지 않음)
/// 2. 캔들별 파생 필드 계산
/// 3. 마지막 캔들에서 요약 파생
///
/// 등락액은 제공자 값이 있고 0이 아니면 그대로 쓰고, 아니면
/// `close - open`으로 대체합니다. 등락률은 제공자 값이 없거나 0이면
/// 0입니다. 제공자의 산출값을 로컬 근사치보다 우선하는 정책입니다.
///
/// 빈 입력은 `(빈 목록, None)`을 반환합니다.
pub fn normalize_bars(mut bars: Vec<RawBar>) -> (Vec<NormalizedBar>, Option<KlineSummary>) {
    if bars.is_empty() {
        return (Vec::new(), None);
    }

    // YYYYMMDD 문자열이므로 사전순 정렬이 곧 날짜순 정렬
    bars.sort_by(|a, b| a.trade_date.cmp(&b.trade_date));

    let data: Vec<NormalizedBar> = bars.iter().map(normalize_bar).collect();

    // 요약의 등락액 대체값은 캔들별 계산과 달리 0입니다.
    // (close - open이 아님, 원본 구현의 관찰된 동작 유지)
    let latest = &bars[bars.len() - 1];
    let summary = KlineSummary {
        latest_price: latest.close,
        change: nonzero_or(latest.change, 0.0),
        change_pct: nonzero_or(latest.pct_chg, 0.0),
        high: latest.high,
        low: latest.low,
        volume: latest.vol,
        date: latest.trade_date.clone(),
    };

    (data, Some(summary))
}

/// 캔들 한 건 정규화.
fn normalize_bar(raw: &RawBar) -> NormalizedBar {
    let change = nonzero_or(raw.change, raw.close - raw.open);
    let change_pct = nonzero_or(raw.pct_chg, 0.0);

    // 자금 유출입: 거래대금 × 등락률. 체결 방향 데이터가 없으므로
    // 단순화된 근사치입니다.
    let amount = raw.amount.unwrap_or(0.0);
    let money_flow = if amount > 0.0 {
        amount * (change_pct / 100.0)
    } else {
        0.0
    };

    NormalizedBar {
        date: raw.trade_date.clone(),
        open: raw.open,
        close: raw.close,
        high: raw.high,
        low: raw.low,
        vol: raw.vol,
        amount,
        change: round2(change),
        change_pct: round2(change_pct),
        money_flow: round2(money_flow),
    }
}

/// 값이 존재하고 0이 아니면 그 값, 아니면 대체값.
fn nonzero_or(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 => v,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: &str, open: f64, close: f64) -> RawBar {
        RawBar {
            trade_date: date.to_string(),
            open,
            high: close.max(open) + 0.5,
            low: close.min(open) - 0.5,
            close,
            vol: 1000.0,
            amount: Some(50000.0),
            change: Some(close - open),
            pct_chg: Some(1.23),
        }
    }

    #[test]
    fn test_empty_input() {
        let (data, summary) = normalize_bars(vec![]);
        assert!(data.is_empty());
        assert!(summary.is_none());
    }

    #[test]
    fn test_output_sorted_ascending_by_date() {
        let bars = vec![
            bar("20240105", 10.0, 11.0),
            bar("20240103", 9.0, 10.0),
            bar("20240104", 10.0, 9.5),
        ];

        let (data, summary) = normalize_bars(bars);

        let dates: Vec<&str> = data.iter().map(|b| b.date.as_str()).collect();
        assert_eq!(dates, vec!["20240103", "20240104", "20240105"]);
        // 요약은 정렬 후 마지막 캔들 기준
        assert_eq!(summary.unwrap().date, "20240105");
    }

    #[test]
    fn test_provider_change_preferred_over_local() {
        let mut raw = bar("20240101", 10.0, 12.0);
        raw.change = Some(1.5); // close - open(2.0)과 다른 제공자 값
        raw.pct_chg = Some(15.0);

        let (data, _) = normalize_bars(vec![raw]);
        assert_eq!(data[0].change, 1.5);
        assert_eq!(data[0].change_pct, 15.0);
    }

    #[test]
    fn test_missing_change_falls_back_to_close_minus_open() {
        let raw = RawBar {
            trade_date: "20240101".to_string(),
            open: 10.0,
            high: 12.5,
            low: 9.8,
            close: 12.0,
            vol: 1000.0,
            amount: None,
            change: None,
            pct_chg: None,
        };

        let (data, _) = normalize_bars(vec![raw]);
        assert_eq!(data[0].change, 2.00);
        assert_eq!(data[0].change_pct, 0.00);
        // amount가 없으면 자금 흐름은 0
        assert_eq!(data[0].money_flow, 0.00);
    }

    #[test]
    fn test_zero_change_treated_as_missing() {
        let mut raw = bar("20240101", 10.0, 12.0);
        raw.change = Some(0.0);

        let (data, _) = normalize_bars(vec![raw]);
        // 제공자 값이 0이면 close - open으로 대체
        assert_eq!(data[0].change, 2.00);
    }

    #[test]
    fn test_money_flow_from_amount_and_pct() {
        let mut raw = bar("20240101", 10.0, 11.0);
        raw.amount = Some(50000.0);
        raw.pct_chg = Some(2.5);

        let (data, _) = normalize_bars(vec![raw]);
        // 50000 * 2.5 / 100 = 1250
        assert_eq!(data[0].money_flow, 1250.00);
    }

    #[test]
    fn test_derived_fields_rounded_to_two_decimals() {
        let mut raw = bar("20240101", 10.0, 11.0);
        raw.change = Some(0.123456);
        raw.pct_chg = Some(1.006);
        raw.amount = Some(333.0);

        let (data, _) = normalize_bars(vec![raw]);
        assert_eq!(data[0].change, 0.12);
        assert_eq!(data[0].change_pct, 1.01);
        // 333 * 1.006 / 100 = 3.34998 → 3.35
        assert_eq!(data[0].money_flow, 3.35);
    }

    #[test]
    fn test_summary_change_fallback_is_zero() {
        // 캔들별 대체값(close - open)과 달리 요약은 0으로 대체
        let raw = RawBar {
            trade_date: "20240101".to_string(),
            open: 10.0,
            high: 12.5,
            low: 9.8,
            close: 12.0,
            vol: 777.0,
            amount: None,
            change: None,
            pct_chg: None,
        };

        let (_, summary) = normalize_bars(vec![raw]);
        let summary = summary.unwrap();
        assert_eq!(summary.change, 0.0);
        assert_eq!(summary.latest_price, 12.0);
        assert_eq!(summary.volume, 777.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(2.346), 2.35);
        // .5 경계는 0에서 멀어지는 쪽으로
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }
}
