//! 종목 조회 endpoint.
//!
//! - `/list`: 상장 종목 상위 20개
//! - `/kline`: OHLCV 시세 조회. cache-aside 패턴으로 동작하며
//!   Redis 장애 시에는 cache 없이 상위 제공자로 직행합니다.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use quote_core::{normalize_bars, Freq, KlineResponse};
use quote_data::cache_key;

use crate::error::{bad_request, internal_error, ApiResult};
use crate::state::AppState;

/// 종목 목록 크기.
const LIST_LIMIT: usize = 20;

/// kline 조회 쿼리 파라미터.
#[derive(Debug, Default, Deserialize)]
pub struct KlineQuery {
    /// 종목 코드 (필수, 예: 000001.SZ)
    pub ts_code: Option<String>,
    /// 주기 (D/W/M, 기본 D, 미지원 값은 D로 정규화)
    pub freq: Option<String>,
    /// 조회 시작일 (YYYYMMDD, 선택)
    pub start_date: Option<String>,
    /// 조회 종료일 (YYYYMMDD, 선택)
    pub end_date: Option<String>,
}

/// 종목 목록 핸들러.
pub async fn stock_list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let stocks = state
        .provider
        .stock_list(LIST_LIMIT)
        .await
        .map_err(|e| internal_error(e.to_string()))?;

    Ok(Json(json!({ "code": 0, "data": stocks })))
}

/// kline 조회 핸들러.
///
/// cache 히트 시 저장된 응답 본문을 그대로 반환합니다. 미스면 상위
/// 제공자에서 시세를 받아 정규화한 뒤, 빈 결과가 아닐 때만
/// cache에 기록합니다 (일시적 공백 응답이 TTL 동안 고정되는 것을
/// 막기 위함).
pub async fn stock_kline(
    State(state): State<Arc<AppState>>,
    Query(query): Query<KlineQuery>,
) -> ApiResult<Json<Value>> {
    let ts_code = match query.ts_code.as_deref() {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => return Err(bad_request("ts_code is required")),
    };

    let freq = Freq::parse(query.freq.as_deref().unwrap_or(""));
    let start_date = query.start_date.unwrap_or_default();
    let end_date = query.end_date.unwrap_or_default();

    let key = cache_key(
        "kline",
        &[
            ("ts_code", ts_code.as_str()),
            ("freq", freq.as_str()),
            ("start", start_date.as_str()),
            ("end", end_date.as_str()),
        ],
    );

    if let Some(cache) = &state.cache {
        if let Some(hit) = cache.get_value(&key).await {
            debug!(%ts_code, %freq, "kline cache hit");
            return Ok(Json(hit));
        }
    }

    // 종목이 조회되지 않으면 이름 대신 코드를 사용
    let name = match state
        .provider
        .stock_basic(&ts_code)
        .await
        .map_err(|e| internal_error(e.to_string()))?
    {
        Some(stock) => stock.name,
        None => ts_code.clone(),
    };

    let raw = match freq {
        Freq::Daily => state.provider.daily(&ts_code, &start_date, &end_date).await,
        Freq::Weekly => {
            state
                .provider
                .weekly(&ts_code, &start_date, &end_date)
                .await
        }
        Freq::Monthly => {
            state
                .provider
                .monthly(&ts_code, &start_date, &end_date)
                .await
        }
    }
    .map_err(|e| internal_error(e.to_string()))?;

    let (bars, summary) = normalize_bars(raw);
    let cacheable = !bars.is_empty();

    let response = KlineResponse::ok(bars, name, summary, freq.as_str());
    let body = serde_json::to_value(&response).map_err(|e| internal_error(e.to_string()))?;

    if cacheable {
        if let Some(cache) = &state.cache {
            // 기록 실패는 무시 (다음 요청이 다시 채움)
            cache.put_value(&key, &body, state.cache_ttl_secs).await;
        }
    }

    Ok(Json(body))
}

/// 종목 라우터.
pub fn stock_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(stock_list))
        .route("/kline", get(stock_kline))
}
