//! Tushare HTTP API 클라이언트.
//!
//! Tushare Pro는 단일 엔드포인트에 `api_name`을 담은 JSON POST로
//! 동작하며, 응답 데이터는 `fields` 배열과 행 단위 `items` 배열로
//! 구성된 컬럼형 포맷입니다. 여기서 행을 필드 이름과 결합해
//! 도메인 타입으로 복원합니다.

use crate::error::{DataError, Result};
use crate::provider::MarketDataProvider;
use async_trait::async_trait;
use quote_core::{ProviderConfig, RawBar, StockBasic};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::time::Duration;
use tracing::debug;

/// 시세 조회시 요청하는 필드 목록.
const BAR_FIELDS: &str = "ts_code,trade_date,open,high,low,close,vol,amount,change,pct_chg";

/// 종목 기본 정보 조회시 요청하는 필드 목록.
const STOCK_FIELDS: &str = "ts_code,symbol,name,area,industry,market";

/// Tushare Pro API 클라이언트.
#[derive(Clone)]
pub struct TushareClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

#[derive(Serialize)]
struct TushareRequest<'a> {
    api_name: &'a str,
    token: &'a str,
    params: Value,
    fields: &'a str,
}

#[derive(Deserialize)]
struct TushareResponse {
    code: i64,
    msg: Option<String>,
    data: Option<TushareData>,
}

#[derive(Deserialize)]
struct TushareData {
    fields: Vec<String>,
    items: Vec<Vec<Value>>,
}

impl TushareClient {
    /// 새로운 Tushare 클라이언트를 생성합니다.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DataError::ProviderError(e.to_string()))?;

        Ok(Self {
            client,
            token: config.token.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// API를 호출하고 컬럼형 응답을 `T`의 목록으로 복원합니다.
    async fn query<T: DeserializeOwned>(
        &self,
        api_name: &str,
        params: Value,
        fields: &str,
    ) -> Result<Vec<T>> {
        debug!(api_name, "Tushare API request");

        let request = TushareRequest {
            api_name,
            token: &self.token,
            params,
            fields,
        };

        let response: TushareResponse = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        if response.code != 0 {
            return Err(DataError::ProviderError(format!(
                "Tushare API error ({}): {}",
                response.code,
                response.msg.unwrap_or_default()
            )));
        }

        let data = match response.data {
            Some(data) => data,
            None => return Ok(Vec::new()),
        };

        decode_rows(&data.fields, data.items)
    }

    /// 시세 계열 API(daily/weekly/monthly) 공통 호출.
    async fn bars(
        &self,
        api_name: &str,
        ts_code: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<RawBar>> {
        let params = json!({
            "ts_code": ts_code,
            "start_date": start_date,
            "end_date": end_date,
            "adj": "qfq",
        });
        self.query(api_name, params, BAR_FIELDS).await
    }
}

/// `fields`와 행 배열을 결합해 각 행을 객체로 만든 뒤 역직렬화합니다.
///
/// 필드 수보다 짧은 행은 나머지를 null로 취급합니다.
fn decode_rows<T: DeserializeOwned>(fields: &[String], items: Vec<Vec<Value>>) -> Result<Vec<T>> {
    items
        .into_iter()
        .map(|row| {
            let mut object = Map::with_capacity(fields.len());
            let mut cells = row.into_iter();
            for field in fields {
                object.insert(field.clone(), cells.next().unwrap_or(Value::Null));
            }
            serde_json::from_value(Value::Object(object))
                .map_err(|e| DataError::ParseError(e.to_string()))
        })
        .collect()
}

#[async_trait]
impl MarketDataProvider for TushareClient {
    async fn daily(&self, ts_code: &str, start_date: &str, end_date: &str) -> Result<Vec<RawBar>> {
        self.bars("daily", ts_code, start_date, end_date).await
    }

    async fn weekly(&self, ts_code: &str, start_date: &str, end_date: &str) -> Result<Vec<RawBar>> {
        self.bars("weekly", ts_code, start_date, end_date).await
    }

    async fn monthly(
        &self,
        ts_code: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<RawBar>> {
        self.bars("monthly", ts_code, start_date, end_date).await
    }

    async fn stock_basic(&self, ts_code: &str) -> Result<Option<StockBasic>> {
        let params = json!({ "ts_code": ts_code });
        let mut stocks: Vec<StockBasic> = self.query("stock_basic", params, STOCK_FIELDS).await?;

        if stocks.is_empty() {
            Ok(None)
        } else {
            Ok(Some(stocks.remove(0)))
        }
    }

    async fn stock_list(&self, limit: usize) -> Result<Vec<StockBasic>> {
        let params = json!({ "exchange": "", "list_status": "L" });
        let mut stocks: Vec<StockBasic> = self.query("stock_basic", params, STOCK_FIELDS).await?;

        stocks.truncate(limit);
        Ok(stocks)
    }
}
