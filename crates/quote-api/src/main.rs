//! 시세 프록시 API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다.
//! 헬스 체크, 종목 목록, OHLCV 시세 조회 엔드포인트를 제공합니다.

use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use quote_api::routes::create_api_router;
use quote_api::state::AppState;
use quote_core::AppConfig;
use quote_data::{CacheStore, RedisCache, RedisConfig, TushareClient};

/// Redis cache 초기화.
///
/// `REDIS_URL`이 없거나 연결에 실패하면 `None`을 반환하고 서버는
/// cache 없이 동작합니다. 모든 요청이 상위 제공자로 가게 될 뿐
/// 기능상 차이는 없습니다.
async fn setup_cache(config: &AppConfig) -> Option<Arc<dyn CacheStore>> {
    let url = match &config.cache.redis_url {
        Some(url) => url.clone(),
        None => {
            warn!("REDIS_URL not set, running without cache");
            return None;
        }
    };

    let redis_config = RedisConfig {
        url,
        default_ttl_secs: config.cache.default_ttl_secs,
    };

    match RedisCache::connect(&redis_config).await {
        Ok(cache) => Some(Arc::new(cache) as Arc<dyn CacheStore>),
        Err(e) => {
            warn!("Redis connection failed, running without cache: {}", e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    // tracing 초기화
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quote_api=info,tower_http=debug".into()),
        )
        .init();

    info!("Starting Quote API server...");

    // 설정 로드
    let config = AppConfig::from_env();
    let addr = config.server.socket_addr().map_err(|e| {
        error!(
            host = %config.server.host,
            port = config.server.port,
            error = %e,
            "Invalid socket address. Check API_HOST and API_PORT."
        );
        e
    })?;

    if config.provider.token.is_empty() {
        warn!("TUSHARE_TOKEN not set, upstream requests will be rejected");
    }

    // 상위 제공자 클라이언트 생성
    let provider = Arc::new(TushareClient::new(&config.provider)?);

    // Redis cache 연결 (실패해도 서버는 계속)
    let cache = setup_cache(&config).await;

    let state = Arc::new(AppState::new(
        provider,
        cache,
        config.cache.default_ttl_secs,
    ));

    info!(
        version = env!("CARGO_PKG_VERSION"),
        has_cache = state.has_cache(),
        cache_ttl_secs = state.cache_ttl_secs,
        "Application state initialized"
    );

    // CORS는 전체 허용 (프론트엔드 개발 서버에서 직접 호출)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_api_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .with_state(state);

    info!(%addr, "API server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 종료합니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
