//! # Quote Core
//!
//! 시세 프록시의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - OHLCV 캔들(kline) 원본/정규화 구조체
//! - 주기(Freq) 정의
//! - 응답 페이로드 및 요약 지표
//! - 설정 관리

pub mod config;
pub mod domain;

pub use config::*;
pub use domain::*;
