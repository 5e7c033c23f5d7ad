//! # ganache-core
//!
//! Ganache 설정 화면의 도메인 모델, 포트(trait) 정의, 에러 타입.
//!
//! ## 구조
//!
//! - [`config`]: 설정 구조체와 기본값
//! - [`config_manager`]: 초기 설정 로드 (`config` crate, 파일 + 환경변수)
//! - [`models`]: 필드 경로, 검증 상태, 테스트 RPC 상태, 라우트
//! - [`ports`]: 외부 협력자 인터페이스 (async_trait)
//! - [`error`]: 핵심 에러 타입 (thiserror)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;
