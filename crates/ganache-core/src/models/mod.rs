//! Ganache 설정 도메인 모델.
//!
//! 설정 필드 경로, 검증 상태, 테스트 RPC 상태, 화면 라우트를 정의한다.

pub mod field;
pub mod navigation;
pub mod port_status;
pub mod validation;
