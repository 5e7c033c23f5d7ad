//! 테스트 RPC 제공자 포트.
//!
//! 구현: `ganache-app` crate

use async_trait::async_trait;

use crate::config::Settings;
use crate::error::CoreError;
use crate::models::port_status::TestRpcState;

/// 테스트 RPC 프로세스 인터페이스
#[async_trait]
pub trait TestRpcProvider: Send + Sync {
    /// 현재 프로세스 상태 조회
    async fn state(&self) -> Result<TestRpcState, CoreError>;

    /// 주어진 설정으로 재시작
    async fn restart(&self, settings: &Settings) -> Result<TestRpcState, CoreError>;
}
