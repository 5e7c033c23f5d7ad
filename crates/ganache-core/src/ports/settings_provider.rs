//! 설정 저장소 포트.
//!
//! 구현: `ganache-app` crate (인메모리 저장소)

use async_trait::async_trait;

use crate::config::Settings;
use crate::error::CoreError;
use crate::models::port_status::PortStatus;

/// 설정 저장소 인터페이스
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// 현재 설정 스냅샷 조회
    async fn settings(&self) -> Result<Settings, CoreError>;

    /// 포트 사용 가능 여부 확인
    async fn check_port(&self, port: u16) -> Result<PortStatus, CoreError>;

    /// 확정된 설정 반영
    async fn save_settings(&self, settings: &Settings) -> Result<(), CoreError>;
}
