//! 인메모리 어댑터.
//!
//! 실제 설정 저장소와 테스트 RPC 프로세스 대신 쓰는 포트 구현.
//! 포트 확인은 로컬 바인딩 시도로 판단한다. 설정을 디스크에 쓰지 않는다.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::io::ErrorKind;
use tokio::net::TcpListener;
use tracing::{debug, info};

use ganache_core::config::Settings;
use ganache_core::error::CoreError;
use ganache_core::models::port_status::{PortStatus, ProcessInfo, RpcLifecycle, TestRpcState};
use ganache_core::ports::settings_provider::SettingsProvider;
use ganache_core::ports::test_rpc::TestRpcProvider;

/// 포트 확인에 쓰는 바인딩 주소
const PROBE_HOST: &str = "127.0.0.1";

/// 인메모리 설정 저장소
#[derive(Debug)]
pub struct InMemorySettingsStore {
    settings: RwLock<Settings>,
}

impl InMemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    /// 외부에서 설정이 바뀐 상황 재현
    pub fn replace(&self, settings: Settings) {
        *self.settings.write() = settings;
    }
}

#[async_trait]
impl SettingsProvider for InMemorySettingsStore {
    async fn settings(&self) -> Result<Settings, CoreError> {
        Ok(self.settings.read().clone())
    }

    /// 바인딩에 성공하면 비어 있음. 이미 사용 중이면 점유 상태지만
    /// 점유 프로세스는 알 수 없으므로 빈 목록을 돌려준다.
    async fn check_port(&self, port: u16) -> Result<PortStatus, CoreError> {
        match TcpListener::bind((PROBE_HOST, port)).await {
            Ok(listener) => {
                drop(listener);
                debug!("포트 {port} 사용 가능");
                Ok(PortStatus::clear(port))
            }
            Err(e) if e.kind() == ErrorKind::AddrInUse => {
                debug!("포트 {port} 사용 중");
                Ok(PortStatus::blocked(port, Vec::new()))
            }
            Err(e) => Err(CoreError::Provider(format!("포트 {port} 확인 실패: {e}"))),
        }
    }

    async fn save_settings(&self, settings: &Settings) -> Result<(), CoreError> {
        *self.settings.write() = settings.clone();
        info!("설정 반영 완료");
        Ok(())
    }
}

/// 인메모리 테스트 RPC
///
/// 재시작하면 이 프로세스가 설정 포트를 점유한 것으로 보고한다.
#[derive(Debug, Default)]
pub struct InMemoryTestRpc {
    state: RwLock<TestRpcState>,
}

impl InMemoryTestRpc {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TestRpcProvider for InMemoryTestRpc {
    async fn state(&self) -> Result<TestRpcState, CoreError> {
        Ok(self.state.read().clone())
    }

    async fn restart(&self, settings: &Settings) -> Result<TestRpcState, CoreError> {
        let port = settings.server.port;
        let state = TestRpcState {
            ganache_port_status: PortStatus::blocked(
                port,
                vec![ProcessInfo {
                    name: "ganache".to_string(),
                    pid: std::process::id(),
                }],
            ),
            lifecycle: RpcLifecycle::Running,
        };
        *self.state.write() = state.clone();
        info!(
            "테스트 RPC 재시작: {}:{} (network {})",
            settings.server.hostname, port, settings.server.network_id
        );
        Ok(state)
    }
}
