//! 테스트 RPC 프로세스 상태 스냅샷.
//!
//! 외부 제공자가 채우며 설정 화면은 읽기만 한다.

use serde::{Deserialize, Serialize};

/// 자기 자신의 프로세스로 간주하는 이름 조각 (소문자 비교)
pub const OWN_PROCESS_MARKERS: [&str; 2] = ["ganache", "electron"];

/// 포트 점유 상태
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortState {
    /// 아직 확인 전
    #[default]
    Unknown,
    /// 사용 가능
    Clear,
    /// 다른 프로세스가 점유
    Blocked,
}

/// 포트를 점유한 프로세스
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// 프로세스 이름
    pub name: String,
    /// 프로세스 ID
    pub pid: u32,
}

/// 설정된 포트의 점유 상태
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortStatus {
    /// 확인한 포트
    pub port: u16,
    /// 점유 상태
    pub status: PortState,
    /// 점유 프로세스 목록 (None이면 식별 불가)
    #[serde(rename = "pid", default)]
    pub processes: Option<Vec<ProcessInfo>>,
}

impl PortStatus {
    /// 사용 가능 상태
    pub fn clear(port: u16) -> Self {
        Self {
            port,
            status: PortState::Clear,
            processes: None,
        }
    }

    /// 점유 상태
    pub fn blocked(port: u16, processes: Vec<ProcessInfo>) -> Self {
        Self {
            port,
            status: PortState::Blocked,
            processes: Some(processes),
        }
    }

    /// 첫 번째 점유 프로세스
    pub fn blocking_process(&self) -> Option<&ProcessInfo> {
        if self.status != PortState::Blocked {
            return None;
        }
        self.processes.as_deref().and_then(|p| p.first())
    }

    /// 이 앱이 아닌 프로세스가 포트를 점유했는지.
    ///
    /// 점유 프로세스를 식별할 수 없으면 막지 않는다.
    pub fn is_blocked_by_foreign_process(&self) -> bool {
        match self.blocking_process() {
            Some(process) => {
                let name = process.name.to_lowercase();
                !OWN_PROCESS_MARKERS.iter().any(|m| name.contains(m))
            }
            None => false,
        }
    }
}

/// 테스트 RPC 수명주기
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RpcLifecycle {
    #[default]
    Stopped,
    Starting,
    Running,
    Failed(String),
}

/// 테스트 RPC 제공자 상태
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRpcState {
    /// 설정된 포트 상태
    pub ganache_port_status: PortStatus,
    /// 프로세스 수명주기
    pub lifecycle: RpcLifecycle,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(name: &str) -> ProcessInfo {
        ProcessInfo {
            name: name.to_string(),
            pid: 4242,
        }
    }

    #[test]
    fn foreign_process_blocks() {
        let status = PortStatus::blocked(8545, vec![process("chrome")]);
        assert!(status.is_blocked_by_foreign_process());
    }

    #[test]
    fn own_process_does_not_block() {
        for name in ["ganache", "Ganache-CLI", "Electron Helper"] {
            let status = PortStatus::blocked(8545, vec![process(name)]);
            assert!(!status.is_blocked_by_foreign_process(), "{name}");
        }
    }

    #[test]
    fn only_first_process_counts() {
        let status = PortStatus::blocked(8545, vec![process("ganache"), process("chrome")]);
        assert!(!status.is_blocked_by_foreign_process());
    }

    #[test]
    fn unidentified_owner_does_not_block() {
        let mut status = PortStatus::blocked(8545, Vec::new());
        assert!(!status.is_blocked_by_foreign_process());

        status.processes = None;
        assert!(!status.is_blocked_by_foreign_process());
    }

    #[test]
    fn clear_port_never_blocks() {
        let mut status = PortStatus::clear(8545);
        status.processes = Some(vec![process("chrome")]);
        assert!(!status.is_blocked_by_foreign_process());
        assert!(status.blocking_process().is_none());
    }

    #[test]
    fn wire_shape_uses_pid_key() {
        let json = r#"{"port":8545,"status":"blocked","pid":[{"name":"chrome","pid":12}]}"#;
        let status: PortStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.status, PortState::Blocked);
        assert_eq!(status.blocking_process().unwrap().name, "chrome");
    }
}
