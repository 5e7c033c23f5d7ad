//! Ganache 워크스페이스 설정 구조체.
//!
//! 서버, 계정, 가스, 니모닉, 로깅, 포킹 섹션과 최상위 앱 플래그로 구성된다.
//! 모든 리프는 원시 값(문자열, 불리언, 정수)이며 `config` crate로 파일/환경변수에서 로드.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 최상위 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RPC 서버 설정
    pub server: ServerSettings,
    /// 계정 설정
    pub accounts: AccountsSettings,
    /// 가스 설정
    pub gas: GasSettings,
    /// 니모닉 설정
    pub mnemonic: MnemonicSettings,
    /// 로깅 설정
    pub logging: LoggingSettings,
    /// 포킹 설정
    pub forking: ForkingSettings,
    /// 사용 통계 전송
    pub google_analytics_tracking: bool,
    /// CPU/메모리 프로파일링
    pub cpu_and_memory_profiling: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::default_config()
    }
}

// ============================================================
// 섹션
// ============================================================

/// RPC 서버 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// 바인딩 호스트명
    pub hostname: String,
    /// RPC 포트
    pub port: u16,
    /// 네트워크 ID
    pub network_id: u64,
    /// 트랜잭션마다 즉시 블록 생성
    pub automine: bool,
    /// 자동 채굴이 꺼져 있을 때 블록 간격 (초)
    pub block_time: u64,
    /// 실패한 트랜잭션의 VM 에러를 RPC 응답에 포함
    pub vm_errors_on_rpc_response: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
            port: default_port(),
            network_id: default_network_id(),
            automine: true,
            block_time: 0,
            vm_errors_on_rpc_response: false,
        }
    }
}

/// 계정 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountsSettings {
    /// 생성할 계정 수
    pub total_accounts: u64,
    /// 계정별 초기 잔액 (ether)
    pub default_balance_ether: u64,
    /// 계정 잠금
    pub locked: bool,
}

impl Default for AccountsSettings {
    fn default() -> Self {
        Self {
            total_accounts: default_total_accounts(),
            default_balance_ether: default_balance_ether(),
            locked: false,
        }
    }
}

/// 가스 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasSettings {
    /// 블록 가스 한도
    pub limit: u64,
    /// 가스 가격 (wei)
    pub price: u64,
    /// 하드포크
    pub hardfork: Hardfork,
}

impl Default for GasSettings {
    fn default() -> Self {
        Self {
            limit: default_gas_limit(),
            price: default_gas_price(),
            hardfork: Hardfork::default(),
        }
    }
}

/// 니모닉 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MnemonicSettings {
    /// 시작 시 니모닉 자동 생성
    pub autogenerate: bool,
    /// 사용자 지정 니모닉
    pub phrase: String,
}

impl Default for MnemonicSettings {
    fn default() -> Self {
        Self {
            autogenerate: true,
            phrase: String::new(),
        }
    }
}

/// 로깅 설정
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// 상세 로그
    pub verbose: bool,
    /// 로그 파일 출력
    pub output_to_file: bool,
    /// 로그 파일 디렉토리
    pub directory: String,
}

/// 포킹 설정
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForkingSettings {
    /// 포크할 체인 RPC URL (빈 문자열이면 포크 없음)
    pub url: String,
    /// 포크 기준 블록 (None이면 최신)
    pub block_number: Option<u64>,
}

// ============================================================
// 하드포크
// ============================================================

/// 지원 하드포크
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Hardfork {
    Byzantium,
    Constantinople,
    #[default]
    Petersburg,
    Istanbul,
    MuirGlacier,
    Berlin,
    London,
}

impl Hardfork {
    /// 선택 목록 순서
    pub const ALL: [Hardfork; 7] = [
        Hardfork::Byzantium,
        Hardfork::Constantinople,
        Hardfork::Petersburg,
        Hardfork::Istanbul,
        Hardfork::MuirGlacier,
        Hardfork::Berlin,
        Hardfork::London,
    ];

    /// 설정 파일에 쓰이는 이름
    pub fn name(&self) -> &'static str {
        match self {
            Hardfork::Byzantium => "byzantium",
            Hardfork::Constantinople => "constantinople",
            Hardfork::Petersburg => "petersburg",
            Hardfork::Istanbul => "istanbul",
            Hardfork::MuirGlacier => "muirGlacier",
            Hardfork::Berlin => "berlin",
            Hardfork::London => "london",
        }
    }
}

impl fmt::Display for Hardfork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Hardfork {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hardfork::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

// ============================================================
// Settings impl
// ============================================================

impl Settings {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self {
            server: ServerSettings::default(),
            accounts: AccountsSettings::default(),
            gas: GasSettings::default(),
            mnemonic: MnemonicSettings::default(),
            logging: LoggingSettings::default(),
            forking: ForkingSettings::default(),
            google_analytics_tracking: false,
            cpu_and_memory_profiling: false,
        }
    }

    /// `other`와 값이 다른 최상위 키만 가져온다.
    ///
    /// 가져온 키 이름 목록을 반환한다.
    pub fn merge_changed(&mut self, other: &Settings) -> Vec<&'static str> {
        let mut merged = Vec::new();

        if self.server != other.server {
            self.server = other.server.clone();
            merged.push("server");
        }
        if self.accounts != other.accounts {
            self.accounts = other.accounts.clone();
            merged.push("accounts");
        }
        if self.gas != other.gas {
            self.gas = other.gas.clone();
            merged.push("gas");
        }
        if self.mnemonic != other.mnemonic {
            self.mnemonic = other.mnemonic.clone();
            merged.push("mnemonic");
        }
        if self.logging != other.logging {
            self.logging = other.logging.clone();
            merged.push("logging");
        }
        if self.forking != other.forking {
            self.forking = other.forking.clone();
            merged.push("forking");
        }
        if self.google_analytics_tracking != other.google_analytics_tracking {
            self.google_analytics_tracking = other.google_analytics_tracking;
            merged.push("google_analytics_tracking");
        }
        if self.cpu_and_memory_profiling != other.cpu_and_memory_profiling {
            self.cpu_and_memory_profiling = other.cpu_and_memory_profiling;
            merged.push("cpu_and_memory_profiling");
        }

        merged
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_hostname() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    7545
}
fn default_network_id() -> u64 {
    5777
}
fn default_total_accounts() -> u64 {
    10
}
fn default_balance_ether() -> u64 {
    100
}
fn default_gas_limit() -> u64 {
    6_721_975
}
fn default_gas_price() -> u64 {
    20_000_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default_config();
        assert_eq!(settings.server.hostname, "127.0.0.1");
        assert_eq!(settings.server.port, 7545);
        assert_eq!(settings.server.network_id, 5777);
        assert!(settings.server.automine);
        assert_eq!(settings.accounts.total_accounts, 10);
        assert_eq!(settings.gas.limit, 6_721_975);
        assert_eq!(settings.gas.hardfork, Hardfork::Petersburg);
        assert!(settings.mnemonic.autogenerate);
        assert!(settings.forking.block_number.is_none());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{"server":{"port":8545},"google_analytics_tracking":true}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.server.port, 8545);
        assert_eq!(settings.server.hostname, "127.0.0.1");
        assert!(settings.google_analytics_tracking);
        assert_eq!(settings.accounts, AccountsSettings::default());
    }

    #[test]
    fn partial_mnemonic_keeps_autogenerate() {
        let settings: Settings = serde_json::from_str(r#"{"mnemonic":{}}"#).unwrap();
        assert!(settings.mnemonic.autogenerate);

        let json = r#"{"mnemonic":{"phrase":"candy maple cake"}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(settings.mnemonic.autogenerate);
        assert_eq!(settings.mnemonic.phrase, "candy maple cake");
    }

    #[test]
    fn hardfork_names_parse_back() {
        assert_eq!("london".parse::<Hardfork>(), Ok(Hardfork::London));
        assert_eq!("MuirGlacier".parse::<Hardfork>(), Ok(Hardfork::MuirGlacier));
        assert!("frontier".parse::<Hardfork>().is_err());

        let json = serde_json::to_string(&Hardfork::MuirGlacier).unwrap();
        assert_eq!(json, "\"muirGlacier\"");
    }

    #[test]
    fn merge_changed_only_touches_differing_keys() {
        let mut local = Settings::default_config();
        let mut incoming = local.clone();
        incoming.gas.price = 1;
        incoming.cpu_and_memory_profiling = true;

        let merged = local.merge_changed(&incoming);
        assert_eq!(merged, vec!["gas", "cpu_and_memory_profiling"]);
        assert_eq!(local, incoming);
    }

    #[test]
    fn merge_changed_noop_when_equal() {
        let mut local = Settings::default_config();
        let incoming = local.clone();
        assert!(local.merge_changed(&incoming).is_empty());
    }
}
