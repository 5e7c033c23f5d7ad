//! 국제화 (i18n) 모듈.
//!
//! 한국어(ko), 영어(en) 지원.

use ganache_core::models::field::{Field, Section};
use ganache_core::models::validation::Violation;

use crate::config_screen::RestartBlocker;

/// 지원 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 한국어 (기본값)
    #[default]
    Ko,
    /// 영어
    En,
}

impl Locale {
    /// 언어 코드 반환
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    /// 언어 이름 (해당 언어로)
    pub fn name(&self) -> &'static str {
        match self {
            Locale::Ko => "한국어",
            Locale::En => "English",
        }
    }

    /// 언어 코드 파싱 ("ko", "en-US" 등)
    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.to_ascii_lowercase();
        if lower.starts_with("ko") {
            Some(Locale::Ko)
        } else if lower.starts_with("en") {
            Some(Locale::En)
        } else {
            None
        }
    }

    /// 시스템 로케일 감지
    pub fn detect_system() -> Self {
        for var in ["LC_ALL", "LANG"] {
            if let Ok(lang) = std::env::var(var) {
                if lang.starts_with("ko") {
                    return Locale::Ko;
                }
            }
        }
        // 기본값: 영어
        Locale::En
    }
}

/// UI 문자열 (로컬라이즈)
#[derive(Debug, Clone)]
pub struct Strings {
    pub locale: Locale,

    pub app_title: &'static str,

    // 동작
    pub cancel: &'static str,
    pub restart: &'static str,
    pub restarting: &'static str,
    pub open_settings: &'static str,
    pub current_page: &'static str,
    pub restart_failed: &'static str,

    // 탭
    pub tab_server: &'static str,
    pub tab_accounts: &'static str,
    pub tab_gas: &'static str,
    pub tab_mnemonic: &'static str,
    pub tab_logging: &'static str,
    pub tab_forking: &'static str,
    pub tab_ganache: &'static str,

    // 재시작 차단 사유
    pub port_check_pending: &'static str,
    pub port_check_failed: &'static str,
    pub port_blocked: &'static str,
    pub invalid_fields: &'static str,

    // 필드
    pub hostname: &'static str,
    pub port: &'static str,
    pub network_id: &'static str,
    pub automine: &'static str,
    pub block_time: &'static str,
    pub vm_errors: &'static str,
    pub total_accounts: &'static str,
    pub default_balance: &'static str,
    pub lock_accounts: &'static str,
    pub gas_limit: &'static str,
    pub gas_price: &'static str,
    pub hardfork: &'static str,
    pub autogenerate_mnemonic: &'static str,
    pub mnemonic: &'static str,
    pub verbose_logs: &'static str,
    pub output_logs_to_file: &'static str,
    pub log_directory: &'static str,
    pub fork_url: &'static str,
    pub fork_block_number: &'static str,
    pub analytics: &'static str,
    pub profiling: &'static str,
}

impl Strings {
    /// 한국어 문자열
    pub const KO: Strings = Strings {
        locale: Locale::Ko,

        app_title: "Ganache - 설정",

        cancel: "취소",
        restart: "재시작",
        restarting: "재시작 중...",
        open_settings: "설정 열기",
        current_page: "현재 화면",
        restart_failed: "재시작 실패",

        tab_server: "서버",
        tab_accounts: "계정",
        tab_gas: "가스",
        tab_mnemonic: "니모닉",
        tab_logging: "로깅",
        tab_forking: "포킹",
        tab_ganache: "Ganache",

        port_check_pending: "포트 확인 중",
        port_check_failed: "포트를 확인할 수 없음",
        port_blocked: "다른 프로세스가 포트를 사용 중",
        invalid_fields: "잘못된 항목",

        hostname: "호스트명",
        port: "포트 번호",
        network_id: "네트워크 ID",
        automine: "자동 채굴",
        block_time: "블록 간격 (초)",
        vm_errors: "RPC 응답에 VM 에러 포함",
        total_accounts: "계정 수",
        default_balance: "계정 잔액 (ETH)",
        lock_accounts: "계정 잠금",
        gas_limit: "가스 한도",
        gas_price: "가스 가격 (wei)",
        hardfork: "하드포크",
        autogenerate_mnemonic: "니모닉 자동 생성",
        mnemonic: "니모닉",
        verbose_logs: "상세 로그",
        output_logs_to_file: "로그 파일 출력",
        log_directory: "로그 디렉토리",
        fork_url: "포크 URL",
        fork_block_number: "포크 블록 번호",
        analytics: "사용 통계 전송",
        profiling: "CPU/메모리 프로파일링",
    };

    /// 영어 문자열
    pub const EN: Strings = Strings {
        locale: Locale::En,

        app_title: "Ganache - Settings",

        cancel: "CANCEL",
        restart: "RESTART",
        restarting: "RESTARTING...",
        open_settings: "SETTINGS",
        current_page: "Current page",
        restart_failed: "Restart failed",

        tab_server: "Server",
        tab_accounts: "Accounts",
        tab_gas: "Gas",
        tab_mnemonic: "Mnemonic",
        tab_logging: "Logging",
        tab_forking: "Forking",
        tab_ganache: "Ganache",

        port_check_pending: "Checking port",
        port_check_failed: "Could not check port",
        port_blocked: "Port is in use by another process",
        invalid_fields: "Invalid fields",

        hostname: "Hostname",
        port: "Port Number",
        network_id: "Network ID",
        automine: "Automine",
        block_time: "Mining Block Time (Seconds)",
        vm_errors: "Error on Transaction Failure",
        total_accounts: "Total Accounts to Generate",
        default_balance: "Account Default Balance (ETH)",
        lock_accounts: "Lock Accounts",
        gas_limit: "Gas Limit",
        gas_price: "Gas Price (wei)",
        hardfork: "Hardfork",
        autogenerate_mnemonic: "Autogenerate HD Mnemonic",
        mnemonic: "Mnemonic",
        verbose_logs: "Verbose Logs",
        output_logs_to_file: "Output Logs to File",
        log_directory: "Log Directory",
        fork_url: "Fork URL",
        fork_block_number: "Fork Block Number",
        analytics: "Google Analytics",
        profiling: "CPU & Memory Profiling",
    };

    /// 로케일에 따른 문자열 반환
    pub fn for_locale(locale: Locale) -> &'static Strings {
        match locale {
            Locale::Ko => &Self::KO,
            Locale::En => &Self::EN,
        }
    }

    /// 탭 이름
    pub fn tab(&self, section: Section) -> &'static str {
        match section {
            Section::Server => self.tab_server,
            Section::Accounts => self.tab_accounts,
            Section::Gas => self.tab_gas,
            Section::Mnemonic => self.tab_mnemonic,
            Section::Logging => self.tab_logging,
            Section::Forking => self.tab_forking,
            Section::Ganache => self.tab_ganache,
        }
    }

    /// 필드 라벨
    pub fn field(&self, field: Field) -> &'static str {
        match field {
            Field::ServerHostname => self.hostname,
            Field::ServerPort => self.port,
            Field::ServerNetworkId => self.network_id,
            Field::ServerAutomine => self.automine,
            Field::ServerBlockTime => self.block_time,
            Field::ServerVmErrorsOnRpcResponse => self.vm_errors,
            Field::AccountsTotal => self.total_accounts,
            Field::AccountsDefaultBalance => self.default_balance,
            Field::AccountsLocked => self.lock_accounts,
            Field::GasLimit => self.gas_limit,
            Field::GasPrice => self.gas_price,
            Field::GasHardfork => self.hardfork,
            Field::MnemonicAutogenerate => self.autogenerate_mnemonic,
            Field::MnemonicPhrase => self.mnemonic,
            Field::LoggingVerbose => self.verbose_logs,
            Field::LoggingOutputToFile => self.output_logs_to_file,
            Field::LoggingDirectory => self.log_directory,
            Field::ForkingUrl => self.fork_url,
            Field::ForkingBlockNumber => self.fork_block_number,
            Field::GoogleAnalyticsTracking => self.analytics,
            Field::CpuAndMemoryProfiling => self.profiling,
        }
    }

    /// 검증 실패 사유
    pub fn violation(&self, violation: &Violation) -> String {
        if self.locale == Locale::Ko {
            return violation.to_string();
        }
        match violation {
            Violation::Required => "Required".to_string(),
            Violation::NotANumber => "Must be a whole number".to_string(),
            Violation::NotABoolean => "Must be true or false".to_string(),
            Violation::OutOfRange { min, max } => format!("Must be between {min} and {max}"),
            Violation::BelowMinimum(min) => format!("Must be at least {min}"),
            Violation::ContainsWhitespace => "Must not contain spaces".to_string(),
            Violation::UnknownHardfork => "Unknown hardfork".to_string(),
            Violation::MnemonicWordCount(n) => {
                format!("Mnemonic must have 12, 15, 18, 21 or 24 words (got {n})")
            }
            Violation::MnemonicWord(w) => format!("Invalid mnemonic word: {w}"),
            Violation::InvalidUrl => "Not a valid URL".to_string(),
            Violation::UnsupportedScheme(s) => format!("Unsupported scheme: {s}"),
        }
    }

    /// 재시작 차단 사유
    pub fn blocker(&self, blocker: &RestartBlocker) -> String {
        match blocker {
            RestartBlocker::PortCheckPending => self.port_check_pending.to_string(),
            RestartBlocker::PortCheckFailed => self.port_check_failed.to_string(),
            RestartBlocker::PortBlocked(process) => {
                format!("{}: {} (pid {})", self.port_blocked, process.name, process.pid)
            }
            RestartBlocker::InvalidFields(fields) => {
                let labels: Vec<&str> = fields.iter().map(|f| self.field(*f)).collect();
                format!("{}: {}", self.invalid_fields, labels.join(", "))
            }
        }
    }
}
