//! 설정 필드 경로.
//!
//! 런타임 문자열 분할 대신 편집 가능한 리프마다 하나의 [`Field`] 변형을 둔다.
//! 점 표기 이름(`"server.port"`)은 [`Field::from_path`]로 한 번만 해석된다.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{Hardfork, Settings};
use crate::error::CoreError;
use crate::models::validation::Violation;

/// 설정 탭 (= 최상위 섹션)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    Server,
    Accounts,
    Gas,
    Mnemonic,
    Logging,
    Forking,
    Ganache,
}

impl Section {
    /// 탭 표시 순서
    pub const ALL: [Section; 7] = [
        Section::Server,
        Section::Accounts,
        Section::Gas,
        Section::Mnemonic,
        Section::Logging,
        Section::Forking,
        Section::Ganache,
    ];

    /// 섹션에 속한 필드
    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| f.section() == self)
    }
}

/// 필드 값 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 자유 텍스트
    Text,
    /// 체크박스/토글
    Flag,
    /// 부호 없는 정수
    Integer,
    /// 비워 둘 수 있는 정수
    OptionalInteger,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "텍스트",
            FieldKind::Flag => "불리언",
            FieldKind::Integer => "정수",
            FieldKind::OptionalInteger => "정수 또는 빈 값",
        };
        f.write_str(name)
    }
}

/// 리프에 기록되는 원시 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Integer(u64),
    /// 선택 필드의 빈 값
    Unset,
}

impl FieldValue {
    /// 입력 상자에 표시할 문자열
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Unset => String::new(),
        }
    }
}

/// 편집 가능한 설정 리프
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    ServerHostname,
    ServerPort,
    ServerNetworkId,
    ServerAutomine,
    ServerBlockTime,
    ServerVmErrorsOnRpcResponse,
    AccountsTotal,
    AccountsDefaultBalance,
    AccountsLocked,
    GasLimit,
    GasPrice,
    GasHardfork,
    MnemonicAutogenerate,
    MnemonicPhrase,
    LoggingVerbose,
    LoggingOutputToFile,
    LoggingDirectory,
    ForkingUrl,
    ForkingBlockNumber,
    GoogleAnalyticsTracking,
    CpuAndMemoryProfiling,
}

impl Field {
    pub const ALL: [Field; 21] = [
        Field::ServerHostname,
        Field::ServerPort,
        Field::ServerNetworkId,
        Field::ServerAutomine,
        Field::ServerBlockTime,
        Field::ServerVmErrorsOnRpcResponse,
        Field::AccountsTotal,
        Field::AccountsDefaultBalance,
        Field::AccountsLocked,
        Field::GasLimit,
        Field::GasPrice,
        Field::GasHardfork,
        Field::MnemonicAutogenerate,
        Field::MnemonicPhrase,
        Field::LoggingVerbose,
        Field::LoggingOutputToFile,
        Field::LoggingDirectory,
        Field::ForkingUrl,
        Field::ForkingBlockNumber,
        Field::GoogleAnalyticsTracking,
        Field::CpuAndMemoryProfiling,
    ];

    /// 점 표기 경로
    pub fn path(self) -> &'static str {
        match self {
            Field::ServerHostname => "server.hostname",
            Field::ServerPort => "server.port",
            Field::ServerNetworkId => "server.network_id",
            Field::ServerAutomine => "server.automine",
            Field::ServerBlockTime => "server.block_time",
            Field::ServerVmErrorsOnRpcResponse => "server.vm_errors_on_rpc_response",
            Field::AccountsTotal => "accounts.total_accounts",
            Field::AccountsDefaultBalance => "accounts.default_balance_ether",
            Field::AccountsLocked => "accounts.locked",
            Field::GasLimit => "gas.limit",
            Field::GasPrice => "gas.price",
            Field::GasHardfork => "gas.hardfork",
            Field::MnemonicAutogenerate => "mnemonic.autogenerate",
            Field::MnemonicPhrase => "mnemonic.phrase",
            Field::LoggingVerbose => "logging.verbose",
            Field::LoggingOutputToFile => "logging.output_to_file",
            Field::LoggingDirectory => "logging.directory",
            Field::ForkingUrl => "forking.url",
            Field::ForkingBlockNumber => "forking.block_number",
            Field::GoogleAnalyticsTracking => "google_analytics_tracking",
            Field::CpuAndMemoryProfiling => "cpu_and_memory_profiling",
        }
    }

    /// 점 표기 이름을 필드로 해석한다.
    ///
    /// 빈 세그먼트가 있거나 리프 하나로 떨어지지 않으면 `UnknownField`.
    pub fn from_path(name: &str) -> Result<Field, CoreError> {
        if name.split('.').any(str::is_empty) {
            return Err(CoreError::UnknownField(name.to_string()));
        }
        Field::ALL
            .into_iter()
            .find(|f| f.path() == name)
            .ok_or_else(|| CoreError::UnknownField(name.to_string()))
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::ServerHostname
            | Field::GasHardfork
            | Field::MnemonicPhrase
            | Field::LoggingDirectory
            | Field::ForkingUrl => FieldKind::Text,
            Field::ServerPort
            | Field::ServerNetworkId
            | Field::ServerBlockTime
            | Field::AccountsTotal
            | Field::AccountsDefaultBalance
            | Field::GasLimit
            | Field::GasPrice => FieldKind::Integer,
            Field::ForkingBlockNumber => FieldKind::OptionalInteger,
            Field::ServerAutomine
            | Field::ServerVmErrorsOnRpcResponse
            | Field::AccountsLocked
            | Field::MnemonicAutogenerate
            | Field::LoggingVerbose
            | Field::LoggingOutputToFile
            | Field::GoogleAnalyticsTracking
            | Field::CpuAndMemoryProfiling => FieldKind::Flag,
        }
    }

    /// 필드를 편집하는 탭
    pub fn section(self) -> Section {
        match self {
            Field::ServerHostname
            | Field::ServerPort
            | Field::ServerNetworkId
            | Field::ServerAutomine
            | Field::ServerBlockTime
            | Field::ServerVmErrorsOnRpcResponse => Section::Server,
            Field::AccountsTotal | Field::AccountsDefaultBalance | Field::AccountsLocked => {
                Section::Accounts
            }
            Field::GasLimit | Field::GasPrice | Field::GasHardfork => Section::Gas,
            Field::MnemonicAutogenerate | Field::MnemonicPhrase => Section::Mnemonic,
            Field::LoggingVerbose | Field::LoggingOutputToFile | Field::LoggingDirectory => {
                Section::Logging
            }
            Field::ForkingUrl | Field::ForkingBlockNumber => Section::Forking,
            Field::GoogleAnalyticsTracking | Field::CpuAndMemoryProfiling => Section::Ganache,
        }
    }

    /// 이 필드 값이 바뀌면 다시 검증해야 하는 필드
    pub fn dependents(self) -> &'static [Field] {
        match self {
            Field::ServerAutomine => &[Field::ServerBlockTime],
            Field::MnemonicAutogenerate => &[Field::MnemonicPhrase],
            Field::LoggingOutputToFile => &[Field::LoggingDirectory],
            _ => &[],
        }
    }

    /// 입력 문자열을 필드 종류에 맞는 값으로 변환한다.
    pub fn parse_input(self, raw: &str) -> Result<FieldValue, Violation> {
        match self.kind() {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Flag => raw
                .trim()
                .parse::<bool>()
                .map(FieldValue::Flag)
                .map_err(|_| Violation::NotABoolean),
            FieldKind::Integer => parse_integer(raw).map(FieldValue::Integer),
            FieldKind::OptionalInteger => {
                if raw.trim().is_empty() {
                    Ok(FieldValue::Unset)
                } else {
                    parse_integer(raw).map(FieldValue::Integer)
                }
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

fn parse_integer(raw: &str) -> Result<u64, Violation> {
    raw.trim().parse::<u64>().map_err(|_| Violation::NotANumber)
}

// ============================================================
// Settings 리프 접근
// ============================================================

impl Settings {
    /// 리프 값 조회
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::ServerHostname => FieldValue::Text(self.server.hostname.clone()),
            Field::ServerPort => FieldValue::Integer(u64::from(self.server.port)),
            Field::ServerNetworkId => FieldValue::Integer(self.server.network_id),
            Field::ServerAutomine => FieldValue::Flag(self.server.automine),
            Field::ServerBlockTime => FieldValue::Integer(self.server.block_time),
            Field::ServerVmErrorsOnRpcResponse => {
                FieldValue::Flag(self.server.vm_errors_on_rpc_response)
            }
            Field::AccountsTotal => FieldValue::Integer(self.accounts.total_accounts),
            Field::AccountsDefaultBalance => {
                FieldValue::Integer(self.accounts.default_balance_ether)
            }
            Field::AccountsLocked => FieldValue::Flag(self.accounts.locked),
            Field::GasLimit => FieldValue::Integer(self.gas.limit),
            Field::GasPrice => FieldValue::Integer(self.gas.price),
            Field::GasHardfork => FieldValue::Text(self.gas.hardfork.name().to_string()),
            Field::MnemonicAutogenerate => FieldValue::Flag(self.mnemonic.autogenerate),
            Field::MnemonicPhrase => FieldValue::Text(self.mnemonic.phrase.clone()),
            Field::LoggingVerbose => FieldValue::Flag(self.logging.verbose),
            Field::LoggingOutputToFile => FieldValue::Flag(self.logging.output_to_file),
            Field::LoggingDirectory => FieldValue::Text(self.logging.directory.clone()),
            Field::ForkingUrl => FieldValue::Text(self.forking.url.clone()),
            Field::ForkingBlockNumber => match self.forking.block_number {
                Some(n) => FieldValue::Integer(n),
                None => FieldValue::Unset,
            },
            Field::GoogleAnalyticsTracking => FieldValue::Flag(self.google_analytics_tracking),
            Field::CpuAndMemoryProfiling => FieldValue::Flag(self.cpu_and_memory_profiling),
        }
    }

    /// 리프 하나만 기록한다. 형제 키는 건드리지 않는다.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), CoreError> {
        match (field, value) {
            (Field::ServerHostname, FieldValue::Text(s)) => self.server.hostname = s,
            (Field::ServerPort, FieldValue::Integer(n)) => {
                self.server.port = u16::try_from(n)
                    .map_err(|_| validation_error(field, Violation::OutOfRange { min: 1, max: 65_535 }))?;
            }
            (Field::ServerNetworkId, FieldValue::Integer(n)) => self.server.network_id = n,
            (Field::ServerAutomine, FieldValue::Flag(b)) => self.server.automine = b,
            (Field::ServerBlockTime, FieldValue::Integer(n)) => self.server.block_time = n,
            (Field::ServerVmErrorsOnRpcResponse, FieldValue::Flag(b)) => {
                self.server.vm_errors_on_rpc_response = b
            }
            (Field::AccountsTotal, FieldValue::Integer(n)) => self.accounts.total_accounts = n,
            (Field::AccountsDefaultBalance, FieldValue::Integer(n)) => {
                self.accounts.default_balance_ether = n
            }
            (Field::AccountsLocked, FieldValue::Flag(b)) => self.accounts.locked = b,
            (Field::GasLimit, FieldValue::Integer(n)) => self.gas.limit = n,
            (Field::GasPrice, FieldValue::Integer(n)) => self.gas.price = n,
            (Field::GasHardfork, FieldValue::Text(s)) => {
                self.gas.hardfork = s
                    .parse::<Hardfork>()
                    .map_err(|_| validation_error(field, Violation::UnknownHardfork))?;
            }
            (Field::MnemonicAutogenerate, FieldValue::Flag(b)) => self.mnemonic.autogenerate = b,
            (Field::MnemonicPhrase, FieldValue::Text(s)) => self.mnemonic.phrase = s,
            (Field::LoggingVerbose, FieldValue::Flag(b)) => self.logging.verbose = b,
            (Field::LoggingOutputToFile, FieldValue::Flag(b)) => self.logging.output_to_file = b,
            (Field::LoggingDirectory, FieldValue::Text(s)) => self.logging.directory = s,
            (Field::ForkingUrl, FieldValue::Text(s)) => self.forking.url = s,
            (Field::ForkingBlockNumber, FieldValue::Integer(n)) => {
                self.forking.block_number = Some(n)
            }
            (Field::ForkingBlockNumber, FieldValue::Unset) => self.forking.block_number = None,
            (Field::GoogleAnalyticsTracking, FieldValue::Flag(b)) => {
                self.google_analytics_tracking = b
            }
            (Field::CpuAndMemoryProfiling, FieldValue::Flag(b)) => {
                self.cpu_and_memory_profiling = b
            }
            (field, _) => {
                return Err(CoreError::FieldType {
                    field: field.path().to_string(),
                    expected: field.kind().to_string(),
                })
            }
        }
        Ok(())
    }
}

fn validation_error(field: Field, violation: Violation) -> CoreError {
    CoreError::Validation {
        field: field.path().to_string(),
        message: violation.to_string(),
    }
}
