//! 필드 유효성 검증 상태.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::field::Field;

/// 필드 검증 실패 사유
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// 값이 비어 있음
    Required,
    /// 정수가 아님
    NotANumber,
    /// true/false가 아님
    NotABoolean,
    /// 허용 범위 밖
    OutOfRange { min: u64, max: u64 },
    /// 최솟값 미만
    BelowMinimum(u64),
    /// 공백 포함
    ContainsWhitespace,
    /// 알 수 없는 하드포크 이름
    UnknownHardfork,
    /// 니모닉 단어 수가 12/15/18/21/24가 아님
    MnemonicWordCount(usize),
    /// 니모닉 단어에 소문자 알파벳 외 문자
    MnemonicWord(String),
    /// URL 파싱 실패
    InvalidUrl,
    /// 지원하지 않는 URL 스킴
    UnsupportedScheme(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => write!(f, "값이 필요합니다"),
            Violation::NotANumber => write!(f, "정수를 입력하세요"),
            Violation::NotABoolean => write!(f, "true 또는 false만 허용됩니다"),
            Violation::OutOfRange { min, max } => write!(f, "{min} 이상 {max} 이하여야 합니다"),
            Violation::BelowMinimum(min) => write!(f, "{min} 이상이어야 합니다"),
            Violation::ContainsWhitespace => write!(f, "공백을 포함할 수 없습니다"),
            Violation::UnknownHardfork => write!(f, "알 수 없는 하드포크"),
            Violation::MnemonicWordCount(n) => {
                write!(f, "니모닉은 12/15/18/21/24 단어여야 합니다 (현재 {n})")
            }
            Violation::MnemonicWord(w) => write!(f, "잘못된 니모닉 단어: {w}"),
            Violation::InvalidUrl => write!(f, "올바른 URL이 아닙니다"),
            Violation::UnsupportedScheme(s) => write!(f, "지원하지 않는 스킴: {s}"),
        }
    }
}

/// 필드별 "잘못됨" 플래그.
///
/// 필드 이름 키, 마지막 기록 우선. 집계는 모든 플래그의 OR.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    flags: BTreeMap<Field, bool>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드를 잘못됨으로 표시
    pub fn mark_invalid(&mut self, field: Field) {
        self.flags.insert(field, true);
    }

    /// 필드를 정상으로 표시
    pub fn mark_valid(&mut self, field: Field) {
        self.flags.insert(field, false);
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.flags.get(&field).copied().unwrap_or(false)
    }

    /// 하나라도 잘못된 필드가 있는지
    pub fn any_invalid(&self) -> bool {
        self.flags.values().any(|invalid| *invalid)
    }

    /// 잘못된 필드 목록 (필드 순서)
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.flags
            .iter()
            .filter(|(_, invalid)| **invalid)
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn clear(&mut self) {
        self.flags.clear();
    }
}
