//! Ganache 설정 화면 핵심 에러 타입.
//!
//! UI/앱 crate는 이 에러를 그대로 전파하거나 `anyhow`로 감싼다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 점 표기 경로가 정확히 하나의 리프 키로 해석되지 않음
    #[error("알 수 없는 입력 이름 또는 키 상태: {0}")]
    UnknownField(String),

    /// 필드 종류와 값 종류 불일치
    #[error("필드 타입 불일치: {field}: {expected} 값이 필요함")]
    FieldType {
        /// 대상 필드 경로
        field: String,
        /// 기대한 값 종류
        expected: String,
    },

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패: {field}: {message}")]
    Validation {
        /// 검증 실패한 필드 경로
        field: String,
        /// 실패 사유
        message: String,
    },

    /// 재시작 조건 미충족 (포트 확인 대기, 포트 점유, 잘못된 필드)
    #[error("재시작 불가: {0}")]
    RestartBlocked(String),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 외부 제공자(설정 저장소, 테스트 RPC) 호출 실패
    #[error("제공자 에러: {0}")]
    Provider(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}
