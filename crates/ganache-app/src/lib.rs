//! # ganache-app
//!
//! Ganache 설정 앱의 포트 어댑터.
//! 바이너리(`ganache`)와 통합 테스트가 함께 사용한다.

pub mod adapters;

pub use adapters::{InMemorySettingsStore, InMemoryTestRpc};
