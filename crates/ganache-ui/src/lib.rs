//! # ganache-ui
//!
//! Ganache 설정 화면 크레이트.
//! 설정 화면 뷰모델(`ConfigScreen`), 탭 패널과 검증 규칙,
//! 화면 이동 기록, iced 0.13 기반 애플리케이션 셸을 제공한다.

pub mod app;
pub mod config_screen;
pub mod i18n;
pub mod navigation;
pub mod panels;

// 메인 앱 재내보내기
pub use app::{GanacheApp, Message};
pub use config_screen::{ConfigScreen, EditState, InputEvent, InputKind, PortCheck, RestartBlocker};
pub use i18n::{Locale, Strings};
pub use navigation::NavigationHistory;
