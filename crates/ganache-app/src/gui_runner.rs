//! GUI 런너 모듈.
//!
//! 어댑터를 와이어링하고 iced 애플리케이션을 실행한다.

use anyhow::{anyhow, Result};
use iced::{window, Size};
use std::sync::Arc;
use tracing::info;

use ganache_app::{InMemorySettingsStore, InMemoryTestRpc};
use ganache_core::config::Settings;
use ganache_core::ports::settings_provider::SettingsProvider;
use ganache_core::ports::test_rpc::TestRpcProvider;
use ganache_ui::{GanacheApp, Locale};

/// 설정 화면 실행
pub fn run_gui(initial: Settings, locale: Locale) -> Result<()> {
    info!("GUI 시작 (언어: {})", locale.code());

    let store: Arc<dyn SettingsProvider> = Arc::new(InMemorySettingsStore::new(initial.clone()));
    let rpc: Arc<dyn TestRpcProvider> = Arc::new(InMemoryTestRpc::new());

    let result = iced::application(GanacheApp::title, GanacheApp::update, GanacheApp::view)
        .theme(GanacheApp::theme)
        .subscription(GanacheApp::subscription)
        .window(window::Settings {
            size: Size::new(900.0, 680.0),
            min_size: Some(Size::new(640.0, 480.0)),
            position: window::Position::Centered,
            resizable: true,
            decorations: true,
            ..window::Settings::default()
        })
        .run_with(move || GanacheApp::new(&initial, store, rpc, locale));

    info!("GUI 종료");
    result.map_err(|e| anyhow!("GUI 실행 실패: {e}"))
}
