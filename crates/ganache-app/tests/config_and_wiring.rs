//! 설정 로드 및 어댑터 와이어링 통합 테스트.
//!
//! ConfigManager → ConfigScreen → 어댑터 흐름 검증.

use assert_matches::assert_matches;
use ganache_app::{InMemorySettingsStore, InMemoryTestRpc};
use ganache_core::config::Settings;
use ganache_core::config_manager::ConfigManager;
use ganache_core::error::CoreError;
use ganache_core::models::field::Field;
use ganache_core::models::navigation::Route;
use ganache_core::models::port_status::{PortStatus, ProcessInfo, RpcLifecycle, TestRpcState};
use ganache_core::ports::navigator::Navigator;
use ganache_core::ports::settings_provider::SettingsProvider;
use ganache_core::ports::test_rpc::TestRpcProvider;
use ganache_ui::{ConfigScreen, EditState, InputEvent, NavigationHistory, RestartBlocker};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn load(json: &str, prefix: &str) -> Settings {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, json).unwrap();
    ConfigManager::with_sources(path, prefix).unwrap().get()
}

#[test]
fn loaded_settings_drive_the_screen() {
    let settings = load(r#"{"server":{"port":8545}}"#, "GANACHE_IT_LOAD");
    let mut screen = ConfigScreen::new(&settings, TestRpcState::default());

    let port = screen.mount();
    assert_eq!(port, 8545);
    screen.port_check_finished(port, Ok(PortStatus::clear(port)));

    screen
        .handle_input_change(InputEvent::text("server.port", "8546"))
        .unwrap();
    assert_eq!(screen.settings().server.port, 8546);
    assert_eq!(screen.settings().server.hostname, settings.server.hostname);
    assert_eq!(screen.edit_state(), EditState::Dirty);
}

#[test]
fn chrome_blocks_ganache_does_not() {
    let settings = load(r#"{"server":{"port":8545}}"#, "GANACHE_IT_PID");
    let process = |name: &str| ProcessInfo {
        name: name.to_string(),
        pid: 12,
    };

    let mut screen = ConfigScreen::new(&settings, TestRpcState::default());
    screen.mount();
    screen.port_check_finished(8545, Ok(PortStatus::blocked(8545, vec![process("chrome")])));
    assert!(screen.restart_disabled());
    assert_eq!(
        screen.restart_blockers(),
        vec![RestartBlocker::PortBlocked(process("chrome"))]
    );

    screen.mount();
    screen.port_check_finished(8545, Ok(PortStatus::blocked(8545, vec![process("Ganache")])));
    assert!(!screen.restart_disabled());
}

#[tokio::test]
async fn restart_flow_through_adapters() {
    let settings = Settings::default_config();
    let store = Arc::new(InMemorySettingsStore::new(settings.clone()));
    let rpc = Arc::new(InMemoryTestRpc::new());

    let mut screen = ConfigScreen::new(&settings, rpc.state().await.unwrap());
    let mut history = NavigationHistory::opened_from_accounts();

    // 포트는 테스트 환경에 따라 사용 중일 수 있지만 점유 프로세스를 알 수 없으면 막지 않는다
    let port = screen.mount();
    screen.port_check_finished(port, store.check_port(port).await.map_err(|e| e.to_string()));
    assert!(!screen.is_port_blocked());

    screen.edit_text(Field::ServerNetworkId, "1337".into()).unwrap();
    let pending = screen.begin_restart().unwrap();
    assert!(screen.is_dirty());

    store.save_settings(&pending).await.unwrap();
    let state = rpc.restart(&pending).await.unwrap();
    screen.restart_succeeded(&pending);
    screen.receive_test_rpc_state(state);

    assert_eq!(store.settings().await.unwrap().server.network_id, 1337);
    assert_eq!(screen.test_rpc().lifecycle, RpcLifecycle::Running);
    assert_eq!(screen.edit_state(), EditState::Clean);
    assert!(!screen.restart_disabled());
    assert_eq!(history.go_back(), Some(Route::Accounts));
}

#[tokio::test]
async fn external_change_reaches_clean_screen_only() {
    let settings = Settings::default_config();
    let store = InMemorySettingsStore::new(settings.clone());

    let mut clean = ConfigScreen::new(&settings, TestRpcState::default());
    let mut dirty = ConfigScreen::new(&settings, TestRpcState::default());
    dirty.toggle(Field::LoggingVerbose, true).unwrap();

    let mut external = settings.clone();
    external.gas.limit = 8_000_000;
    store.replace(external);

    let snapshot = store.settings().await.unwrap();
    clean.receive_settings(snapshot.clone());
    dirty.receive_settings(snapshot);

    assert_eq!(clean.settings().gas.limit, 8_000_000);
    assert_eq!(dirty.settings().gas.limit, settings.gas.limit);
    assert!(dirty.settings().logging.verbose);
}

#[test]
fn unknown_input_name_reports_error() {
    let mut screen = ConfigScreen::new(&Settings::default_config(), TestRpcState::default());
    let err = screen
        .handle_input_change(InputEvent::checkbox("ganache.analytics", true))
        .unwrap_err();
    assert_matches!(err, CoreError::UnknownField(_));
}
