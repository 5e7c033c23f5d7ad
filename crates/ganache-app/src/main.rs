//! # ganache
//!
//! Ganache 설정 화면 바이너리 진입점.
//! CLI 파싱, tracing 초기화, 초기 설정 로드 후 GUI를 실행한다.

mod gui_runner;

use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ganache_core::config_manager::ConfigManager;
use ganache_ui::Locale;

/// Ganache 워크스페이스 설정
#[derive(Parser, Debug)]
#[command(name = "ganache")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리의 settings.json)
    #[arg(long, short = 's')]
    settings: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,

    /// UI 언어 (ko, en). 생략하면 시스템 로케일
    #[arg(long)]
    locale: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // tracing 초기화 (RUST_LOG 우선)
    let log_filter = format!(
        "ganache={},ganache_app={},ganache_ui={},ganache_core={}",
        args.log_level, args.log_level, args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    info!("Ganache 설정 화면 시작");

    let config_manager = match args.settings {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    }
    .map_err(|e| anyhow!("설정 로드 실패: {e}"))?;
    info!("설정 파일: {}", config_manager.settings_path().display());

    let locale = args
        .locale
        .as_deref()
        .and_then(Locale::from_code)
        .unwrap_or_else(Locale::detect_system);

    gui_runner::run_gui(config_manager.get(), locale)
}
