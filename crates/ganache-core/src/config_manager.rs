//! 초기 설정 로드.
//!
//! 플랫폼별 설정 디렉토리의 JSON 파일과 `GANACHE_` 환경변수를 `config` crate로
//! 겹쳐 읽는다. 파일이 없으면 기본값을 쓴다. 설정을 파일에 쓰지 않는다.

use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::CoreError;

/// 설정 파일 이름
const SETTINGS_FILE_NAME: &str = "settings.json";

/// 환경변수 접두사 (`GANACHE_SERVER__PORT=8546`)
pub const ENV_PREFIX: &str = "GANACHE";

/// 설정 로더
///
/// 로드한 스냅샷을 보관하고 필요할 때 다시 읽는다.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 현재 설정 (스레드 안전)
    settings: Arc<RwLock<Settings>>,
    /// 설정 파일 경로
    settings_path: PathBuf,
    /// 환경변수 접두사
    env_prefix: String,
}

impl ConfigManager {
    /// 플랫폼 기본 경로에서 설정 로드
    pub fn new() -> Result<Self, CoreError> {
        let path = Self::config_dir()?.join(SETTINGS_FILE_NAME);
        Self::with_path(path)
    }

    /// 지정된 경로에서 설정 로드
    pub fn with_path(settings_path: PathBuf) -> Result<Self, CoreError> {
        Self::with_sources(settings_path, ENV_PREFIX)
    }

    /// 파일 경로와 환경변수 접두사를 지정해 로드
    pub fn with_sources(settings_path: PathBuf, env_prefix: &str) -> Result<Self, CoreError> {
        let settings = Self::load(&settings_path, env_prefix)?;
        info!("설정 로드 완료: {}", settings_path.display());

        Ok(Self {
            settings: Arc::new(RwLock::new(settings)),
            settings_path,
            env_prefix: env_prefix.to_string(),
        })
    }

    /// 현재 설정 반환 (복제본)
    pub fn get(&self) -> Settings {
        self.settings.read().clone()
    }

    /// 설정 파일 경로 반환
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// 파일과 환경변수에서 다시 로드
    pub fn reload(&self) -> Result<Settings, CoreError> {
        let settings = Self::load(&self.settings_path, &self.env_prefix)?;
        *self.settings.write() = settings.clone();
        info!("설정 다시 로드 완료");
        Ok(settings)
    }

    /// 플랫폼별 설정 디렉토리 경로
    pub fn config_dir() -> Result<PathBuf, CoreError> {
        ProjectDirs::from("org", "trufflesuite", "ganache")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| CoreError::Config("홈 디렉토리를 찾을 수 없습니다".to_string()))
    }

    fn load(path: &Path, env_prefix: &str) -> Result<Settings, CoreError> {
        if !path.exists() {
            debug!("설정 파일 없음, 기본값 사용: {}", path.display());
        }

        let built = Config::builder()
            .add_source(File::from(path).format(FileFormat::Json).required(false))
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                CoreError::Config(format!("설정 파일 읽기 실패: {}: {}", path.display(), e))
            })?;

        built.try_deserialize::<Settings>().map_err(|e| {
            CoreError::Config(format!("설정 파싱 실패: {}: {}", path.display(), e))
        })
    }
}
