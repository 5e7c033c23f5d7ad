//! 화면 라우트.

use serde::{Deserialize, Serialize};

/// 앱 화면
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Accounts,
    Blocks,
    Transactions,
    Logs,
    Config,
}

impl Route {
    /// 해시 라우터 경로
    pub fn path(&self) -> &'static str {
        match self {
            Route::Accounts => "/accounts",
            Route::Blocks => "/blocks",
            Route::Transactions => "/transactions",
            Route::Logs => "/logs",
            Route::Config => "/config",
        }
    }
}
