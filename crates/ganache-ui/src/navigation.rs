//! 화면 이동 기록.
//!
//! 전역 해시 히스토리 대신 앱이 소유하고 설정 화면에 명시적으로 넘긴다.

use ganache_core::models::navigation::Route;
use ganache_core::ports::navigator::Navigator;
use tracing::debug;

/// 스택 기반 이동 기록
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    stack: Vec<Route>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 계정 화면에서 설정 화면을 연 상태
    pub fn opened_from_accounts() -> Self {
        Self {
            stack: vec![Route::Accounts, Route::Config],
        }
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Navigator for NavigationHistory {
    fn push(&mut self, route: Route) {
        debug!("화면 이동: {}", route.path());
        self.stack.push(route);
    }

    fn pop(&mut self) -> Option<Route> {
        self.stack.pop()
    }

    fn go_back(&mut self) -> Option<Route> {
        let left = self.stack.pop();
        let current = self.current();
        debug!(
            "뒤로 이동: {:?} → {:?}",
            left.map(|r| r.path()),
            current.map(|r| r.path())
        );
        current
    }

    fn current(&self) -> Option<Route> {
        self.stack.last().copied()
    }
}
