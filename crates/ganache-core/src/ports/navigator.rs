//! 화면 이동 기록 포트.
//!
//! 구현: `ganache-ui` crate (`NavigationHistory`)

use crate::models::navigation::Route;

/// 이동 기록 스택
pub trait Navigator {
    /// 새 화면으로 이동
    fn push(&mut self, route: Route);

    /// 현재 항목을 꺼내 반환
    fn pop(&mut self) -> Option<Route>;

    /// 현재 항목을 꺼내고 이전 화면을 반환
    fn go_back(&mut self) -> Option<Route>;

    /// 현재 화면
    fn current(&self) -> Option<Route>;
}
