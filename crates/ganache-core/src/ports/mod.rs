//! 포트 인터페이스 (trait).
//!
//! 설정 화면이 소비하는 외부 협력자. 어댑터는 `ganache-app`에 있고
//! `Arc<dyn T>`로 와이어링한다. 비동기 trait은 `async_trait`을 사용한다.

pub mod navigator;
pub mod settings_provider;
pub mod test_rpc;
