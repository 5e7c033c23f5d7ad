//! Ganache 설정 애플리케이션.
//!
//! iced 0.13 기반 GUI 셸. 설정 화면 뷰모델에 메시지를 전달하고
//! 저장소/테스트 RPC 포트 호출을 `Task`로 실행한다.
//! i18n 지원 (한국어/영어).

use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use ganache_core::config::{Hardfork, Settings};
use ganache_core::error::CoreError;
use ganache_core::models::field::{Field, FieldValue, Section};
use ganache_core::models::navigation::Route;
use ganache_core::models::port_status::{PortStatus, TestRpcState};
use ganache_core::ports::navigator::Navigator;
use ganache_core::ports::settings_provider::SettingsProvider;
use ganache_core::ports::test_rpc::TestRpcProvider;

use crate::config_screen::ConfigScreen;
use crate::i18n::{Locale, Strings};
use crate::navigation::NavigationHistory;
use crate::panels;

/// 저장소/테스트 RPC 폴링 주기
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// 앱 메시지
#[derive(Debug, Clone)]
pub enum Message {
    /// 탭 선택
    TabSelected(Section),
    /// 텍스트 입력 변경
    TextChanged(Field, String),
    /// 토글 변경
    Toggled(Field, bool),
    /// 하드포크 선택
    HardforkSelected(Hardfork),
    /// 외부 설정 스냅샷 도착
    SettingsLoaded(Result<Settings, String>),
    /// 포트 확인 결과 (확인한 포트, 결과)
    PortChecked(u16, Result<PortStatus, String>),
    /// 테스트 RPC 상태 도착
    TestRpcStateLoaded(Result<TestRpcState, String>),
    /// 재시작 버튼
    RestartPressed,
    /// 재시작 완료
    RestartFinished(Result<TestRpcState, String>),
    /// 취소 버튼
    CancelPressed,
    /// 설정 화면 다시 열기
    OpenConfig,
    /// 주기 타이머
    Tick(Instant),
    /// 언어 변경
    ChangeLanguage(Locale),
}

/// Ganache 설정 앱
pub struct GanacheApp {
    screen: ConfigScreen,
    history: NavigationHistory,
    settings_provider: Arc<dyn SettingsProvider>,
    test_rpc: Arc<dyn TestRpcProvider>,
    locale: Locale,
    /// 재시작 진행 중인 설정 (성공해야 확정)
    pending_restart: Option<Settings>,
    /// 마지막 재시작 실패 사유
    last_error: Option<String>,
}

impl GanacheApp {
    /// 앱 생성. 설정 화면을 마운트하고 첫 포트 확인을 시작한다.
    pub fn new(
        initial: &Settings,
        settings_provider: Arc<dyn SettingsProvider>,
        test_rpc: Arc<dyn TestRpcProvider>,
        locale: Locale,
    ) -> (Self, Task<Message>) {
        let mut app = Self {
            screen: ConfigScreen::new(initial, TestRpcState::default()),
            history: NavigationHistory::opened_from_accounts(),
            settings_provider,
            test_rpc,
            locale,
            pending_restart: None,
            last_error: None,
        };
        let port = app.screen.mount();
        let task = Task::batch([app.check_port(port), app.load_test_rpc_state()]);
        (app, task)
    }

    pub fn screen(&self) -> &ConfigScreen {
        &self.screen
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_restarting(&self) -> bool {
        self.pending_restart.is_some()
    }

    /// 현재 문자열 반환
    fn strings(&self) -> &'static Strings {
        Strings::for_locale(self.locale)
    }

    /// 앱 제목
    pub fn title(&self) -> String {
        self.strings().app_title.to_string()
    }

    /// 메시지 처리
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.screen.select_tab(tab);
                debug!("탭 전환: {:?}", tab);
            }

            Message::TextChanged(field, raw) => {
                let port_before = self.screen.settings().server.port;
                if let Err(e) = self.screen.edit_text(field, raw) {
                    warn!("입력 처리 실패: {e}");
                }
                return self.recheck_port_if_changed(port_before);
            }

            Message::Toggled(field, checked) => {
                if let Err(e) = self.screen.toggle(field, checked) {
                    warn!("토글 처리 실패: {e}");
                }
            }

            Message::HardforkSelected(hardfork) => {
                let value = FieldValue::Text(hardfork.name().to_string());
                if let Err(e) = self.screen.change_field(Field::GasHardfork, value) {
                    warn!("하드포크 변경 실패: {e}");
                }
            }

            Message::SettingsLoaded(Ok(settings)) => {
                let port_before = self.screen.settings().server.port;
                self.screen.receive_settings(settings);
                return self.recheck_port_if_changed(port_before);
            }

            Message::SettingsLoaded(Err(e)) => {
                warn!("설정 조회 실패: {e}");
            }

            Message::PortChecked(port, result) => {
                self.screen.port_check_finished(port, result);
            }

            Message::TestRpcStateLoaded(Ok(state)) => {
                self.screen.receive_test_rpc_state(state);
            }

            Message::TestRpcStateLoaded(Err(e)) => {
                warn!("테스트 RPC 상태 조회 실패: {e}");
            }

            Message::RestartPressed => {
                if self.is_restarting() {
                    return Task::none();
                }
                match self.screen.begin_restart() {
                    Ok(settings) => {
                        self.pending_restart = Some(settings.clone());
                        self.last_error = None;
                        return self.restart_rpc(settings);
                    }
                    Err(e) => warn!("재시작 불가: {e}"),
                }
            }

            Message::RestartFinished(Ok(state)) => {
                if let Some(committed) = self.pending_restart.take() {
                    self.screen.restart_succeeded(&committed);
                }
                self.screen.receive_test_rpc_state(state);
                let route = self.history.go_back();
                info!("재시작 완료, 이동: {:?}", route.map(|r| r.path()));
            }

            Message::RestartFinished(Err(e)) => {
                self.pending_restart = None;
                self.screen.restart_failed(e.clone());
                self.last_error = Some(e);
            }

            Message::CancelPressed => {
                let route = self.screen.cancel(&mut self.history);
                debug!("취소 후 화면: {:?}", route.map(|r| r.path()));
            }

            Message::OpenConfig => {
                self.history.push(Route::Config);
                let port = self.screen.begin_port_check();
                return self.check_port(port);
            }

            Message::Tick(_) => {
                return Task::batch([self.load_settings(), self.load_test_rpc_state()]);
            }

            Message::ChangeLanguage(locale) => {
                self.locale = locale;
                info!("언어 변경: {}", locale.code());
            }
        }

        Task::none()
    }

    /// 포트가 바뀌었으면 새 포트 확인
    fn recheck_port_if_changed(&mut self, port_before: u16) -> Task<Message> {
        if self.screen.settings().server.port == port_before {
            return Task::none();
        }
        let port = self.screen.begin_port_check();
        self.check_port(port)
    }

    fn check_port(&self, port: u16) -> Task<Message> {
        let provider = Arc::clone(&self.settings_provider);
        Task::perform(
            async move { provider.check_port(port).await.map_err(|e| e.to_string()) },
            move |result| Message::PortChecked(port, result),
        )
    }

    fn load_settings(&self) -> Task<Message> {
        let provider = Arc::clone(&self.settings_provider);
        Task::perform(
            async move { provider.settings().await.map_err(|e| e.to_string()) },
            Message::SettingsLoaded,
        )
    }

    fn load_test_rpc_state(&self) -> Task<Message> {
        let rpc = Arc::clone(&self.test_rpc);
        Task::perform(
            async move { rpc.state().await.map_err(|e| e.to_string()) },
            Message::TestRpcStateLoaded,
        )
    }

    /// 설정을 저장소에 넘기고 테스트 RPC 재시작
    fn restart_rpc(&self, settings: Settings) -> Task<Message> {
        let store = Arc::clone(&self.settings_provider);
        let rpc = Arc::clone(&self.test_rpc);
        Task::perform(
            async move {
                store.save_settings(&settings).await?;
                rpc.restart(&settings).await
            },
            |result: Result<TestRpcState, CoreError>| {
                Message::RestartFinished(result.map_err(|e| e.to_string()))
            },
        )
    }

    /// UI 렌더링
    pub fn view(&self) -> Element<'_, Message> {
        let content = if self.history.current() == Some(Route::Config) {
            self.view_config()
        } else {
            self.view_elsewhere()
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    /// 설정 화면
    fn view_config(&self) -> Element<'_, Message> {
        let s = self.strings();

        // 탭
        let tabs = Section::ALL.iter().fold(row![].spacing(6), |tabs, section| {
            tabs.push(
                button(text(s.tab(*section)).size(13))
                    .on_press(Message::TabSelected(*section))
                    .style(if self.screen.active_tab() == *section {
                        button::primary
                    } else {
                        button::secondary
                    }),
            )
        });

        // 동작 버튼 (비활성화 시 on_press 없음)
        let restart_label = if self.is_restarting() {
            s.restarting
        } else {
            s.restart
        };
        let can_restart = !self.is_restarting() && !self.screen.restart_disabled();
        let actions = row![
            button(text(s.cancel)).on_press(Message::CancelPressed),
            button(text(restart_label))
                .on_press_maybe(can_restart.then_some(Message::RestartPressed))
                .style(button::primary),
        ]
        .spacing(10);

        // 언어
        let language_buttons = row![
            button(text(Locale::Ko.name()).size(12))
                .on_press(Message::ChangeLanguage(Locale::Ko))
                .style(if self.locale == Locale::Ko {
                    button::primary
                } else {
                    button::secondary
                }),
            button(text(Locale::En.name()).size(12))
                .on_press(Message::ChangeLanguage(Locale::En))
                .style(if self.locale == Locale::En {
                    button::primary
                } else {
                    button::secondary
                }),
        ]
        .spacing(4);

        let header = row![tabs, iced::widget::horizontal_space(), language_buttons, actions]
            .spacing(10)
            .align_y(Alignment::Center);

        // 재시작 차단 사유
        let mut notices = Column::new().spacing(4);
        for blocker in self.screen.restart_blockers() {
            notices = notices.push(text(s.blocker(&blocker)).size(12).style(text::danger));
        }
        if let Some(err) = &self.last_error {
            notices = notices.push(
                text(format!("{}: {err}", s.restart_failed))
                    .size(12)
                    .style(text::danger),
            );
        }

        column![
            header,
            notices,
            horizontal_rule(1),
            scrollable(panels::view(&self.screen, s)).height(Length::Fill),
        ]
        .spacing(12)
        .into()
    }

    /// 설정 화면을 벗어난 상태
    fn view_elsewhere(&self) -> Element<'_, Message> {
        let s = self.strings();
        let page = self.history.current().map(|r| r.path()).unwrap_or("/");

        column![
            text(format!("{}: {page}", s.current_page)).size(16),
            button(text(s.open_settings)).on_press(Message::OpenConfig),
        ]
        .spacing(12)
        .into()
    }

    /// 테마 반환
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// 구독 (주기적 폴링)
    pub fn subscription(&self) -> Subscription<Message> {
        iced::time::every(POLL_INTERVAL).map(Message::Tick)
    }
}
