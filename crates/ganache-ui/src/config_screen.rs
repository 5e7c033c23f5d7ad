//! 설정 화면 뷰모델.
//!
//! 외부 설정 스냅샷(baseline)과 분리된 편집 사본을 들고, 필드 편집,
//! 검증 플래그 관리, 재시작 버튼 비활성화 조건을 계산한다.
//! 상태는 {Clean, Dirty} 두 가지이며 Clean일 때만 외부 변경을 병합한다.

use std::collections::BTreeMap;
use std::fmt;

use ganache_core::config::Settings;
use ganache_core::error::CoreError;
use ganache_core::models::field::{Field, FieldKind, FieldValue, Section};
use ganache_core::models::navigation::Route;
use ganache_core::models::port_status::{PortStatus, ProcessInfo, RpcLifecycle, TestRpcState};
use ganache_core::models::validation::{ValidationErrors, Violation};
use ganache_core::ports::navigator::Navigator;
use tracing::{debug, info, warn};

use crate::panels;

/// 편집 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    /// 확정되지 않은 편집 없음
    #[default]
    Clean,
    /// 편집 사본이 외부 스냅샷과 다름
    Dirty,
}

/// 포트 확인 진행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortCheck {
    /// 확인 요청 후 응답 대기
    Pending,
    /// 확인 완료
    Allowed,
    /// 확인 실패
    Disallowed,
}

/// 재시작을 막는 사유
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestartBlocker {
    PortCheckPending,
    PortCheckFailed,
    /// 이 앱이 아닌 프로세스가 포트 점유
    PortBlocked(ProcessInfo),
    /// 잘못된 필드 (필드 순서)
    InvalidFields(Vec<Field>),
}

impl fmt::Display for RestartBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestartBlocker::PortCheckPending => write!(f, "포트 확인 대기 중"),
            RestartBlocker::PortCheckFailed => write!(f, "포트 확인 실패"),
            RestartBlocker::PortBlocked(p) => {
                write!(f, "포트 점유 프로세스: {} (pid {})", p.name, p.pid)
            }
            RestartBlocker::InvalidFields(fields) => {
                let paths: Vec<&str> = fields.iter().map(|f| f.path()).collect();
                write!(f, "잘못된 필드: {}", paths.join(", "))
            }
        }
    }
}

/// 입력 요소 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// 텍스트/숫자 입력
    Text(String),
    /// 체크박스 (`checked`)
    Checkbox(bool),
}

/// DOM 스타일 변경 이벤트 (`target.name` + 값)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// 점 표기 필드 이름
    pub name: String,
    pub kind: InputKind,
}

impl InputEvent {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Text(value.into()),
        }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Checkbox(checked),
        }
    }
}

/// 설정 화면 뷰모델
#[derive(Debug, Clone)]
pub struct ConfigScreen {
    /// 편집 사본 (외부 스냅샷과 별개 소유)
    settings: Settings,
    /// 마지막으로 받은 외부 스냅샷
    baseline: Settings,
    edit_state: EditState,
    validation: ValidationErrors,
    /// 필드별 실패 사유 (표시용)
    violations: BTreeMap<Field, Violation>,
    /// 입력 상자 원문
    drafts: BTreeMap<Field, String>,
    active_tab: Section,
    port_check: PortCheck,
    test_rpc: TestRpcState,
}

impl ConfigScreen {
    /// 외부 스냅샷을 복제해 화면 생성
    pub fn new(settings: &Settings, test_rpc: TestRpcState) -> Self {
        let mut screen = Self {
            settings: settings.clone(),
            baseline: settings.clone(),
            edit_state: EditState::Clean,
            validation: ValidationErrors::new(),
            violations: BTreeMap::new(),
            drafts: BTreeMap::new(),
            active_tab: Section::Server,
            port_check: PortCheck::Allowed,
            test_rpc,
        };
        screen.validate_all();
        screen
    }

    // ============================================================
    // 조회
    // ============================================================

    /// 편집 사본
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// 외부 스냅샷
    pub fn baseline(&self) -> &Settings {
        &self.baseline
    }

    pub fn edit_state(&self) -> EditState {
        self.edit_state
    }

    pub fn is_dirty(&self) -> bool {
        self.edit_state == EditState::Dirty
    }

    pub fn validation(&self) -> &ValidationErrors {
        &self.validation
    }

    pub fn violation(&self, field: Field) -> Option<&Violation> {
        self.violations.get(&field)
    }

    pub fn active_tab(&self) -> Section {
        self.active_tab
    }

    pub fn port_check(&self) -> PortCheck {
        self.port_check
    }

    pub fn test_rpc(&self) -> &TestRpcState {
        &self.test_rpc
    }

    /// 입력 상자에 표시할 값 (편집 원문 우선)
    pub fn input_value(&self, field: Field) -> String {
        self.drafts
            .get(&field)
            .cloned()
            .unwrap_or_else(|| self.settings.get(field).display())
    }

    /// 플래그 필드 값
    pub fn flag(&self, field: Field) -> bool {
        matches!(self.settings.get(field), FieldValue::Flag(true))
    }

    // ============================================================
    // 외부 입력
    // ============================================================

    /// 화면 진입. 포트 확인을 대기 상태로 두고 확인할 포트를 반환한다.
    pub fn mount(&mut self) -> u16 {
        self.begin_port_check()
    }

    /// 현재 설정된 포트의 확인 시작
    pub fn begin_port_check(&mut self) -> u16 {
        self.port_check = PortCheck::Pending;
        let port = self.settings.server.port;
        debug!("포트 확인 요청: {port}");
        port
    }

    /// 포트 확인 결과 반영. 확인한 포트가 현재 포트와 다르면 성공이든 실패든 무시한다.
    pub fn port_check_finished(&mut self, port: u16, result: Result<PortStatus, String>) {
        if port != self.settings.server.port {
            debug!("이전 포트 확인 결과 무시: {port}");
            return;
        }
        match result {
            Ok(status) if status.port != port => {
                debug!("이전 포트 확인 결과 무시: {}", status.port);
            }
            Ok(status) => {
                debug!("포트 확인 완료: {} {:?}", status.port, status.status);
                self.test_rpc.ganache_port_status = status;
                self.port_check = PortCheck::Allowed;
            }
            Err(e) => {
                warn!("포트 확인 실패 ({port}): {e}");
                self.port_check = PortCheck::Disallowed;
            }
        }
    }

    /// 외부 설정 스냅샷 수신.
    ///
    /// Clean이면 값이 바뀐 최상위 키만 병합한다. Dirty면 편집 사본을 유지하고
    /// baseline만 갱신한다.
    pub fn receive_settings(&mut self, external: Settings) {
        if external == self.baseline && external == self.settings {
            return;
        }

        match self.edit_state {
            EditState::Clean => {
                for key in self.settings.merge_changed(&external) {
                    debug!("외부 설정 반영: {key}");
                }
                self.drafts.clear();
                self.validate_all();
            }
            EditState::Dirty => {
                debug!("편집 중, 외부 설정 변경 보류");
            }
        }

        self.baseline = external;
        self.refresh_edit_state();
    }

    /// 테스트 RPC 상태 수신. 포트 상태는 현재 포트에 대한 것만 받는다.
    pub fn receive_test_rpc_state(&mut self, state: TestRpcState) {
        if state.ganache_port_status.port == self.settings.server.port {
            self.test_rpc.ganache_port_status = state.ganache_port_status;
        }
        self.test_rpc.lifecycle = state.lifecycle;
    }

    pub fn select_tab(&mut self, tab: Section) {
        self.active_tab = tab;
    }

    // ============================================================
    // 필드 편집
    // ============================================================

    /// DOM 스타일 변경 이벤트 처리.
    ///
    /// 체크박스면 `checked`, 아니면 텍스트 값을 쓴다. 이름이 리프 하나로
    /// 해석되지 않으면 `UnknownField`.
    pub fn handle_input_change(&mut self, event: InputEvent) -> Result<(), CoreError> {
        let field = Field::from_path(&event.name)?;
        match event.kind {
            InputKind::Checkbox(checked) => self.toggle(field, checked),
            InputKind::Text(value) => self.edit_text(field, value),
        }
    }

    /// 검증 없이 리프에 값을 기록한다.
    pub fn change_field(&mut self, field: Field, value: FieldValue) -> Result<(), CoreError> {
        self.settings.set(field, value)?;
        self.drafts.remove(&field);
        self.refresh_edit_state();
        Ok(())
    }

    /// 텍스트 입력. 원문을 보관하고 패널 규칙으로 검증한 뒤 통과하면 기록한다.
    pub fn edit_text(&mut self, field: Field, raw: String) -> Result<(), CoreError> {
        if field.kind() == FieldKind::Flag {
            return Err(CoreError::FieldType {
                field: field.path().to_string(),
                expected: FieldKind::Flag.to_string(),
            });
        }
        self.apply_text(field, raw)?;
        self.revalidate_dependents(field)?;
        self.refresh_edit_state();
        Ok(())
    }

    /// 체크박스/토글 입력
    pub fn toggle(&mut self, field: Field, checked: bool) -> Result<(), CoreError> {
        self.settings.set(field, FieldValue::Flag(checked))?;
        debug!("{field} = {checked}");
        self.revalidate_dependents(field)?;
        self.refresh_edit_state();
        Ok(())
    }

    /// 필드를 잘못됨으로 표시
    pub fn notify_validation_error(&mut self, field: Field) {
        self.validation.mark_invalid(field);
    }

    /// 필드를 정상으로 표시
    pub fn notify_validations_passed(&mut self, field: Field) {
        self.validation.mark_valid(field);
    }

    /// 하나라도 잘못된 필드가 있는지
    pub fn invalid_config(&self) -> bool {
        self.validation.any_invalid()
    }

    // ============================================================
    // 재시작 / 취소
    // ============================================================

    /// 이 앱이 아닌 프로세스가 포트를 점유했는지
    pub fn is_port_blocked(&self) -> bool {
        self.test_rpc
            .ganache_port_status
            .is_blocked_by_foreign_process()
    }

    /// 재시작을 막는 사유 목록
    pub fn restart_blockers(&self) -> Vec<RestartBlocker> {
        let mut blockers = Vec::new();

        match self.port_check {
            PortCheck::Pending => blockers.push(RestartBlocker::PortCheckPending),
            PortCheck::Disallowed => blockers.push(RestartBlocker::PortCheckFailed),
            PortCheck::Allowed => {}
        }

        if self.is_port_blocked() {
            if let Some(process) = self.test_rpc.ganache_port_status.blocking_process() {
                blockers.push(RestartBlocker::PortBlocked(process.clone()));
            }
        }

        if self.invalid_config() {
            blockers.push(RestartBlocker::InvalidFields(
                self.validation.invalid_fields(),
            ));
        }

        blockers
    }

    pub fn restart_disabled(&self) -> bool {
        !self.restart_blockers().is_empty()
    }

    /// 재시작 시작. 막는 조건이 없으면 재시작에 쓸 설정을 반환한다.
    ///
    /// 편집은 아직 확정하지 않는다. 결과에 따라 `restart_succeeded` 또는
    /// `restart_failed`를 호출해야 한다.
    pub fn begin_restart(&mut self) -> Result<Settings, CoreError> {
        let blockers = self.restart_blockers();
        if !blockers.is_empty() {
            let reasons: Vec<String> = blockers.iter().map(ToString::to_string).collect();
            return Err(CoreError::RestartBlocked(reasons.join("; ")));
        }
        self.test_rpc.lifecycle = RpcLifecycle::Starting;
        info!(
            "재시작 요청 ({}:{})",
            self.settings.server.hostname, self.settings.server.port
        );
        Ok(self.settings.clone())
    }

    /// 저장과 재시작이 끝난 설정을 baseline으로 확정
    pub fn restart_succeeded(&mut self, committed: &Settings) {
        self.baseline = committed.clone();
        if self.settings == *committed {
            self.drafts.clear();
        }
        self.refresh_edit_state();
        info!("설정 확정 ({:?})", self.edit_state);
    }

    /// 재시작 실패. baseline과 편집 사본은 그대로 둔다.
    pub fn restart_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("재시작 실패: {reason}");
        self.test_rpc.lifecycle = RpcLifecycle::Failed(reason);
    }

    /// 즉시 확정하는 재시작. 호출자가 동기적으로 저장할 때 쓴다.
    pub fn restart(&mut self) -> Result<Settings, CoreError> {
        let committed = self.begin_restart()?;
        self.restart_succeeded(&committed);
        Ok(committed)
    }

    /// 편집을 버리고 이동 기록을 한 칸 되돌린다.
    pub fn cancel(&mut self, navigator: &mut dyn Navigator) -> Option<Route> {
        if self.is_dirty() {
            info!("설정 편집 취소");
        }
        self.settings = self.baseline.clone();
        self.drafts.clear();
        self.edit_state = EditState::Clean;
        self.validate_all();
        navigator.go_back()
    }

    // ============================================================
    // 내부
    // ============================================================

    fn apply_text(&mut self, field: Field, raw: String) -> Result<(), CoreError> {
        let outcome = field.parse_input(&raw).and_then(|value| {
            panels::validate(&self.settings, field, &value)?;
            Ok(value)
        });
        self.drafts.insert(field, raw);

        match outcome {
            Ok(value) => {
                debug!("{field} = {:?}", value);
                self.settings.set(field, value)?;
                self.violations.remove(&field);
                self.notify_validations_passed(field);
            }
            Err(violation) => {
                debug!("{field} 검증 실패: {violation}");
                self.violations.insert(field, violation);
                self.notify_validation_error(field);
            }
        }
        Ok(())
    }

    fn revalidate_dependents(&mut self, field: Field) -> Result<(), CoreError> {
        for dependent in field.dependents() {
            let raw = self.input_value(*dependent);
            self.apply_text(*dependent, raw)?;
        }
        Ok(())
    }

    /// 편집 원문 없이 현재 값 전체를 다시 검증
    fn validate_all(&mut self) {
        self.validation.clear();
        self.violations.clear();
        for field in Field::ALL {
            if field.kind() == FieldKind::Flag {
                continue;
            }
            let value = self.settings.get(field);
            match panels::validate(&self.settings, field, &value) {
                Ok(()) => self.notify_validations_passed(field),
                Err(violation) => {
                    self.violations.insert(field, violation);
                    self.notify_validation_error(field);
                }
            }
        }
    }

    /// 편집 사본과 baseline이 같고 반영 안 된 원문이 없으면 Clean.
    /// 검증을 통과한 원문은 이미 값으로 반영됐으므로 값만 비교한다.
    fn refresh_edit_state(&mut self) {
        let pending_draft = self
            .drafts
            .keys()
            .any(|field| self.violations.contains_key(field));

        self.edit_state = if self.settings != self.baseline || pending_draft {
            EditState::Dirty
        } else {
            EditState::Clean
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationHistory;
    use assert_matches::assert_matches;
    use ganache_core::config::Hardfork;

    fn screen() -> ConfigScreen {
        let mut settings = Settings::default_config();
        settings.server.port = 8545;
        ConfigScreen::new(&settings, TestRpcState::default())
    }

    fn ready_screen() -> ConfigScreen {
        let mut s = screen();
        let port = s.mount();
        s.port_check_finished(port, Ok(PortStatus::clear(port)));
        s
    }

    fn process(name: &str) -> ProcessInfo {
        ProcessInfo {
            name: name.to_string(),
            pid: 777,
        }
    }

    #[test]
    fn new_screen_is_clean_copy() {
        let s = screen();
        assert_eq!(s.edit_state(), EditState::Clean);
        assert_eq!(s.settings(), s.baseline());
        assert!(!s.invalid_config());
        assert_eq!(s.active_tab(), Section::Server);
    }

    #[test]
    fn dotted_input_updates_nested_leaf() {
        let mut s = ready_screen();
        s.handle_input_change(InputEvent::text("server.port", "8546"))
            .unwrap();

        assert_eq!(s.settings().server.port, 8546);
        assert_eq!(s.settings().server.hostname, "127.0.0.1");
        assert_eq!(s.settings().accounts, s.baseline().accounts);
        assert_eq!(s.baseline().server.port, 8545);
        assert!(s.is_dirty());
    }

    #[test]
    fn top_level_input_updates_top_level_key() {
        let mut s = ready_screen();
        s.handle_input_change(InputEvent::checkbox("google_analytics_tracking", true))
            .unwrap();
        assert!(s.settings().google_analytics_tracking);
        assert!(!s.settings().cpu_and_memory_profiling);
    }

    #[test]
    fn unknown_input_name_is_error() {
        let mut s = ready_screen();
        let before = s.settings().clone();
        let err = s
            .handle_input_change(InputEvent::text("server.nope", "1"))
            .unwrap_err();
        assert_matches!(err, CoreError::UnknownField(name) if name == "server.nope");
        assert_eq!(s.settings(), &before);
        assert!(!s.is_dirty());
    }

    #[test]
    fn checkbox_on_text_field_is_type_error() {
        let mut s = ready_screen();
        let err = s
            .handle_input_change(InputEvent::checkbox("server.port", true))
            .unwrap_err();
        assert_matches!(err, CoreError::FieldType { .. });
    }

    #[test]
    fn invalid_text_keeps_draft_and_flags_field() {
        let mut s = ready_screen();
        s.edit_text(Field::ServerPort, "85a".into()).unwrap();

        assert_eq!(s.input_value(Field::ServerPort), "85a");
        assert_eq!(s.settings().server.port, 8545);
        assert!(s.validation().is_invalid(Field::ServerPort));
        assert_eq!(s.violation(Field::ServerPort), Some(&Violation::NotANumber));
        assert!(s.is_dirty());
        assert!(s.restart_disabled());
    }

    #[test]
    fn fixing_field_clears_exactly_that_flag() {
        let mut s = ready_screen();
        s.edit_text(Field::ServerPort, "0".into()).unwrap();
        s.edit_text(Field::GasLimit, "".into()).unwrap();
        assert_eq!(
            s.validation().invalid_fields(),
            vec![Field::ServerPort, Field::GasLimit]
        );

        s.edit_text(Field::ServerPort, "9000".into()).unwrap();
        assert!(!s.validation().is_invalid(Field::ServerPort));
        assert!(s.validation().is_invalid(Field::GasLimit));
        assert!(s.invalid_config());

        s.edit_text(Field::GasLimit, "8000000".into()).unwrap();
        assert!(!s.invalid_config());
    }

    #[test]
    fn valid_callback_uses_given_field() {
        let mut s = ready_screen();
        s.notify_validation_error(Field::ForkingUrl);
        s.notify_validation_error(Field::MnemonicPhrase);
        s.notify_validations_passed(Field::ForkingUrl);

        assert!(!s.validation().is_invalid(Field::ForkingUrl));
        assert!(s.validation().is_invalid(Field::MnemonicPhrase));
        assert!(s.invalid_config());
    }

    #[test]
    fn toggle_revalidates_dependents() {
        let mut s = ready_screen();
        s.toggle(Field::MnemonicAutogenerate, false).unwrap();
        assert!(s.validation().is_invalid(Field::MnemonicPhrase));

        s.toggle(Field::MnemonicAutogenerate, true).unwrap();
        assert!(!s.validation().is_invalid(Field::MnemonicPhrase));
        assert!(!s.invalid_config());
    }

    #[test]
    fn reverting_edit_returns_to_clean() {
        let mut s = ready_screen();
        s.edit_text(Field::ServerNetworkId, "1337".into()).unwrap();
        assert!(s.is_dirty());
        s.edit_text(Field::ServerNetworkId, "5777".into()).unwrap();
        assert_eq!(s.edit_state(), EditState::Clean);
    }

    #[test]
    fn change_field_writes_without_validation() {
        let mut s = ready_screen();
        s.change_field(Field::GasHardfork, FieldValue::Text("london".into()))
            .unwrap();
        assert_eq!(s.settings().gas.hardfork, Hardfork::London);
        assert!(s.is_dirty());
    }

    // ------------------------------------------------------------
    // 외부 변경 병합
    // ------------------------------------------------------------

    #[test]
    fn clean_screen_merges_external_changes() {
        let mut s = ready_screen();
        let mut external = s.baseline().clone();
        external.gas.price = 1;
        external.cpu_and_memory_profiling = true;

        s.receive_settings(external.clone());
        assert_eq!(s.settings(), &external);
        assert_eq!(s.baseline(), &external);
        assert_eq!(s.edit_state(), EditState::Clean);
    }

    #[test]
    fn dirty_screen_keeps_edits() {
        let mut s = ready_screen();
        s.edit_text(Field::ServerHostname, "0.0.0.0".into()).unwrap();

        let mut external = s.baseline().clone();
        external.gas.price = 1;
        s.receive_settings(external.clone());

        assert_eq!(s.settings().server.hostname, "0.0.0.0");
        assert_eq!(s.settings().gas.price, Settings::default_config().gas.price);
        assert_eq!(s.baseline(), &external);
        assert!(s.is_dirty());
    }

    #[test]
    fn pending_invalid_draft_counts_as_dirty() {
        let mut s = ready_screen();
        s.edit_text(Field::ServerPort, "abc".into()).unwrap();
        assert_eq!(s.settings(), s.baseline());
        assert!(s.is_dirty());

        let mut external = s.baseline().clone();
        external.accounts.total_accounts = 3;
        s.receive_settings(external);
        assert_eq!(s.settings().accounts.total_accounts, 10);
        assert_eq!(s.input_value(Field::ServerPort), "abc");
    }

    #[test]
    fn value_equal_draft_is_clean() {
        let mut s = ready_screen();
        s.edit_text(Field::ServerPort, "08545".into()).unwrap();
        assert_eq!(s.edit_state(), EditState::Clean);
        s.edit_text(Field::ServerPort, " 8545".into()).unwrap();
        assert_eq!(s.edit_state(), EditState::Clean);

        let mut external = s.baseline().clone();
        external.gas.price = 1;
        s.receive_settings(external);
        assert_eq!(s.settings().gas.price, 1);
    }

    #[test]
    fn external_update_matching_edits_becomes_clean() {
        let mut s = ready_screen();
        s.edit_text(Field::AccountsTotal, "20".into()).unwrap();
        let external = s.settings().clone();
        s.receive_settings(external);
        assert_eq!(s.edit_state(), EditState::Clean);
    }

    // ------------------------------------------------------------
    // 재시작 조건
    // ------------------------------------------------------------

    #[test]
    fn pending_port_check_disables_restart() {
        let mut s = screen();
        s.mount();
        assert_eq!(s.port_check(), PortCheck::Pending);
        assert_eq!(s.restart_blockers(), vec![RestartBlocker::PortCheckPending]);
        assert!(s.restart_disabled());
    }

    #[test]
    fn failed_port_check_disables_restart() {
        let mut s = screen();
        s.mount();
        s.port_check_finished(8545, Err("timeout".into()));
        assert_eq!(s.restart_blockers(), vec![RestartBlocker::PortCheckFailed]);
    }

    #[test]
    fn foreign_process_disables_restart() {
        let mut s = screen();
        s.mount();
        s.port_check_finished(8545, Ok(PortStatus::blocked(8545, vec![process("chrome")])));
        assert!(s.is_port_blocked());
        assert_eq!(
            s.restart_blockers(),
            vec![RestartBlocker::PortBlocked(process("chrome"))]
        );
        assert!(s.restart_disabled());
    }

    #[test]
    fn own_process_allows_restart() {
        let mut s = screen();
        s.mount();
        s.port_check_finished(8545, Ok(PortStatus::blocked(8545, vec![process("ganache")])));
        assert!(!s.is_port_blocked());
        assert!(!s.restart_disabled());
    }

    #[test]
    fn stale_port_result_is_ignored() {
        let mut s = screen();
        s.mount();
        s.port_check_finished(1234, Ok(PortStatus::blocked(1234, vec![process("chrome")])));
        assert_eq!(s.port_check(), PortCheck::Pending);
        assert!(!s.is_port_blocked());
    }

    #[test]
    fn stale_port_error_is_ignored() {
        let mut s = screen();
        s.mount();
        s.edit_text(Field::ServerPort, "854".into()).unwrap();
        s.begin_port_check();
        s.edit_text(Field::ServerPort, "8546".into()).unwrap();
        let port = s.begin_port_check();
        s.port_check_finished(port, Ok(PortStatus::clear(port)));

        s.port_check_finished(854, Err("port 854: permission denied".into()));
        assert_eq!(s.port_check(), PortCheck::Allowed);
        assert!(!s.restart_disabled());
    }

    #[test]
    fn test_rpc_state_for_other_port_keeps_port_status() {
        let mut s = ready_screen();
        s.receive_test_rpc_state(TestRpcState {
            ganache_port_status: PortStatus::blocked(9999, vec![process("chrome")]),
            lifecycle: RpcLifecycle::Running,
        });
        assert!(!s.is_port_blocked());
        assert_eq!(s.test_rpc().lifecycle, RpcLifecycle::Running);
    }

    #[test]
    fn blockers_combine() {
        let mut s = screen();
        s.mount();
        s.port_check_finished(8545, Ok(PortStatus::blocked(8545, vec![process("nginx")])));
        s.edit_text(Field::GasPrice, "-1".into()).unwrap();

        let blockers = s.restart_blockers();
        assert_eq!(blockers.len(), 2);
        assert_eq!(
            blockers[1],
            RestartBlocker::InvalidFields(vec![Field::GasPrice])
        );
    }

    #[test]
    fn restart_commits_edits() {
        let mut s = ready_screen();
        s.edit_text(Field::AccountsTotal, "5".into()).unwrap();

        let committed = s.restart().unwrap();
        assert_eq!(committed.accounts.total_accounts, 5);
        assert_eq!(s.baseline(), &committed);
        assert_eq!(s.edit_state(), EditState::Clean);
        assert_eq!(s.test_rpc().lifecycle, RpcLifecycle::Starting);
    }

    #[test]
    fn restart_commits_only_after_success() {
        let mut s = ready_screen();
        s.edit_text(Field::AccountsTotal, "5".into()).unwrap();

        let pending = s.begin_restart().unwrap();
        assert_eq!(pending.accounts.total_accounts, 5);
        assert_eq!(s.baseline().accounts.total_accounts, 10);
        assert!(s.is_dirty());

        s.restart_succeeded(&pending);
        assert_eq!(s.baseline(), &pending);
        assert_eq!(s.edit_state(), EditState::Clean);
    }

    #[test]
    fn failed_restart_keeps_edits() {
        let mut s = ready_screen();
        s.edit_text(Field::AccountsTotal, "3".into()).unwrap();
        s.begin_restart().unwrap();
        s.restart_failed("spawn failed");

        assert_matches!(&s.test_rpc().lifecycle, RpcLifecycle::Failed(msg) if msg == "spawn failed");
        assert!(s.is_dirty());

        s.receive_settings(Settings::default_config());
        assert_eq!(s.settings().accounts.total_accounts, 3);
        assert!(s.is_dirty());
    }

    #[test]
    fn restart_refused_when_blocked() {
        let mut s = ready_screen();
        s.edit_text(Field::ServerHostname, " ".into()).unwrap();
        let err = s.restart().unwrap_err();
        assert_matches!(err, CoreError::RestartBlocked(msg) if msg.contains("server.hostname"));
        assert!(s.is_dirty());
    }

    #[test]
    fn cancel_discards_and_pops_one_entry() {
        let mut s = ready_screen();
        s.edit_text(Field::ServerPort, "bad".into()).unwrap();
        s.toggle(Field::AccountsLocked, true).unwrap();

        let mut history = NavigationHistory::opened_from_accounts();
        let route = s.cancel(&mut history);

        assert_eq!(route, Some(Route::Accounts));
        assert_eq!(history.len(), 1);
        assert_eq!(s.settings(), s.baseline());
        assert_eq!(s.input_value(Field::ServerPort), "8545");
        assert!(!s.invalid_config());
        assert_eq!(s.edit_state(), EditState::Clean);
    }

    #[test]
    fn edit_copy_does_not_alias_baseline() {
        let external = Settings::default_config();
        let mut s = ConfigScreen::new(&external, TestRpcState::default());
        s.toggle(Field::LoggingVerbose, true).unwrap();
        assert!(!external.logging.verbose);
        assert!(!s.baseline().logging.verbose);
    }
}
