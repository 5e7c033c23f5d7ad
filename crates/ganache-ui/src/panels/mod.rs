//! 설정 탭 패널.
//!
//! 탭마다 iced 뷰와 필드 검증 규칙을 둔다.

pub mod accounts;
pub mod forking;
pub mod ganache;
pub mod gas;
pub mod logging;
pub mod mnemonic;
pub mod server;

use ganache_core::config::Settings;
use ganache_core::models::field::{Field, FieldValue, Section};
use ganache_core::models::validation::Violation;
use iced::widget::{column, row, text, text_input, toggler, Column};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::config_screen::ConfigScreen;
use crate::i18n::Strings;

/// 라벨 열 너비
const LABEL_WIDTH: f32 = 220.0;

/// 필드를 소유한 패널의 규칙으로 값을 검증한다.
///
/// `value`는 아직 `settings`에 기록되지 않은 후보 값이다.
pub fn validate(settings: &Settings, field: Field, value: &FieldValue) -> Result<(), Violation> {
    match field.section() {
        Section::Server => server::validate(settings, field, value),
        Section::Accounts => accounts::validate(field, value),
        Section::Gas => gas::validate(field, value),
        Section::Mnemonic => mnemonic::validate(settings, field, value),
        Section::Logging => logging::validate(settings, field, value),
        Section::Forking => forking::validate(field, value),
        Section::Ganache => Ok(()),
    }
}

/// 활성 탭 패널
pub fn view<'a>(screen: &'a ConfigScreen, s: &'static Strings) -> Element<'a, Message> {
    match screen.active_tab() {
        Section::Server => server::view(screen, s),
        Section::Accounts => accounts::view(screen, s),
        Section::Gas => gas::view(screen, s),
        Section::Mnemonic => mnemonic::view(screen, s),
        Section::Logging => logging::view(screen, s),
        Section::Forking => forking::view(screen, s),
        Section::Ganache => ganache::view(screen, s),
    }
}

/// 라벨 + 입력 상자 + 검증 메시지
pub(crate) fn text_row<'a>(
    screen: &'a ConfigScreen,
    s: &'static Strings,
    field: Field,
) -> Element<'a, Message> {
    let value = screen.input_value(field);
    let input = row![
        text(s.field(field)).size(14).width(Length::Fixed(LABEL_WIDTH)),
        text_input(s.field(field), &value)
            .on_input(move |raw| Message::TextChanged(field, raw))
            .size(14),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let error = screen
        .violation(field)
        .map(|v| text(s.violation(v)).size(12).style(text::danger));

    Column::new()
        .push(input)
        .push_maybe(error)
        .spacing(4)
        .into()
}

/// 라벨 + 토글
pub(crate) fn flag_row<'a>(
    screen: &'a ConfigScreen,
    s: &'static Strings,
    field: Field,
) -> Element<'a, Message> {
    row![
        text(s.field(field)).size(14).width(Length::Fixed(LABEL_WIDTH)),
        toggler(screen.flag(field))
            .on_toggle(move |checked| Message::Toggled(field, checked))
            .width(Length::Shrink),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

/// 탭 제목 + 행 목록
pub(crate) fn panel<'a>(
    s: &'static Strings,
    section: Section,
    rows: Vec<Element<'a, Message>>,
) -> Element<'a, Message> {
    column![
        text(s.tab(section)).size(18),
        Column::with_children(rows).spacing(12)
    ]
    .spacing(15)
    .into()
}

/// 정수 후보 값. 종류가 다르면 숫자가 아닌 것으로 본다.
pub(crate) fn integer(value: &FieldValue) -> Result<u64, Violation> {
    match value {
        FieldValue::Integer(n) => Ok(*n),
        _ => Err(Violation::NotANumber),
    }
}

/// 텍스트 후보 값
pub(crate) fn text_value(value: &FieldValue) -> &str {
    match value {
        FieldValue::Text(s) => s,
        _ => "",
    }
}
