//! 포킹 탭.

use ganache_core::models::field::{Field, FieldValue, Section};
use ganache_core::models::validation::Violation;
use iced::Element;
use url::Url;

use super::{panel, text_row, text_value};
use crate::app::Message;
use crate::config_screen::ConfigScreen;
use crate::i18n::Strings;

/// 포크 대상 RPC 스킴
const SUPPORTED_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];

pub fn validate(field: Field, value: &FieldValue) -> Result<(), Violation> {
    match field {
        Field::ForkingUrl => validate_url(text_value(value).trim()),
        Field::ForkingBlockNumber => match value {
            FieldValue::Unset | FieldValue::Integer(_) => Ok(()),
            _ => Err(Violation::NotANumber),
        },
        _ => Ok(()),
    }
}

/// 빈 문자열은 포크 없음
fn validate_url(raw: &str) -> Result<(), Violation> {
    if raw.is_empty() {
        return Ok(());
    }
    let url = Url::parse(raw).map_err(|_| Violation::InvalidUrl)?;
    if SUPPORTED_SCHEMES.contains(&url.scheme()) {
        Ok(())
    } else {
        Err(Violation::UnsupportedScheme(url.scheme().to_string()))
    }
}

pub fn view<'a>(screen: &'a ConfigScreen, s: &'static Strings) -> Element<'a, Message> {
    panel(
        s,
        Section::Forking,
        vec![
            text_row(screen, s, Field::ForkingUrl),
            text_row(screen, s, Field::ForkingBlockNumber),
        ],
    )
}
