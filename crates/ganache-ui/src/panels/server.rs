//! 서버 탭.

use ganache_core::config::Settings;
use ganache_core::models::field::{Field, FieldValue, Section};
use ganache_core::models::validation::Violation;
use iced::Element;

use super::{flag_row, integer, panel, text_row, text_value};
use crate::app::Message;
use crate::config_screen::ConfigScreen;
use crate::i18n::Strings;

pub fn validate(settings: &Settings, field: Field, value: &FieldValue) -> Result<(), Violation> {
    match field {
        Field::ServerHostname => {
            let hostname = text_value(value);
            if hostname.trim().is_empty() {
                Err(Violation::Required)
            } else if hostname.chars().any(char::is_whitespace) {
                Err(Violation::ContainsWhitespace)
            } else {
                Ok(())
            }
        }
        Field::ServerPort => {
            let port = integer(value)?;
            if (1..=65_535).contains(&port) {
                Ok(())
            } else {
                Err(Violation::OutOfRange { min: 1, max: 65_535 })
            }
        }
        Field::ServerNetworkId => at_least_one(integer(value)?),
        // 자동 채굴이 켜져 있으면 블록 간격은 쓰이지 않는다
        Field::ServerBlockTime if settings.server.automine => Ok(()),
        Field::ServerBlockTime => at_least_one(integer(value)?),
        _ => Ok(()),
    }
}

fn at_least_one(n: u64) -> Result<(), Violation> {
    if n >= 1 {
        Ok(())
    } else {
        Err(Violation::BelowMinimum(1))
    }
}

pub fn view<'a>(screen: &'a ConfigScreen, s: &'static Strings) -> Element<'a, Message> {
    let mut rows = vec![
        text_row(screen, s, Field::ServerHostname),
        text_row(screen, s, Field::ServerPort),
        text_row(screen, s, Field::ServerNetworkId),
        flag_row(screen, s, Field::ServerAutomine),
    ];
    if !screen.settings().server.automine {
        rows.push(text_row(screen, s, Field::ServerBlockTime));
    }
    rows.push(flag_row(screen, s, Field::ServerVmErrorsOnRpcResponse));

    panel(s, Section::Server, rows)
}
