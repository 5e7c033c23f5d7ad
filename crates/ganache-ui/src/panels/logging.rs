//! 로깅 탭.

use ganache_core::config::Settings;
use ganache_core::models::field::{Field, FieldValue, Section};
use ganache_core::models::validation::Violation;
use iced::Element;

use super::{flag_row, panel, text_row, text_value};
use crate::app::Message;
use crate::config_screen::ConfigScreen;
use crate::i18n::Strings;

pub fn validate(settings: &Settings, field: Field, value: &FieldValue) -> Result<(), Violation> {
    match field {
        Field::LoggingDirectory
            if settings.logging.output_to_file && text_value(value).trim().is_empty() =>
        {
            Err(Violation::Required)
        }
        _ => Ok(()),
    }
}

pub fn view<'a>(screen: &'a ConfigScreen, s: &'static Strings) -> Element<'a, Message> {
    let mut rows = vec![
        flag_row(screen, s, Field::LoggingVerbose),
        flag_row(screen, s, Field::LoggingOutputToFile),
    ];
    if screen.settings().logging.output_to_file {
        rows.push(text_row(screen, s, Field::LoggingDirectory));
    }
    panel(s, Section::Logging, rows)
}
