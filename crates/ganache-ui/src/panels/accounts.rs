//! 계정 탭.

use ganache_core::models::field::{Field, FieldValue, Section};
use ganache_core::models::validation::Violation;
use iced::Element;

use super::{flag_row, integer, panel, text_row};
use crate::app::Message;
use crate::config_screen::ConfigScreen;
use crate::i18n::Strings;

/// 생성 가능한 최대 계정 수
pub const MAX_ACCOUNTS: u64 = 1_000;

pub fn validate(field: Field, value: &FieldValue) -> Result<(), Violation> {
    match field {
        Field::AccountsTotal => {
            let total = integer(value)?;
            if (1..=MAX_ACCOUNTS).contains(&total) {
                Ok(())
            } else {
                Err(Violation::OutOfRange {
                    min: 1,
                    max: MAX_ACCOUNTS,
                })
            }
        }
        Field::AccountsDefaultBalance => integer(value).map(|_| ()),
        _ => Ok(()),
    }
}

pub fn view<'a>(screen: &'a ConfigScreen, s: &'static Strings) -> Element<'a, Message> {
    panel(
        s,
        Section::Accounts,
        vec![
            text_row(screen, s, Field::AccountsTotal),
            text_row(screen, s, Field::AccountsDefaultBalance),
            flag_row(screen, s, Field::AccountsLocked),
        ],
    )
}
