//! 가스 탭.

use ganache_core::config::Hardfork;
use ganache_core::models::field::{Field, FieldValue, Section};
use ganache_core::models::validation::Violation;
use iced::widget::{pick_list, row, text};
use iced::{Alignment, Element, Length};

use super::{integer, panel, text_row, text_value, LABEL_WIDTH};
use crate::app::Message;
use crate::config_screen::ConfigScreen;
use crate::i18n::Strings;

pub fn validate(field: Field, value: &FieldValue) -> Result<(), Violation> {
    match field {
        Field::GasLimit => {
            if integer(value)? >= 1 {
                Ok(())
            } else {
                Err(Violation::BelowMinimum(1))
            }
        }
        Field::GasPrice => integer(value).map(|_| ()),
        Field::GasHardfork => text_value(value)
            .parse::<Hardfork>()
            .map(|_| ())
            .map_err(|_| Violation::UnknownHardfork),
        _ => Ok(()),
    }
}

pub fn view<'a>(screen: &'a ConfigScreen, s: &'static Strings) -> Element<'a, Message> {
    let hardfork = row![
        text(s.field(Field::GasHardfork))
            .size(14)
            .width(Length::Fixed(LABEL_WIDTH)),
        pick_list(
            &Hardfork::ALL[..],
            Some(screen.settings().gas.hardfork),
            Message::HardforkSelected,
        ),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    panel(
        s,
        Section::Gas,
        vec![
            text_row(screen, s, Field::GasLimit),
            text_row(screen, s, Field::GasPrice),
            hardfork.into(),
        ],
    )
}
