//! Ganache 앱 탭 (최상위 플래그).

use ganache_core::models::field::{Field, Section};
use iced::Element;

use super::{flag_row, panel};
use crate::app::Message;
use crate::config_screen::ConfigScreen;
use crate::i18n::Strings;

pub fn view<'a>(screen: &'a ConfigScreen, s: &'static Strings) -> Element<'a, Message> {
    panel(
        s,
        Section::Ganache,
        vec![
            flag_row(screen, s, Field::GoogleAnalyticsTracking),
            flag_row(screen, s, Field::CpuAndMemoryProfiling),
        ],
    )
}
