//! 니모닉 탭.

use ganache_core::config::Settings;
use ganache_core::models::field::{Field, FieldValue, Section};
use ganache_core::models::validation::Violation;
use iced::Element;

use super::{flag_row, panel, text_row, text_value};
use crate::app::Message;
use crate::config_screen::ConfigScreen;
use crate::i18n::Strings;

/// BIP-39 허용 단어 수
pub const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

pub fn validate(settings: &Settings, field: Field, value: &FieldValue) -> Result<(), Violation> {
    match field {
        Field::MnemonicPhrase if settings.mnemonic.autogenerate => Ok(()),
        Field::MnemonicPhrase => validate_phrase(text_value(value)),
        _ => Ok(()),
    }
}

fn validate_phrase(phrase: &str) -> Result<(), Violation> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.is_empty() {
        return Err(Violation::Required);
    }
    if !WORD_COUNTS.contains(&words.len()) {
        return Err(Violation::MnemonicWordCount(words.len()));
    }
    match words
        .iter()
        .find(|w| !w.chars().all(|c| c.is_ascii_lowercase()))
    {
        Some(word) => Err(Violation::MnemonicWord(word.to_string())),
        None => Ok(()),
    }
}

pub fn view<'a>(screen: &'a ConfigScreen, s: &'static Strings) -> Element<'a, Message> {
    let mut rows = vec![flag_row(screen, s, Field::MnemonicAutogenerate)];
    if !screen.settings().mnemonic.autogenerate {
        rows.push(text_row(screen, s, Field::MnemonicPhrase));
    }
    panel(s, Section::Mnemonic, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWELVE: &str =
        "candy maple cake sugar pudding cream honey rich smooth crumble sweet treat";

    fn manual() -> Settings {
        let mut settings = Settings::default_config();
        settings.mnemonic.autogenerate = false;
        settings
    }

    fn phrase(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn autogenerate_skips_phrase() {
        let settings = Settings::default_config();
        assert_eq!(validate(&settings, Field::MnemonicPhrase, &phrase("")), Ok(()));
    }

    #[test]
    fn twelve_lowercase_words() {
        assert_eq!(validate(&manual(), Field::MnemonicPhrase, &phrase(TWELVE)), Ok(()));
    }

    #[test]
    fn empty_phrase_required() {
        assert_eq!(
            validate(&manual(), Field::MnemonicPhrase, &phrase("  ")),
            Err(Violation::Required)
        );
    }

    #[test]
    fn wrong_word_count() {
        assert_eq!(
            validate(&manual(), Field::MnemonicPhrase, &phrase("candy maple cake")),
            Err(Violation::MnemonicWordCount(3))
        );
    }

    #[test]
    fn uppercase_word_rejected() {
        let upper = TWELVE.replace("honey", "Honey");
        assert_eq!(
            validate(&manual(), Field::MnemonicPhrase, &phrase(&upper)),
            Err(Violation::MnemonicWord("Honey".to_string()))
        );
    }
}
