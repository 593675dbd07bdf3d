//! Keyboard input delivered by the host.
//!
//! The host's text-input system translates platform key events into
//! [`KeyInput`] values and forwards them to
//! [`PinField::handle_key`](crate::PinField::handle_key).

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A key event as seen by the entry widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    /// Committed text for one keystroke. May hold more than one grapheme
    /// when the host delivers composed or pasted text.
    Character(String),
    /// Delete the last entered cell.
    Backspace,
    /// Return/Enter.
    Enter,
    /// Escape.
    Escape,
    /// Any other key; not handled by the widget.
    Other,
}

impl KeyInput {
    /// Convenience constructor for a single typed character.
    pub fn char(ch: char) -> Self {
        Self::Character(ch.to_string())
    }
}

/// Which on-screen keyboard the host should present.
///
/// This is a hint only: the widget accepts any character regardless of the
/// hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyboardHint {
    /// The platform's default keyboard.
    Default,
    /// Digits only.
    #[default]
    NumberPad,
    /// Digits and a decimal separator.
    DecimalPad,
    /// Telephone keypad.
    PhonePad,
    /// ASCII letters, digits and punctuation.
    AsciiCapable,
}

impl KeyboardHint {
    /// The lowercase name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NumberPad => "number_pad",
            Self::DecimalPad => "decimal_pad",
            Self::PhonePad => "phone_pad",
            Self::AsciiCapable => "ascii_capable",
        }
    }
}

impl fmt::Display for KeyboardHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyboardHint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "number_pad" => Ok(Self::NumberPad),
            "decimal_pad" => Ok(Self::DecimalPad),
            "phone_pad" => Ok(Self::PhonePad),
            "ascii_capable" => Ok(Self::AsciiCapable),
            other => Err(Error::UnrecognizedKeyboardHint(other.to_string())),
        }
    }
}
