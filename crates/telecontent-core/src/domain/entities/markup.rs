//! Reply and inline keyboard markups.

use serde::{Deserialize, Serialize};

use super::button::{InlineButton, ReplyButton};

/// Keyboard attached to an outgoing message.
///
/// Either `reply_keyboard` or `inline_keyboard` is populated, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyMarkup {
    #[serde(default, rename = "keyboard", skip_serializing_if = "Vec::is_empty")]
    pub reply_keyboard: Vec<Vec<ReplyButton>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inline_keyboard: Vec<Vec<InlineButton>>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub resize_keyboard: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub one_time_keyboard: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selective: bool,
}

impl ReplyMarkup {
    /// Number of rows in whichever keyboard is populated.
    pub fn rows(&self) -> usize {
        self.reply_keyboard.len().max(self.inline_keyboard.len())
    }
}

/// Display flags applied to every reply keyboard built from content.
///
/// Store-wide, not per keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardOptions {
    pub resize_keyboard: bool,
    pub one_time_keyboard: bool,
    pub selective: bool,
}

impl Default for KeyboardOptions {
    fn default() -> Self {
        Self {
            resize_keyboard: true,
            one_time_keyboard: false,
            selective: false,
        }
    }
}

impl KeyboardOptions {
    pub fn apply(&self, markup: &mut ReplyMarkup) {
        markup.resize_keyboard = self.resize_keyboard;
        markup.one_time_keyboard = self.one_time_keyboard;
        markup.selective = self.selective;
    }
}
