//! Reply and inline keyboard buttons.

use serde::{Deserialize, Serialize};

/// A button of a reply keyboard. Content configuration only supplies the
/// label; the request flags are left for code to set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyButton {
    pub text: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub request_contact: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub request_location: bool,
}

impl ReplyButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// A button attached to a message.
///
/// Decoded from rendered inline-button templates, so `text` is the only
/// required field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    /// Endpoint identifier used by the bot to route callbacks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<String>,

    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, rename = "callback_data", skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(default, rename = "switch_inline_query", skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<String>,

    #[serde(
        default,
        rename = "switch_inline_query_current_chat",
        skip_serializing_if = "Option::is_none"
    )]
    pub inline_query_chat: Option<String>,
}

impl InlineButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// An empty button stands in for an unresolvable keyboard cell.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
