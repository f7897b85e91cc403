//! Content configuration model.
//!
//! The raw configuration is JSON (YAML and TOML callers convert first):
//!
//! ```json
//! {
//!   "vars":             { "any": "shape" },
//!   "strings":          { "start": "Hello {{ name }}!" },
//!   "buttons":          { "help": "Help" },
//!   "keyboards":        { "main": [["help", "settings"]] },
//!   "inline_buttons":   { "buy": { "unique": "buy", "text": "Buy {{ this }}" } },
//!   "inline_keyboards": { "shop": [["buy"]] },
//!   "inline_results":   { "photo": { "type": "photo", "photo_url": "{{ url }}", "thumb_url": "{{ url }}" } },
//!   "templates_dir":    "templates",
//!   "keyboard":         { "resize_keyboard": true }
//! }
//! ```
//!
//! Inline template values are kept as raw JSON text and compiled as template
//! source. A JSON string value is unquoted first, which allows control
//! constructs outside of JSON strings.

use std::{collections::BTreeMap, path::PathBuf};

use serde::Deserialize;
use serde_json::{Value, value::RawValue};

use crate::{
    domain::KeyboardOptions,
    error::{ContentError, ContentResult},
};

/// Rows of keys referencing button entries.
pub type KeyboardLayout = Vec<Vec<String>>;

/// Deserialized content configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Free-form bot variables; see `ContentStore::vars`.
    pub vars: Value,
    pub strings: BTreeMap<String, String>,
    pub buttons: BTreeMap<String, String>,
    pub keyboards: BTreeMap<String, KeyboardLayout>,
    pub inline_buttons: BTreeMap<String, RawTemplate>,
    pub inline_keyboards: BTreeMap<String, KeyboardLayout>,
    pub inline_results: BTreeMap<String, RawTemplate>,
    /// Directory of `*.tmpl` message templates.
    pub templates_dir: Option<PathBuf>,
    pub keyboard: KeyboardOptions,
}

impl ContentConfig {
    /// Decode configuration from raw JSON bytes.
    pub fn from_json(bytes: &[u8]) -> ContentResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| ContentError::Config {
            message: e.to_string(),
        })
    }
}

/// A JSON-valued template kept verbatim until compilation.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RawTemplate(Box<RawValue>);

impl RawTemplate {
    /// Template source text.
    pub fn source(&self) -> ContentResult<String> {
        let raw = self.0.get();
        if raw.trim_start().starts_with('"') {
            serde_json::from_str(raw).map_err(|e| ContentError::Config {
                message: format!("invalid template string: {e}"),
            })
        } else {
            Ok(raw.to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_valid() {
        let config = ContentConfig::from_json(b"{}").unwrap();
        assert!(config.strings.is_empty());
        assert!(config.templates_dir.is_none());
        assert!(config.vars.is_null());
        assert!(config.keyboard.resize_keyboard);
    }

    #[test]
    fn object_template_keeps_raw_text() {
        let config =
            ContentConfig::from_json(br#"{"inline_buttons":{"b":{"text":"{{ name }}"}}}"#)
                .unwrap();
        assert_eq!(
            config.inline_buttons["b"].source().unwrap(),
            r#"{"text":"{{ name }}"}"#
        );
    }

    #[test]
    fn string_template_is_unquoted() {
        let config = ContentConfig::from_json(
            br#"{"inline_results":{"r":"{% if x %}{\"type\":\"article\"}{% endif %}"}}"#,
        )
        .unwrap();
        assert_eq!(
            config.inline_results["r"].source().unwrap(),
            r#"{% if x %}{"type":"article"}{% endif %}"#
        );
    }

    #[test]
    fn keyboards_keep_row_order() {
        let config =
            ContentConfig::from_json(br#"{"keyboards":{"main":[["a","b"],["c"]],"empty":[]}}"#)
                .unwrap();
        assert_eq!(config.keyboards["main"], vec![vec!["a", "b"], vec!["c"]]);
        assert!(config.keyboards["empty"].is_empty());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = ContentConfig::from_json(b"{\"strings\": [").unwrap_err();
        assert!(matches!(err, ContentError::Config { .. }));
    }
}
