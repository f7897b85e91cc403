//! Content Store - keyed resolution of bot content.
//!
//! Built once from a [`ContentConfig`] and an engine prototype, then
//! read-only. Each templated content class gets its own namespace, created
//! from the same prototype:
//!
//! | class              | storage             | resolves to          |
//! |--------------------|---------------------|----------------------|
//! | `strings`          | namespace           | `String`             |
//! | `templates`        | namespace (`.tmpl`) | `String`             |
//! | `buttons`          | key → label         | [`ReplyButton`]      |
//! | `keyboards`        | key → rows of keys  | [`ReplyMarkup`]      |
//! | `inline_buttons`   | namespace (JSON)    | [`InlineButton`]     |
//! | `inline_keyboards` | key → rows of keys  | [`ReplyMarkup`]      |
//! | `inline_results`   | namespace (JSON)    | [`InlineResult`]     |
//!
//! ## Failure policy
//!
//! Lenient resolvers (`string`, `button`, `inline_button`, ...) log soft
//! errors and degrade to empty/absent content. Decode errors after a
//! successful render are hard and still returned. The `try_*` twins return
//! every error and leave the policy to the caller.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        config::{ContentConfig, KeyboardLayout},
        namespace::TemplateNamespace,
        ports::TemplateEngine,
    },
    domain::{
        InlineButton, InlineResult, KeyboardOptions, ReplyButton, ReplyMarkup, decode_result,
    },
    error::{ContentError, ContentResult},
};

/// Content classes held by a [`ContentStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentClass {
    Strings,
    Templates,
    Buttons,
    Keyboards,
    InlineButtons,
    InlineKeyboards,
    InlineResults,
}

impl ContentClass {
    pub const ALL: [ContentClass; 7] = [
        Self::Strings,
        Self::Templates,
        Self::Buttons,
        Self::Keyboards,
        Self::InlineButtons,
        Self::InlineKeyboards,
        Self::InlineResults,
    ];

    /// Configuration section (and namespace) name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strings => "strings",
            Self::Templates => "templates",
            Self::Buttons => "buttons",
            Self::Keyboards => "keyboards",
            Self::InlineButtons => "inline_buttons",
            Self::InlineKeyboards => "inline_keyboards",
            Self::InlineResults => "inline_results",
        }
    }
}

impl fmt::Display for ContentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A keyboard cell naming a button that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub class: ContentClass,
    pub keyboard: String,
    pub key: String,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' references undefined button '{}'",
            self.class, self.keyboard, self.key
        )
    }
}

/// Read-only store of bot content.
#[derive(Debug)]
pub struct ContentStore {
    vars: Value,
    strings: TemplateNamespace,
    string_sources: BTreeMap<String, String>,
    templates: Option<TemplateNamespace>,
    buttons: BTreeMap<String, String>,
    keyboards: BTreeMap<String, KeyboardLayout>,
    inline_buttons: TemplateNamespace,
    inline_keyboards: BTreeMap<String, KeyboardLayout>,
    inline_results: TemplateNamespace,
    keyboard_options: KeyboardOptions,
}

impl ContentStore {
    /// Build every namespace from `config` using `engine` as prototype.
    ///
    /// # Errors
    ///
    /// Any parse, directory or configuration error aborts the build.
    #[instrument(skip_all, fields(engine = engine.name()))]
    pub fn build(config: ContentConfig, engine: &dyn TemplateEngine) -> ContentResult<Self> {
        let mut strings = TemplateNamespace::new(engine, ContentClass::Strings.as_str());
        for (key, source) in &config.strings {
            strings.parse(key, source)?;
        }

        let mut inline_buttons =
            TemplateNamespace::new(engine, ContentClass::InlineButtons.as_str());
        for (key, raw) in &config.inline_buttons {
            inline_buttons.parse(key, &raw.source()?)?;
        }

        let mut inline_results =
            TemplateNamespace::new(engine, ContentClass::InlineResults.as_str());
        for (key, raw) in &config.inline_results {
            inline_results.parse(key, &raw.source()?)?;
        }

        let templates = match &config.templates_dir {
            Some(dir) => {
                let mut templates =
                    TemplateNamespace::with_dir(engine, ContentClass::Templates.as_str(), dir);
                templates.parse_dir()?;
                Some(templates)
            }
            None => None,
        };

        info!(
            strings = strings.len(),
            templates = templates.as_ref().map_or(0, TemplateNamespace::len),
            buttons = config.buttons.len(),
            keyboards = config.keyboards.len(),
            inline_buttons = inline_buttons.len(),
            inline_keyboards = config.inline_keyboards.len(),
            inline_results = inline_results.len(),
            "content store built"
        );

        Ok(Self {
            vars: config.vars,
            strings,
            string_sources: config.strings,
            templates,
            buttons: config.buttons,
            keyboards: config.keyboards,
            inline_buttons,
            inline_keyboards: config.inline_keyboards,
            inline_results,
            keyboard_options: config.keyboard,
        })
    }

    /// Decode raw JSON configuration and build the store.
    pub fn from_json(bytes: &[u8], engine: &dyn TemplateEngine) -> ContentResult<Self> {
        Self::build(ContentConfig::from_json(bytes)?, engine)
    }

    /// Decode the configuration's `vars` block into a caller type.
    pub fn vars<T: DeserializeOwned>(&self) -> ContentResult<T> {
        T::deserialize(&self.vars).map_err(|e| ContentError::Config {
            message: format!("vars: {e}"),
        })
    }

    // ── strings & templates ───────────────────────────────────────────────

    /// Render a string, returning every failure.
    pub fn try_string(&self, key: &str, arg: Option<&Value>) -> ContentResult<String> {
        self.strings.render(key, arg)
    }

    /// Render a string.
    ///
    /// A missing key yields `""`. A string that fails to render without an
    /// argument is treated as a literal label and returned unrendered.
    pub fn string(&self, key: &str, arg: Option<&Value>) -> String {
        match self.try_string(key, arg) {
            Ok(text) => text,
            Err(err) => {
                log_soft(&err);
                match (&err, arg) {
                    (ContentError::Render { .. }, None) => {
                        self.string_sources.get(key).cloned().unwrap_or_default()
                    }
                    _ => String::new(),
                }
            }
        }
    }

    /// Render a message template from the template directory.
    pub fn try_text(&self, key: &str, arg: Option<&Value>) -> ContentResult<String> {
        match &self.templates {
            Some(templates) => templates.render(key, arg),
            None => Err(ContentError::MissingKey {
                namespace: ContentClass::Templates.as_str().into(),
                key: key.into(),
            }),
        }
    }

    /// Render a message template; any failure yields `""`.
    pub fn text(&self, key: &str, arg: Option<&Value>) -> String {
        self.try_text(key, arg).unwrap_or_else(|err| {
            log_soft(&err);
            String::new()
        })
    }

    // ── reply keyboards ───────────────────────────────────────────────────

    /// Reply button labelled from the `buttons` map.
    ///
    /// A missing key yields a button with an empty label.
    pub fn button(&self, key: &str) -> ReplyButton {
        match self.buttons.get(key) {
            Some(label) => ReplyButton::new(label.clone()),
            None => {
                log_soft(&ContentError::MissingKey {
                    namespace: ContentClass::Buttons.as_str().into(),
                    key: key.into(),
                });
                ReplyButton::default()
            }
        }
    }

    /// Reply keyboard built row by row from the `keyboards` map.
    ///
    /// `None` when the key is absent; an empty layout gives a markup with
    /// zero rows. Undefined buttons keep their cell with an empty label.
    pub fn keyboard(&self, key: &str) -> Option<ReplyMarkup> {
        let layout = self.keyboards.get(key)?;

        let mut markup = ReplyMarkup {
            reply_keyboard: layout
                .iter()
                .map(|row| row.iter().map(|btn| self.button(btn)).collect())
                .collect(),
            ..ReplyMarkup::default()
        };
        self.keyboard_options.apply(&mut markup);

        Some(markup)
    }

    // ── inline keyboards ──────────────────────────────────────────────────

    /// Render and decode an inline button, returning every failure.
    pub fn try_inline_button(&self, key: &str, arg: Option<&Value>) -> ContentResult<InlineButton> {
        let rendered = self.inline_buttons.render(key, arg)?;
        serde_json::from_str(&rendered).map_err(|e| ContentError::Decode {
            target: "inline button".into(),
            reason: e.to_string(),
        })
    }

    /// Render and decode an inline button.
    ///
    /// Missing keys and render failures give `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`ContentError::Decode`] when the rendered text is not a valid button.
    pub fn inline_button(
        &self,
        key: &str,
        arg: Option<&Value>,
    ) -> ContentResult<Option<InlineButton>> {
        soften(self.try_inline_button(key, arg))
    }

    /// Inline keyboard built row by row, passing `arg` to every cell.
    ///
    /// `Ok(None)` when the key is absent. Unresolvable cells become empty
    /// buttons; decode errors abort the whole keyboard.
    pub fn inline_keyboard(
        &self,
        key: &str,
        arg: Option<&Value>,
    ) -> ContentResult<Option<ReplyMarkup>> {
        let Some(layout) = self.inline_keyboards.get(key) else {
            return Ok(None);
        };

        let mut rows = Vec::with_capacity(layout.len());
        for row in layout {
            let mut buttons = Vec::with_capacity(row.len());
            for btn in row {
                buttons.push(self.inline_button(btn, arg)?.unwrap_or_default());
            }
            rows.push(buttons);
        }

        Ok(Some(ReplyMarkup {
            inline_keyboard: rows,
            ..ReplyMarkup::default()
        }))
    }

    // ── inline results ────────────────────────────────────────────────────

    /// Render and decode an inline result, returning every failure.
    ///
    /// `Ok(None)` still means the discriminator named no known kind.
    pub fn try_inline_result(
        &self,
        key: &str,
        arg: Option<&Value>,
    ) -> ContentResult<Option<InlineResult>> {
        let rendered = self.inline_results.render(key, arg)?;
        decode_result(&rendered)
    }

    /// Render and decode an inline result.
    ///
    /// Missing keys, render failures and unknown kinds give `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`ContentError::Decode`] for malformed JSON or a malformed payload of
    /// a known kind.
    pub fn inline_result(
        &self,
        key: &str,
        arg: Option<&Value>,
    ) -> ContentResult<Option<InlineResult>> {
        soften(self.try_inline_result(key, arg)).map(Option::flatten)
    }

    // ── introspection ─────────────────────────────────────────────────────

    /// Keys defined for a content class, sorted.
    pub fn keys(&self, class: ContentClass) -> Vec<String> {
        match class {
            ContentClass::Strings => self.strings.keys(),
            ContentClass::Templates => self
                .templates
                .as_ref()
                .map(TemplateNamespace::keys)
                .unwrap_or_default(),
            ContentClass::Buttons => self.buttons.keys().cloned().collect(),
            ContentClass::Keyboards => self.keyboards.keys().cloned().collect(),
            ContentClass::InlineButtons => self.inline_buttons.keys(),
            ContentClass::InlineKeyboards => self.inline_keyboards.keys().cloned().collect(),
            ContentClass::InlineResults => self.inline_results.keys(),
        }
    }

    /// Keyboard cells naming buttons that are not defined.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();

        for (keyboard, layout) in &self.keyboards {
            for key in layout.iter().flatten() {
                if !self.buttons.contains_key(key) {
                    dangling.push(DanglingReference {
                        class: ContentClass::Keyboards,
                        keyboard: keyboard.clone(),
                        key: key.clone(),
                    });
                }
            }
        }

        for (keyboard, layout) in &self.inline_keyboards {
            for key in layout.iter().flatten() {
                if !self.inline_buttons.contains(key) {
                    dangling.push(DanglingReference {
                        class: ContentClass::InlineKeyboards,
                        keyboard: keyboard.clone(),
                        key: key.clone(),
                    });
                }
            }
        }

        dangling
    }

    /// Backend name of the engine that built the namespaces.
    pub fn engine(&self) -> &'static str {
        self.strings.engine()
    }
}

fn log_soft(err: &ContentError) {
    match err {
        ContentError::MissingKey { namespace, key } | ContentError::Render { namespace, key, .. } => {
            warn!(namespace = %namespace, key = %key, error = %err, "content degraded to empty")
        }
        _ => warn!(error = %err, "content degraded to empty"),
    }
}

/// Apply the soft/hard policy: soft errors become `None` after logging.
fn soften<T>(result: ContentResult<T>) -> ContentResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_soft() => {
            log_soft(&err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::BTreeMap,
        path::{Path, PathBuf},
    };

    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::domain::ResultKind;

    /// Substitutes `{{this}}` and `{{field}}`; nothing else.
    #[derive(Default)]
    struct FakeEngine {
        namespace: Option<String>,
        dir: Option<PathBuf>,
        templates: BTreeMap<String, String>,
    }

    impl FakeEngine {
        fn ns(&self) -> ContentResult<&str> {
            self.namespace
                .as_deref()
                .ok_or(ContentError::NotInitialized { engine: "fake" })
        }

        fn substitute(&self, key: &str, source: &str, arg: Option<&Value>) -> ContentResult<String> {
            let mut out = String::new();
            let mut rest = source;
            while let Some(start) = rest.find("{{") {
                out.push_str(&rest[..start]);
                let after = &rest[start + 2..];
                let end = after.find("}}").unwrap_or(after.len());
                let name = after[..end].trim();
                let value = match name {
                    "this" => arg,
                    field => arg.and_then(|a| a.get(field)),
                }
                .ok_or_else(|| ContentError::Render {
                    namespace: self.namespace.clone().unwrap_or_default(),
                    key: key.into(),
                    reason: format!("undefined value '{name}'"),
                })?;
                match value {
                    Value::String(s) => out.push_str(s),
                    other => out.push_str(&other.to_string()),
                }
                rest = after.get(end + 2..).unwrap_or_default();
            }
            out.push_str(rest);
            Ok(out)
        }
    }

    impl TemplateEngine for FakeEngine {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn init(&self, namespace: &str, dir: Option<&Path>) -> Box<dyn TemplateEngine> {
            Box::new(FakeEngine {
                namespace: Some(namespace.into()),
                dir: dir.map(Path::to_path_buf),
                templates: BTreeMap::new(),
            })
        }

        fn namespace(&self) -> Option<&str> {
            self.namespace.as_deref()
        }

        fn parse(&mut self, key: &str, source: &str) -> ContentResult<()> {
            let namespace = self.ns()?.to_owned();
            if let Some(open) = source.rfind("{{") {
                if !source[open..].contains("}}") {
                    return Err(ContentError::Parse {
                        namespace,
                        key: key.into(),
                        reason: "unclosed action".into(),
                    });
                }
            }
            self.templates.insert(key.into(), source.into());
            Ok(())
        }

        fn parse_dir(&mut self) -> ContentResult<()> {
            let namespace = self.ns()?.to_owned();
            match &self.dir {
                Some(_) => Ok(()),
                None => Err(ContentError::NoDirectory { namespace }),
            }
        }

        fn execute(&self, key: &str, arg: Option<&Value>) -> ContentResult<String> {
            let namespace = self.ns()?;
            let source = self
                .templates
                .get(key)
                .ok_or_else(|| ContentError::MissingKey {
                    namespace: namespace.into(),
                    key: key.into(),
                })?;
            self.substitute(key, source, arg)
        }

        fn contains(&self, key: &str) -> bool {
            self.templates.contains_key(key)
        }

        fn keys(&self) -> Vec<String> {
            self.templates.keys().cloned().collect()
        }
    }

    fn store() -> ContentStore {
        let config = json!({
            "vars": { "admin": 7, "channel": "@news" },
            "strings": {
                "hello": "Hello {{Name}}",
                "plain": "Just text",
                "label": "Price: {{price}}"
            },
            "buttons": { "a": "Alpha" },
            "keyboards": {
                "main": [["a", "b"]],
                "empty_list_key": []
            },
            "inline_buttons": {
                "buy": { "unique": "buy", "text": "Buy {{this}}" },
                "broken": "{\"text\": }"
            },
            "inline_keyboards": {
                "shop": [["buy", "buy"], ["missing"]],
                "bad": [["broken"]]
            },
            "inline_results": {
                "photo": { "type": "photo", "photo_url": "{{url}}", "thumb_url": "y" },
                "odd": { "type": "unknown", "photo_url": "x" },
                "bad_photo": { "type": "photo", "thumb_url": "y" }
            }
        });
        ContentStore::from_json(config.to_string().as_bytes(), &FakeEngine::default()).unwrap()
    }

    // ========================================================================
    // Strings
    // ========================================================================

    #[test]
    fn string_renders_argument() {
        let store = store();
        assert_eq!(store.string("hello", Some(&json!({"Name": "Ann"}))), "Hello Ann");
        assert_eq!(store.string("plain", None), "Just text");
    }

    #[test]
    fn missing_string_is_empty() {
        assert_eq!(store().string("absent", None), "");
    }

    #[test]
    fn unrenderable_string_without_argument_falls_back_to_source() {
        let store = store();
        assert_eq!(store.string("label", None), "Price: {{price}}");
        // With an argument the failure is not treated as a literal label.
        assert_eq!(store.string("label", Some(&json!({}))), "");
    }

    #[test]
    fn try_string_reports_missing_key() {
        let err = store().try_string("absent", None).unwrap_err();
        assert!(matches!(err, ContentError::MissingKey { ref namespace, .. } if namespace == "strings"));
    }

    #[test]
    fn text_without_directory_is_empty() {
        let store = store();
        assert_eq!(store.text("greet", Some(&json!("Bob"))), "");
        assert!(store.try_text("greet", None).is_err());
    }

    // ========================================================================
    // Reply keyboards
    // ========================================================================

    #[test]
    fn missing_button_has_empty_label() {
        let store = store();
        assert_eq!(store.button("a").text, "Alpha");
        assert_eq!(store.button("zzz"), ReplyButton::default());
    }

    #[test]
    fn keyboard_absent_vs_empty() {
        let store = store();
        assert!(store.keyboard("absent").is_none());

        let empty = store.keyboard("empty_list_key").unwrap();
        assert_eq!(empty.rows(), 0);
        assert!(empty.resize_keyboard);
    }

    #[test]
    fn keyboard_keeps_cells_of_undefined_buttons() {
        let markup = store().keyboard("main").unwrap();

        assert_eq!(markup.reply_keyboard.len(), 1);
        let row = &markup.reply_keyboard[0];
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].text, "Alpha");
        assert_eq!(row[1].text, "");
        assert!(markup.resize_keyboard);
    }

    // ========================================================================
    // Inline buttons & keyboards
    // ========================================================================

    #[test]
    fn inline_button_decodes_rendered_json() {
        let button = store()
            .inline_button("buy", Some(&json!("milk")))
            .unwrap()
            .unwrap();
        assert_eq!(button.text, "Buy milk");
        assert_eq!(button.unique.as_deref(), Some("buy"));
    }

    #[test]
    fn missing_inline_button_is_soft() {
        assert_eq!(store().inline_button("absent", None).unwrap(), None);
        // Render failure: `this` is undefined without an argument.
        assert_eq!(store().inline_button("buy", None).unwrap(), None);
    }

    #[test]
    fn malformed_inline_button_is_hard() {
        let err = store().inline_button("broken", None).unwrap_err();
        assert!(matches!(err, ContentError::Decode { ref target, .. } if target == "inline button"));
        assert!(!err.is_soft());
    }

    #[test]
    fn inline_keyboard_passes_argument_to_every_cell() {
        let markup = store()
            .inline_keyboard("shop", Some(&json!("tea")))
            .unwrap()
            .unwrap();

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0][0].text, "Buy tea");
        assert_eq!(markup.inline_keyboard[0][1].text, "Buy tea");
        assert!(markup.inline_keyboard[1][0].is_empty());
    }

    #[test]
    fn inline_keyboard_absent_and_broken() {
        let store = store();
        assert_eq!(store.inline_keyboard("absent", None).unwrap(), None);
        assert!(matches!(
            store.inline_keyboard("bad", None),
            Err(ContentError::Decode { .. })
        ));
    }

    // ========================================================================
    // Inline results
    // ========================================================================

    #[test]
    fn inline_result_dispatches_on_type() {
        let result = store()
            .inline_result("photo", Some(&json!({"url": "x"})))
            .unwrap()
            .unwrap();

        assert_eq!(result.kind(), ResultKind::Photo);
        match result {
            InlineResult::Photo(photo) => {
                assert_eq!(photo.url, "x");
                assert_eq!(photo.thumb_url, "y");
            }
            other => panic!("expected photo, got {:?}", other.kind()),
        }
    }

    #[test]
    fn unknown_kind_and_missing_key_are_none() {
        let store = store();
        assert_eq!(store.inline_result("odd", None).unwrap(), None);
        assert_eq!(store.inline_result("absent", None).unwrap(), None);
        assert!(store.try_inline_result("absent", None).is_err());
    }

    #[test]
    fn malformed_known_kind_is_hard() {
        let err = store().inline_result("bad_photo", None).unwrap_err();
        assert!(matches!(err, ContentError::Decode { ref target, .. } if target == "photo result"));
    }

    // ========================================================================
    // Build & introspection
    // ========================================================================

    #[test]
    fn build_propagates_parse_errors() {
        let config = br#"{"strings": {"ok": "fine", "bad": "Hello {{Name"}}"#;
        let err = ContentStore::from_json(config, &FakeEngine::default()).err().unwrap();
        assert!(matches!(err, ContentError::Parse { ref key, .. } if key == "bad"));
    }

    #[test]
    fn templates_dir_creates_template_namespace() {
        let config = br#"{"templates_dir": "/srv/bot/templates"}"#;
        let store = ContentStore::from_json(config, &FakeEngine::default()).unwrap();
        assert!(store.keys(ContentClass::Templates).is_empty());
        assert!(matches!(
            store.try_text("greet", None),
            Err(ContentError::MissingKey { ref namespace, .. }) if namespace == "templates"
        ));
    }

    #[test]
    fn namespaces_are_independent() {
        let store = store();
        assert!(store.keys(ContentClass::Strings).contains(&"hello".to_string()));
        assert!(!store.keys(ContentClass::InlineButtons).contains(&"hello".to_string()));
        assert_eq!(store.keys(ContentClass::InlineResults).len(), 3);
    }

    #[test]
    fn vars_decode_into_caller_type() {
        #[derive(Deserialize)]
        struct Vars {
            admin: i64,
            channel: String,
        }

        let vars: Vars = store().vars().unwrap();
        assert_eq!(vars.admin, 7);
        assert_eq!(vars.channel, "@news");
        assert!(store().vars::<Vec<String>>().is_err());
    }

    #[test]
    fn dangling_references_are_listed() {
        let dangling = store().dangling_references();
        assert_eq!(
            dangling,
            vec![
                DanglingReference {
                    class: ContentClass::Keyboards,
                    keyboard: "main".into(),
                    key: "b".into(),
                },
                DanglingReference {
                    class: ContentClass::InlineKeyboards,
                    keyboard: "shop".into(),
                    key: "missing".into(),
                },
            ]
        );
    }

    #[test]
    fn store_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ContentStore>();
    }

    #[test]
    fn prototype_rejects_use_before_init() {
        let mut prototype = FakeEngine::default();
        assert!(matches!(
            prototype.parse("k", "v"),
            Err(ContentError::NotInitialized { .. })
        ));
        assert!(matches!(
            prototype.execute("k", None),
            Err(ContentError::NotInitialized { .. })
        ));
    }
}
