//! Handlebars template backend.
//!
//! Logic-less alternative to [`TextEngine`](super::TextEngine). The argument is
//! the root context, so `{{Name}}` reads a field and `{{this}}` the whole
//! value. Output is never HTML-escaped. Strict mode turns missing fields
//! into render errors.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
    handlebars_helper, no_escape,
};
use serde_json::Value;
use tracing::{debug, instrument};

use telecontent_core::{
    application::TemplateEngine,
    error::{ContentError, ContentResult},
};

use super::functions::{self, HelperError, jsq};
use crate::template_dir;

const ENGINE: &str = "handlebars";

handlebars_helper!(jsq_helper: |s: str| jsq(s));
handlebars_helper!(title: |s: str| s.to_uppercase());

fn add_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let sum = functions::add(int_param(h, 0)?, int_param(h, 1)?).map_err(helper_error)?;
    out.write(&sum.to_string())?;
    Ok(())
}

fn sub_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let diff = functions::sub(int_param(h, 0)?, int_param(h, 1)?).map_err(helper_error)?;
    out.write(&diff.to_string())?;
    Ok(())
}

fn repeat_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let s = h
        .param(0)
        .and_then(|p| p.value().as_str())
        .ok_or_else(|| bad_param(h, 0, "a string"))?;
    let n = h
        .param(1)
        .and_then(|p| p.value().as_u64())
        .ok_or_else(|| bad_param(h, 1, "a non-negative integer"))?;

    out.write(&functions::repeat(s, n).map_err(helper_error)?)?;
    Ok(())
}

fn int_param(h: &Helper, index: usize) -> Result<i64, RenderErrorReason> {
    h.param(index)
        .and_then(|p| p.value().as_i64())
        .ok_or_else(|| bad_param(h, index, "an integer"))
}

fn bad_param(h: &Helper, index: usize, expected: &str) -> RenderErrorReason {
    RenderErrorReason::Other(format!(
        "parameter {index} of '{}' must be {expected}",
        h.name()
    ))
}

fn helper_error(err: HelperError) -> RenderErrorReason {
    RenderErrorReason::Other(err.to_string())
}

/// Handlebars-backed implementation of [`TemplateEngine`].
#[derive(Clone, Default)]
pub struct HandlebarsEngine {
    registry: Option<Handlebars<'static>>,
    namespace: Option<String>,
    keys: BTreeSet<String>,
    dir: Option<PathBuf>,
}

impl HandlebarsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry() -> Handlebars<'static> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        registry.set_strict_mode(true);
        registry.register_helper("add", Box::new(add_helper));
        registry.register_helper("sub", Box::new(sub_helper));
        registry.register_helper("jsq", Box::new(jsq_helper));
        registry.register_helper("title", Box::new(title));
        registry.register_helper("repeat", Box::new(repeat_helper));
        registry
    }

    fn initialized(&self) -> ContentResult<&Handlebars<'static>> {
        self.registry
            .as_ref()
            .ok_or(ContentError::NotInitialized { engine: ENGINE })
    }

    fn namespace_name(&self) -> String {
        self.namespace.clone().unwrap_or_default()
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn name(&self) -> &'static str {
        ENGINE
    }

    fn init(&self, namespace: &str, dir: Option<&Path>) -> Box<dyn TemplateEngine> {
        Box::new(Self {
            registry: Some(Self::registry()),
            namespace: Some(namespace.to_owned()),
            keys: BTreeSet::new(),
            dir: dir.map(Path::to_path_buf),
        })
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn parse(&mut self, key: &str, source: &str) -> ContentResult<()> {
        let namespace = self.namespace_name();
        let registry = self
            .registry
            .as_mut()
            .ok_or(ContentError::NotInitialized { engine: ENGINE })?;

        registry
            .register_template_string(key, source)
            .map_err(|e| ContentError::Parse {
                namespace,
                key: key.to_owned(),
                reason: e.to_string(),
            })?;

        self.keys.insert(key.to_owned());
        Ok(())
    }

    #[instrument(skip(self), fields(namespace = ?self.namespace))]
    fn parse_dir(&mut self) -> ContentResult<()> {
        let mut staged = self.initialized()?.clone();
        let namespace = self.namespace_name();
        let dir = self.dir.as_ref().ok_or_else(|| ContentError::NoDirectory {
            namespace: namespace.clone(),
        })?;

        let files = template_dir::scan(dir)?;
        for file in &files {
            staged
                .register_template_string(&file.key, &file.source)
                .map_err(|e| ContentError::Parse {
                    namespace: namespace.clone(),
                    key: file.key.clone(),
                    reason: e.to_string(),
                })?;
        }

        self.registry = Some(staged);
        self.keys.extend(files.into_iter().map(|file| file.key));
        debug!(count = self.keys.len(), "handlebars templates loaded");
        Ok(())
    }

    fn execute(&self, key: &str, arg: Option<&Value>) -> ContentResult<String> {
        let registry = self.initialized()?;
        if !registry.has_template(key) {
            return Err(ContentError::MissingKey {
                namespace: self.namespace_name(),
                key: key.to_owned(),
            });
        }

        registry
            .render(key, arg.unwrap_or(&Value::Null))
            .map_err(|e| ContentError::Render {
                namespace: self.namespace_name(),
                key: key.to_owned(),
                reason: e.to_string(),
            })
    }

    fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    fn keys(&self) -> Vec<String> {
        self.keys.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn namespace() -> Box<dyn TemplateEngine> {
        HandlebarsEngine::new().init("test", None)
    }

    #[test]
    fn substitutes_fields_and_this() {
        let mut ns = namespace();
        ns.parse("field", "Hello {{Name}}").unwrap();
        ns.parse("this", "Hi {{this}}").unwrap();

        assert_eq!(
            ns.execute("field", Some(&json!({"Name": "Ann"}))).unwrap(),
            "Hello Ann"
        );
        assert_eq!(ns.execute("this", Some(&json!("Bob"))).unwrap(), "Hi Bob");
    }

    #[test]
    fn output_is_not_escaped() {
        let mut ns = namespace();
        ns.parse("k", "<b>{{this}}</b>").unwrap();
        assert_eq!(ns.execute("k", Some(&json!("a & b"))).unwrap(), "<b>a & b</b>");
    }

    #[test]
    fn helpers_are_registered() {
        let mut ns = namespace();
        ns.parse("k", "{{add n 2}} {{title word}} {{repeat \"-\" 3}}").unwrap();
        assert_eq!(
            ns.execute("k", Some(&json!({"n": 1, "word": "ok"}))).unwrap(),
            "3 OK ---"
        );
    }

    #[test]
    fn oversized_repeat_is_render_error() {
        let mut ns = namespace();
        ns.parse("k", "{{repeat \"ab\" n}}").unwrap();

        let err = ns.execute("k", Some(&json!({"n": u64::MAX}))).unwrap_err();
        assert!(matches!(err, ContentError::Render { .. }), "{err}");
        assert!(err.to_string().contains("limit"), "{err}");

        let err = ns.execute("k", Some(&json!({"n": -1}))).unwrap_err();
        assert!(matches!(err, ContentError::Render { .. }), "{err}");
    }

    #[test]
    fn arithmetic_overflow_is_render_error() {
        let mut ns = namespace();
        ns.parse("add", "{{add n 1}}").unwrap();
        ns.parse("sub", "{{sub n 1}}").unwrap();

        let err = ns.execute("add", Some(&json!({"n": i64::MAX}))).unwrap_err();
        assert!(matches!(err, ContentError::Render { .. }), "{err}");
        assert!(err.to_string().contains("overflows"), "{err}");

        let err = ns.execute("sub", Some(&json!({"n": i64::MIN}))).unwrap_err();
        assert!(matches!(err, ContentError::Render { .. }), "{err}");

        assert_eq!(ns.execute("sub", Some(&json!({"n": 43}))).unwrap(), "42");
    }

    #[test]
    fn block_helpers_work() {
        let mut ns = namespace();
        ns.parse("k", "{{#each items}}[{{this}}]{{/each}}").unwrap();
        assert_eq!(
            ns.execute("k", Some(&json!({"items": [1, 2]}))).unwrap(),
            "[1][2]"
        );
    }

    #[test]
    fn missing_field_is_render_error() {
        let mut ns = namespace();
        ns.parse("k", "Hello {{Name}}").unwrap();
        let err = ns.execute("k", Some(&json!({}))).unwrap_err();
        assert!(matches!(err, ContentError::Render { .. }), "{err}");
    }

    #[test]
    fn unknown_key_is_missing_key() {
        let ns = namespace();
        let err = ns.execute("nope", None).unwrap_err();
        assert!(matches!(err, ContentError::MissingKey { .. }));
    }

    #[test]
    fn malformed_source_is_parse_error() {
        let mut ns = namespace();
        let err = ns.parse("k", "{{#if x}}unclosed").unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
        assert!(!ns.contains("k"));
    }

    #[test]
    fn prototype_is_not_initialized() {
        let err = HandlebarsEngine::new().execute("k", None).unwrap_err();
        assert_eq!(err, ContentError::NotInitialized { engine: "handlebars" });
    }
}
