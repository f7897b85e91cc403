//! Text template backend built on minijinja.
//!
//! Full control flow (`{% if %}`, `{% for %}`, filters) plus the helpers of
//! an injected [`FunctionTable`]. Variable delimiters are configurable;
//! block delimiters stay `{%` `%}`.
//!
//! The render argument is bound as `this`. When it is a JSON object its
//! fields are also visible as top-level names, so `Hello {{ Name }}` renders
//! `{"Name": "Ann"}` and `Hi {{ this }}` renders `"Bob"`. Undefined names are
//! render errors.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior, syntax::SyntaxConfig};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use telecontent_core::{
    application::TemplateEngine,
    error::{ContentError, ContentResult},
};

use super::functions::FunctionTable;
use crate::template_dir;

const ENGINE: &str = "text";
const DEFAULT_DELIMITERS: (&str, &str) = ("{{", "}}");

/// minijinja-backed implementation of [`TemplateEngine`].
#[derive(Clone)]
pub struct TextEngine {
    env: Option<Environment<'static>>,
    namespace: Option<String>,
    keys: BTreeSet<String>,
    dir: Option<PathBuf>,
    functions: Arc<FunctionTable>,
    syntax: SyntaxConfig,
    delimiters: (String, String),
}

impl TextEngine {
    /// Prototype with `{{ }}` delimiters and the builtin function table.
    pub fn new() -> Self {
        Self {
            env: None,
            namespace: None,
            keys: BTreeSet::new(),
            dir: None,
            functions: FunctionTable::builtin(),
            syntax: SyntaxConfig::default(),
            delimiters: (
                DEFAULT_DELIMITERS.0.to_owned(),
                DEFAULT_DELIMITERS.1.to_owned(),
            ),
        }
    }

    /// Prototype with custom variable delimiters. Either side left empty
    /// falls back to the defaults.
    ///
    /// # Errors
    ///
    /// [`ContentError::Config`] if minijinja rejects the delimiter pair.
    pub fn with_delimiters(left: &str, right: &str) -> ContentResult<Self> {
        let (left, right) = if left.is_empty() || right.is_empty() {
            DEFAULT_DELIMITERS
        } else {
            (left, right)
        };

        let syntax = SyntaxConfig::builder()
            .variable_delimiters(left.to_owned(), right.to_owned())
            .build()
            .map_err(|e| ContentError::Config {
                message: format!("invalid delimiters '{left}' '{right}': {e}"),
            })?;

        Ok(Self {
            syntax,
            delimiters: (left.to_owned(), right.to_owned()),
            ..Self::new()
        })
    }

    /// Replace the function table shared by namespaces created from now on.
    pub fn functions(mut self, functions: Arc<FunctionTable>) -> Self {
        self.functions = functions;
        self
    }

    pub fn delimiters(&self) -> (&str, &str) {
        (&self.delimiters.0, &self.delimiters.1)
    }

    fn environment(&self) -> Environment<'static> {
        let mut env = Environment::new();
        env.set_syntax(self.syntax.clone());
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for (name, function) in self.functions.iter() {
            env.add_global(name.to_owned(), function.clone());
        }
        env
    }

    fn env(&self) -> ContentResult<&Environment<'static>> {
        self.env
            .as_ref()
            .ok_or(ContentError::NotInitialized { engine: ENGINE })
    }

    fn namespace_name(&self) -> String {
        self.namespace.clone().unwrap_or_default()
    }
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for TextEngine {
    fn name(&self) -> &'static str {
        ENGINE
    }

    fn init(&self, namespace: &str, dir: Option<&Path>) -> Box<dyn TemplateEngine> {
        Box::new(Self {
            env: Some(self.environment()),
            namespace: Some(namespace.to_owned()),
            keys: BTreeSet::new(),
            dir: dir.map(Path::to_path_buf),
            functions: Arc::clone(&self.functions),
            syntax: self.syntax.clone(),
            delimiters: self.delimiters.clone(),
        })
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn parse(&mut self, key: &str, source: &str) -> ContentResult<()> {
        let namespace = self.namespace_name();
        let env = self
            .env
            .as_mut()
            .ok_or(ContentError::NotInitialized { engine: ENGINE })?;

        env.add_template_owned(key.to_owned(), source.to_owned())
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
        let mut staged = self.env()?.clone();
        let namespace = self.namespace_name();
        let dir = self.dir.as_ref().ok_or_else(|| ContentError::NoDirectory {
            namespace: namespace.clone(),
        })?;

        let files = template_dir::scan(dir)?;
        for file in &files {
            staged
                .add_template_owned(file.key.clone(), file.source.clone())
                .map_err(|e| ContentError::Parse {
                    namespace: namespace.clone(),
                    key: file.key.clone(),
                    reason: e.to_string(),
                })?;
        }

        self.env = Some(staged);
        self.keys.extend(files.into_iter().map(|file| file.key));
        debug!(count = self.keys.len(), "text templates loaded");
        Ok(())
    }

    fn execute(&self, key: &str, arg: Option<&Value>) -> ContentResult<String> {
        let template = self.env()?.get_template(key).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                ContentError::MissingKey {
                    namespace: self.namespace_name(),
                    key: key.to_owned(),
                }
            } else {
                ContentError::Render {
                    namespace: self.namespace_name(),
                    key: key.to_owned(),
                    reason: e.to_string(),
                }
            }
        })?;

        template
            .render(bind_argument(arg))
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

/// Render context: `this` plus the fields of an object argument.
fn bind_argument(arg: Option<&Value>) -> minijinja::Value {
    let mut context = Map::new();
    if let Some(arg) = arg {
        if let Value::Object(fields) = arg {
            context.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        context.insert("this".to_owned(), arg.clone());
    }
    minijinja::Value::from_serialize(Value::Object(context))
}
