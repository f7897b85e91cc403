//! A named, keyed collection of compiled templates.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{application::ports::TemplateEngine, error::ContentResult};

/// One content class worth of templates, owned by one engine instance.
///
/// Built once during configuration loading, then only rendered from. Holding
/// the namespace behind `&` is what freezes it: ingestion needs `&mut`.
pub struct TemplateNamespace {
    name: String,
    engine: Box<dyn TemplateEngine>,
}

impl TemplateNamespace {
    /// Create an empty namespace from an engine prototype.
    pub fn new(prototype: &dyn TemplateEngine, name: impl Into<String>) -> Self {
        let name = name.into();
        let engine = prototype.init(&name, None);
        Self { name, engine }
    }

    /// Create an empty namespace bound to a template directory.
    pub fn with_dir(prototype: &dyn TemplateEngine, name: impl Into<String>, dir: &Path) -> Self {
        let name = name.into();
        let engine = prototype.init(&name, Some(dir));
        Self { name, engine }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compile one template under `key`.
    pub fn parse(&mut self, key: &str, source: &str) -> ContentResult<()> {
        self.engine.parse(key, source)
    }

    /// Compile every template of the bound directory.
    #[instrument(skip(self), fields(namespace = %self.name))]
    pub fn parse_dir(&mut self) -> ContentResult<()> {
        self.engine.parse_dir()?;
        debug!(count = self.len(), "parsed template directory");
        Ok(())
    }

    /// Render `key` against `arg`.
    pub fn render(&self, key: &str, arg: Option<&Value>) -> ContentResult<String> {
        self.engine.execute(key, arg)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.engine.contains(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.engine.keys()
    }

    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Backend name of the underlying engine.
    pub fn engine(&self) -> &'static str {
        self.engine.name()
    }
}

impl std::fmt::Debug for TemplateNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateNamespace")
            .field("name", &self.name)
            .field("engine", &self.engine.name())
            .field("keys", &self.keys())
            .finish()
    }
}
