//! The template engine port.

use std::path::Path;

use serde_json::Value;

use crate::error::ContentResult;

/// File suffix picked up by [`TemplateEngine::parse_dir`].
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Port for a pluggable templating backend.
///
/// Implemented by:
/// - `telecontent_adapters::engine::TextEngine` (minijinja, function table, custom delimiters)
/// - `telecontent_adapters::engine::HandlebarsEngine` (logic-light handlebars)
///
/// An engine value starts as an uninitialized *prototype* carrying only
/// backend configuration. [`init`](Self::init) returns a fresh, independent
/// instance bound to a namespace; compiled templates are never shared between
/// instances. Every other operation on a prototype fails with
/// [`ContentError::NotInitialized`](crate::error::ContentError::NotInitialized).
///
/// ## Concurrency
///
/// `parse`/`parse_dir` take `&mut self` and `execute` takes `&self`, so the
/// borrow checker rules out interleaving ingestion with rendering. Once
/// ingestion is over, any number of threads may call `execute`.
pub trait TemplateEngine: Send + Sync {
    /// Backend name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Create an empty namespace from this engine's configuration.
    ///
    /// `dir` binds the source directory used by [`parse_dir`](Self::parse_dir).
    fn init(&self, namespace: &str, dir: Option<&Path>) -> Box<dyn TemplateEngine>;

    /// Namespace name, or `None` for an uninitialized prototype.
    fn namespace(&self) -> Option<&str>;

    /// Compile `source` and store it under `key`, replacing any previous
    /// definition. On a syntax error the namespace is left unchanged.
    fn parse(&mut self, key: &str, source: &str) -> ContentResult<()>;

    /// Compile every `*.tmpl` file of the bound directory (non-recursive),
    /// keyed by file stem. All-or-nothing: one malformed file leaves the
    /// namespace as it was.
    fn parse_dir(&mut self) -> ContentResult<()>;

    /// Render the template stored under `key` against `arg`.
    fn execute(&self, key: &str, arg: Option<&Value>) -> ContentResult<String>;

    /// Whether a template is stored under `key`.
    fn contains(&self, key: &str) -> bool;

    /// Stored keys, sorted.
    fn keys(&self) -> Vec<String>;
}
