//! Unified error handling for Telecontent Core.
//!
//! Every failure the content pipeline can produce is one named variant of
//! [`ContentError`]. Whether a failure is swallowed or propagated is not
//! decided at the call-site: [`ContentError::severity`] names the policy.
//!
//! | kind             | raised by                       | severity |
//! |------------------|---------------------------------|----------|
//! | `NotInitialized` | engine used before `init`       | hard     |
//! | `NoDirectory`    | `parse_dir` without a directory | hard     |
//! | `Io`             | reading templates / config      | hard     |
//! | `Parse`          | malformed template syntax       | hard     |
//! | `Config`         | malformed content configuration | hard     |
//! | `MissingKey`     | unknown key at render time      | soft     |
//! | `Render`         | argument/template mismatch      | soft     |
//! | `Decode`         | rendered JSON has the wrong shape | hard   |

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for content operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A template engine was used before `init` created its namespace.
    #[error("{engine} template engine is not initialized")]
    NotInitialized { engine: &'static str },

    /// Directory ingestion was requested but no directory is bound.
    #[error("template namespace '{namespace}' has no source directory")]
    NoDirectory { namespace: String },

    /// A template directory or configuration file could not be read.
    #[error("failed to read {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },

    /// Template source failed to compile.
    #[error("failed to parse template '{key}' in '{namespace}': {reason}")]
    Parse {
        namespace: String,
        key: String,
        reason: String,
    },

    /// No template or static entry is stored under the key.
    #[error("no entry '{key}' in '{namespace}'")]
    MissingKey { namespace: String, key: String },

    /// Template compiled but rendering against the argument failed.
    #[error("failed to render '{key}' in '{namespace}': {reason}")]
    Render {
        namespace: String,
        key: String,
        reason: String,
    },

    /// Rendered output is not a valid instance of the expected shape.
    #[error("rendered content is not a valid {target}: {reason}")]
    Decode { target: String, reason: String },

    /// Raw content configuration is malformed.
    #[error("invalid content configuration: {message}")]
    Config { message: String },
}

impl ContentError {
    /// Whether this failure degrades to "no content" or aborts the caller.
    pub fn severity(&self) -> Severity {
        match self {
            Self::MissingKey { .. } | Self::Render { .. } => Severity::Soft,
            _ => Severity::Hard,
        }
    }

    /// Shorthand for `severity() == Severity::Soft`.
    pub fn is_soft(&self) -> bool {
        self.severity() == Severity::Soft
    }

    /// Error category for display/styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotInitialized { .. }
            | Self::NoDirectory { .. }
            | Self::Io { .. }
            | Self::Parse { .. }
            | Self::Config { .. } => ErrorCategory::Configuration,
            Self::MissingKey { .. } => ErrorCategory::NotFound,
            Self::Render { .. } => ErrorCategory::Rendering,
            Self::Decode { .. } => ErrorCategory::Decoding,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotInitialized { engine } => vec![
                format!("The {} engine was used without a namespace", engine),
                "This is a bug in the caller: init() must run before parse/execute".into(),
            ],
            Self::NoDirectory { namespace } => vec![
                format!("Namespace '{}' needs a template directory", namespace),
                "Set templates_dir in the content configuration or pass --templates".into(),
            ],
            Self::Io { path, .. } => vec![
                format!("Check that '{}' exists and is readable", path.display()),
            ],
            Self::Parse { key, .. } => vec![
                format!("Fix the template syntax of '{}'", key),
                "Text templates use {{ expr }} and {% block %}; handlebars uses {{expr}}".into(),
            ],
            Self::MissingKey { namespace, key } => vec![
                format!("Add '{}' to the '{}' section of the configuration", key, namespace),
                "Try: telecontent keys to list defined keys".into(),
            ],
            Self::Render { .. } => vec![
                "Check that the argument provides every field the template references".into(),
            ],
            Self::Decode { target, .. } => vec![
                format!("The template must render a valid {} JSON document", target),
                "Escape interpolated strings with jsq when embedding them in JSON".into(),
            ],
            Self::Config { .. } => vec![
                "Validate the configuration file as JSON".into(),
                "Try: telecontent check --content <FILE>".into(),
            ],
        }
    }
}

/// Failure policy attached to each error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Logged and degraded to an empty/absent result.
    Soft,
    /// Propagated to the immediate caller.
    Hard,
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    NotFound,
    Rendering,
    Decoding,
}

/// Convenient result type alias.
pub type ContentResult<T> = Result<T, ContentError>;
