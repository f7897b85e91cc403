//! CLI errors: what went wrong, how to fix it, and which exit code to use.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use telecontent_core::error::{ContentError, ErrorCategory as CoreCategory};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// No content file on the command line or in the configuration.
    #[error("No content file given")]
    NoContentFile,

    /// A static entry (button, keyboard) does not exist.
    #[error("No {class} entry named '{key}'")]
    EntryNotFound { class: String, key: String },

    /// `check --strict` found keyboard cells naming undefined buttons.
    #[error("{count} dangling keyboard reference(s) in {}", path.display())]
    DanglingReferences { count: usize, path: PathBuf },

    /// The application configuration could not be read or used.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from the content store or a template engine.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoContentFile => vec![
                "Pass a content file: telecontent check -f content.json".into(),
                "Or set content_path in the config file or TELECONTENT_CONTENT_PATH".into(),
            ],

            Self::EntryNotFound { class, .. } => vec![
                format!("List the defined keys: telecontent keys --class {class}"),
            ],

            Self::DanglingReferences { .. } => vec![
                "Define the missing buttons or remove them from the keyboards".into(),
                "Run without --strict to only warn".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Show the effective values: telecontent config list".into(),
                "Show the default config location: telecontent config path".into(),
            ],

            Self::Content(core) => core.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
            ],
        }
    }

    /// Error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoContentFile => ErrorCategory::UserError,
            Self::EntryNotFound { .. } => ErrorCategory::NotFound,
            Self::DanglingReferences { .. } => ErrorCategory::Content,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Content(core) => match core.category() {
                CoreCategory::Configuration => ErrorCategory::Content,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Rendering | CoreCategory::Decoding => ErrorCategory::Content,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Content       |  5   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Content => 5,
            ErrorCategory::Internal => 1,
        }
    }

    /// Message, cause chain and suggestions with ANSI styling.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.report(verbose, true)
    }

    /// Same report as [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.report(verbose, false)
    }

    fn report(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut lines = vec![
            String::new(),
            format!("{} {self}", paint("Error:", |t| t.red().bold().to_string())),
        ];

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let text = format!("caused by: {err}");
                lines.push(format!("  {}", paint(&text, |t| t.dimmed().to_string())));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(paint("Suggestions:", |t| t.yellow().bold().to_string()));
            lines.extend(suggestions.iter().map(|s| format!("  {s}")));
        }

        if !verbose {
            lines.push(String::new());
            lines.push(paint(
                "Use -v / --verbose for more details.",
                |t| t.dimmed().to_string(),
            ));
        }

        let mut report = lines.join("\n");
        report.push('\n');
        report
    }

    /// Record the failure in the log before it is printed.
    pub fn log(&self) {
        let category = self.category();
        let code = self.exit_code();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, code, error = %self, "command failed")
            }
            _ => tracing::error!(?category, code, error = %self, "command failed"),
        }

        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "error source");
        }
    }
}

/// Groups of failures sharing an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or contradictory command-line input.
    UserError,
    /// The requested content entry does not exist.
    NotFound,
    /// The application config file or environment is unusable.
    Configuration,
    /// The content file or one of its templates is broken.
    Content,
    /// Anything else, usually I/O on stdout.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn exit_code_user_error() {
        assert_eq!(CliError::NoContentFile.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let err = CliError::EntryNotFound {
            class: "buttons".into(),
            key: "x".into(),
        };
        assert_eq!(err.exit_code(), 3);

        let missing = CliError::from(ContentError::MissingKey {
            namespace: "strings".into(),
            key: "x".into(),
        });
        assert_eq!(missing.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_content() {
        let parse = CliError::from(ContentError::Parse {
            namespace: "strings".into(),
            key: "k".into(),
            reason: "unexpected end".into(),
        });
        assert_eq!(parse.exit_code(), 5);

        let decode = CliError::from(ContentError::Decode {
            target: "inline button".into(),
            reason: "EOF".into(),
        });
        assert_eq!(decode.exit_code(), 5);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::from(io::Error::other("e")).exit_code(),
            1
        );
    }

    #[test]
    fn content_error_is_transparent() {
        let err = CliError::from(ContentError::MissingKey {
            namespace: "strings".into(),
            key: "start".into(),
        });
        assert_eq!(
            err.to_string(),
            ContentError::MissingKey {
                namespace: "strings".into(),
                key: "start".into(),
            }
            .to_string()
        );
    }

    #[test]
    fn no_content_file_suggests_flag() {
        assert!(
            CliError::NoContentFile
                .suggestions()
                .iter()
                .any(|s| s.contains("-f"))
        );
    }

    #[test]
    fn format_plain_contains_error_header() {
        let s = CliError::NoContentFile.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = CliError::NoContentFile.format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn format_plain_has_no_ansi() {
        let err = CliError::EntryNotFound {
            class: "keyboards".into(),
            key: "main".into(),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error: No keyboards entry named 'main'"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_report_lists_causes() {
        let err = CliError::ConfigError {
            message: "bad file".into(),
            source: Some(Box::new(io::Error::other("disk on fire"))),
        };
        assert!(err.format_plain(true).contains("caused by: disk on fire"));
    }
}
