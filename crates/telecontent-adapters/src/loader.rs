//! Filesystem loader for content configuration files.
//!
//! Reads a JSON or TOML content file, resolves the template directory and
//! builds a [`ContentStore`] with the selected engine.
//!
//! ```no_run
//! use telecontent_adapters::{ContentLoader, EngineKind};
//!
//! let store = ContentLoader::new("bot/content.json")
//!     .engine(EngineKind::Handlebars)
//!     .load()?;
//! println!("{}", store.string("start", None));
//! # Ok::<(), telecontent_core::error::ContentError>(())
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use telecontent_core::{
    application::{ContentConfig, ContentStore},
    error::{ContentError, ContentResult},
};

use crate::engine::{EngineKind, build_engine};

/// On-disk content file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Toml,
}

impl ContentFormat {
    /// Format by file extension; anything but `.toml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Builder that turns a content file into a [`ContentStore`].
#[derive(Debug, Clone)]
pub struct ContentLoader {
    path: PathBuf,
    templates_dir: Option<PathBuf>,
    engine: EngineKind,
    delimiters: Option<(String, String)>,
}

impl ContentLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            templates_dir: None,
            engine: EngineKind::default(),
            delimiters: None,
        }
    }

    /// Use `dir` instead of the file's `templates_dir`.
    pub fn templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(dir.into());
        self
    }

    pub fn engine(mut self, engine: EngineKind) -> Self {
        self.engine = engine;
        self
    }

    /// Variable delimiters for the text engine.
    pub fn delimiters(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.delimiters = Some((left.into(), right.into()));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the content file.
    ///
    /// A relative `templates_dir` is resolved against the directory holding
    /// the content file.
    ///
    /// # Errors
    ///
    /// [`ContentError::Io`] if the file cannot be read and
    /// [`ContentError::Config`] if it cannot be decoded.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load_config(&self) -> ContentResult<ContentConfig> {
        let bytes = fs::read(&self.path).map_err(|e| ContentError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let format = ContentFormat::from_path(&self.path);
        debug!(?format, "decoding content file");
        let mut config = match format {
            ContentFormat::Json => ContentConfig::from_json(&bytes)?,
            ContentFormat::Toml => ContentConfig::from_json(&toml_to_json(&bytes)?)?,
        };

        if let Some(dir) = &self.templates_dir {
            config.templates_dir = Some(dir.clone());
        } else if let Some(dir) = config.templates_dir.take() {
            config.templates_dir = Some(self.resolve(dir));
        }

        Ok(config)
    }

    /// Load the content file and build the store.
    pub fn load(&self) -> ContentResult<ContentStore> {
        let config = self.load_config()?;
        let delimiters = self
            .delimiters
            .as_ref()
            .map(|(left, right)| (left.as_str(), right.as_str()));
        let engine = build_engine(self.engine, delimiters)?;
        ContentStore::build(config, engine.as_ref())
    }

    fn resolve(&self, dir: PathBuf) -> PathBuf {
        if dir.is_absolute() {
            return dir;
        }
        match self.path.parent() {
            Some(parent) => parent.join(dir),
            None => dir,
        }
    }
}

/// Re-encode a TOML document as JSON so inline templates keep their raw text.
fn toml_to_json(bytes: &[u8]) -> ContentResult<Vec<u8>> {
    let text = std::str::from_utf8(bytes).map_err(|e| ContentError::Config {
        message: format!("content file is not UTF-8: {e}"),
    })?;
    let value: serde_json::Value = toml::from_str(text).map_err(|e| ContentError::Config {
        message: e.to_string(),
    })?;
    serde_json::to_vec(&value).map_err(|e| ContentError::Config {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(ContentFormat::from_path(Path::new("a.toml")), ContentFormat::Toml);
        assert_eq!(ContentFormat::from_path(Path::new("a.TOML")), ContentFormat::Toml);
        assert_eq!(ContentFormat::from_path(Path::new("a.json")), ContentFormat::Json);
        assert_eq!(ContentFormat::from_path(Path::new("content")), ContentFormat::Json);
    }

    #[test]
    fn loads_json_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "content.json", r#"{"strings": {"hi": "Hi {{ this }}"}}"#);

        let store = ContentLoader::new(path).load().unwrap();
        assert_eq!(store.string("hi", Some(&json!("Ann"))), "Hi Ann");
    }

    #[test]
    fn loads_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "content.toml",
            r#"
[strings]
hi = "Hi {{ this }}"

[buttons]
help = "Help"

[inline_buttons.buy]
unique = "buy"
text = "Buy {{ this }}"
"#,
        );

        let store = ContentLoader::new(path).load().unwrap();
        assert_eq!(store.string("hi", Some(&json!("Ann"))), "Hi Ann");
        assert_eq!(store.button("help").text, "Help");
        assert_eq!(
            store
                .inline_button("buy", Some(&json!("milk")))
                .unwrap()
                .unwrap()
                .text,
            "Buy milk"
        );
    }

    #[test]
    fn relative_templates_dir_is_resolved_against_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("tmpl")).unwrap();
        fs::write(dir.path().join("tmpl/welcome.tmpl"), "Welcome {{ this }}").unwrap();
        let path = write(&dir, "content.json", r#"{"templates_dir": "tmpl"}"#);

        let config = ContentLoader::new(&path).load_config().unwrap();
        assert_eq!(config.templates_dir.unwrap(), dir.path().join("tmpl"));

        let store = ContentLoader::new(path).load().unwrap();
        assert_eq!(store.text("welcome", Some(&json!("back"))), "Welcome back");
    }

    #[test]
    fn templates_dir_override_wins() {
        let dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let path = write(&dir, "content.json", r#"{"templates_dir": "missing"}"#);

        let config = ContentLoader::new(path)
            .templates_dir(other.path())
            .load_config()
            .unwrap();
        assert_eq!(config.templates_dir.unwrap(), other.path());
    }

    #[test]
    fn handlebars_engine_is_selectable() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "content.json", r#"{"strings": {"hi": "Hi {{this}}"}}"#);

        let store = ContentLoader::new(path)
            .engine(EngineKind::Handlebars)
            .load()
            .unwrap();
        assert_eq!(store.engine(), "handlebars");
        assert_eq!(store.string("hi", Some(&json!("Ann"))), "Hi Ann");
    }

    #[test]
    fn custom_delimiters_reach_the_engine() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "content.json", r#"{"strings": {"hi": "Hi [[ this ]]"}}"#);

        let store = ContentLoader::new(path)
            .delimiters("[[", "]]")
            .load()
            .unwrap();
        assert_eq!(store.string("hi", Some(&json!("Ann"))), "Hi Ann");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ContentLoader::new("/definitely/not/here.json")
            .load_config()
            .unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "content.toml", "[strings\nhi = 1");
        let err = ContentLoader::new(path).load_config().unwrap_err();
        assert!(matches!(err, ContentError::Config { .. }));
    }
}
