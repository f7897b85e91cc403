//! Command handlers, one module per subcommand.

pub mod check;
pub mod completions;
pub mod config;
pub mod keys;
pub mod render;

use std::path::PathBuf;

use tracing::{debug, instrument};

use telecontent_adapters::{ContentLoader, EngineKind};
use telecontent_core::application::ContentStore;

use crate::{
    cli::ContentArgs,
    config::{AppConfig, Delimiters},
    error::{CliError, CliResult},
};

/// A built store together with where it came from.
pub struct LoadedContent {
    pub path: PathBuf,
    pub store: ContentStore,
}

/// Build the loader described by the flags, falling back to `config`.
pub fn loader(args: &ContentArgs, config: &AppConfig) -> CliResult<ContentLoader> {
    let path = args
        .file
        .clone()
        .or_else(|| config.content_path.clone())
        .ok_or(CliError::NoContentFile)?;

    let engine = args.engine.map(EngineKind::from).unwrap_or(config.engine);
    let mut loader = ContentLoader::new(path).engine(engine);

    if let Some(dir) = args.templates_dir.as_ref().or(config.templates_dir.as_ref()) {
        loader = loader.templates_dir(dir);
    }

    let delimiters = Delimiters {
        left: args
            .left_delim
            .clone()
            .unwrap_or_else(|| config.delimiters.left.clone()),
        right: args
            .right_delim
            .clone()
            .unwrap_or_else(|| config.delimiters.right.clone()),
    };
    if delimiters != Delimiters::default() {
        loader = loader.delimiters(delimiters.left, delimiters.right);
    }

    Ok(loader)
}

/// Load and compile the content selected by the flags.
#[instrument(skip_all)]
pub fn load(args: &ContentArgs, config: &AppConfig) -> CliResult<LoadedContent> {
    let loader = loader(args, config)?;
    let store = loader.load()?;
    debug!(path = %loader.path().display(), engine = store.engine(), "content loaded");

    Ok(LoadedContent {
        path: loader.path().to_path_buf(),
        store,
    })
}
