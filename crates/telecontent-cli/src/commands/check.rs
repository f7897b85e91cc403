//! `telecontent check`: compile a content file and report problems.

use serde_json::{Map, Value, json};
use tracing::info;

use telecontent_core::application::{ContentClass, ContentStore};

use crate::{
    cli::CheckArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let loaded = super::load(&args.content, &config)?;
    let store = &loaded.store;
    let dangling = store.dangling_references();

    info!(
        path = %loaded.path.display(),
        dangling = dangling.len(),
        "content checked"
    );

    if output.is_json() {
        output.json(&json!({
            "path": loaded.path,
            "engine": store.engine(),
            "keys": key_counts(store),
            "dangling": dangling.iter().map(ToString::to_string).collect::<Vec<_>>(),
        }))?;
    } else {
        output.header(&format!(
            "{} ({} engine)",
            loaded.path.display(),
            store.engine()
        ))?;
        for class in ContentClass::ALL {
            output.print(&format!("  {:<17} {}", class.as_str(), store.keys(class).len()))?;
        }
        for reference in &dangling {
            output.warning(&reference.to_string())?;
        }
    }

    if args.strict && !dangling.is_empty() {
        return Err(CliError::DanglingReferences {
            count: dangling.len(),
            path: loaded.path,
        });
    }

    if !output.is_json() {
        output.success("all templates compiled")?;
    }
    Ok(())
}

fn key_counts(store: &ContentStore) -> Map<String, Value> {
    ContentClass::ALL
        .into_iter()
        .map(|class| (class.to_string(), Value::from(store.keys(class).len())))
        .collect()
}
