//! `telecontent keys`: list the keys of a content file.

use serde_json::{Map, Value};

use telecontent_core::application::ContentClass;

use crate::{cli::KeysArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: KeysArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let loaded = super::load(&args.content, &config)?;

    let classes: Vec<ContentClass> = match args.class {
        Some(class) => vec![class.into()],
        None => ContentClass::ALL.to_vec(),
    };

    if output.is_json() {
        let listing: Map<String, Value> = classes
            .iter()
            .map(|class| (class.to_string(), Value::from(loaded.store.keys(*class))))
            .collect();
        output.json(&listing)?;
        return Ok(());
    }

    for class in classes {
        let keys = loaded.store.keys(class);
        if args.class.is_some() {
            // A single class prints bare keys, one per line.
            for key in &keys {
                output.content(key)?;
            }
            continue;
        }
        if keys.is_empty() {
            continue;
        }
        output.header(&format!("{class}:"))?;
        for key in &keys {
            output.print(&format!("  {key}"))?;
        }
    }

    Ok(())
}
