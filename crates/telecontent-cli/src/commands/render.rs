//! `telecontent render`: resolve one entry the way a bot would.
//!
//! Templated classes go through the strict `try_*` resolvers so every
//! failure is reported instead of degrading to empty content.

use serde_json::Value;
use tracing::debug;

use telecontent_core::application::{ContentClass, ContentStore};

use crate::{
    cli::{Class, RenderArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let loaded = super::load(&args.content, &config)?;
    let arg = args.arg.as_deref().map(parse_arg);
    debug!(class = ?args.class, key = %args.key, ?arg, "rendering");

    render(&loaded.store, args.class, &args.key, arg.as_ref(), &output)
}

/// Parse `--arg` as JSON; anything that is not JSON is taken as a string.
fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

fn render(
    store: &ContentStore,
    class: Class,
    key: &str,
    arg: Option<&Value>,
    output: &OutputManager,
) -> CliResult<()> {
    let not_found = || CliError::EntryNotFound {
        class: ContentClass::from(class).to_string(),
        key: key.to_owned(),
    };

    match class {
        Class::Strings => text(output, &store.try_string(key, arg)?)?,
        Class::Templates => text(output, &store.try_text(key, arg)?)?,
        Class::Buttons => {
            if !store.keys(ContentClass::Buttons).iter().any(|k| k == key) {
                return Err(not_found());
            }
            output.json(&store.button(key))?;
        }
        Class::Keyboards => output.json(&store.keyboard(key).ok_or_else(not_found)?)?,
        Class::InlineButtons => output.json(&store.try_inline_button(key, arg)?)?,
        Class::InlineKeyboards => {
            output.json(&store.inline_keyboard(key, arg)?.ok_or_else(not_found)?)?;
        }
        Class::InlineResults => match store.try_inline_result(key, arg)? {
            Some(result) => output.json(&result)?,
            None => output.warning("rendered result has an unknown type; nothing would be sent")?,
        },
    }

    Ok(())
}

fn text(output: &OutputManager, text: &str) -> CliResult<()> {
    if output.is_json() {
        output.json(&text)?;
    } else {
        output.content(text)?;
    }
    Ok(())
}
