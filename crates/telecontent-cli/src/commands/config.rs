//! `telecontent config`: inspect the effective application configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.content(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.content(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            output.content(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let path = |p: &Option<std::path::PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    };

    match key {
        "engine" => Ok(config.engine.to_string()),
        "delimiters.left" => Ok(config.delimiters.left.clone()),
        "delimiters.right" => Ok(config.delimiters.right.clone()),
        "content_path" => Ok(path(&config.content_path)),
        "templates_dir" => Ok(path(&config.templates_dir)),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "engine").unwrap(), "text");
        assert_eq!(get_config_value(&cfg, "delimiters.left").unwrap(), "{{");
        assert_eq!(get_config_value(&cfg, "content_path").unwrap(), "");
    }

    #[test]
    fn get_path_value() {
        let cfg = AppConfig {
            templates_dir: Some(PathBuf::from("tmpl")),
            ..AppConfig::default()
        };
        assert_eq!(get_config_value(&cfg, "templates_dir").unwrap(), "tmpl");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
