//! Writing command results to stdout.
//!
//! Two kinds of lines go out: *results* (rendered content, JSON documents)
//! which are always printed, and *decoration* (headers, status marks,
//! listings) which `--quiet` suppresses and `--no-color` keeps uncoloured.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::{
    cli::{GlobalArgs, OutputFormat},
    config::AppConfig,
};

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

#[derive(Clone, Copy)]
enum Mark {
    Success,
    Warning,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };
        let color = format == OutputFormat::Human && !args.no_color && !config.output.no_color;

        Self {
            format,
            quiet: args.quiet,
            color,
            term: Term::stdout(),
        }
    }

    /// A rendered entry. Printed even with `--quiet`.
    pub fn content(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    /// A pretty-printed JSON document. Printed even with `--quiet`.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn print(&self, line: &str) -> io::Result<()> {
        self.decoration(line.to_owned())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.decoration(line)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Warning, msg)
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn marked(&self, mark: Mark, msg: &str) -> io::Result<()> {
        let symbol = match mark {
            Mark::Success => "\u{2713}", // ✓
            Mark::Warning => "\u{26a0}", // ⚠
        };
        let line = match (self.color, mark) {
            (false, _) => format!("{symbol} {msg}"),
            (true, Mark::Success) => format!("{} {}", symbol.green().bold(), msg.green()),
            (true, Mark::Warning) => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
        };
        self.decoration(line)
    }

    fn decoration(&self, line: String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool, output_format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_decoration() {
        let out = manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.warning("careful").is_ok());
    }

    #[test]
    fn human_format_is_coloured_unless_disabled() {
        assert!(manager(false, false, OutputFormat::Human).supports_color());
        assert!(!manager(false, true, OutputFormat::Human).supports_color());
    }

    #[test]
    fn plain_and_json_are_uncoloured() {
        assert!(!manager(false, false, OutputFormat::Plain).supports_color());
        assert!(!manager(false, false, OutputFormat::Json).supports_color());
    }

    #[test]
    fn config_can_disable_colour() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args, &config).supports_color());
    }

    #[test]
    fn json_format_is_reported() {
        assert!(manager(false, false, OutputFormat::Json).is_json());
        assert!(!manager(false, false, OutputFormat::Plain).is_json());
    }
}
