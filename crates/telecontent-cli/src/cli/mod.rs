//! Command line of the `telecontent` binary (clap derive).
//!
//! Value enums here mirror the library types ([`EngineKind`],
//! [`ContentClass`]) so the libraries stay free of clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use telecontent_adapters::EngineKind;
use telecontent_core::application::ContentClass;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name    = "telecontent",
    bin_name = "telecontent",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate and preview templated bot content",
    long_about = "Telecontent loads a bot's content file (strings, buttons, keyboards, \
                  inline buttons and inline query results), compiles every template \
                  and renders individual entries the way the bot would.",
    after_help = "EXAMPLES:\n\
        \x20 telecontent check -f content.json\n\
        \x20 telecontent keys  -f content.json --class inline-results\n\
        \x20 telecontent render strings start -f content.json --arg '{\"Name\": \"Ann\"}'\n\
        \x20 telecontent completions bash > /usr/share/bash-completion/completions/telecontent",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a content file and report problems.
    #[command(
        about = "Compile every template and report problems",
        after_help = "EXAMPLES:\n\
            \x20 telecontent check -f content.json\n\
            \x20 telecontent check -f content.toml --engine handlebars --strict"
    )]
    Check(CheckArgs),

    /// List keys of a content file.
    #[command(
        visible_alias = "ls",
        about = "List content keys",
        after_help = "EXAMPLES:\n\
            \x20 telecontent keys -f content.json\n\
            \x20 telecontent keys -f content.json --class buttons"
    )]
    Keys(KeysArgs),

    /// Render one entry of a content file.
    #[command(
        visible_alias = "r",
        about = "Render one content entry",
        after_help = "EXAMPLES:\n\
            \x20 telecontent render strings start --arg '{\"Name\": \"Ann\"}'\n\
            \x20 telecontent render keyboards main\n\
            \x20 telecontent render inline-results photo --arg '{\"url\": \"https://x\"}'"
    )]
    Render(RenderArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 telecontent completions bash > ~/.local/share/bash-completion/completions/telecontent\n\
            \x20 telecontent completions zsh  > ~/.zfunc/_telecontent\n\
            \x20 telecontent completions fish > ~/.config/fish/completions/telecontent.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the application configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 telecontent config get engine\n\
            \x20 telecontent config list\n\
            \x20 telecontent config path"
    )]
    Config(ConfigCommands),
}

// ── shared content arguments ──────────────────────────────────────────────────

/// Where the content comes from and how it is compiled.
///
/// Every flag falls back to the application configuration.
#[derive(Debug, Args)]
pub struct ContentArgs {
    /// Content file (JSON or TOML).
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "Content file (.json or .toml)"
    )]
    pub file: Option<PathBuf>,

    /// Template backend.
    #[arg(
        short = 'e',
        long = "engine",
        value_enum,
        value_name = "ENGINE",
        help = "Template engine"
    )]
    pub engine: Option<Engine>,

    /// Override the content file's `templates_dir`.
    #[arg(
        short = 't',
        long = "templates-dir",
        value_name = "DIR",
        help = "Directory of *.tmpl message templates"
    )]
    pub templates_dir: Option<PathBuf>,

    /// Left variable delimiter of the text engine.
    #[arg(long = "left-delim", value_name = "DELIM", help = "Left delimiter")]
    pub left_delim: Option<String>,

    /// Right variable delimiter of the text engine.
    #[arg(long = "right-delim", value_name = "DELIM", help = "Right delimiter")]
    pub right_delim: Option<String>,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `telecontent check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Fail when a keyboard references an undefined button.
    #[arg(long = "strict", help = "Treat dangling keyboard references as errors")]
    pub strict: bool,
}

// ── keys ──────────────────────────────────────────────────────────────────────

/// Arguments for `telecontent keys`.
#[derive(Debug, Args)]
pub struct KeysArgs {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Only list one content class.
    #[arg(long = "class", value_enum, help = "Content class to list")]
    pub class: Option<Class>,
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `telecontent render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Content class of the entry.
    #[arg(value_enum, value_name = "CLASS")]
    pub class: Class,

    /// Key of the entry.
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Template argument as JSON.
    #[arg(
        short = 'a',
        long = "arg",
        value_name = "JSON",
        help = "Template argument as a JSON value"
    )]
    pub arg: Option<String>,

    #[command(flatten)]
    pub content: ContentArgs,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `telecontent completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `telecontent config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `delimiters.left`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Template backends selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Engine {
    /// Also accepted as `jinja`.
    #[value(alias = "jinja")]
    Text,
    /// Also accepted as `hbs`.
    #[value(alias = "hbs")]
    Handlebars,
}

impl From<Engine> for EngineKind {
    fn from(engine: Engine) -> Self {
        match engine {
            Engine::Text => EngineKind::Text,
            Engine::Handlebars => EngineKind::Handlebars,
        }
    }
}

/// Content classes; singular names are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Class {
    #[value(alias = "string")]
    Strings,
    #[value(alias = "text")]
    Templates,
    #[value(alias = "button")]
    Buttons,
    #[value(alias = "keyboard")]
    Keyboards,
    #[value(alias = "inline-button")]
    InlineButtons,
    #[value(alias = "inline-keyboard")]
    InlineKeyboards,
    #[value(alias = "inline-result")]
    InlineResults,
}

impl From<Class> for ContentClass {
    fn from(class: Class) -> Self {
        match class {
            Class::Strings => ContentClass::Strings,
            Class::Templates => ContentClass::Templates,
            Class::Buttons => ContentClass::Buttons,
            Class::Keyboards => ContentClass::Keyboards,
            Class::InlineButtons => ContentClass::InlineButtons,
            Class::InlineKeyboards => ContentClass::InlineKeyboards,
            Class::InlineResults => ContentClass::InlineResults,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
