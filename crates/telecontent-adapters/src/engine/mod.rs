//! Template engine backends.

mod functions;
mod hbs;
mod text;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::warn;

use telecontent_core::{application::TemplateEngine, error::ContentResult};

pub use functions::{FunctionTable, HelperError, MAX_REPEAT_LEN, jsq};
pub use hbs::HandlebarsEngine;
pub use text::TextEngine;

/// Available backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Text,
    Handlebars,
}

impl EngineKind {
    pub const ALL: [EngineKind; 2] = [Self::Text, Self::Handlebars];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Handlebars => "handlebars",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "jinja" | "minijinja" => Ok(Self::Text),
            "handlebars" | "hbs" => Ok(Self::Handlebars),
            _ => Err(format!(
                "unknown engine '{s}' (expected one of: text, handlebars)"
            )),
        }
    }
}

/// Engine prototype for `kind`.
///
/// `delimiters` only applies to the text backend; handlebars syntax is fixed.
pub fn build_engine(
    kind: EngineKind,
    delimiters: Option<(&str, &str)>,
) -> ContentResult<Box<dyn TemplateEngine>> {
    match kind {
        EngineKind::Text => {
            let engine = match delimiters {
                Some((left, right)) => TextEngine::with_delimiters(left, right)?,
                None => TextEngine::new(),
            };
            Ok(Box::new(engine))
        }
        EngineKind::Handlebars => {
            if delimiters.is_some() {
                warn!(engine = %kind, "custom delimiters are ignored");
            }
            Ok(Box::new(HandlebarsEngine::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_engine_names() {
        assert_eq!("text".parse::<EngineKind>().unwrap(), EngineKind::Text);
        assert_eq!("HBS".parse::<EngineKind>().unwrap(), EngineKind::Handlebars);
        assert!("mustache".parse::<EngineKind>().is_err());
    }

    #[test]
    fn builds_each_backend() {
        for kind in EngineKind::ALL {
            let engine = build_engine(kind, None).unwrap();
            assert_eq!(engine.name(), kind.as_str());
            assert!(engine.namespace().is_none());
        }
    }

    #[test]
    fn text_backend_honours_delimiters() {
        let prototype = build_engine(EngineKind::Text, Some(("<<", ">>"))).unwrap();
        let mut ns = prototype.init("t", None);
        ns.parse("k", "<< 1 + 1 >>").unwrap();
        assert_eq!(ns.execute("k", None).unwrap(), "2");
    }
}
