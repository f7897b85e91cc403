//! Helper functions callable from text templates.
//!
//! The table is immutable once built and shared between every namespace a
//! [`TextEngine`](super::TextEngine) creates.

use std::{
    collections::BTreeMap,
    sync::{Arc, LazyLock},
};

use minijinja::{Error as TemplateError, ErrorKind, Value};
use thiserror::Error;

static BUILTIN: LazyLock<Arc<FunctionTable>> = LazyLock::new(|| Arc::new(FunctionTable::defaults()));

/// Named callables registered as globals in every text namespace.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    entries: BTreeMap<String, Value>,
}

impl FunctionTable {
    /// A table without any function.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Process-wide table of the default helpers:
    ///
    /// | name           | result                                  |
    /// |----------------|-----------------------------------------|
    /// | `add(a, b)`    | `a + b`, error on `i64` overflow        |
    /// | `sub(a, b)`    | `a - b`, error on `i64` overflow        |
    /// | `jsq(s)`       | `s` with `\` and `"` escaped for JSON   |
    /// | `title(s)`     | `s` with every letter upper-cased       |
    /// | `repeat(s, n)` | `s` repeated `n` times, at most [`MAX_REPEAT_LEN`] bytes |
    pub fn builtin() -> Arc<FunctionTable> {
        Arc::clone(&BUILTIN)
    }

    fn defaults() -> Self {
        Self::empty()
            .with(
                "add",
                Value::from_function(|a: i64, b: i64| add(a, b).map_err(template_error)),
            )
            .with(
                "sub",
                Value::from_function(|a: i64, b: i64| sub(a, b).map_err(template_error)),
            )
            .with("jsq", Value::from_function(|s: String| jsq(&s)))
            .with("title", Value::from_function(|s: String| s.to_uppercase()))
            .with(
                "repeat",
                Value::from_function(|s: String, n: u64| repeat(&s, n).map_err(template_error)),
            )
    }

    /// Add or replace a function. Build one with [`Value::from_function`].
    pub fn with(mut self, name: impl Into<String>, function: Value) -> Self {
        self.entries.insert(name.into(), function);
        self
    }

    /// Copy of `self` with every entry of `other` layered on top.
    pub fn merged(&self, other: &FunctionTable) -> Self {
        let mut merged = self.clone();
        merged.entries.extend(
            other
                .entries
                .iter()
                .map(|(name, function)| (name.clone(), function.clone())),
        );
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, function)| (name.as_str(), function))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Largest string `repeat` may produce, in bytes.
pub const MAX_REPEAT_LEN: usize = 1 << 20;

/// Helper failures caused by the render argument. Both backends report them
/// as render errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelperError {
    #[error("{op}({a}, {b}) overflows a 64-bit integer")]
    Overflow { op: &'static str, a: i64, b: i64 },

    #[error("repeat would produce {bytes} bytes, limit is {limit}", limit = MAX_REPEAT_LEN)]
    TooLong { bytes: u128 },
}

pub fn add(a: i64, b: i64) -> Result<i64, HelperError> {
    a.checked_add(b).ok_or(HelperError::Overflow { op: "add", a, b })
}

pub fn sub(a: i64, b: i64) -> Result<i64, HelperError> {
    a.checked_sub(b).ok_or(HelperError::Overflow { op: "sub", a, b })
}

/// `s` repeated `n` times, refused before allocating when the result would
/// exceed [`MAX_REPEAT_LEN`].
pub fn repeat(s: &str, n: u64) -> Result<String, HelperError> {
    let bytes = s.len() as u128 * u128::from(n);
    match usize::try_from(n) {
        Ok(n) if bytes <= MAX_REPEAT_LEN as u128 => Ok(s.repeat(n)),
        _ => Err(HelperError::TooLong { bytes }),
    }
}

fn template_error(err: HelperError) -> TemplateError {
    TemplateError::new(ErrorKind::InvalidOperation, err.to_string())
}

/// Escape `s` for embedding inside a double-quoted JSON string.
pub fn jsq(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsq_escapes_backslash_before_quote() {
        assert_eq!(jsq(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(jsq(r"C:\bot"), r"C:\\bot");
        assert_eq!(jsq(r#"\""#), r#"\\\""#);
    }

    #[test]
    fn arithmetic_overflow_is_an_error() {
        assert_eq!(add(2, 3), Ok(5));
        assert_eq!(sub(2, 3), Ok(-1));
        assert_eq!(
            add(i64::MAX, 1),
            Err(HelperError::Overflow { op: "add", a: i64::MAX, b: 1 })
        );
        assert!(sub(i64::MIN, 1).is_err());
    }

    #[test]
    fn repeat_is_bounded() {
        assert_eq!(repeat("ab", 3).unwrap(), "ababab");
        assert_eq!(repeat("", u64::MAX).unwrap(), "");
        assert_eq!(repeat("x", MAX_REPEAT_LEN as u64).unwrap().len(), MAX_REPEAT_LEN);
        assert!(matches!(
            repeat("x", MAX_REPEAT_LEN as u64 + 1),
            Err(HelperError::TooLong { .. })
        ));
        assert!(matches!(repeat("ab", u64::MAX), Err(HelperError::TooLong { .. })));
    }

    #[test]
    fn builtin_table_is_shared() {
        let a = FunctionTable::builtin();
        let b = FunctionTable::builtin();
        assert!(Arc::ptr_eq(&a, &b));
        for name in ["add", "sub", "jsq", "title", "repeat"] {
            assert!(a.contains(name), "missing {name}");
        }
    }

    #[test]
    fn merged_overrides_by_name() {
        let custom = FunctionTable::empty()
            .with("add", Value::from_function(|a: i64, b: i64| a * b))
            .with("shout", Value::from_function(|s: String| format!("{s}!")));

        let merged = FunctionTable::builtin().merged(&custom);
        assert_eq!(merged.len(), 6);
        assert!(merged.contains("shout"));
        // The shared table is untouched.
        assert!(!FunctionTable::builtin().contains("shout"));
    }
}
