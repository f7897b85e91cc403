//! Telecontent Core - Hexagonal Architecture Implementation
//!
//! Resolves keyed, templated bot content (strings, buttons, keyboards,
//! inline query results) into wire objects at message-send time.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │       telecontent-cli / bot code        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │              ContentStore               │
//! │   string · keyboard · inline_result …   │
//! └──────────────────┬──────────────────────┘
//!                    │ renders through
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   TemplateNamespace ─► TemplateEngine   │
//! │            (port, trait)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  telecontent-adapters (Text, Handlebars) │
//! └─────────────────────────────────────────┘
//!
//!   rendered JSON ─► domain::dispatch ─► InlineResult (12 variants)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use telecontent_adapters::TextEngine;
//! use telecontent_core::prelude::*;
//!
//! let store = ContentStore::from_json(&bytes, &TextEngine::new())?;
//! let hello = store.string("hello", Some(&serde_json::json!({"name": "Ann"})));
//! let menu = store.keyboard("main");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ContentClass, ContentConfig, ContentStore, TemplateEngine, TemplateNamespace,
    };
    pub use crate::domain::{
        InlineButton, InlineResult, KeyboardOptions, QueryResult, ReplyButton, ReplyMarkup,
        ResultKind,
    };
    pub use crate::error::{ContentError, ContentResult, Severity};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
