//! Application layer for Telecontent.
//!
//! This layer contains:
//! - **Ports**: the [`TemplateEngine`] trait implemented by template backends
//! - **Namespaces**: keyed collections of compiled templates
//! - **Config**: the raw content configuration model
//! - **Services**: [`ContentStore`], the resolution API used by message-sending code

pub mod config;
pub mod namespace;
pub mod ports;
pub mod services;

pub use config::{ContentConfig, KeyboardLayout, RawTemplate};
pub use namespace::TemplateNamespace;
pub use ports::{TEMPLATE_SUFFIX, TemplateEngine};
pub use services::{ContentClass, ContentStore, DanglingReference};
