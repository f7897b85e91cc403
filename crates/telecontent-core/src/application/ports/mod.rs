//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `telecontent-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateEngine`: template compilation and keyed rendering

pub mod engine;

pub use engine::{TEMPLATE_SUFFIX, TemplateEngine};
