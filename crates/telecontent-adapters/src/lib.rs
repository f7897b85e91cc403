//! Infrastructure adapters for Telecontent.
//!
//! This crate implements the ports defined in
//! `telecontent-core::application::ports`. It contains the template backends
//! and all filesystem access.

pub mod engine;
pub mod loader;
pub mod template_dir;

// Re-export commonly used adapters
pub use engine::{EngineKind, FunctionTable, HandlebarsEngine, TextEngine, build_engine};
pub use loader::ContentLoader;
