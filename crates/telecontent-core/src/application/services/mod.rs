//! Application services.

pub mod content_store;

pub use content_store::{ContentClass, ContentStore, DanglingReference};
