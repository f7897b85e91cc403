//! Wire entities produced by content resolution.

pub mod button;
pub mod markup;
pub mod result;
