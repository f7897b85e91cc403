//! Core domain layer for Telecontent.
//!
//! Pure data: the wire entities content resolves into, and the decoder that
//! routes rendered inline results to their payload type. No templating and
//! no I/O happen here.

pub mod dispatch;
pub mod entities;

// Re-exports for convenience
pub use dispatch::{decode_kind, decode_result};
pub use entities::{
    button::{InlineButton, ReplyButton},
    markup::{KeyboardOptions, ReplyMarkup},
    result::{
        ArticleResult, AudioResult, ContactResult, DocumentResult, GifResult, InlineResult,
        LocationResult, Mpeg4GifResult, PhotoResult, QueryResult, ResultBase, ResultKind,
        StickerResult, VenueResult, VideoResult, VoiceResult,
    },
};
