//! Discriminator-based decoding of rendered inline results.
//!
//! Decoding happens in two phases: only the `type` field is read first, then
//! the full document is decoded into the payload of the matching kind. There
//! is no fallback between kinds.

use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    domain::entities::result::{
        ArticleResult, AudioResult, ContactResult, DocumentResult, GifResult, InlineResult,
        LocationResult, Mpeg4GifResult, PhotoResult, QueryResult, ResultKind, StickerResult,
        VenueResult, VideoResult, VoiceResult,
    },
    error::{ContentError, ContentResult},
};

/// Decode a rendered JSON document into one of the twelve result variants.
///
/// Returns `Ok(None)` when the `type` tag is absent or names no known kind.
///
/// # Errors
///
/// [`ContentError::Decode`] when `raw` is not a JSON object or its `type`
/// is not a string, or when the tag is recognised but the payload does not
/// fit that kind. The error target names the variant.
pub fn decode_result(raw: &str) -> ContentResult<Option<InlineResult>> {
    let invalid = |reason: String| ContentError::Decode {
        target: "inline result".into(),
        reason,
    };

    let document: Map<String, Value> =
        serde_json::from_str(raw).map_err(|e| invalid(e.to_string()))?;
    let tag = match document.get("type") {
        None | Some(Value::Null) => None,
        Some(Value::String(tag)) => Some(tag.as_str()),
        Some(other) => return Err(invalid(format!("`type` must be a string, got {other}"))),
    };

    let Some(kind) = tag.and_then(ResultKind::from_tag) else {
        debug!(?tag, "unknown inline result kind, dropping");
        return Ok(None);
    };

    decode_kind(kind, raw).map(Some)
}

/// Decode `raw` as the payload of a known `kind`.
pub fn decode_kind(kind: ResultKind, raw: &str) -> ContentResult<InlineResult> {
    match kind {
        ResultKind::Article => decode_as::<ArticleResult>(raw),
        ResultKind::Audio => decode_as::<AudioResult>(raw),
        ResultKind::Contact => decode_as::<ContactResult>(raw),
        ResultKind::Document => decode_as::<DocumentResult>(raw),
        ResultKind::Gif => decode_as::<GifResult>(raw),
        ResultKind::Location => decode_as::<LocationResult>(raw),
        ResultKind::Mpeg4Gif => decode_as::<Mpeg4GifResult>(raw),
        ResultKind::Photo => decode_as::<PhotoResult>(raw),
        ResultKind::Venue => decode_as::<VenueResult>(raw),
        ResultKind::Video => decode_as::<VideoResult>(raw),
        ResultKind::Voice => decode_as::<VoiceResult>(raw),
        ResultKind::Sticker => decode_as::<StickerResult>(raw),
    }
}

fn decode_as<T: QueryResult>(raw: &str) -> ContentResult<InlineResult> {
    serde_json::from_str::<T>(raw)
        .map(QueryResult::into_result)
        .map_err(|e| ContentError::Decode {
            target: format!("{} result", T::KIND),
            reason: e.to_string(),
        })
}
