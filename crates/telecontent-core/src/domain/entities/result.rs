//! Inline query results.
//!
//! Twelve payload shapes share one capability, [`QueryResult`], and are
//! gathered in the closed sum type [`InlineResult`]. The `type` field of the
//! wire format is the discriminator; see [`crate::domain::dispatch`] for the
//! decode side.

use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::markup::ReplyMarkup;

/// The closed set of result kinds, one per `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Article,
    Audio,
    Contact,
    Document,
    Gif,
    Location,
    Mpeg4Gif,
    Photo,
    Venue,
    Video,
    Voice,
    Sticker,
}

impl ResultKind {
    pub const ALL: [ResultKind; 12] = [
        Self::Article,
        Self::Audio,
        Self::Contact,
        Self::Document,
        Self::Gif,
        Self::Location,
        Self::Mpeg4Gif,
        Self::Photo,
        Self::Venue,
        Self::Video,
        Self::Voice,
        Self::Sticker,
    ];

    /// Wire tag of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Audio => "audio",
            Self::Contact => "contact",
            Self::Document => "document",
            Self::Gif => "gif",
            Self::Location => "location",
            Self::Mpeg4Gif => "mpeg4_gif",
            Self::Photo => "photo",
            Self::Venue => "venue",
            Self::Video => "video",
            Self::Voice => "voice",
            Self::Sticker => "sticker",
        }
    }

    /// Look up a kind by wire tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields common to every result payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultBase {
    /// Unique per answer; templates usually leave it for the caller to set.
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,

    /// Passed through untouched.
    #[serde(
        default,
        rename = "input_message_content",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<serde_json::Value>,
}

/// Capability shared by the twelve result payloads.
///
/// Identity only: each payload knows its kind, exposes the shared base, and
/// can be lifted into [`InlineResult`].
pub trait QueryResult: Serialize + DeserializeOwned {
    const KIND: ResultKind;

    fn base(&self) -> &ResultBase;

    fn base_mut(&mut self) -> &mut ResultBase;

    fn into_result(self) -> InlineResult;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleResult {
    #[serde(flatten)]
    pub base: ResultBase,
    pub title: String,
    #[serde(default, rename = "message_text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hide_url: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioResult {
    #[serde(flatten)]
    pub base: ResultBase,
    pub audio_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(default, rename = "audio_duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResult {
    #[serde(flatten)]
    pub base: ResultBase,
    pub phone_number: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    #[serde(flatten)]
    pub base: ResultBase,
    pub title: String,
    pub document_url: String,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GifResult {
    #[serde(flatten)]
    pub base: ResultBase,
    pub gif_url: String,
    pub thumb_url: String,
    #[serde(default, rename = "gif_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, rename = "gif_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, rename = "gif_duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    #[serde(flatten)]
    pub base: ResultBase,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mpeg4GifResult {
    #[serde(flatten)]
    pub base: ResultBase,
    #[serde(rename = "mpeg4_url")]
    pub url: String,
    pub thumb_url: String,
    #[serde(default, rename = "mpeg4_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, rename = "mpeg4_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, rename = "mpeg4_duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoResult {
    #[serde(flatten)]
    pub base: ResultBase,
    #[serde(rename = "photo_url")]
    pub url: String,
    pub thumb_url: String,
    #[serde(default, rename = "photo_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, rename = "photo_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueResult {
    #[serde(flatten)]
    pub base: ResultBase,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoResult {
    #[serde(flatten)]
    pub base: ResultBase,
    #[serde(rename = "video_url")]
    pub url: String,
    pub mime_type: String,
    pub thumb_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, rename = "video_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, rename = "video_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, rename = "video_duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceResult {
    #[serde(flatten)]
    pub base: ResultBase,
    #[serde(rename = "voice_url")]
    pub url: String,
    pub title: String,
    #[serde(default, rename = "voice_duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A cached sticker, referenced by file id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerResult {
    #[serde(flatten)]
    pub base: ResultBase,
    #[serde(rename = "sticker_file_id")]
    pub file_id: String,
}

/// One of the twelve inline query result payloads.
///
/// Serializes with its `type` tag, ready to be sent in an inline query answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineResult {
    Article(ArticleResult),
    Audio(AudioResult),
    Contact(ContactResult),
    Document(DocumentResult),
    Gif(GifResult),
    Location(LocationResult),
    Mpeg4Gif(Mpeg4GifResult),
    Photo(PhotoResult),
    Venue(VenueResult),
    Video(VideoResult),
    Voice(VoiceResult),
    Sticker(StickerResult),
}

macro_rules! query_result {
    ($($payload:ident => $variant:ident),+ $(,)?) => {
        $(
            impl QueryResult for $payload {
                const KIND: ResultKind = ResultKind::$variant;

                fn base(&self) -> &ResultBase {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut ResultBase {
                    &mut self.base
                }

                fn into_result(self) -> InlineResult {
                    InlineResult::$variant(self)
                }
            }
        )+

        impl InlineResult {
            pub fn kind(&self) -> ResultKind {
                match self {
                    $(Self::$variant(_) => ResultKind::$variant,)+
                }
            }

            pub fn base(&self) -> &ResultBase {
                match self {
                    $(Self::$variant(r) => r.base(),)+
                }
            }

            pub fn base_mut(&mut self) -> &mut ResultBase {
                match self {
                    $(Self::$variant(r) => r.base_mut(),)+
                }
            }
        }
    };
}

query_result! {
    ArticleResult => Article,
    AudioResult => Audio,
    ContactResult => Contact,
    DocumentResult => Document,
    GifResult => Gif,
    LocationResult => Location,
    Mpeg4GifResult => Mpeg4Gif,
    PhotoResult => Photo,
    VenueResult => Venue,
    VideoResult => Video,
    VoiceResult => Voice,
    StickerResult => Sticker,
}

impl InlineResult {
    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// Set the answer-unique id, typically just before answering a query.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.base_mut().id = id.into();
    }
}
