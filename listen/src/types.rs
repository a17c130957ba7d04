use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// One transcribed word with its time interval in seconds.
///
/// `speaker` is present when diarization was requested, `punctuated_word`
/// when punctuation was. Words arrive in non-decreasing `start` order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Word {
    pub word: String,
    pub start: f32,
    pub end: f32,
    pub confidence: f32,
    pub speaker: Option<u32>,
    pub punctuated_word: Option<String>,
}

/// One candidate transcription of a channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alternative {
    pub transcript: String,
    pub confidence: f32,
    pub words: Vec<Word>,
}

/// One search query and its hits, passed through uninterpreted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    pub query: String,
    pub hits: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranscriptionMetadata {
    pub request_id: String,
    pub transaction_key: String,
    pub sha256: String,
    pub created: String,
    pub duration: f32,
    pub channels: u32,
}

/// One decoded audio channel.
///
/// The variant is fixed by the options the request was built from:
/// `Ranked` when alternatives were explicitly requested, `Best` otherwise,
/// with `search` populated only when search terms were set.
#[derive(Debug, Clone, PartialEq)]
pub enum Channel {
    Best {
        transcript: String,
        confidence: f32,
        words: Vec<Word>,
        search: Option<Vec<SearchHit>>,
    },
    Ranked {
        alternatives: Vec<Alternative>,
        search: Option<Vec<SearchHit>>,
    },
}

impl Channel {
    /// Words of the best transcription for this channel.
    pub fn words(&self) -> &[Word] {
        match self {
            Channel::Best { words, .. } => words,
            Channel::Ranked { alternatives, .. } => alternatives
                .first()
                .map(|alternative| alternative.words.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Transcript of the best transcription for this channel.
    pub fn transcript(&self) -> &str {
        match self {
            Channel::Best { transcript, .. } => transcript,
            Channel::Ranked { alternatives, .. } => alternatives
                .first()
                .map(|alternative| alternative.transcript.as_str())
                .unwrap_or(""),
        }
    }
}

/// A decoded transcription response.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub metadata: TranscriptionMetadata,
    pub channels: Vec<Channel>,
}

/// Acknowledgment of a callback submission. The transcript itself is
/// delivered later to the callback listener; the request id is the only
/// correlation handle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranscriptionReceipt {
    pub request_id: String,
}

/// Audio payload for one transcription request. The variant determines both
/// the Content-Type header and the payload encoding.
#[derive(Debug, Clone)]
pub enum AudioSource {
    /// A URL the service fetches itself; sent as a JSON envelope.
    Url(String),
    /// Raw audio bytes sent directly as the request body.
    Buffer { bytes: Bytes, mime_type: String },
}

impl AudioSource {
    pub fn url(url: impl Into<String>) -> Self {
        AudioSource::Url(url.into())
    }

    pub fn buffer(bytes: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        AudioSource::Buffer {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Buffer source with the mime type guessed from the file extension.
    /// Unknown extensions fall back to `application/octet-stream`.
    pub fn buffer_from_path(path: impl AsRef<Path>, bytes: impl Into<Bytes>) -> Self {
        let mime_type = mime_guess::from_path(path.as_ref())
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        AudioSource::Buffer {
            bytes: bytes.into(),
            mime_type,
        }
    }

    /// Content-Type header for the outbound request.
    pub fn content_type(&self) -> &str {
        match self {
            AudioSource::Url(_) => "application/json",
            AudioSource::Buffer { mime_type, .. } => mime_type,
        }
    }
}
