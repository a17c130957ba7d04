//! Client for the Deepgram pre-recorded transcription API.
//!
//! A request is described by an immutable [`TranscribeOptions`] value built
//! through fluent `with_*` calls. The same value that built the request is
//! required again to decode the response: whether the ranked-alternatives
//! array and the search hits survive decoding is decided by the options, not
//! by the payload.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod options;
pub mod route;
pub mod types;

pub use client::{Credentials, DeepgramClient};
pub use decode::{decode, decode_receipt};
pub use error::TranscribeError;
pub use options::{Keyword, TranscribeOptions};
pub use types::{
    Alternative, AudioSource, Channel, SearchHit, Transcript, TranscriptionMetadata,
    TranscriptionReceipt, Word,
};
