use crate::error::TranscribeError;
use crate::options::TranscribeOptions;
use crate::types::{Alternative, Channel, SearchHit, Transcript, TranscriptionMetadata, TranscriptionReceipt};
use log::error;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct RawResponse {
    metadata: TranscriptionMetadata,
    results: RawResults,
}

#[derive(Deserialize)]
struct RawResults {
    channels: Vec<RawChannel>,
}

#[derive(Deserialize)]
struct RawChannel {
    #[serde(default)]
    search: Option<Vec<SearchHit>>,
    alternatives: Vec<Alternative>,
}

/// Decodes one complete response body into the shape implied by `options`.
///
/// The options the request was built from are required: whether each channel
/// keeps its ranked-alternatives array and its search hits is decided by the
/// `alternatives_explicit` and `search_explicit` flags, not by the payload.
pub fn decode(options: &TranscribeOptions, body: &str) -> Result<Transcript, TranscribeError> {
    let value = parse_body(body)?;

    let raw: RawResponse = serde_json::from_value(value)
        .map_err(|e| TranscribeError::Decode(format!("unexpected response shape: {e}")))?;

    let mut channels = Vec::with_capacity(raw.results.channels.len());
    for raw_channel in raw.results.channels {
        channels.push(shape_channel(options, raw_channel)?);
    }

    Ok(Transcript {
        metadata: raw.metadata,
        channels,
    })
}

/// Decodes a callback-submission acknowledgment. Only the request id is
/// extracted; the transcript itself arrives out-of-band.
pub fn decode_receipt(body: &str) -> Result<TranscriptionReceipt, TranscribeError> {
    let value = parse_body(body)?;
    serde_json::from_value(value)
        .map_err(|e| TranscribeError::Decode(format!("unexpected acknowledgment shape: {e}")))
}

fn parse_body(body: &str) -> Result<Value, TranscribeError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        error!("transcription response is not valid JSON: {e}");
        TranscribeError::Decode(format!("invalid JSON: {e}"))
    })?;

    // The remote error format is opaque; the whole body is the reason.
    if value.get("error").is_some() {
        return Err(TranscribeError::Service(body.to_string()));
    }
    Ok(value)
}

fn shape_channel(
    options: &TranscribeOptions,
    raw: RawChannel,
) -> Result<Channel, TranscribeError> {
    let search = if options.search_explicit {
        raw.search
    } else {
        None
    };

    if options.alternatives_explicit {
        return Ok(Channel::Ranked {
            alternatives: raw.alternatives,
            search,
        });
    }

    let best = raw
        .alternatives
        .into_iter()
        .next()
        .ok_or_else(|| TranscribeError::Decode("channel carries no alternatives".to_string()))?;

    Ok(Channel::Best {
        transcript: best.transcript,
        confidence: best.confidence,
        words: best.words,
        search,
    })
}
