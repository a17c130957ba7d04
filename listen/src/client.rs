use crate::config::ClientConfig;
use crate::decode::{decode, decode_receipt};
use crate::error::{from_reqwest_error, TranscribeError};
use crate::options::TranscribeOptions;
use crate::route::listen_route;
use crate::types::{AudioSource, Transcript, TranscriptionReceipt};
use base64::Engine;
use bytes::Bytes;
use log::{debug, trace};
use url::Url;

/// Credentials for the transcription endpoint, sent as Basic auth.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Reads `DG_KEY` / `DG_SECRET` from the environment.
    pub fn from_env() -> Result<Self, TranscribeError> {
        let api_key = std::env::var("DG_KEY")
            .map_err(|_| TranscribeError::Credentials("DG_KEY not set".to_string()))?;
        let api_secret = std::env::var("DG_SECRET")
            .map_err(|_| TranscribeError::Credentials("DG_SECRET not set".to_string()))?;
        Ok(Self {
            api_key,
            api_secret,
        })
    }

    fn basic_auth(&self) -> String {
        let raw = format!("{}:{}", self.api_key, self.api_secret);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(raw)
        )
    }
}

/// Client for the pre-recorded transcription endpoint. One HTTP exchange per
/// call; safe to share across tasks.
pub struct DeepgramClient {
    credentials: Credentials,
    config: ClientConfig,
    http: reqwest::Client,
}

impl DeepgramClient {
    pub fn new(credentials: Credentials) -> Result<Self, TranscribeError> {
        Self::with_config(credentials, ClientConfig::from_env())
    }

    pub fn with_config(
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self, TranscribeError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| TranscribeError::Network(format!("failed to build http client: {e}")))?;
        Ok(Self {
            credentials,
            config,
            http,
        })
    }

    /// Sends one transcription request and buffers the complete response body
    /// before decoding it into the shape implied by `options`.
    pub async fn transcribe(
        &self,
        options: &TranscribeOptions,
        source: &AudioSource,
    ) -> Result<Transcript, TranscribeError> {
        let body = self.exchange(options, source).await?;
        decode(options, &body)
    }

    /// Submits a transcription whose result is delivered later to `callback`.
    ///
    /// Resolves as soon as the submission is acknowledged. The callback
    /// listener must run the delivered body through [`decode`] with the same
    /// options to get the same shape semantics as the synchronous path.
    pub async fn transcribe_with_callback(
        &self,
        options: &TranscribeOptions,
        source: &AudioSource,
        callback: &Url,
    ) -> Result<TranscriptionReceipt, TranscribeError> {
        let options = options.clone().with_callback(callback.as_str());
        let body = self.exchange(&options, source).await?;
        decode_receipt(&body)
    }

    async fn exchange(
        &self,
        options: &TranscribeOptions,
        source: &AudioSource,
    ) -> Result<String, TranscribeError> {
        let url = format!("{}{}", self.base_url(options), listen_route(options));
        trace!("POST {url}");

        let payload: Bytes = match source {
            AudioSource::Url(audio_url) => {
                Bytes::from(serde_json::json!({ "url": audio_url }).to_string())
            }
            AudioSource::Buffer { bytes, .. } => bytes.clone(),
        };

        let response = self
            .http
            .post(&url)
            .header("Authorization", self.credentials.basic_auth())
            .header("Content-Type", source.content_type())
            .body(payload)
            .send()
            .await
            .map_err(|e| from_reqwest_error("transcription request", e))?;

        // Remote errors are recognized by the body, not the status line, so
        // the exchange funnels into the decoder either way.
        debug!("transcription response status {}", response.status());
        response
            .text()
            .await
            .map_err(|e| from_reqwest_error("reading transcription response", e))
    }

    fn base_url(&self, options: &TranscribeOptions) -> String {
        let host = self.config.host.as_deref().unwrap_or(&options.host);
        if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }
}
