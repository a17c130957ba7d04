use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment-level client settings.
///
/// `host` overrides the host carried in the request options when set;
/// unparseable timeout values fall back to the default.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("DEEPGRAM_HOST").ok(),
            timeout_secs: std::env::var("DEEPGRAM_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
