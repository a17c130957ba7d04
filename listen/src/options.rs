/// Default host of the transcription endpoint.
pub const DEFAULT_HOST: &str = "brain.deepgram.com";

/// A keyword to boost during transcription, with an optional boost weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub word: String,
    pub boost: Option<f64>,
}

/// Feature toggles for one transcription request.
///
/// Values are immutable: every `with_*` method consumes the value and returns
/// a new one with a single field changed, so a base configuration can be
/// cloned and branched without aliasing hazards.
///
/// `alternatives_explicit` and `search_explicit` record that the caller opted
/// into the ranked-alternatives and search-hit response shapes; the decoder
/// consults them instead of guessing from the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscribeOptions {
    pub punctuate: bool,
    pub diarize: bool,
    pub alternatives: u32,
    pub alternatives_explicit: bool,
    pub profanity_filter: bool,
    pub redact_numbers: bool,
    pub redact_ssn: bool,
    pub redact_pci: bool,
    pub keywords: Vec<Keyword>,
    pub search: Vec<String>,
    pub search_explicit: bool,
    pub callback: Option<String>,
    pub host: String,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            punctuate: false,
            diarize: false,
            alternatives: 1,
            alternatives_explicit: false,
            profanity_filter: false,
            redact_numbers: false,
            redact_ssn: false,
            redact_pci: false,
            keywords: Vec::new(),
            search: Vec::new(),
            search_explicit: false,
            callback: None,
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl TranscribeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag each word with the speaker who uttered it.
    pub fn with_diarization(mut self) -> Self {
        self.diarize = true;
        self
    }

    /// Add punctuation and capitalization to the transcript.
    pub fn with_punctuation(mut self) -> Self {
        self.punctuate = true;
        self
    }

    /// Request up to `n` candidate transcriptions per channel.
    ///
    /// The count is rounded and clamped to at least 1. Any call opts the
    /// response into the ranked-alternatives shape, even when the effective
    /// count stays 1.
    pub fn with_alternatives(mut self, n: f64) -> Self {
        self.alternatives = n.round().max(1.0) as u32;
        self.alternatives_explicit = true;
        self
    }

    pub fn with_profanity_filter(mut self) -> Self {
        self.profanity_filter = true;
        self
    }

    pub fn with_number_redaction(mut self) -> Self {
        self.redact_numbers = true;
        self
    }

    pub fn with_ssn_redaction(mut self) -> Self {
        self.redact_ssn = true;
        self
    }

    pub fn with_pci_redaction(mut self) -> Self {
        self.redact_pci = true;
        self
    }

    pub fn with_keyword(self, word: impl Into<String>) -> Self {
        self.push_keyword(Keyword {
            word: word.into(),
            boost: None,
        })
    }

    pub fn with_boosted_keyword(self, word: impl Into<String>, boost: f64) -> Self {
        self.push_keyword(Keyword {
            word: word.into(),
            boost: Some(boost),
        })
    }

    /// Append keywords, keeping the ones added by earlier calls.
    pub fn with_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(words.into_iter().map(|word| Keyword {
            word: word.into(),
            boost: None,
        }));
        self
    }

    /// Append search terms and opt the response into the search-hit shape.
    pub fn with_search<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search.extend(terms.into_iter().map(Into::into));
        self.search_explicit = true;
        self
    }

    pub fn with_callback(mut self, url: impl Into<String>) -> Self {
        self.callback = Some(url.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    fn push_keyword(mut self, keyword: Keyword) -> Self {
        self.keywords.push(keyword);
        self
    }
}
