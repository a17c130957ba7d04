use crate::options::TranscribeOptions;

/// Path of the pre-recorded transcription endpoint.
pub const LISTEN_PATH: &str = "/v2/listen";

/// Builds the route for one transcription request.
///
/// Parameter order is fixed regardless of the order the options were set in,
/// so equal options always produce the same route. `alternatives` is only
/// emitted when the count exceeds the default of 1; the opt-in into the
/// ranked response shape is carried by the options value, not the route.
pub fn listen_route(options: &TranscribeOptions) -> String {
    let mut params: Vec<String> = Vec::new();
    if options.punctuate {
        params.push("punctuate=true".to_string());
    }
    if options.diarize {
        params.push("diarize=true".to_string());
    }
    if options.alternatives > 1 {
        params.push(format!("alternatives={}", options.alternatives));
    }
    if options.profanity_filter {
        params.push("profanity_filter=true".to_string());
    }
    if options.redact_numbers {
        params.push("redact=numbers".to_string());
    }
    if options.redact_ssn {
        params.push("redact=ssn".to_string());
    }
    if options.redact_pci {
        params.push("redact=pci".to_string());
    }
    for keyword in &options.keywords {
        let word = urlencoding::encode(&keyword.word);
        match keyword.boost {
            Some(boost) => params.push(format!("keywords={word}:{boost}")),
            None => params.push(format!("keywords={word}")),
        }
    }
    for term in &options.search {
        params.push(format!("search={}", urlencoding::encode(term)));
    }
    if let Some(callback) = &options.callback {
        params.push(format!("callback={}", urlencoding::encode(callback)));
    }

    if params.is_empty() {
        LISTEN_PATH.to_string()
    } else {
        format!("{}?{}", LISTEN_PATH, params.join("&"))
    }
}
