use dg_listen::{AudioSource, Credentials, DeepgramClient, TranscribeOptions};

// Runs only when DG_KEY / DG_SECRET / DG_TEST_AUDIO_URL are set.
#[tokio::test]
async fn transcribe_url_integration() {
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(_) => return,
    };
    let audio_url = match std::env::var("DG_TEST_AUDIO_URL") {
        Ok(url) => url,
        Err(_) => return,
    };

    let client = DeepgramClient::new(credentials).unwrap();
    let options = TranscribeOptions::new()
        .with_punctuation()
        .with_diarization();

    let out = client
        .transcribe(&options, &AudioSource::url(audio_url))
        .await;
    assert!(out.is_ok());
}
