use dg_listen::config::ClientConfig;
use dg_listen::{Credentials, TranscribeError};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn config_defaults() {
    env::remove_var("DEEPGRAM_HOST");
    env::remove_var("DEEPGRAM_TIMEOUT");

    let config = ClientConfig::from_env();
    assert_eq!(config.host, None);
    assert_eq!(config.timeout_secs, 30);
}

#[test]
#[serial]
fn config_reads_overrides() {
    env::set_var("DEEPGRAM_HOST", "http://127.0.0.1:9");
    env::set_var("DEEPGRAM_TIMEOUT", "5");

    let config = ClientConfig::from_env();
    assert_eq!(config.host.as_deref(), Some("http://127.0.0.1:9"));
    assert_eq!(config.timeout_secs, 5);

    env::remove_var("DEEPGRAM_HOST");
    env::remove_var("DEEPGRAM_TIMEOUT");
}

#[test]
#[serial]
fn config_falls_back_on_unparseable_timeout() {
    env::set_var("DEEPGRAM_TIMEOUT", "soon");
    assert_eq!(ClientConfig::from_env().timeout_secs, 30);
    env::remove_var("DEEPGRAM_TIMEOUT");
}

#[test]
#[serial]
fn credentials_require_both_variables() {
    env::remove_var("DG_KEY");
    env::remove_var("DG_SECRET");
    assert!(matches!(
        Credentials::from_env(),
        Err(TranscribeError::Credentials(_))
    ));

    env::set_var("DG_KEY", "key");
    assert!(matches!(
        Credentials::from_env(),
        Err(TranscribeError::Credentials(_))
    ));

    env::set_var("DG_SECRET", "secret");
    let credentials = Credentials::from_env().unwrap();
    assert_eq!(credentials.api_key, "key");
    assert_eq!(credentials.api_secret, "secret");

    env::remove_var("DG_KEY");
    env::remove_var("DG_SECRET");
}
