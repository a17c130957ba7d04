use dg_listen::{Keyword, TranscribeOptions};

#[test]
fn alternatives_count_is_normalized_never_rejected() {
    assert_eq!(TranscribeOptions::new().with_alternatives(0.4).alternatives, 1);
    assert_eq!(TranscribeOptions::new().with_alternatives(-3.0).alternatives, 1);
    assert_eq!(TranscribeOptions::new().with_alternatives(2.6).alternatives, 3);
    assert_eq!(TranscribeOptions::new().with_alternatives(2.0).alternatives, 2);
}

#[test]
fn any_alternatives_call_marks_the_ranked_shape() {
    assert!(TranscribeOptions::new().with_alternatives(1.0).alternatives_explicit);
    assert!(TranscribeOptions::new().with_alternatives(0.4).alternatives_explicit);
    assert!(!TranscribeOptions::new().alternatives_explicit);
}

#[test]
fn search_call_marks_the_search_shape() {
    assert!(TranscribeOptions::new().with_search(["x"]).search_explicit);
    assert!(!TranscribeOptions::new().search_explicit);
}

#[test]
fn keyword_calls_append() {
    let options = TranscribeOptions::new()
        .with_keywords(["a"])
        .with_boosted_keyword("b", 1.5)
        .with_keywords(["c"]);

    assert_eq!(
        options.keywords,
        vec![
            Keyword {
                word: "a".to_string(),
                boost: None
            },
            Keyword {
                word: "b".to_string(),
                boost: Some(1.5)
            },
            Keyword {
                word: "c".to_string(),
                boost: None
            },
        ]
    );
}

#[test]
fn a_base_configuration_can_branch_without_aliasing() {
    let base = TranscribeOptions::new().with_diarization();
    let punctuated = base.clone().with_punctuation();
    let redacted = base.clone().with_ssn_redaction();

    assert!(base.diarize && !base.punctuate && !base.redact_ssn);
    assert!(punctuated.punctuate && !punctuated.redact_ssn);
    assert!(redacted.redact_ssn && !redacted.punctuate);
}

#[test]
fn toggles_compose_independently() {
    let options = TranscribeOptions::new()
        .with_number_redaction()
        .with_ssn_redaction()
        .with_pci_redaction()
        .with_profanity_filter();

    assert!(options.redact_numbers);
    assert!(options.redact_ssn);
    assert!(options.redact_pci);
    assert!(options.profanity_filter);
}
