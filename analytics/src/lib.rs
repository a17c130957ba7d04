//! Speaking-time analytics over diarized transcription output.

use dg_listen::Word;
use std::collections::BTreeMap;

/// Cumulative speaking time per speaker id, in seconds.
///
/// Words must be in the order the service returned them (non-decreasing
/// `start`). A speaker's span is closed where the next speaker's first word
/// starts; the word-level `end` only closes the final span. Silence between
/// turns therefore accrues to the speaker who held the floor. Words without
/// a speaker tag are attributed to speaker 0.
pub fn speaking_time_by_speaker(words: &[Word]) -> BTreeMap<u32, f32> {
    let mut totals: BTreeMap<u32, f32> = BTreeMap::new();
    let mut remaining = words.iter();
    let Some(first) = remaining.next() else {
        return totals;
    };

    // The word at the most recent speaker change.
    let mut tracked = first;
    let mut last = first;
    for word in remaining {
        if speaker_of(word) != speaker_of(tracked) {
            *totals.entry(speaker_of(tracked)).or_insert(0.0) += word.start - tracked.start;
            tracked = word;
        }
        last = word;
    }
    *totals.entry(speaker_of(tracked)).or_insert(0.0) += last.end - tracked.start;

    totals
}

/// Speaking time as an array ordered by ascending speaker id. Speaker ids
/// need not be contiguous; the array holds one entry per distinct speaker.
pub fn speaking_time(words: &[Word]) -> Vec<f32> {
    speaking_time_by_speaker(words).into_values().collect()
}

fn speaker_of(word: &Word) -> u32 {
    word.speaker.unwrap_or(0)
}
