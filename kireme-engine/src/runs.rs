//! Runs of characters the phrase model handles
//!
//! The model only sees Han, Hiragana and Katakana (with the prolonged
//! sound mark, voicing marks and half-width forms). Everything else is
//! left to the coarse whitespace rule.

use std::ops::Range;

/// Whether `ch` belongs to a handled run
#[inline]
pub fn is_handled(ch: char) -> bool {
    matches!(ch,
        // Hiragana, including voicing marks and iteration marks
        '\u{3041}'..='\u{3096}'
        | '\u{3099}'..='\u{309F}'
        // Katakana without the double hyphen and middle dot
        | '\u{30A1}'..='\u{30FA}'
        | '\u{30FC}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        // Half-width Katakana
        | '\u{FF66}'..='\u{FF9F}'
        // Han
        | '\u{3005}'
        | '\u{3007}'
        | '\u{3021}'..='\u{3029}'
        | '\u{3038}'..='\u{303B}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2FA1F}'
        | '\u{30000}'..='\u{323AF}'
    )
}

/// Maximal handled runs of `text` as byte ranges, in order
pub fn handled_runs(text: &str) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = None;

    for (offset, ch) in text.char_indices() {
        match (is_handled(ch), start) {
            (true, None) => start = Some(offset),
            (false, Some(run_start)) => {
                runs.push(run_start..offset);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(run_start) = start {
        runs.push(run_start..text.len());
    }

    runs
}
