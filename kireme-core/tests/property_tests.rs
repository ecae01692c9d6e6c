use kireme_core::{CharSet, CodePointSet, MlBreakEngine, ModelStore, PositionMap};
use proptest::prelude::*;
use std::sync::Arc;

const ALPHABET: [char; 13] = [
    '私', 'は', '本', 'を', '読', 'む', '「', '」', '、', '。', 'A', '1', '𠮷',
];

const KEYS: [&str; 8] = [
    "UW3:は", "UW3:を", "UW4:「", "UW2:」", "BW2:読む", "BW1:私は", "TW2:本を読", "UW6:。",
];

// --- STRATEGIES ---

prop_compose! {
    fn arb_engine()(
        values in proptest::collection::vec(-3000i32..3000, KEYS.len())
    ) -> MlBreakEngine {
        let model = ModelStore::from_pairs(KEYS.to_vec(), values).unwrap();
        let digit_open_alpha: Arc<dyn CodePointSet> =
            Arc::new(|ch: char| ch.is_alphabetic() || ch.is_numeric() || ch == '「');
        let close: Arc<dyn CodePointSet> = Arc::new(CharSet::from_chars(['」', '、', '。']));
        MlBreakEngine::new(digit_open_alpha, close, Arc::new(model))
    }
}

prop_compose! {
    fn arb_text()(
        chars in proptest::collection::vec(proptest::sample::select(ALPHABET.to_vec()), 1..40)
    ) -> String {
        chars.into_iter().collect()
    }
}

prop_compose! {
    /// Text plus a non-empty byte range on character boundaries
    fn arb_text_and_range()(text in arb_text())(
        a in 0..text.chars().count(),
        b in 0..text.chars().count(),
        text in Just(text),
    ) -> (String, usize, usize) {
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        (text, offsets[a.min(b)], offsets[a.max(b) + 1])
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_breaks_strictly_increasing_within_range(
        engine in arb_engine(),
        (text, start, end) in arb_text_and_range(),
    ) {
        let breaks = engine.divide_range(text.as_str(), start, end).unwrap();

        for pair in breaks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for position in &breaks {
            prop_assert!((start..=end).contains(position));
            prop_assert!(text.is_char_boundary(*position));
        }
    }

    #[test]
    fn test_breaks_are_deterministic(
        engine in arb_engine(),
        (text, start, end) in arb_text_and_range(),
    ) {
        let first = engine.divide_range(text.as_str(), start, end).unwrap();
        let second = engine.divide_range(text.as_str(), start, end).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_internal_boundaries_close_the_subject(
        engine in arb_engine(),
        text in arb_text(),
    ) {
        let length = text.chars().count();
        let internal = engine.internal_boundaries(&text);

        prop_assert_eq!(internal.first(), Some(&0));
        prop_assert_eq!(internal.last(), Some(&length));
        for pair in internal.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_explain_agrees_with_scan(
        engine in arb_engine(),
        text in arb_text(),
    ) {
        let length = text.chars().count();
        let explained: Vec<usize> = engine
            .explain(&text)
            .into_iter()
            .filter(|c| c.is_break)
            .map(|c| c.index)
            .collect();
        let scanned: Vec<usize> = engine
            .internal_boundaries(&text)
            .into_iter()
            .filter(|&i| i != 0 && i != length)
            .collect();
        prop_assert_eq!(explained, scanned);
    }

    #[test]
    fn test_repeated_map_values_survive_once(
        engine in arb_engine(),
        text in arb_text(),
        repeats in proptest::collection::vec(any::<bool>(), 40),
    ) {
        // Non-decreasing map over the code points of `text`
        let length = text.chars().count();
        let mut table = Vec::with_capacity(length + 1);
        let mut position = 0;
        for k in 0..=length {
            if k > 0 && !repeats[k % repeats.len()] {
                position += 1;
            }
            table.push(position);
        }
        let target = "A".repeat(position + 1);

        let breaks = engine
            .find_breaks(target.as_str(), 0, position.max(1), &text, &PositionMap::Table(&table))
            .unwrap();

        for pair in breaks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }

        // One break per distinct mapped position. Position 0 has no preceding
        // character and is dropped; the range end is followed by 'A' and kept.
        let mut expected: Vec<usize> = engine
            .internal_boundaries(&text)
            .into_iter()
            .map(|index| table[index])
            .collect();
        expected.dedup();
        expected.retain(|&p| p != 0);
        prop_assert_eq!(breaks, expected);
    }
}
