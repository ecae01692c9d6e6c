//! Default edge-correction sets for Japanese phrase breaking
//!
//! The engine keeps a break at the start of a range only after closing
//! punctuation, and keeps one at the end only before a digit, an opening
//! bracket or quote, or a letter. Punctuation tables cover Latin-1,
//! general punctuation, CJK and the full-width forms.

use crate::config::CharsetConfig;
use kireme_core::{CharSet, CodePointSet};
use std::sync::Arc;

/// Opening (`Ps`) and initial quote (`Pi`) punctuation
const OPEN_PUNCTUATION: &[char] = &[
    '(', '[', '{', '«', '‘', '‛', '“', '‟', '‹', '‚', '„', '⁅', '⁽', '₍', '⌈', '⌊', '\u{2329}', '❨',
    '❪', '❬', '❮', '❰', '❲', '❴', '⟅', '⟦', '⟨', '⟪', '⟬', '⟮', '⸂', '⸄', '⸉', '⸌', '⸜', '⸠',
    '〈', '《', '「', '『', '【', '〔', '〖', '〘', '〚', '〝', '（', '［', '｛', '｟', '｢',
];

/// Closing (`Pe`) and final quote (`Pf`) punctuation
const CLOSE_BRACKETS: &[char] = &[
    ')', ']', '}', '»', '’', '”', '›', '⁆', '⁾', '₎', '⌉', '⌋', '\u{232A}', '❩', '❫', '❭', '❯', '❱',
    '❳', '❵', '⟆', '⟧', '⟩', '⟫', '⟭', '⟯', '⸃', '⸅', '⸊', '⸍', '⸝', '⸡', '〉', '》', '」',
    '』', '】', '〕', '〗', '〙', '〛', '〞', '〟', '）', '］', '｝', '｠', '｣',
];

/// Connector (`Pc`) and dash (`Pd`) punctuation
const CONNECTORS_AND_DASHES: &[char] = &[
    '_', '‿', '⁀', '⁔', '＿', '-', '֊', '־', '⸗', '⸚', '〜', '〰', '゠', '﹘', '﹣', '－',
];

/// Other punctuation (`Po`) outside the ranges below
const OTHER_PUNCTUATION: &[char] = &[
    '!', '"', '#', '%', '&', '\'', '*', ',', '.', '/', ':', ';', '?', '@', '\\', '¡', '§', '¶',
    '·', '¿', '、', '。', '〃', '〽', '・', '！', '＂', '＃', '％', '＆', '＇', '＊', '，', '．',
    '／', '：', '；', '？', '＠', '＼', '｡', '､', '･',
];

/// Punctuation ranges of the General Punctuation block
const PUNCTUATION_RANGES: &[(char, char)] = &[
    ('\u{2010}', '\u{2017}'),
    ('\u{2020}', '\u{2027}'),
    ('\u{2030}', '\u{2038}'),
    ('\u{203B}', '\u{203E}'),
    ('\u{2041}', '\u{2043}'),
    ('\u{2047}', '\u{2051}'),
    ('\u{2053}', '\u{2053}'),
    ('\u{2055}', '\u{205E}'),
    ('\u{FE31}', '\u{FE34}'),
    ('\u{FE4D}', '\u{FE4F}'),
];

/// Decimal digit (`Nd`) ranges of common scripts
const DECIMAL_DIGITS: &[(char, char)] = &[
    ('0', '9'),
    ('\u{0660}', '\u{0669}'),
    ('\u{06F0}', '\u{06F9}'),
    ('\u{0966}', '\u{096F}'),
    ('\u{09E6}', '\u{09EF}'),
    ('\u{0E50}', '\u{0E59}'),
    ('\u{FF10}', '\u{FF19}'),
];

/// Decimal digits, opening punctuation and alphabetic characters
#[derive(Debug, Clone)]
pub struct DigitOpenPunctuationAlphabet {
    table: CharSet,
}

impl DigitOpenPunctuationAlphabet {
    /// Default members plus `extra`
    pub fn new(extra: impl IntoIterator<Item = char>) -> Self {
        let mut table = CharSet::from_chars(OPEN_PUNCTUATION.iter().copied());
        for &(start, end) in DECIMAL_DIGITS {
            table.insert_range(start..=end);
        }
        table.extend(extra);
        Self { table }
    }
}

impl CodePointSet for DigitOpenPunctuationAlphabet {
    #[inline]
    fn contains(&self, ch: char) -> bool {
        self.table.contains(ch) || ch.is_alphabetic()
    }
}

/// Connector, dash, closing, final quote and other punctuation
pub fn close_punctuation(extra: impl IntoIterator<Item = char>) -> CharSet {
    let mut set = CharSet::new();
    set.extend(CLOSE_BRACKETS.iter().copied());
    set.extend(CONNECTORS_AND_DASHES.iter().copied());
    set.extend(OTHER_PUNCTUATION.iter().copied());
    for &(start, end) in PUNCTUATION_RANGES {
        set.insert_range(start..=end);
    }
    set.extend(extra);
    set
}

/// The two sets an engine is built from
#[derive(Clone)]
pub struct PhraseCharSets {
    /// Set consulted before the end of a range
    pub digit_or_open_punctuation_or_alphabet: Arc<dyn CodePointSet>,
    /// Set consulted before the start of a range
    pub close_punctuation: Arc<dyn CodePointSet>,
}

impl PhraseCharSets {
    /// Japanese defaults
    pub fn japanese() -> Self {
        Self::with_config(&CharsetConfig::default())
    }

    /// Japanese defaults extended by `config`
    pub fn with_config(config: &CharsetConfig) -> Self {
        Self {
            digit_or_open_punctuation_or_alphabet: Arc::new(DigitOpenPunctuationAlphabet::new(
                config.extra_open_punctuation.iter().copied(),
            )),
            close_punctuation: Arc::new(close_punctuation(
                config.extra_close_punctuation.iter().copied(),
            )),
        }
    }
}

impl std::fmt::Debug for PhraseCharSets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhraseCharSets").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_open_alphabet_members() {
        let sets = PhraseCharSets::japanese();
        let set = &sets.digit_or_open_punctuation_or_alphabet;

        for ch in ['7', '７', '٣', '(', '「', '『', '“', '«', 'a', 'Ж', 'あ', 'ア', '漢'] {
            assert!(set.contains(ch), "{ch:?} should be a member");
        }
        for ch in ['」', '、', '。', ')', '-', ' ', '!'] {
            assert!(!set.contains(ch), "{ch:?} should not be a member");
        }
    }

    #[test]
    fn test_close_punctuation_members() {
        let sets = PhraseCharSets::japanese();
        let set = &sets.close_punctuation;

        for ch in [
            '」', '』', '）', '、', '。', '・', '！', '？', '…', '—', '”', '»', ')', '.', ',', '_',
            '〜', '※',
        ] {
            assert!(set.contains(ch), "{ch:?} should be a member");
        }
        for ch in ['「', '(', '“', 'a', '1', 'あ', 'ー', ' ', '$', '+'] {
            assert!(!set.contains(ch), "{ch:?} should not be a member");
        }
    }

    #[test]
    fn test_config_extends_sets() {
        let sets = PhraseCharSets::with_config(&CharsetConfig {
            extra_open_punctuation: vec!['＄'],
            extra_close_punctuation: vec!['〆'],
        });

        assert!(sets.digit_or_open_punctuation_or_alphabet.contains('＄'));
        assert!(sets.close_punctuation.contains('〆'));
        assert!(!PhraseCharSets::japanese().close_punctuation.contains('〆'));
    }

    #[test]
    fn test_sets_are_disjoint_on_punctuation() {
        let sets = PhraseCharSets::japanese();
        for &ch in OPEN_PUNCTUATION {
            assert!(!sets.close_punctuation.contains(ch), "{ch:?} is in both sets");
        }
    }
}
