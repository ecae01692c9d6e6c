//! N-gram features of a scan window
//!
//! Each candidate boundary yields up to 13 features: six unigrams, three
//! bigrams and four trigrams. A feature is skipped when any of its slots
//! falls outside the text.

use crate::window::ScanWindow;
use smallvec::SmallVec;
use std::fmt;

/// Upper bound on features per candidate
pub const MAX_FEATURES: usize = 13;

/// Longest feature key, in UTF-16 code units (4-unit prefix + 3 code points).
pub const MAX_FEATURE_LENGTH: usize = 10;

/// Feature templates in model order: (prefix, first slot, n-gram size).
const TEMPLATES: [(&str, usize, usize); MAX_FEATURES] = [
    ("UW1:", 1, 1),
    ("UW2:", 2, 1),
    ("UW3:", 3, 1),
    ("UW4:", 4, 1),
    ("UW5:", 5, 1),
    ("UW6:", 6, 1),
    ("BW1:", 2, 2),
    ("BW2:", 3, 2),
    ("BW3:", 4, 2),
    ("TW1:", 1, 3),
    ("TW2:", 2, 3),
    ("TW3:", 3, 3),
    ("TW4:", 4, 3),
];

/// Whether `prefix` (e.g. `"TW3:"`) names one of the feature templates
pub fn is_template_prefix(prefix: &str) -> bool {
    TEMPLATES.iter().any(|(p, _, _)| *p == prefix)
}

/// A single extracted feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    prefix: &'static str,
    chars: [char; 3],
    len: usize,
}

impl Feature {
    /// The n-gram's code points
    pub fn chars(&self) -> &[char] {
        &self.chars[..self.len]
    }

    /// Write the model key into `buf`, replacing its contents.
    #[inline]
    pub fn write_key(&self, buf: &mut String) {
        buf.clear();
        buf.push_str(self.prefix);
        buf.extend(self.chars());
    }

    /// Owned model key
    pub fn key(&self) -> String {
        let mut buf = String::with_capacity(16);
        self.write_key(&mut buf);
        buf
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix)?;
        for ch in self.chars() {
            fmt::Write::write_char(f, *ch)?;
        }
        Ok(())
    }
}

/// Features present in `window`, in template order.
pub fn extract_features(window: &ScanWindow) -> SmallVec<[Feature; MAX_FEATURES]> {
    let mut features = SmallVec::new();

    'templates: for (prefix, first, len) in TEMPLATES {
        let mut chars = ['\0'; 3];
        for (offset, slot) in chars.iter_mut().take(len).enumerate() {
            match window.w(first + offset) {
                Some(ch) => *slot = ch,
                None => continue 'templates,
            }
        }
        features.push(Feature { prefix, chars, len });
    }

    features
}
