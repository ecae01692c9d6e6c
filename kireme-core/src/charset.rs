//! Code point sets used by the edge corrections
//!
//! Optimized for hot-path lookups with an ASCII fast path.

use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Membership test over code points
pub trait CodePointSet: Send + Sync {
    /// Whether `ch` belongs to the set
    fn contains(&self, ch: char) -> bool;
}

impl<F> CodePointSet for F
where
    F: Fn(char) -> bool + Send + Sync,
{
    #[inline]
    fn contains(&self, ch: char) -> bool {
        self(ch)
    }
}

impl CodePointSet for HashSet<char> {
    #[inline]
    fn contains(&self, ch: char) -> bool {
        HashSet::contains(self, &ch)
    }
}

/// Table-backed set of single characters and inclusive ranges
#[derive(Debug, Clone)]
pub struct CharSet {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Individual non-ASCII members
    non_ascii: HashSet<char>,
    /// Non-ASCII ranges, kept sorted by start
    ranges: Vec<RangeInclusive<char>>,
}

impl Default for CharSet {
    fn default() -> Self {
        Self {
            ascii_table: [false; 128],
            non_ascii: HashSet::new(),
            ranges: Vec::new(),
        }
    }
}

impl CharSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set holding exactly `chars`
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut set = Self::new();
        set.extend(chars);
        set
    }

    /// Add one character
    pub fn insert(&mut self, ch: char) {
        if ch.is_ascii() {
            self.ascii_table[ch as usize] = true;
        } else {
            self.non_ascii.insert(ch);
        }
    }

    /// Add an inclusive range; ASCII members go to the fast table.
    pub fn insert_range(&mut self, range: RangeInclusive<char>) {
        let (start, end) = (*range.start(), *range.end());
        if start > end {
            return;
        }
        for ch in (start..=end).take_while(char::is_ascii) {
            self.ascii_table[ch as usize] = true;
        }
        if end.is_ascii() {
            return;
        }
        let start = if start.is_ascii() { '\u{80}' } else { start };
        let pos = self.ranges.partition_point(|r| *r.start() < start);
        self.ranges.insert(pos, start..=end);
    }

    /// Check membership - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            // Fast path: direct array lookup
            return self.ascii_table[ch as usize];
        }
        if self.non_ascii.contains(&ch) {
            return true;
        }
        // Ranges are few and sorted; stop once they start past `ch`
        self.ranges
            .iter()
            .take_while(|r| *r.start() <= ch)
            .any(|r| r.contains(&ch))
    }

    pub fn is_empty(&self) -> bool {
        !self.ascii_table.iter().any(|b| *b) && self.non_ascii.is_empty() && self.ranges.is_empty()
    }
}

impl Extend<char> for CharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.insert(ch);
        }
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}

impl CodePointSet for CharSet {
    #[inline]
    fn contains(&self, ch: char) -> bool {
        CharSet::contains(self, ch)
    }
}
