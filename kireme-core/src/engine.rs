//! ML phrase-break engine
//!
//! Scores every candidate boundary of a subject string with the linear
//! model and translates the accepted ones into the caller's coordinates.

use crate::{
    charset::CodePointSet,
    error::{BreakError, Result, TextAccessError},
    features::extract_features,
    model::{ModelStore, ResourceLoader},
    position::PositionMap,
    text::{ScanSubject, TextAccess},
    window::ScanWindow,
};
use std::fmt;
use std::sync::Arc;

/// Scoring details for one candidate index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Scan index of the candidate boundary
    pub index: usize,
    /// Feature keys extracted from the window
    pub features: Vec<String>,
    /// `bias + 2 * Σ weight`
    pub score: i64,
    /// Whether the model breaks here
    pub is_break: bool,
}

/// Phrase-break engine backed by a shared model.
///
/// Holds no per-call state, so one engine can serve concurrent scans.
#[derive(Clone)]
pub struct MlBreakEngine {
    digit_or_open_punctuation_or_alphabet: Arc<dyn CodePointSet>,
    close_punctuation: Arc<dyn CodePointSet>,
    model: Arc<ModelStore>,
}

impl MlBreakEngine {
    /// Create an engine from its classification sets and a loaded model.
    pub fn new(
        digit_or_open_punctuation_or_alphabet: Arc<dyn CodePointSet>,
        close_punctuation: Arc<dyn CodePointSet>,
        model: Arc<ModelStore>,
    ) -> Self {
        Self {
            digit_or_open_punctuation_or_alphabet,
            close_punctuation,
            model,
        }
    }

    /// Create an engine, loading the model through `loader`.
    pub fn load(
        digit_or_open_punctuation_or_alphabet: Arc<dyn CodePointSet>,
        close_punctuation: Arc<dyn CodePointSet>,
        loader: &dyn ResourceLoader,
    ) -> Result<Self> {
        let model = ModelStore::load(loader)?;
        Ok(Self::new(
            digit_or_open_punctuation_or_alphabet,
            close_punctuation,
            Arc::new(model),
        ))
    }

    /// The shared model
    pub fn model(&self) -> &Arc<ModelStore> {
        &self.model
    }

    /// Score of the candidate described by `window`.
    pub fn score(&self, window: &ScanWindow) -> i64 {
        let mut key = String::with_capacity(16);
        let sum: i64 = extract_features(window)
            .iter()
            .map(|feature| {
                feature.write_key(&mut key);
                i64::from(self.model.score_contribution(&key))
            })
            .sum();
        self.model.bias() + 2 * sum
    }

    /// Visit the window of every candidate index `1..len` of `subject`.
    /// Returns the subject length in code points.
    fn walk<F>(subject: &str, mut visit: F) -> usize
    where
        F: FnMut(usize, &ScanWindow),
    {
        let length = subject.chars().count();
        let mut chars = subject.chars();
        let mut window = ScanWindow::prime(&mut chars);

        for i in 1..length {
            visit(i, &window);
            if i + 1 >= length {
                break;
            }
            window.advance(chars.next());
        }

        length
    }

    /// Boundaries in scan space: always `0`, the model's breaks, and the
    /// subject length.
    pub fn internal_boundaries(&self, subject: &str) -> Vec<usize> {
        let mut boundaries = Vec::with_capacity(subject.len() / 2 + 2);
        boundaries.push(0);

        let length = Self::walk(subject, |i, window| {
            if self.score(window) > 0 {
                boundaries.push(i);
            }
        });

        if boundaries.last() != Some(&length) {
            boundaries.push(length);
        }
        boundaries
    }

    /// Per-candidate scores and features for `subject`.
    pub fn explain(&self, subject: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        Self::walk(subject, |index, window| {
            let score = self.score(window);
            candidates.push(Candidate {
                index,
                features: extract_features(window).iter().map(|f| f.key()).collect(),
                score,
                is_break: score > 0,
            });
        });
        candidates
    }

    /// Phrase breaks of `text[range_start..range_end]` in the text's units.
    ///
    /// `subject` is the string actually scanned and `position_map` maps
    /// its code point indices back to `text`. A break at `range_start` is
    /// kept only after closing punctuation, and a break at `range_end`
    /// only before a digit, letter or opening punctuation.
    pub fn find_breaks<T>(
        &self,
        text: &T,
        range_start: usize,
        range_end: usize,
        subject: &str,
        position_map: &PositionMap<'_>,
    ) -> Result<Vec<usize>>
    where
        T: TextAccess + ?Sized,
    {
        if range_start >= range_end {
            return Err(BreakError::InvalidRange {
                start: range_start,
                end: range_end,
            });
        }
        if range_end > text.len() {
            return Err(TextAccessError::OutOfBounds {
                position: range_end,
                len: text.len(),
            }
            .into());
        }
        text.check_boundary(range_start)?;
        text.check_boundary(range_end)?;

        let internal = self.internal_boundaries(subject);
        let mut found = Vec::with_capacity(internal.len());
        let mut previous: Option<usize> = None;

        for &index in &internal {
            let position = position_map.resolve(index, range_start)?;
            match previous {
                // Expanded text mapped two scan indices onto one position
                Some(prev) if position == prev => continue,
                Some(prev) if position < prev => {
                    return Err(BreakError::NonMonotonicPositionMap {
                        index,
                        position,
                        previous: prev,
                    });
                }
                _ => {}
            }
            previous = Some(position);

            if position != range_start || self.follows_close_punctuation(text, position)? {
                found.push(position);
            }
        }

        if found.last() == Some(&range_end) {
            let next = text.char_at(range_end)?;
            if !next.is_some_and(|ch| self.digit_or_open_punctuation_or_alphabet.contains(ch)) {
                found.pop();
            }
        }

        log::trace!(
            "scanned {} internal boundaries in {range_start}..{range_end}, kept {}",
            internal.len(),
            found.len()
        );
        Ok(found)
    }

    /// Phrase breaks of a range, scanning the text's own code points.
    pub fn divide_range<T>(&self, text: &T, range_start: usize, range_end: usize) -> Result<Vec<usize>>
    where
        T: TextAccess + ?Sized,
    {
        if range_start >= range_end {
            return Err(BreakError::InvalidRange {
                start: range_start,
                end: range_end,
            });
        }
        let subject = ScanSubject::from_text(text, range_start..range_end)?;
        self.find_breaks(
            text,
            range_start,
            range_end,
            subject.as_str(),
            &PositionMap::Table(subject.offsets()),
        )
    }

    fn follows_close_punctuation<T>(&self, text: &T, position: usize) -> Result<bool>
    where
        T: TextAccess + ?Sized,
    {
        if position == 0 {
            return Ok(false);
        }
        Ok(text
            .char_before(position)?
            .is_some_and(|ch| self.close_punctuation.contains(ch)))
    }
}

impl fmt::Debug for MlBreakEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MlBreakEngine")
            .field("features", &self.model.len())
            .field("bias", &self.model.bias())
            .finish_non_exhaustive()
    }
}
