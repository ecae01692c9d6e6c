//! Sliding scan window for feature extraction
//!
//! The model scores a candidate boundary from the six code points around
//! it. The window keeps those six slots and shifts by one code point per
//! scan step, so every step is O(1).

/// Number of code points seen by the model at each candidate.
pub const WINDOW_SIZE: usize = 6;

/// Six-slot window `[w1, w2, w3, w4, w5, w6]` around a candidate index `i`.
///
/// `w3` is the code point right before the candidate boundary and `w4`
/// the one right after it. Slots outside the text are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    slots: [Option<char>; WINDOW_SIZE],
}

impl ScanWindow {
    /// Window aligned on the first candidate (index 1) of a subject.
    ///
    /// There is no left context at the start of a subject, so `w1` and `w2`
    /// are empty and `w3..=w6` take the first four code points.
    pub fn prime<I>(chars: &mut I) -> Self
    where
        I: Iterator<Item = char>,
    {
        let mut slots = [None; WINDOW_SIZE];
        for slot in slots.iter_mut().skip(2) {
            *slot = chars.next();
            if slot.is_none() {
                break;
            }
        }
        Self { slots }
    }

    /// Build a window from explicit slots.
    pub fn from_slots(slots: [Option<char>; WINDOW_SIZE]) -> Self {
        Self { slots }
    }

    /// Drop the oldest slot and append `next` (or `None` past the end).
    #[inline]
    pub fn advance(&mut self, next: Option<char>) {
        self.slots.copy_within(1.., 0);
        self.slots[WINDOW_SIZE - 1] = next;
    }

    /// Slot `n` using the model's 1-based naming (`w1` ..= `w6`).
    #[inline]
    pub fn w(&self, n: usize) -> Option<char> {
        debug_assert!((1..=WINDOW_SIZE).contains(&n));
        self.slots[n - 1]
    }

    /// Code point before the candidate boundary (`w3`)
    pub fn before(&self) -> Option<char> {
        self.slots[2]
    }

    /// Code point after the candidate boundary (`w4`)
    pub fn after(&self) -> Option<char> {
        self.slots[3]
    }

    /// All six slots, `w1` first
    pub fn slots(&self) -> &[Option<char>; WINDOW_SIZE] {
        &self.slots
    }
}
