//! Random access to the caller's text
//!
//! Break positions are reported in the text's own units: bytes for
//! `str`, code units for UTF-16 and code points for `[char]`. The engine
//! only needs the code point at an offset, the one before it, and how
//! far to step to the next code point.

use crate::error::TextAccessError;
use std::ops::Range;

/// Narrow code point view over a text in its native encoding.
pub trait TextAccess {
    /// Length in native units
    fn len(&self) -> usize;

    /// True for an empty text
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Code point starting at `pos`; `Ok(None)` at the end of the text.
    fn char_at(&self, pos: usize) -> Result<Option<char>, TextAccessError>;

    /// Code point ending at `pos`; `Ok(None)` at the start of the text.
    fn char_before(&self, pos: usize) -> Result<Option<char>, TextAccessError>;

    /// Offset of the code point following the one at `pos`.
    fn next_offset(&self, pos: usize) -> Result<usize, TextAccessError>;

    /// Fails when `pos` lies inside a code point.
    fn check_boundary(&self, pos: usize) -> Result<(), TextAccessError> {
        check_bounds(pos, self.len())
    }

    /// Number of code points in `range`.
    fn char_count(&self, range: Range<usize>) -> Result<usize, TextAccessError> {
        check_range(&range)?;
        let mut pos = range.start;
        let mut count = 0;
        while pos < range.end {
            pos = self.next_offset(pos)?;
            count += 1;
        }
        Ok(count)
    }
}

fn check_bounds(position: usize, len: usize) -> Result<(), TextAccessError> {
    if position > len {
        Err(TextAccessError::OutOfBounds { position, len })
    } else {
        Ok(())
    }
}

fn check_range(range: &Range<usize>) -> Result<(), TextAccessError> {
    if range.start > range.end {
        return Err(TextAccessError::InvertedRange {
            start: range.start,
            end: range.end,
        });
    }
    Ok(())
}

impl TextAccess for str {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn char_at(&self, pos: usize) -> Result<Option<char>, TextAccessError> {
        check_bounds(pos, self.len())?;
        if !self.is_char_boundary(pos) {
            return Err(TextAccessError::NotCharBoundary(pos));
        }
        Ok(self[pos..].chars().next())
    }

    fn char_before(&self, pos: usize) -> Result<Option<char>, TextAccessError> {
        check_bounds(pos, self.len())?;
        if !self.is_char_boundary(pos) {
            return Err(TextAccessError::NotCharBoundary(pos));
        }
        Ok(self[..pos].chars().next_back())
    }

    fn next_offset(&self, pos: usize) -> Result<usize, TextAccessError> {
        match self.char_at(pos)? {
            Some(ch) => Ok(pos + ch.len_utf8()),
            None => Err(TextAccessError::OutOfBounds {
                position: pos + 1,
                len: self.len(),
            }),
        }
    }

    fn check_boundary(&self, pos: usize) -> Result<(), TextAccessError> {
        check_bounds(pos, self.len())?;
        if !self.is_char_boundary(pos) {
            return Err(TextAccessError::NotCharBoundary(pos));
        }
        Ok(())
    }

    fn char_count(&self, range: Range<usize>) -> Result<usize, TextAccessError> {
        check_range(&range)?;
        check_bounds(range.end, self.len())?;
        self.get(range.clone())
            .map(|s| s.chars().count())
            .ok_or(TextAccessError::NotCharBoundary(range.start))
    }
}

impl TextAccess for [char] {
    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    fn char_at(&self, pos: usize) -> Result<Option<char>, TextAccessError> {
        check_bounds(pos, self.len())?;
        Ok(self.get(pos).copied())
    }

    fn char_before(&self, pos: usize) -> Result<Option<char>, TextAccessError> {
        check_bounds(pos, self.len())?;
        Ok(pos.checked_sub(1).map(|p| self[p]))
    }

    fn next_offset(&self, pos: usize) -> Result<usize, TextAccessError> {
        check_bounds(pos + 1, self.len())?;
        Ok(pos + 1)
    }
}

/// UTF-16 text addressed by code unit.
///
/// An offset on a trail surrogate resolves to the whole supplementary
/// code point, so `char_before` works on offsets right after a pair.
/// Such an offset is still not a boundary: see `check_boundary`.
#[derive(Debug, Clone, Copy)]
pub struct Utf16Text<'a>(pub &'a [u16]);

impl<'a> Utf16Text<'a> {
    /// Wrap UTF-16 code units
    pub fn new(units: &'a [u16]) -> Self {
        Self(units)
    }

    /// Start of the code point covering `pos` and its length in units.
    fn locate(&self, pos: usize) -> Result<(usize, char, usize), TextAccessError> {
        let units = self.0;
        let unit = units[pos];
        let start = match unit {
            0xDC00..=0xDFFF if pos > 0 && (0xD800..=0xDBFF).contains(&units[pos - 1]) => pos - 1,
            _ => pos,
        };
        let end = (start + 2).min(units.len());
        match char::decode_utf16(units[start..end].iter().copied()).next() {
            Some(Ok(ch)) => Ok((start, ch, ch.len_utf16())),
            _ => Err(TextAccessError::UnpairedSurrogate(pos)),
        }
    }
}

impl TextAccess for Utf16Text<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn char_at(&self, pos: usize) -> Result<Option<char>, TextAccessError> {
        check_bounds(pos, self.len())?;
        if pos == self.len() {
            return Ok(None);
        }
        self.locate(pos).map(|(_, ch, _)| Some(ch))
    }

    fn char_before(&self, pos: usize) -> Result<Option<char>, TextAccessError> {
        check_bounds(pos, self.len())?;
        match pos.checked_sub(1) {
            Some(prev) => self.char_at(prev),
            None => Ok(None),
        }
    }

    fn next_offset(&self, pos: usize) -> Result<usize, TextAccessError> {
        check_bounds(pos + 1, self.len())?;
        let (start, _, len) = self.locate(pos)?;
        Ok(start + len)
    }

    fn check_boundary(&self, pos: usize) -> Result<(), TextAccessError> {
        check_bounds(pos, self.len())?;
        let units = self.0;
        let inside_pair = pos > 0
            && pos < units.len()
            && (0xDC00..=0xDFFF).contains(&units[pos])
            && (0xD800..=0xDBFF).contains(&units[pos - 1]);
        if inside_pair {
            return Err(TextAccessError::NotCharBoundary(pos));
        }
        Ok(())
    }
}

/// Code points of a text range plus their native offsets.
///
/// `offsets[k]` is the native offset of the `k`-th code point, and the
/// last entry is the range end, so the table maps every scan index in
/// `0..=len` to the caller's coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSubject {
    text: String,
    offsets: Vec<usize>,
}

impl ScanSubject {
    /// Collect the code points of `range` from `text`.
    pub fn from_text<T>(text: &T, range: Range<usize>) -> Result<Self, TextAccessError>
    where
        T: TextAccess + ?Sized,
    {
        check_range(&range)?;
        check_bounds(range.end, text.len())?;
        text.check_boundary(range.start)?;
        let mut subject = String::with_capacity(range.len());
        let mut offsets = Vec::with_capacity(range.len() + 1);
        let mut pos = range.start;

        while pos < range.end {
            let ch = text
                .char_at(pos)?
                .ok_or(TextAccessError::OutOfBounds {
                    position: pos,
                    len: text.len(),
                })?;
            subject.push(ch);
            offsets.push(pos);
            pos = text.next_offset(pos)?;
        }
        if pos != range.end {
            return Err(TextAccessError::NotCharBoundary(range.end));
        }
        offsets.push(pos);

        Ok(Self {
            text: subject,
            offsets,
        })
    }

    /// Scanned code points
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Native offset for each scan index, including the end
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of code points
    pub fn char_len(&self) -> usize {
        self.offsets.len() - 1
    }
}
