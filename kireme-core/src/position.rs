//! Translation from scan indices to caller positions

use crate::error::TextAccessError;
use std::fmt;

/// Maps code point indices of the scanned subject to positions in the
/// caller's text. Must be monotonically non-decreasing.
#[derive(Clone, Copy, Default)]
pub enum PositionMap<'a> {
    /// No map: position is `range_start + index`
    #[default]
    Offset,
    /// `table[index]`, one entry per scan index including the end
    Table(&'a [usize]),
    /// Injected mapping function
    Function(&'a (dyn Fn(usize) -> usize + Sync)),
}

impl PositionMap<'_> {
    /// External position of scan index `index`.
    #[inline]
    pub fn resolve(&self, index: usize, range_start: usize) -> Result<usize, TextAccessError> {
        match self {
            PositionMap::Offset => Ok(range_start + index),
            PositionMap::Table(table) => table
                .get(index)
                .copied()
                .ok_or(TextAccessError::UnmappedIndex(index)),
            PositionMap::Function(f) => Ok(f(index)),
        }
    }
}

impl fmt::Debug for PositionMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionMap::Offset => write!(f, "PositionMap::Offset"),
            PositionMap::Table(table) => write!(f, "PositionMap::Table({} entries)", table.len()),
            PositionMap::Function(_) => write!(f, "PositionMap::Function(...)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_adds_range_start() {
        assert_eq!(PositionMap::Offset.resolve(3, 10), Ok(13));
    }

    #[test]
    fn test_table_lookup() {
        let table = [0, 3, 3, 6];
        let map = PositionMap::Table(&table);
        assert_eq!(map.resolve(2, 100), Ok(3));
        assert_eq!(map.resolve(4, 0), Err(TextAccessError::UnmappedIndex(4)));
    }

    #[test]
    fn test_function_map() {
        let double = |i: usize| i * 2;
        let map = PositionMap::Function(&double);
        assert_eq!(map.resolve(5, 7), Ok(10));
        assert_eq!(format!("{map:?}"), "PositionMap::Function(...)");
    }
}
