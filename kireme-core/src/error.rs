//! Core error types (deterministic only)

use thiserror::Error;

/// Failures while building a model from its resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// Bundle or subtable could not be resolved by the loader
    #[error("resource {bundle}/{key} not found")]
    Missing {
        /// Bundle identifier, e.g. `jaml`
        bundle: String,
        /// Subtable name, e.g. `modelKeys`
        key: String,
    },

    /// Key and value arrays are not aligned
    #[error("model has {keys} keys but {values} values")]
    LengthMismatch {
        /// Number of feature keys
        keys: usize,
        /// Number of weights
        values: usize,
    },

    /// Feature key exceeds the maximum encoded length
    #[error("feature key {key:?} is {len} UTF-16 units long (max {max})")]
    KeyTooLong {
        /// Offending key
        key: String,
        /// Its length in UTF-16 code units
        len: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// Empty feature key at the given index
    #[error("empty feature key at index {0}")]
    EmptyKey(usize),

    /// Same key listed twice
    #[error("duplicate feature key {0:?}")]
    DuplicateKey(String),

    /// Resource exists but could not be interpreted
    #[error("malformed resource: {0}")]
    Malformed(String),
}

/// Failures resolving a position in the caller's text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextAccessError {
    /// Position lies beyond the end of the text
    #[error("position {position} is out of bounds (length {len})")]
    OutOfBounds {
        /// Requested position
        position: usize,
        /// Text length in native units
        len: usize,
    },

    /// Range ends before it starts
    #[error("range {start}..{end} is inverted")]
    InvertedRange {
        /// Range start
        start: usize,
        /// Range end
        end: usize,
    },

    /// Position splits a multi-byte character
    #[error("position {0} is not on a character boundary")]
    NotCharBoundary(usize),

    /// Lone surrogate in UTF-16 text
    #[error("unpaired surrogate at position {0}")]
    UnpairedSurrogate(usize),

    /// Position map has no entry for a scan index
    #[error("no external position mapped for scan index {0}")]
    UnmappedIndex(usize),
}

/// Failures of a single break search
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakError {
    /// Empty or inverted range
    #[error("invalid range: start {start} must be less than end {end}")]
    InvalidRange {
        /// Range start
        start: usize,
        /// Range end
        end: usize,
    },

    /// Position map went backwards
    #[error("position map is not monotonic at scan index {index}: {position} < {previous}")]
    NonMonotonicPositionMap {
        /// Scan index being translated
        index: usize,
        /// Position it mapped to
        position: usize,
        /// Previously emitted position
        previous: usize,
    },

    /// Text collaborator failure
    #[error(transparent)]
    TextAccess(#[from] TextAccessError),

    /// Model could not be loaded
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, BreakError>;
