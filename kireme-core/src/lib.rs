//! Phrase boundary detection for text without word separators
//!
//! This crate predicts soft breaks inside runs of CJK text with a small
//! linear model over character n-grams. Every candidate boundary is scored
//! from a six code point window; positive scores become breaks, which are
//! then mapped back to the caller's text and corrected at the range edges.
//!
//! # Architecture
//!
//! - [`model`]: immutable feature weights and the derived bias
//! - [`window`] and [`features`]: the sliding window and its n-gram keys
//! - [`engine`]: scanning, scoring and boundary translation
//! - [`text`] and [`position`]: access to the caller's text and coordinates
//!
//! # Example
//!
//! ```rust
//! use kireme_core::{MlBreakEngine, ModelStore};
//! use std::sync::Arc;
//!
//! // Break after the particles は and を, never inside 読む
//! let model = ModelStore::from_pairs(
//!     vec!["UW3:は", "UW3:を", "BW2:読む"],
//!     vec![3000, 3000, -2000],
//! )
//! .unwrap();
//! let engine = MlBreakEngine::new(
//!     Arc::new(|ch: char| ch.is_alphabetic() || ch.is_numeric()),
//!     Arc::new(|ch: char| matches!(ch, '、' | '。' | '」')),
//!     Arc::new(model),
//! );
//!
//! let text = "私は本を読む";
//! let breaks = engine.divide_range(text, 0, text.len()).unwrap();
//! assert_eq!(breaks, vec![6, 12]);
//! ```

pub mod charset;
pub mod engine;
pub mod error;
pub mod features;
pub mod model;
pub mod position;
pub mod text;
pub mod window;

pub use charset::{CharSet, CodePointSet};
pub use engine::{Candidate, MlBreakEngine};
pub use error::{BreakError, ResourceError, Result, TextAccessError};
pub use features::{
    extract_features, is_template_prefix, Feature, MAX_FEATURES, MAX_FEATURE_LENGTH,
};
pub use model::{ModelStore, ResourceLoader, MODEL_BUNDLE, MODEL_KEYS, MODEL_VALUES};
pub use position::PositionMap;
pub use text::{ScanSubject, TextAccess, Utf16Text};
pub use window::{ScanWindow, WINDOW_SIZE};
