//! Phrase segmentation on top of the kireme break engine
//!
//! This crate loads phrase models, supplies the Japanese classification
//! sets, and splits whole texts into phrases.
//!
//! ```rust
//! use kireme_engine::PhraseSegmenter;
//!
//! let segmenter = PhraseSegmenter::new().unwrap();
//! let phrases = segmenter.phrases("私は毎朝駅で新聞を買います").unwrap();
//! assert_eq!(phrases, vec!["私は", "毎朝駅で", "新聞を", "買います"]);
//! ```

#![warn(missing_docs)]

pub mod charsets;
pub mod config;
pub mod error;
pub mod resources;
pub mod runs;
pub mod segmenter;

// Re-export key types
pub use charsets::PhraseCharSets;
pub use config::{CharsetConfig, ModelConfig, ModelSource, SegmenterConfig};
pub use error::{EngineError, Result};
pub use resources::{BudouxModel, DirectoryResources, EmbeddedResources, TomlBundle};
pub use segmenter::{PhraseSegmenter, PhraseSegmenterBuilder};

// Re-export from core for convenience
pub use kireme_core::{BreakError, Candidate, MlBreakEngine, ModelStore, ResourceError};
