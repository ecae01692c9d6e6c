//! Phrase segmenter and builder
//!
//! Splits text into phrases: the model places breaks inside runs of
//! Japanese script, and a whitespace rule separates everything else.

use crate::{
    charsets::PhraseCharSets,
    config::{ModelSource, SegmenterConfig},
    error::Result,
    runs::handled_runs,
};
use kireme_core::{MlBreakEngine, ModelStore};
use std::path::PathBuf;
use std::sync::Arc;

/// Phrase segmenter over a shared break engine
#[derive(Debug, Clone)]
pub struct PhraseSegmenter {
    engine: MlBreakEngine,
}

impl PhraseSegmenter {
    /// Segmenter with the embedded model and default sets
    pub fn new() -> Result<Self> {
        Self::with_config(&SegmenterConfig::default())
    }

    /// Fluent construction
    pub fn builder() -> PhraseSegmenterBuilder {
        PhraseSegmenterBuilder::new()
    }

    /// Segmenter built from `config`
    pub fn with_config(config: &SegmenterConfig) -> Result<Self> {
        config.validate()?;
        let model = config.model.load()?;
        let sets = PhraseCharSets::with_config(&config.charsets);

        log::debug!(
            "phrase segmenter ready: {:?} model '{}', {} features",
            config.model.source,
            config.model.bundle,
            model.len()
        );

        Ok(Self::with_model(Arc::new(model), sets))
    }

    /// Segmenter over an already loaded model
    pub fn with_model(model: Arc<ModelStore>, sets: PhraseCharSets) -> Self {
        Self::from_engine(MlBreakEngine::new(
            sets.digit_or_open_punctuation_or_alphabet,
            sets.close_punctuation,
            model,
        ))
    }

    /// Wrap an existing engine
    pub fn from_engine(engine: MlBreakEngine) -> Self {
        Self { engine }
    }

    /// The underlying break engine
    pub fn engine(&self) -> &MlBreakEngine {
        &self.engine
    }

    /// Phrase boundaries of `text` as byte offsets.
    ///
    /// Always starts with 0 and ends with `text.len()`; strictly increasing.
    pub fn segment(&self, text: &str) -> Result<Vec<usize>> {
        let mut boundaries = vec![0];

        // Break after every whitespace run
        let mut previous: Option<char> = None;
        for (offset, ch) in text.char_indices() {
            if previous.is_some_and(char::is_whitespace) && !ch.is_whitespace() {
                boundaries.push(offset);
            }
            previous = Some(ch);
        }

        for run in handled_runs(text) {
            boundaries.extend(self.engine.divide_range(text, run.start, run.end)?);
        }

        boundaries.push(text.len());
        boundaries.sort_unstable();
        boundaries.dedup();

        log::trace!("segmented {} bytes into {} phrases", text.len(), boundaries.len() - 1);
        Ok(boundaries)
    }

    /// `text` split at its phrase boundaries
    pub fn phrases<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        let boundaries = self.segment(text)?;
        Ok(boundaries
            .windows(2)
            .map(|pair| &text[pair[0]..pair[1]])
            .collect())
    }

    /// Segment several texts in parallel
    #[cfg(feature = "parallel")]
    pub fn segment_all(&self, texts: &[&str]) -> Result<Vec<Vec<usize>>> {
        use rayon::prelude::*;

        texts.par_iter().map(|text| self.segment(text)).collect()
    }

    /// Segment several texts
    #[cfg(not(feature = "parallel"))]
    pub fn segment_all(&self, texts: &[&str]) -> Result<Vec<Vec<usize>>> {
        texts.iter().map(|text| self.segment(text)).collect()
    }
}

/// Builder for PhraseSegmenter
///
/// Provides a fluent interface over [`SegmenterConfig`].
#[derive(Debug, Clone, Default)]
pub struct PhraseSegmenterBuilder {
    config: SegmenterConfig,
}

impl PhraseSegmenterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: SegmenterConfig) -> Self {
        self.config = config;
        self
    }

    /// Use the embedded model bundles
    pub fn embedded(mut self) -> Self {
        self.config.model.source = ModelSource::Embedded;
        self.config.model.path = None;
        self
    }

    /// Read bundles from `dir`
    pub fn model_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.model.source = ModelSource::Directory;
        self.config.model.path = Some(dir.into());
        self
    }

    /// Import a BudouX JSON model
    pub fn budoux_json<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.model.source = ModelSource::Budoux;
        self.config.model.path = Some(path.into());
        self
    }

    /// Set the bundle identifier
    pub fn bundle<S: Into<String>>(mut self, bundle: S) -> Self {
        self.config.model.bundle = bundle.into();
        self
    }

    /// Add members to the digit/open punctuation/alphabet set
    pub fn extra_open_punctuation<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.config.charsets.extra_open_punctuation.extend(chars);
        self
    }

    /// Add members to the close punctuation set
    pub fn extra_close_punctuation<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.config.charsets.extra_close_punctuation.extend(chars);
        self
    }

    /// Build the segmenter
    pub fn build(self) -> Result<PhraseSegmenter> {
        PhraseSegmenter::with_config(&self.config)
    }
}
