//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single phrase starting at byte `offset`
    fn format_phrase(&mut self, phrase: &str, offset: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::{JsonFormatter, PhraseData};
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
