//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs phrases as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    phrase_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            phrase_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_phrase(&mut self, phrase: &str, _offset: usize) -> Result<()> {
        self.phrase_count += 1;
        writeln!(self.writer, "{}. {}", self.phrase_count, phrase.trim())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total phrases: {}*", self.phrase_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
