//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs phrases as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    phrases: Vec<PhraseData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct PhraseData {
    /// The phrase text, trimmed
    pub text: String,
    /// Starting byte offset in the original text
    pub offset: usize,
    /// Length of the untrimmed phrase in bytes
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            phrases: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_phrase(&mut self, phrase: &str, offset: usize) -> Result<()> {
        self.phrases.push(PhraseData {
            text: phrase.trim().to_string(),
            offset,
            length: phrase.len(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.phrases)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_fields() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter.format_phrase("私は", 0).unwrap();
            formatter.format_phrase("本を ", 6).unwrap();
            formatter.finish().unwrap();
        }

        let phrases: Vec<PhraseData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(phrases.len(), 2);
        assert_eq!(phrases[1].text, "本を");
        assert_eq!(phrases[1].offset, 6);
        assert_eq!(phrases[1].length, 7);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
