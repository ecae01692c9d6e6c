//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - writes phrases joined by a separator
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a formatter writing one phrase per line
    pub fn new(writer: W) -> Self {
        Self::with_separator(writer, "\n")
    }

    /// Create a formatter that puts `separator` between phrases
    pub fn with_separator(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
            written: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_phrase(&mut self, phrase: &str, _offset: usize) -> Result<()> {
        if self.written > 0 {
            self.writer.write_all(self.separator.as_bytes())?;
        }
        self.writer.write_all(phrase.trim().as_bytes())?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(separator: Option<&str>, phrases: &[&str]) -> String {
        let mut buffer = Vec::new();
        {
            let mut formatter = match separator {
                Some(sep) => TextFormatter::with_separator(&mut buffer, sep),
                None => TextFormatter::new(&mut buffer),
            };
            for phrase in phrases {
                formatter.format_phrase(phrase, 0).unwrap();
            }
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_one_phrase_per_line() {
        assert_eq!(render(None, &["私は", "本を ", "読む"]), "私は\n本を\n読む\n");
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(render(Some(" | "), &["私は", "本を", "読む"]), "私は | 本を | 読む\n");
    }

    #[test]
    fn test_no_phrases() {
        assert_eq!(render(None, &[]), "");
    }
}
