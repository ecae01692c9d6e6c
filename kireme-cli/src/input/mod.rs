//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

/// One text to segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, requested with `-`
    Stdin,
    /// A resolved file
    File(PathBuf),
}

impl InputSource {
    /// Resolve CLI input arguments; a lone `-` reads standard input
    pub fn resolve(patterns: &[String]) -> Result<Vec<Self>> {
        if patterns.len() == 1 && patterns[0] == "-" {
            return Ok(vec![InputSource::Stdin]);
        }
        Ok(resolve_patterns(patterns)?
            .into_iter()
            .map(InputSource::File)
            .collect())
    }

    /// Read the whole input
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
