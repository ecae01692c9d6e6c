//! Explain command implementation

use crate::{
    config::CliConfig,
    model_source::{self, ModelArgs},
};
use anyhow::{Context, Result};
use clap::Args;
use kireme_engine::{Candidate, MlBreakEngine, PhraseSegmenter};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the explain command
#[derive(Debug, Args)]
pub struct ExplainArgs {
    /// Text to scan as a single subject
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Model selection
    #[command(flatten)]
    pub model: ModelArgs,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List only the features the model has a weight for
    #[arg(long)]
    pub known_only: bool,
}

impl ExplainArgs {
    /// Execute the explain command
    pub fn execute(&self) -> Result<()> {
        let mut config = CliConfig::load(self.config.as_deref())?;
        self.model.apply(&mut config.segmenter);
        let source_name = model_source::display_name(&config.segmenter);

        let segmenter = PhraseSegmenter::with_config(&config.segmenter)
            .with_context(|| format!("Failed to load model ({source_name})"))?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out, &segmenter, &source_name)?;
        out.flush()?;
        Ok(())
    }

    fn write_report<W: Write>(
        &self,
        out: &mut W,
        segmenter: &PhraseSegmenter,
        source_name: &str,
    ) -> Result<()> {
        let engine = segmenter.engine();
        let model = engine.model();
        writeln!(
            out,
            "Model: {source_name} ({} features, bias {})",
            model.len(),
            model.bias()
        )?;

        let chars: Vec<char> = self.text.chars().collect();
        for candidate in engine.explain(&self.text) {
            self.write_candidate(out, engine, &chars, &candidate)?;
        }

        let phrases = segmenter.phrases(&self.text)?;
        writeln!(out)?;
        writeln!(out, "Phrases: {}", phrases.join(" / "))?;
        Ok(())
    }

    fn write_candidate<W: Write>(
        &self,
        out: &mut W,
        engine: &MlBreakEngine,
        chars: &[char],
        candidate: &Candidate,
    ) -> Result<()> {
        let left = chars.get(candidate.index.wrapping_sub(1)).copied().unwrap_or(' ');
        let right = chars.get(candidate.index).copied().unwrap_or(' ');
        let decision = if candidate.is_break { "BREAK" } else { "-" };
        let features: Vec<&str> = candidate
            .features
            .iter()
            .map(String::as_str)
            .filter(|key| !self.known_only || engine.model().contains(key))
            .collect();

        writeln!(
            out,
            "{:>4}  {left}|{right}  {:>7}  {:<5}  {}",
            candidate.index,
            candidate.score,
            decision,
            features.join(" ")
        )?;
        Ok(())
    }
}
