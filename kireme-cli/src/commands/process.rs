//! Process command implementation

use crate::{
    config::CliConfig,
    error::CliError,
    input::InputSource,
    model_source::{self, ModelArgs},
    output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter},
    progress::ProgressReporter,
};
use anyhow::{Context, Result};
use clap::Args;
use kireme_engine::PhraseSegmenter;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); `-` reads standard input
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from the config file, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Separator between phrases in text output; `\n` and `\t` are unescaped
    #[arg(short, long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Model selection
    #[command(flatten)]
    pub model: ModelArgs,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Worker threads (default: number of CPUs)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<NonZeroUsize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one phrase per line
    Text,
    /// JSON array of phrases with offsets
    Json,
    /// Markdown numbered list
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting phrase segmentation");
        log::debug!("Arguments: {:?}", self);

        let mut config = CliConfig::load(self.config.as_deref())?;
        self.model.apply(&mut config.segmenter);
        let source_name = model_source::display_name(&config.segmenter);
        log::info!("Model: {source_name}");

        let segmenter = PhraseSegmenter::with_config(&config.segmenter)
            .with_context(|| format!("Failed to load model ({source_name})"))?;

        let sources = InputSource::resolve(&self.input)?;
        let texts = sources
            .iter()
            .map(InputSource::read)
            .collect::<Result<Vec<_>>>()?;

        let threads = self.threads.map_or_else(num_cpus::get, NonZeroUsize::get);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start worker threads")?;
        log::debug!("Segmenting {} inputs on {threads} threads", texts.len());

        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let all_boundaries = pool
            .install(|| segmenter.segment_all(&refs))
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;

        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };
        let separator = unescape(self.separator.as_deref().unwrap_or(&config.output.separator));
        let mut formatter = self.create_formatter(format, separator)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        for ((source, text), boundaries) in sources.iter().zip(&texts).zip(&all_boundaries) {
            for pair in boundaries.windows(2) {
                let phrase = &text[pair[0]..pair[1]];
                if phrase.trim().is_empty() {
                    continue;
                }
                formatter.format_phrase(phrase, pair[0])?;
            }
            log::debug!("{source}: {} phrases", boundaries.len() - 1);
            progress.file_completed(&source.to_string());
        }

        formatter.finish()?;
        progress.finish();

        log::info!("Segmented {} inputs", sources.len());
        Ok(())
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        separator: String,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::with_separator(writer, separator)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Expand `\n`, `\t` and `\\` written literally on the command line
fn unescape(separator: &str) -> String {
    let mut out = String::with_capacity(separator.len());
    let mut chars = separator.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
