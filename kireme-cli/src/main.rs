//! kireme - phrase boundary detection for Japanese text

use clap::Parser;
use kireme_cli::{commands::Commands, CliResult};

/// Phrase boundary detection for Japanese text
#[derive(Debug, Parser)]
#[command(name = "kireme", version, about = "Phrase boundary detection for Japanese text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_model_options_conflict() {
        let result = Cli::try_parse_from([
            "kireme",
            "validate",
            "--model-dir",
            "models",
            "--budoux-json",
            "model.json",
        ]);
        assert!(result.is_err());
    }
}
