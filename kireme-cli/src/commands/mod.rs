//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use kireme_engine::EmbeddedResources;

pub mod explain;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into phrases
    Process(process::ProcessArgs),

    /// Load a model and report its size and bias
    Validate(validate::ValidateArgs),

    /// Show the score and features of every candidate boundary in TEXT
    Explain(explain::ExplainArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List model bundles compiled into the binary
    Bundles,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::Explain(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text      One phrase per line, or joined with --separator");
                println!("  json      JSON array of phrases with byte offsets");
                println!("  markdown  Numbered list with a phrase count");
            }
            ListCommands::Bundles => {
                println!("Embedded model bundles:");
                for name in EmbeddedResources::bundle_names() {
                    println!("  {name}");
                }
            }
        }
    }
}
