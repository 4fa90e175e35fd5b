use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{keys_command, resolve_command, tokenize_command};

#[derive(Parser, Debug)]
#[command(name = "runargs")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve run arguments and print the run configuration as JSON
    #[command(visible_alias = "r")]
    Resolve {
        /// Run argument as a key and a value (e.g. -e class pkg.FooTest#testBar)
        #[arg(
            short = 'e',
            long = "arg",
            num_args = 2,
            value_names = ["KEY", "VALUE"],
            allow_hyphen_values = true
        )]
        args: Vec<String>,

        /// JSON or TOML file with base arguments; -e values override it
        #[arg(short = 'f', long)]
        args_file: Option<PathBuf>,

        /// Directory serving as the test storage backend
        #[arg(short, long)]
        storage_root: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Split a selector string into one selector per line
    #[command(visible_alias = "t")]
    Tokenize {
        /// Selectors, e.g. "pkg.Foo#bar[a,b],pkg.Baz"
        selectors: String,
    },
    /// List every recognized argument key
    Keys,
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Resolve {
                args,
                args_file,
                storage_root,
                pretty,
            } => resolve_command(&args, args_file.as_deref(), storage_root.as_deref(), pretty),
            Commands::Tokenize { selectors } => tokenize_command(&selectors),
            Commands::Keys => keys_command(),
        }
    }
}
