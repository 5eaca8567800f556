//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan a directory for `<LocalizeText>` markers and render the catalog
//! - `resolve`: Resolve a message id against a key-value message file
//! - `init`: Initialize a `.localizerc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.verbose,
            Some(Command::Resolve(_)) | Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// The directory to start searching in
    pub dir: PathBuf,

    /// The output format (overrides config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// The file to write the output to (default: standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File extension to scan, repeatable (overrides config file)
    #[arg(short, long = "extension")]
    pub extensions: Vec<String>,

    /// Marker component name (overrides config file)
    #[arg(long)]
    pub component: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Message id to resolve
    pub id: String,

    /// Key-value message file (as written by `extract --format key-value`)
    #[arg(short, long)]
    pub messages: Option<PathBuf>,

    /// Replacement value, repeatable: --value user=Sam
    #[arg(long = "value", value_parser = parse_replacement)]
    pub values: Vec<(String, String)>,

    /// Fallback replacement value used when --value does not supply one
    #[arg(long = "default-value", value_parser = parse_replacement)]
    pub default_values: Vec<(String, String)>,

    /// Template used when the id is not in the message file
    #[arg(short, long = "default")]
    pub default_message: Option<String>,
}

fn parse_replacement(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got \"{}\"", raw)),
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract <LocalizeText> messages from source files
    Extract(ExtractCommand),
    /// Resolve a message id, filling in {{ placeholders }}
    Resolve(ResolveCommand),
    /// Initialize a new .localizerc.json configuration file
    Init,
}
