use std::path::PathBuf;

use crate::cli::ExitStatus;
use crate::core::OutputFormat;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Resolve(ResolveSummary),
    Init(InitSummary),
}

/// Where the rendered catalog went.
#[derive(Debug)]
pub enum OutputTarget {
    /// Rendered text, to be printed on stdout.
    Stdout(String),
    /// Written to a file. `error` holds the write failure, if any; the
    /// content is not re-offered on stdout in that case.
    File {
        path: PathBuf,
        error: Option<String>,
    },
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub format: OutputFormat,
    pub files_scanned: usize,
    pub files_ignored: usize,
    pub message_count: usize,
    pub missing_id_count: usize,
    /// Config file that was applied, if any.
    pub config_path: Option<PathBuf>,
    pub output: OutputTarget,
}

#[derive(Debug)]
pub struct ResolveSummary {
    pub text: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Extract(ExtractSummary {
                output: OutputTarget::File { error: Some(_), .. },
                ..
            }) => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
