use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, ExtractSummary, OutputTarget};
use crate::{
    cli::args::ExtractCommand,
    config::{Config, load_config},
    core::{ExtractOptions, extract_catalog, render},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let root = cmd
        .dir
        .canonicalize()
        .with_context(|| format!("Cannot access directory: {}", cmd.dir.display()))?;

    let loaded = load_config(&root)?;
    let Config {
        extensions,
        ignores,
        component,
        format,
    } = loaded.config;

    let options = ExtractOptions {
        extensions: if cmd.extensions.is_empty() {
            extensions
        } else {
            cmd.extensions
        },
        ignores,
        component: cmd.component.unwrap_or(component),
    };
    let format = cmd.format.unwrap_or(format);

    let output = extract_catalog(&root, &options)?;
    let rendered = render(&output.catalog, format)?;

    let target = match cmd.output {
        Some(path) => {
            let error = write_output(&path, &rendered).err().map(|e| format!("{:#}", e));
            OutputTarget::File { path, error }
        }
        None => OutputTarget::Stdout(rendered),
    };

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            format,
            files_scanned: output.files_scanned,
            files_ignored: output.files_ignored,
            message_count: output.catalog.len(),
            missing_id_count: output.catalog.missing_id_count(),
            config_path: loaded.path,
            output: target,
        }),
    })
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
