use anyhow::Result;

use super::{CommandResult, CommandSummary, ResolveSummary};
use crate::{
    cli::args::ResolveCommand,
    runtime::{ReplacementValues, Resolver},
};

pub fn resolve(cmd: ResolveCommand) -> Result<CommandResult> {
    let resolver = match &cmd.messages {
        Some(path) => Resolver::from_file(path)?,
        None => Resolver::default(),
    };
    let resolver = resolver.with_default_values(cmd.default_values.into_iter().collect());

    let values: ReplacementValues = cmd.values.into_iter().collect();
    let text = resolver.localize(&cmd.id, &values, cmd.default_message.as_deref());

    Ok(CommandResult {
        summary: CommandSummary::Resolve(ResolveSummary { text }),
    })
}
