use std::process::ExitCode;

use anyhow::Result;
use lorelink_config::LorelinkConfig;
use lorelink_core::match_targets;

use crate::cli::SuggestArgs;
use crate::commands::{print_json, print_targets};
use crate::targets::load_targets;

pub(crate) fn handle(config: &LorelinkConfig, args: &SuggestArgs) -> Result<ExitCode> {
    let targets = load_targets(&args.targets.targets)?;
    let limit = args
        .limit
        .map_or(config.suggestions.limit, |limit| limit.get());

    let matches = match_targets(&args.query, &targets, limit);
    tracing::debug!(query = %args.query, limit, matches = matches.len(), "suggest");

    if args.json {
        print_json(&matches)?;
    } else {
        print_targets(&matches);
    }
    Ok(ExitCode::SUCCESS)
}
