use std::process::ExitCode;

use anyhow::Result;
use lorelink_config::LorelinkConfig;
use lorelink_core::{Tokenizer, collect_with};

use crate::cli::ExtractArgs;
use crate::commands::{print_json, print_targets, warn_shadowed_names};
use crate::main_helpers::resolve_text;
use crate::targets::load_targets;

pub(crate) fn handle(config: &LorelinkConfig, args: ExtractArgs) -> Result<ExitCode> {
    let targets = load_targets(&args.targets.targets)?;
    let text = resolve_text(args.text)?;
    warn_shadowed_names(&targets);

    let tokenizer = Tokenizer::with_rules(&targets, config.matching.rules());
    let mentioned = collect_with(&tokenizer, &text, args.kind);

    if args.json {
        print_json(&mentioned)?;
    } else {
        print_targets(&mentioned);
    }
    Ok(ExitCode::SUCCESS)
}
