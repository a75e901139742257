use std::process::ExitCode;

use anyhow::Result;
use lorelink_core::find_shadowed_names;

use crate::cli::LintArgs;
use crate::commands::{describe_shadowed, print_json};
use crate::targets::load_targets;

/// Exit status 1 when any name is shadowed.
pub(crate) fn handle(args: &LintArgs) -> Result<ExitCode> {
    let targets = load_targets(&args.targets.targets)?;
    let shadowed = find_shadowed_names(&targets);

    if args.json {
        print_json(&shadowed)?;
    } else if shadowed.is_empty() {
        println!("No shadowed names.");
    } else {
        for entry in &shadowed {
            println!("{}", describe_shadowed(entry));
        }
    }

    if shadowed.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
