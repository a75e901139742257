use std::process::ExitCode;

use anyhow::Result;
use lorelink_config::LorelinkConfig;
use lorelink_core::{MentionToken, Tokenizer};

use crate::cli::TokenizeArgs;
use crate::commands::{print_json, warn_shadowed_names};
use crate::main_helpers::resolve_text;
use crate::targets::load_targets;

pub(crate) fn handle(config: &LorelinkConfig, args: TokenizeArgs) -> Result<ExitCode> {
    let targets = load_targets(&args.targets.targets)?;
    let text = resolve_text(args.text)?;
    warn_shadowed_names(&targets);

    let tokenizer = Tokenizer::with_rules(&targets, config.matching.rules());
    let tokens = tokenizer.tokenize(&text);

    if args.json {
        print_json(&tokens)?;
    } else {
        for token in &tokens {
            println!("{}", describe(token));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn describe(token: &MentionToken<'_>) -> String {
    match token {
        MentionToken::Text { value } => format!("text     {value:?}"),
        MentionToken::Mention { value, target } => {
            format!("mention  {value:?} -> {} ({})", target.id(), target.kind())
        }
    }
}
