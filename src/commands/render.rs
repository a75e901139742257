use std::process::ExitCode;

use anyhow::Result;
use lorelink_config::LorelinkConfig;
use lorelink_core::{MentionToken, Tokenizer};

use crate::cli::RenderArgs;
use crate::commands::warn_shadowed_names;
use crate::main_helpers::resolve_text;
use crate::targets::load_targets;

pub(crate) fn handle(config: &LorelinkConfig, args: RenderArgs) -> Result<ExitCode> {
    let targets = load_targets(&args.targets.targets)?;
    let text = resolve_text(args.text)?;
    warn_shadowed_names(&targets);

    let tokenizer = Tokenizer::with_rules(&targets, config.matching.rules());
    println!("{}", render_markdown(&tokenizer.tokenize(&text)));
    Ok(ExitCode::SUCCESS)
}

/// Mentions become `[@as typed](href)`; targets without an href stay plain.
pub(crate) fn render_markdown(tokens: &[MentionToken<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            MentionToken::Mention { value, target } if !target.href().is_empty() => {
                out.push('[');
                out.push_str(value);
                out.push_str("](");
                out.push_str(target.href());
                out.push(')');
            }
            other => out.push_str(other.value()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorelink_core::{MentionKind, MentionTarget, tokenize};

    #[test]
    fn links_mentions_with_href() {
        let targets = vec![
            MentionTarget::new("1", "Elowen", MentionKind::Character, "/characters/1")
                .expect("target"),
            MentionTarget::new("2", "Ghost", MentionKind::Character, "").expect("target"),
        ];
        let tokens = tokenize("@elowen met @Ghost.", &targets);
        assert_eq!(
            render_markdown(&tokens),
            "[@elowen](/characters/1) met @Ghost."
        );
    }
}
