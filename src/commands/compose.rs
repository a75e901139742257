use std::process::ExitCode;

use anyhow::{Result, anyhow, bail};
use lorelink_config::LorelinkConfig;
use lorelink_core::{ComposeState, MentionComposer, MentionTarget};
use serde::Serialize;

use crate::cli::ComposeArgs;
use crate::commands::{format_target, print_json};
use crate::targets::load_targets;

#[derive(Debug, Serialize)]
struct ComposeReport<'a> {
    state: &'static str,
    query: Option<&'a str>,
    selected: Option<usize>,
    suggestions: Vec<&'a MentionTarget>,
    text: &'a str,
    cursor: usize,
}

pub(crate) fn handle(config: &LorelinkConfig, args: ComposeArgs) -> Result<ExitCode> {
    let targets = load_targets(&args.targets.targets)?;
    let cursor = args.cursor.unwrap_or(args.text.len());
    if !args.text.is_char_boundary(cursor) {
        bail!(
            "Cursor {cursor} is not a character boundary in a {}-byte text",
            args.text.len()
        );
    }

    let mut composer = MentionComposer::new(&targets)
        .with_rules(config.matching.rules())
        .with_limit(config.suggestions.limit);
    composer.set_text(args.text, cursor);

    if let Some(id) = args.accept.as_deref() {
        let target = targets
            .iter()
            .find(|target| target.id() == id)
            .ok_or_else(|| anyhow!("No target with id '{id}'"))?;
        if !composer.accept(target) {
            bail!("No mention is being composed at cursor {cursor}");
        }
    }

    let report = ComposeReport {
        state: match composer.state() {
            ComposeState::Idle => "idle",
            ComposeState::Composing(_) => "composing",
        },
        query: composer.query(),
        selected: composer.selected_index(),
        suggestions: composer.suggestions(),
        text: composer.text(),
        cursor: composer.cursor(),
    };

    if args.json {
        print_json(&report)?;
    } else {
        print_report(&report);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &ComposeReport<'_>) {
    println!("state: {}", report.state);
    if let Some(query) = report.query {
        println!("query: {query:?}");
    }
    for (index, target) in report.suggestions.iter().enumerate() {
        let marker = if report.selected == Some(index) { '>' } else { ' ' };
        println!("{marker} {}", format_target(target));
    }
    println!("text: {:?}", report.text);
    println!("cursor: {}", report.cursor);
}
