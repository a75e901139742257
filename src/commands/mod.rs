//! Handlers for each `lorelink` subcommand.

pub(crate) mod compose;
pub(crate) mod extract;
pub(crate) mod lint;
pub(crate) mod render;
pub(crate) mod suggest;
pub(crate) mod tokenize;

use anyhow::{Context, Result};
use lorelink_core::{MentionTarget, ShadowedName, find_shadowed_names};
use serde::Serialize;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{output}");
    Ok(())
}

pub(crate) fn format_target(target: &MentionTarget) -> String {
    format!("{}\t{}\t{}", target.id(), target.kind(), target.name())
}

pub(crate) fn print_targets(targets: &[&MentionTarget]) {
    for target in targets {
        println!("{}", format_target(target));
    }
}

pub(crate) fn describe_shadowed(entry: &ShadowedName<'_>) -> String {
    let losers: Vec<&str> = entry.shadowed.iter().map(|target| target.id()).collect();
    format!(
        "{:?}: {} wins over {}",
        entry.name(),
        entry.winner.id(),
        losers.join(", ")
    )
}

/// Print one stderr warning per name that several targets share, since only
/// the first of them can ever be matched.
pub(crate) fn warn_shadowed_names(targets: &[MentionTarget]) {
    for entry in find_shadowed_names(targets) {
        eprintln!("warning: shadowed target name {}", describe_shadowed(&entry));
    }
}
