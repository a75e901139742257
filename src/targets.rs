//! Target catalog loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lorelink_core::{MentionTarget, RawTarget};

/// Read a JSON array of targets, validating every entry.
pub(crate) fn load_targets(path: &Path) -> Result<Vec<MentionTarget>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read targets file: {}", path.display()))?;
    let targets = parse_targets(&content)
        .with_context(|| format!("Failed to load targets from {}", path.display()))?;
    tracing::debug!(count = targets.len(), path = %path.display(), "loaded targets");
    Ok(targets)
}

pub(crate) fn parse_targets(content: &str) -> Result<Vec<MentionTarget>> {
    let raw: Vec<RawTarget> =
        serde_json::from_str(content).context("Target catalog is not a valid JSON array")?;

    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| {
            MentionTarget::try_from(entry).with_context(|| format!("entry {index}"))
        })
        .collect()
}
