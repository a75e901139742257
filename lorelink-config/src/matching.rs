use anyhow::{Result, bail};
use lorelink_core::{DEFAULT_TERMINATORS, DEFAULT_SUGGESTION_LIMIT, MENTION_TRIGGER, MentionRules};
use serde::{Deserialize, Serialize};

/// How mentions are recognized in text.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MatchingConfig {
    /// Closing punctuation that ends a mention, in addition to whitespace.
    #[serde(default = "default_terminators")]
    pub terminators: String,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
        }
    }
}

fn default_terminators() -> String {
    DEFAULT_TERMINATORS.iter().collect()
}

impl MatchingConfig {
    pub fn rules(&self) -> MentionRules {
        MentionRules::with_terminators(self.terminators.chars())
    }

    pub fn validate(&self) -> Result<()> {
        for ch in self.terminators.chars() {
            if ch.is_alphanumeric() {
                bail!("matching.terminators must not contain letters or digits (found {ch:?})");
            }
            if ch.is_whitespace() {
                bail!("matching.terminators must not contain whitespace; it always ends a mention");
            }
            if ch == MENTION_TRIGGER {
                bail!("matching.terminators must not contain the mention trigger {MENTION_TRIGGER:?}");
            }
        }
        Ok(())
    }
}

/// Autocomplete menu settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SuggestionsConfig {
    /// Maximum number of suggestions shown for a query.
    #[serde(default = "default_suggestion_limit")]
    pub limit: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            limit: default_suggestion_limit(),
        }
    }
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl SuggestionsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            bail!("suggestions.limit must be at least 1");
        }
        Ok(())
    }
}
