use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::debug::DebugConfig;
use crate::matching::{MatchingConfig, SuggestionsConfig};

/// Effective `lorelink.toml` after all layers are merged.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct LorelinkConfig {
    /// How mentions are recognized in text
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Autocomplete settings
    #[serde(default)]
    pub suggestions: SuggestionsConfig,

    /// Debug and tracing settings
    #[serde(default)]
    pub debug: DebugConfig,
}

impl LorelinkConfig {
    pub fn validate(&self) -> Result<()> {
        self.matching
            .validate()
            .context("Invalid matching configuration")?;

        self.suggestions
            .validate()
            .context("Invalid suggestions configuration")?;

        Ok(())
    }

    /// Render the configuration as a `lorelink.toml` document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
