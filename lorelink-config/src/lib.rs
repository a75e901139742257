//! Layered `lorelink.toml` configuration for the mention engine CLI.
//!
//! Files are merged from lowest to highest precedence (user, then workspace
//! or an explicit path) and deserialized into [`LorelinkConfig`].

pub mod constants;
pub mod debug;
pub mod loader;
pub mod matching;

pub use debug::{DebugConfig, TraceLevel};
pub use loader::layers::{ConfigLayerEntry, ConfigLayerSource, ConfigLayerStack};
pub use loader::{ConfigManager, LorelinkConfig, merge_toml_values};
pub use matching::{MatchingConfig, SuggestionsConfig};
