//! Debug and tracing configuration

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TRACE_TARGETS;

/// Trace level for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl TraceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    pub const ALL: [Self; 5] = [Self::Error, Self::Warn, Self::Info, Self::Debug, Self::Trace];

    /// Case-insensitive lookup by name.
    pub fn parse(value: &str) -> Option<Self> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unknown levels fall back to `info` instead of failing the whole file.
impl<'de> Deserialize<'de> for TraceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let level = Self::parse(&raw).unwrap_or_else(|| {
            tracing::warn!(value = %raw, "unknown trace_level; using {}", Self::default());
            Self::default()
        });
        Ok(level)
    }
}

/// Debug and tracing configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct DebugConfig {
    /// Enable structured logging to stderr
    #[serde(default)]
    pub enable_tracing: bool,

    /// Trace level (error, warn, info, debug, trace)
    #[serde(default)]
    pub trace_level: TraceLevel,

    /// Tracing targets to enable, e.g. "lorelink_core::tokenizer"
    #[serde(default)]
    pub trace_targets: Vec<String>,
}

impl DebugConfig {
    /// `EnvFilter` directive enabling every configured target at the
    /// configured level.
    pub fn filter_directive(&self) -> String {
        let level = self.trace_level.as_str();
        let directives: Vec<String> = if self.trace_targets.is_empty() {
            DEFAULT_TRACE_TARGETS
                .iter()
                .map(|target| format!("{target}={level}"))
                .collect()
        } else {
            self.trace_targets
                .iter()
                .map(|target| format!("{}={level}", target.trim()))
                .collect()
        };
        directives.join(",")
    }
}
