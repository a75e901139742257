use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::constants::{APP_CONFIG_DIR, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use crate::loader::config::LorelinkConfig;
use crate::loader::layers::{ConfigLayerEntry, ConfigLayerSource, ConfigLayerStack};

/// Loads, merges and validates `lorelink.toml` layers.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: LorelinkConfig,
    config_path: Option<PathBuf>,
    layer_stack: ConfigLayerStack,
}

impl ConfigManager {
    /// Load configuration from the default locations.
    ///
    /// `LORELINK_CONFIG_PATH` replaces the workspace file when set.
    pub fn load() -> Result<Self> {
        if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
            let trimmed = config_path.trim();
            if !trimmed.is_empty() {
                return Self::load_from_file(trimmed).with_context(|| {
                    format!("Failed to load configuration from {CONFIG_PATH_ENV}={trimmed}")
                });
            }
        }

        let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
        Self::load_from_workspace(cwd)
    }

    /// Load the user file plus `lorelink.toml` in `workspace`, when present.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        Self::load_workspace_layers(&Self::user_config_paths(), workspace.as_ref())
    }

    pub(crate) fn load_workspace_layers(user_paths: &[PathBuf], workspace: &Path) -> Result<Self> {
        let workspace_file = workspace.join(CONFIG_FILE_NAME);
        let top = workspace_file
            .exists()
            .then(|| ConfigLayerSource::Workspace {
                file: workspace_file,
            });
        Self::load_layers(user_paths, top)
    }

    /// Load the user file plus an explicit file, which must exist.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Self::load_layers(
            &Self::user_config_paths(),
            Some(ConfigLayerSource::Explicit {
                file: path.to_path_buf(),
            }),
        )
    }

    /// Candidate per-user files, lowest precedence first.
    pub fn user_config_paths() -> Vec<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_CONFIG_DIR).join(CONFIG_FILE_NAME))
            .into_iter()
            .collect()
    }

    pub(crate) fn load_layers(
        user_paths: &[PathBuf],
        top: Option<ConfigLayerSource>,
    ) -> Result<Self> {
        let mut layer_stack = ConfigLayerStack::default();

        for user_path in user_paths.iter().filter(|path| path.exists()) {
            let toml = Self::load_toml_from_file(user_path)?;
            layer_stack.push(ConfigLayerEntry::new(
                ConfigLayerSource::User {
                    file: user_path.clone(),
                },
                toml,
            ));
        }

        if let Some(source) = top {
            let toml = Self::load_toml_from_file(source.file())?;
            layer_stack.push(ConfigLayerEntry::new(source, toml));
        }

        if layer_stack.is_empty() {
            let config = LorelinkConfig::default();
            config
                .validate()
                .context("Default configuration failed validation")?;
            tracing::debug!("no configuration files found; using defaults");

            return Ok(Self {
                config,
                config_path: None,
                layer_stack,
            });
        }

        let config: LorelinkConfig = layer_stack
            .effective_config()
            .try_into()
            .context("Failed to deserialize effective configuration")?;

        config
            .validate()
            .context("Configuration failed validation")?;

        let config_path = layer_stack
            .layers()
            .last()
            .map(|layer| layer.source.file().to_path_buf());

        tracing::debug!(
            layers = layer_stack.layers().len(),
            path = ?config_path,
            "loaded configuration"
        );

        Ok(Self {
            config,
            config_path,
            layer_stack,
        })
    }

    fn load_toml_from_file(path: &Path) -> Result<toml::Value> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let value: toml::Value = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(value)
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &LorelinkConfig {
        &self.config
    }

    /// Highest-precedence file that contributed, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn layer_stack(&self) -> &ConfigLayerStack {
        &self.layer_stack
    }

    /// Merged TOML of every layer, before defaults are applied
    pub fn effective_config(&self) -> toml::Value {
        self.layer_stack.effective_config()
    }
}
