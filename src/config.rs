//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
//! 3. Local config: `<dir>/.bintree.toml`
//! 4. Environment variables: `BINTREE_*` prefix, `__` between nested keys
//!    (e.g. `BINTREE_RENDER__SHOW_IDS=true`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};

/// How a tree is drawn by [`crate::tree_traits::TreeNodeConvert`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Append the arena slot to each label, e.g. `7 #3`
    pub show_ids: bool,
    /// Placeholder drawn for a missing left child when a right child exists
    pub empty_slot: Option<String>,
    /// Label prefix for left children
    pub left_prefix: String,
    /// Label prefix for right children
    pub right_prefix: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_ids: false,
            empty_slot: None,
            left_prefix: "L: ".into(),
            right_prefix: "R: ".into(),
        }
    }
}

/// Application settings loaded from config files and environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
}

/// Get the XDG config directory for bintree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bintree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bintree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".bintree.toml")
}

impl Settings {
    /// Load settings from all layers.
    ///
    /// Missing files are skipped; a file that exists but does not parse is an
    /// error.
    #[instrument(level = "debug")]
    pub fn load(dir: Option<&Path>) -> TreeResult<Self> {
        let defaults = RenderSettings::default();
        let mut builder = Config::builder()
            .set_default("render.show_ids", defaults.show_ids)
            .map_err(config_err)?
            .set_default("render.left_prefix", defaults.left_prefix)
            .map_err(config_err)?
            .set_default("render.right_prefix", defaults.right_prefix)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            debug!("global config: {}", global_path.display());
            builder = builder.add_source(File::from(global_path).required(false));
        }

        if let Some(dir) = dir {
            let local_path = local_config_path(dir);
            debug!("local config: {}", local_path.display());
            builder = builder.add_source(File::from(local_path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("BINTREE")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self).map_err(|e| TreeError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bintree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/bintree/bintree.toml
#   Local:  <dir>/.bintree.toml
#   Env:    BINTREE_* environment variables, e.g. BINTREE_RENDER__SHOW_IDS=true

[render]
# Append the arena slot to each node label
# show_ids = false

# Placeholder for a missing left child when the right child exists
# empty_slot = "∅"

# Label prefixes for left and right children
# left_prefix = "L: "
# right_prefix = "R: "
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config {
        message: e.to_string(),
    }
}
