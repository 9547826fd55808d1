use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use mayhem_advisor::{recommend::SelectThresholds, tier_group::ScoringPolicy};
use serde::{Deserialize, Serialize};

/// Contents of the TOML configuration file. Unknown tables or keys are errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub suggest: SelectThresholds,
    pub scoring: ScoringPolicy,
    pub data: DataConfig,
}

/// Where scraped data lives on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Root data directory; the other paths are relative to it.
    pub directory: PathBuf,
    /// Directory holding one `<champion id>.json` statistics file per champion.
    pub augment_stats_directory: PathBuf,
    /// JSON array of `{"id", "name", "tier"}` reference entries.
    pub reference_file: PathBuf,
    /// Data Dragon `champion.json`, used to resolve champion names.
    pub champion_file: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
            augment_stats_directory: PathBuf::from("augment_stats"),
            reference_file: PathBuf::from("augments.json"),
            champion_file: PathBuf::from("champions.json"),
        }
    }
}

impl DataConfig {
    #[must_use]
    pub fn augment_stats_path(&self) -> PathBuf {
        self.directory.join(&self.augment_stats_directory)
    }

    #[must_use]
    pub fn reference_path(&self) -> PathBuf {
        self.directory.join(&self.reference_file)
    }

    #[must_use]
    pub fn champion_path(&self) -> PathBuf {
        self.directory.join(&self.champion_file)
    }
}

impl AppConfig {
    /// Loads the configuration at `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };
        config
            .suggest
            .validate()
            .with_context(|| format!("Invalid [suggest] table in {}", path.display()))?;
        Ok(config)
    }
}
