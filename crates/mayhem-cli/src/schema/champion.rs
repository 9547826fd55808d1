use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Data Dragon `champion.json`. Only the fields used for name lookup are read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionFile {
    #[serde(default)]
    pub version: Option<String>,
    pub data: BTreeMap<String, ChampionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionEntry {
    /// Internal identifier, e.g. `MonkeyKing`
    pub id: String,
    /// Numeric champion key as a string, e.g. `"62"`
    pub key: String,
    /// Display name, e.g. `Wukong`
    pub name: String,
}
