use std::path::{Path, PathBuf};

use anyhow::Context;
use mayhem_advisor::{
    SourceError,
    champion::{ChampionCatalog, ChampionInfo},
    record::{AugmentInfo, AugmentStat, ChampionId},
    reference::AugmentCatalog,
    source::AugmentStatSource,
};

use crate::{
    schema::{champion::ChampionFile, stats::StatFile},
    util,
};

/// Reads per-champion statistics files from a directory.
///
/// Champion `N` is read from `<directory>/N.json`.
#[derive(Debug, Clone)]
pub struct JsonStatDirectory {
    directory: PathBuf,
}

impl JsonStatDirectory {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn champion_path(&self, champion: ChampionId) -> PathBuf {
        self.directory.join(format!("{champion}.json"))
    }
}

impl AugmentStatSource for JsonStatDirectory {
    fn load_stats(&self, champion: ChampionId) -> Result<Vec<AugmentStat>, SourceError> {
        let path = self.champion_path(champion);
        let file: StatFile =
            util::read_json_file("augment statistics", &path).map_err(SourceError::new)?;
        match file.fetched_at {
            Some(fetched_at) => tracing::info!(
                %champion,
                %fetched_at,
                records = file.data.len(),
                "loaded augment statistics"
            ),
            None => tracing::info!(
                %champion,
                records = file.data.len(),
                "loaded augment statistics (fetch time unknown)"
            ),
        }
        Ok(file.data)
    }
}

/// Loads the augment reference table.
pub fn load_catalog<P>(path: P) -> anyhow::Result<AugmentCatalog>
where
    P: AsRef<Path>,
{
    let entries: Vec<AugmentInfo> = util::read_json_file("augment reference", path)?;
    let catalog = AugmentCatalog::new(entries);
    tracing::debug!(entries = catalog.len(), "loaded augment reference");
    Ok(catalog)
}

/// Loads the champion table from a Data Dragon `champion.json`.
pub fn load_champions<P>(path: P) -> anyhow::Result<ChampionCatalog>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file: ChampionFile = util::read_json_file("champion", path)?;
    let champions = file
        .data
        .into_values()
        .map(|entry| {
            let id = entry.key.parse::<u32>().with_context(|| {
                format!(
                    "Invalid key {:?} for champion {} in {}",
                    entry.key,
                    entry.id,
                    path.display()
                )
            })?;
            Ok::<_, anyhow::Error>(ChampionInfo::new(id, entry.name).with_slug(entry.id))
        })
        .collect::<anyhow::Result<ChampionCatalog>>()?;
    tracing::debug!(
        entries = champions.len(),
        version = file.version.as_deref().unwrap_or("unknown"),
        "loaded champion table"
    );
    Ok(champions)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use mayhem_advisor::{
        record::{AugmentId, AugmentTier, StatValue},
        reference::AugmentReference,
    };
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_stats_from_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("86.json"),
            r#"{
                "fetched_at": "2026-10-01T12:00:00Z",
                "data": [
                    {"id": 1, "performance": 52.5, "popular": 120},
                    {"id": 2, "performance": 170, "popular": 40}
                ]
            }"#,
        )
        .unwrap();

        let source = JsonStatDirectory::new(dir.path());
        let stats = source.load_stats(ChampionId(86)).unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0], AugmentStat::new(1, 52.5, 120.0));
        assert_eq!(stats[1].performance, Some(StatValue::Number(170.0)));
    }

    #[test]
    fn test_load_stats_without_fetch_time() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("7.json"), r#"{"data": []}"#).unwrap();
        let stats = JsonStatDirectory::new(dir.path())
            .load_stats(ChampionId(7))
            .unwrap();
        assert!(stats.is_empty());
    }

    #[test]
    fn test_load_stats_missing_champion() {
        let dir = TempDir::new().unwrap();
        let err = JsonStatDirectory::new(dir.path())
            .load_stats(ChampionId(1))
            .unwrap_err();
        assert!(err.to_string().contains("1.json"));
    }

    #[test]
    fn test_load_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("augments.json");
        fs::write(
            &path,
            r#"[
                {"id": 1, "name": "Red Envelopes", "tier": "silver"},
                {"id": 2, "name": "Tank Engine", "tier": "gold"}
            ]"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.id_by_name("Tank Engine"), Some(AugmentId(2)));
        assert_eq!(catalog.info(AugmentId(1)).unwrap().tier, AugmentTier::Silver);
    }

    #[test]
    fn test_load_champions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("champions.json");
        fs::write(
            &path,
            r#"{
                "type": "champion",
                "version": "14.1.1",
                "data": {
                    "Garen": {"id": "Garen", "key": "86", "name": "Garen", "title": "the Might of Demacia"},
                    "MonkeyKing": {"id": "MonkeyKing", "key": "62", "name": "Wukong"}
                }
            }"#,
        )
        .unwrap();

        let champions = load_champions(&path).unwrap();
        assert_eq!(champions.len(), 2);
        assert_eq!(champions.id_by_name("Wukong"), Some(ChampionId(62)));
        assert_eq!(champions.id_by_name("monkeyking"), Some(ChampionId(62)));
        assert_eq!(champions.get(ChampionId(86)).unwrap().name, "Garen");
    }

    #[test]
    fn test_load_champions_rejects_non_numeric_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("champions.json");
        fs::write(
            &path,
            r#"{"data": {"Garen": {"id": "Garen", "key": "garen", "name": "Garen"}}}"#,
        )
        .unwrap();
        let err = load_champions(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid key \"garen\" for champion Garen"));
    }
}
