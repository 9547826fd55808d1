//! Champion reference table, used to resolve the champion a player is on.

use std::{collections::HashMap, convert::Infallible, fmt, str::FromStr};

use crate::{AdvisorError, record::ChampionId};

/// One champion of the reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionInfo {
    pub id: ChampionId,
    /// Display name, e.g. `Wukong`.
    pub name: String,
    /// Internal identifier, e.g. `MonkeyKing`.
    pub slug: Option<String>,
}

impl ChampionInfo {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ChampionId(id),
            name: name.into(),
            slug: None,
        }
    }

    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

/// Champion table indexed by id and by case-insensitive name or slug.
#[derive(Debug, Clone, Default)]
pub struct ChampionCatalog {
    by_id: HashMap<ChampionId, ChampionInfo>,
    by_name: HashMap<String, ChampionId>,
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ChampionCatalog {
    #[must_use]
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ChampionInfo>,
    {
        let mut catalog = Self::default();
        for info in entries {
            catalog.insert(info);
        }
        catalog
    }

    pub fn insert(&mut self, info: ChampionInfo) {
        for key in lookup_keys(&info) {
            if let Some(previous) = self.by_name.insert(key.clone(), info.id) {
                if previous != info.id {
                    tracing::warn!(name = %key, %previous, id = %info.id, "champion name reassigned");
                }
            }
        }
        self.by_id.insert(info.id, info);
    }

    #[must_use]
    pub fn get(&self, id: ChampionId) -> Option<&ChampionInfo> {
        self.by_id.get(&id)
    }

    /// Looks a champion up by display name or slug, ignoring case.
    #[must_use]
    pub fn id_by_name(&self, name: &str) -> Option<ChampionId> {
        self.by_name.get(&name_key(name)).copied()
    }

    pub fn resolve_name(&self, name: &str) -> Result<ChampionId, AdvisorError> {
        self.id_by_name(name)
            .ok_or_else(|| AdvisorError::UnknownChampionName {
                name: name.trim().to_string(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

fn lookup_keys(info: &ChampionInfo) -> Vec<String> {
    let mut keys = vec![name_key(&info.name)];
    if let Some(slug) = &info.slug {
        let slug = name_key(slug);
        if slug != keys[0] {
            keys.push(slug);
        }
    }
    keys
}

impl FromIterator<ChampionInfo> for ChampionCatalog {
    fn from_iter<T: IntoIterator<Item = ChampionInfo>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// A champion given either by numeric id or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChampionSelector {
    Id(ChampionId),
    Name(String),
}

impl FromStr for ChampionSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(s.to_string()),
        })
    }
}

impl fmt::Display for ChampionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}
