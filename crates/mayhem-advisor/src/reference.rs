use std::collections::HashMap;

use crate::record::{AugmentId, AugmentInfo};

/// Read-only augment reference table: id to name/tier, and name back to id.
pub trait AugmentReference {
    fn info(&self, id: AugmentId) -> Option<&AugmentInfo>;

    /// Resolves a display name to an id.
    ///
    /// Names read off the screen may carry stray whitespace; implementations
    /// should ignore leading and trailing whitespace.
    fn id_by_name(&self, name: &str) -> Option<AugmentId>;

    fn info_by_name(&self, name: &str) -> Option<&AugmentInfo> {
        self.id_by_name(name).and_then(|id| self.info(id))
    }
}

impl<R> AugmentReference for &R
where
    R: AugmentReference + ?Sized,
{
    fn info(&self, id: AugmentId) -> Option<&AugmentInfo> {
        (**self).info(id)
    }

    fn id_by_name(&self, name: &str) -> Option<AugmentId> {
        (**self).id_by_name(name)
    }
}

/// In-memory reference table.
#[derive(Debug, Clone, Default)]
pub struct AugmentCatalog {
    by_id: HashMap<AugmentId, AugmentInfo>,
    by_name: HashMap<String, AugmentId>,
}

impl AugmentCatalog {
    #[must_use]
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = AugmentInfo>,
    {
        let mut catalog = Self::default();
        for info in entries {
            catalog.insert(info);
        }
        catalog
    }

    /// Adds an entry, replacing any previous entry with the same id or name.
    pub fn insert(&mut self, info: AugmentInfo) {
        let name = info.name.trim().to_string();
        if let Some(previous) = self.by_name.insert(name.clone(), info.id) {
            if previous != info.id {
                tracing::warn!(%name, %previous, id = %info.id, "augment name reassigned to a new id");
                self.by_id.remove(&previous);
            }
        }
        if let Some(previous) = self.by_id.insert(info.id, info) {
            let previous_name = previous.name.trim();
            if previous_name != name {
                self.by_name.remove(previous_name);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AugmentInfo> + '_ {
        self.by_id.values()
    }
}

impl FromIterator<AugmentInfo> for AugmentCatalog {
    fn from_iter<T: IntoIterator<Item = AugmentInfo>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl AugmentReference for AugmentCatalog {
    fn info(&self, id: AugmentId) -> Option<&AugmentInfo> {
        self.by_id.get(&id)
    }

    fn id_by_name(&self, name: &str) -> Option<AugmentId> {
        self.by_name.get(name.trim()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AugmentTier;

    fn catalog() -> AugmentCatalog {
        AugmentCatalog::new([
            AugmentInfo::new(1, "Red Envelopes", AugmentTier::Silver),
            AugmentInfo::new(2, "Soul Eater", AugmentTier::Gold),
            AugmentInfo::new(3, "Veteran Sharpshooter", AugmentTier::Prismatic),
        ])
    }

    #[test]
    fn test_lookup_both_directions() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.id_by_name("Soul Eater"), Some(AugmentId(2)));
        assert_eq!(catalog.info(AugmentId(3)).unwrap().tier, AugmentTier::Prismatic);
        assert_eq!(
            catalog.info_by_name("Red Envelopes").unwrap().id,
            AugmentId(1)
        );
    }

    #[test]
    fn test_name_lookup_ignores_surrounding_whitespace() {
        let catalog = catalog();
        assert_eq!(catalog.id_by_name("  Soul Eater\n"), Some(AugmentId(2)));
    }

    #[test]
    fn test_unknown_entries() {
        let catalog = catalog();
        assert_eq!(catalog.id_by_name("Soul Eaterr"), None);
        assert!(catalog.info(AugmentId(99)).is_none());
    }

    #[test]
    fn test_insert_replaces_renamed_entry() {
        let mut catalog = catalog();
        catalog.insert(AugmentInfo::new(2, "Soul Siphon", AugmentTier::Gold));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.id_by_name("Soul Siphon"), Some(AugmentId(2)));
        assert_eq!(catalog.id_by_name("Soul Eater"), None);
    }

    #[test]
    fn test_reference_through_shared_borrow() {
        fn lookup<R: AugmentReference>(reference: R) -> Option<AugmentId> {
            reference.id_by_name("Veteran Sharpshooter")
        }
        let catalog = catalog();
        assert_eq!(lookup(&catalog), Some(AugmentId(3)));
    }
}
