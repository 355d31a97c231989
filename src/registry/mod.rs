//! Champion tag registry.
//!
//! Maps a champion name to a single play-style tag. The built-in table is
//! small; champions missing from it are untagged and count
//! toward no archetype. Analyses take the registry through the
//! [`ChampionTags`] trait so tests and config files can swap the table.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::ChampionTag;

/// Registry loading errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read tags file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse tags file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Lookup from champion name to tag.
pub trait ChampionTags: Send + Sync {
    /// Tag for a champion, or `None` if untagged.
    fn tag_of(&self, champion: &str) -> Option<ChampionTag>;
}

impl ChampionTags for HashMap<String, ChampionTag> {
    fn tag_of(&self, champion: &str) -> Option<ChampionTag> {
        self.get(champion).copied()
    }
}

const BUILTIN_TAGS: &[(&str, ChampionTag)] = &[
    // Early skirmish
    ("Lee Sin", ChampionTag::Skirmish),
    ("Renekton", ChampionTag::Skirmish),
    ("LeBlanc", ChampionTag::Skirmish),
    ("Xin Zhao", ChampionTag::Skirmish),
    ("Elise", ChampionTag::Skirmish),
    ("Lucian", ChampionTag::Skirmish),
    ("Nidalee", ChampionTag::Skirmish),
    ("Kindred", ChampionTag::Skirmish),
    ("Sylas", ChampionTag::Skirmish),
    ("Jayce", ChampionTag::Skirmish),
    ("Wukong", ChampionTag::Skirmish),
    ("Taliyah", ChampionTag::Skirmish),
    // Protect the carry
    ("Lulu", ChampionTag::Protect),
    ("Janna", ChampionTag::Protect),
    ("Braum", ChampionTag::Protect),
    ("Kog'Maw", ChampionTag::Protect),
    ("Vayne", ChampionTag::Protect),
    ("Tahm Kench", ChampionTag::Protect),
    ("Milio", ChampionTag::Protect),
    ("Yuumi", ChampionTag::Protect),
    ("Zilean", ChampionTag::Protect),
    ("Rakan", ChampionTag::Protect),
    ("Karma", ChampionTag::Protect),
    // Heavy engage
    ("Malphite", ChampionTag::Engage),
    ("Amumu", ChampionTag::Engage),
    ("Leona", ChampionTag::Engage),
    ("Nautilus", ChampionTag::Engage),
    ("Jarvan IV", ChampionTag::Engage),
    ("Ornn", ChampionTag::Engage),
    ("Galio", ChampionTag::Engage),
    ("Vi", ChampionTag::Engage),
    ("Sejuani", ChampionTag::Engage),
    ("Sion", ChampionTag::Engage),
    ("K'Sante", ChampionTag::Engage),
    ("Alistar", ChampionTag::Engage),
    ("Maokai", ChampionTag::Engage),
    // Scaling
    ("Kayle", ChampionTag::Scaling),
    ("Kassadin", ChampionTag::Scaling),
    ("Jinx", ChampionTag::Scaling),
    ("Ryze", ChampionTag::Scaling),
    ("Sivir", ChampionTag::Scaling),
    ("Viktor", ChampionTag::Scaling),
    ("Smolder", ChampionTag::Scaling),
    ("Azir", ChampionTag::Scaling),
    ("Caitlyn", ChampionTag::Scaling),
    ("Senna", ChampionTag::Scaling),
    ("Vladimir", ChampionTag::Scaling),
];

/// Tags file layout: a `[tags]` table of champion = "tag".
#[derive(Debug, Deserialize)]
struct TagsFile {
    #[serde(default)]
    tags: BTreeMap<String, ChampionTag>,
}

/// Immutable champion → tag table.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    tags: HashMap<String, ChampionTag>,
}

impl TagRegistry {
    /// Build a registry from explicit entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, ChampionTag)>,
        S: Into<String>,
    {
        Self {
            tags: entries
                .into_iter()
                .map(|(name, tag)| (name.into(), tag))
                .collect(),
        }
    }

    /// The built-in demonstration table.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_TAGS.iter().copied())
    }

    /// Parse a registry from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, RegistryError> {
        let file: TagsFile = toml::from_str(contents)?;
        Ok(Self::from_entries(file.tags))
    }

    /// Load a registry from a TOML file, replacing the built-in table.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path)?;
        let registry = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded {} champion tags from {:?}", registry.len(), path);
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// All entries sorted by tag, then champion name.
    pub fn entries(&self) -> Vec<(&str, ChampionTag)> {
        let mut entries: Vec<_> = self
            .tags
            .iter()
            .map(|(name, tag)| (name.as_str(), *tag))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl ChampionTags for TagRegistry {
    fn tag_of(&self, champion: &str) -> Option<ChampionTag> {
        self.tags.get(champion).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_lookup() {
        let registry = TagRegistry::builtin();

        assert_eq!(registry.tag_of("Lee Sin"), Some(ChampionTag::Skirmish));
        assert_eq!(registry.tag_of("Kog'Maw"), Some(ChampionTag::Protect));
        assert_eq!(registry.tag_of("K'Sante"), Some(ChampionTag::Engage));
        assert_eq!(registry.tag_of("Azir"), Some(ChampionTag::Scaling));
    }

    #[test]
    fn test_untagged_champion() {
        let registry = TagRegistry::builtin();
        assert_eq!(registry.tag_of("Garen"), None);
        assert_eq!(registry.tag_of(""), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(TagRegistry::builtin().tag_of("lee sin"), None);
    }

    #[test]
    fn test_from_toml_str() {
        let registry = TagRegistry::from_toml_str(
            r#"
            [tags]
            "Garen" = "engage"
            "Darius" = "skirmish"
            "#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.tag_of("Garen"), Some(ChampionTag::Engage));
        assert_eq!(registry.tag_of("Lee Sin"), None);
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_tag() {
        let result = TagRegistry::from_toml_str("[tags]\nGaren = \"tank\"\n");
        assert!(matches!(result, Err(RegistryError::ParseError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tags]\nAhri = \"skirmish\"").unwrap();

        let registry = TagRegistry::from_file(file.path()).unwrap();
        assert_eq!(registry.tag_of("Ahri"), Some(ChampionTag::Skirmish));
    }

    #[test]
    fn test_entries_sorted_by_tag_then_name() {
        let registry = TagRegistry::from_entries([
            ("Jinx", ChampionTag::Scaling),
            ("Vi", ChampionTag::Engage),
            ("Amumu", ChampionTag::Engage),
        ]);

        assert_eq!(
            registry.entries(),
            vec![
                ("Amumu", ChampionTag::Engage),
                ("Vi", ChampionTag::Engage),
                ("Jinx", ChampionTag::Scaling),
            ]
        );
    }

    #[test]
    fn test_hashmap_fixture_implements_lookup() {
        let mut fixture = HashMap::new();
        fixture.insert("Garen".to_string(), ChampionTag::Protect);
        assert_eq!(fixture.tag_of("Garen"), Some(ChampionTag::Protect));
    }
}
