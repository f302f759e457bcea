//! Map catalog
//!
//! The catalog is loaded from `all_maps.json`: a list of map groups, each
//! holding one or more playable variants. A variant belongs to exactly one
//! group and is played in exactly one mode.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::core::mode::Mode;
use crate::error::CatalogError;

/// Map identifier, unique across the catalog
pub type MapId = u16;

/// Group identifier, unique across the catalog
pub type GroupId = u16;

/// A playable map variant
#[derive(Debug, Clone)]
pub struct Map {
    /// Unique map id (referenced by the play log)
    pub id: MapId,
    /// Owning group
    pub group: GroupId,
    /// Name shown to players
    pub nickname: String,
    /// Mode this variant is played in
    pub mode: Mode,
    /// Maximum lobby size
    pub players: u16,
    /// Novelty map
    pub is_gag: bool,
    /// Never offered by the rotation
    pub disabled: bool,
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Map {}

impl Map {
    /// Short description, e.g. `Harbor TD (16)`
    #[must_use]
    pub fn info(&self) -> String {
        format!("{} {} ({})", self.nickname, self.mode, self.players)
    }

    /// Whether this map can be offered for the given mode and lobby size
    #[must_use]
    pub fn is_candidate(&self, mode: Mode, players: u16) -> bool {
        !self.disabled && self.mode == mode && self.players >= players
    }
}

/// A base map and its variants
#[derive(Debug, Clone)]
pub struct MapGroup {
    pub gid: GroupId,
    pub basename: String,
    /// Variant ids in file order
    pub variants: Vec<MapId>,
}

impl PartialEq for MapGroup {
    fn eq(&self, other: &Self) -> bool {
        self.gid == other.gid
    }
}

impl Eq for MapGroup {}

#[derive(Debug, Deserialize)]
struct RawGroup {
    gid: u16,
    name: String,
    variants: Vec<RawVariant>,
}

#[derive(Debug, Deserialize)]
struct RawVariant {
    id: u16,
    players: u16,
    mode: String,
    #[serde(default)]
    gag: Option<bool>,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    disabled: Option<bool>,
}

/// All known groups and maps, in file order
#[derive(Debug, Clone, Default)]
pub struct MapCatalog {
    groups: Vec<MapGroup>,
    maps: Vec<Map>,
    map_index: HashMap<MapId, usize>,
    group_ids: HashSet<GroupId>,
}

impl MapCatalog {
    /// Parse and validate the JSON map file contents
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawGroup> =
            serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut catalog = Self::default();
        for group in raw {
            catalog.add_group(group)?;
        }

        tracing::debug!(
            "Parsed {} groups with {} maps",
            catalog.groups.len(),
            catalog.maps.len()
        );

        Ok(catalog)
    }

    fn add_group(&mut self, raw: RawGroup) -> Result<(), CatalogError> {
        let gid = raw.gid;
        if raw.name.is_empty() {
            return Err(CatalogError::EmptyGroupName { gid });
        }
        if self.group_ids.contains(&gid) {
            return Err(CatalogError::DuplicateGroupId { gid });
        }

        let mut variants = Vec::with_capacity(raw.variants.len());
        for v in raw.variants {
            let mode: Mode = v.mode.parse().map_err(|_| CatalogError::UnknownMode {
                gid,
                mode: v.mode.clone(),
            })?;

            let nickname = match v.nickname {
                None => raw.name.clone(),
                Some(n) if n.is_empty() => {
                    return Err(CatalogError::EmptyNickname { gid, id: v.id })
                }
                Some(n) => n,
            };

            if self.map_index.contains_key(&v.id) {
                return Err(CatalogError::DuplicateMapId { gid, id: v.id });
            }

            self.map_index.insert(v.id, self.maps.len());
            self.maps.push(Map {
                id: v.id,
                group: gid,
                nickname,
                mode,
                players: v.players,
                is_gag: v.gag.unwrap_or(false),
                disabled: v.disabled.unwrap_or(false),
            });
            variants.push(v.id);
        }

        self.group_ids.insert(gid);
        self.groups.push(MapGroup {
            gid,
            basename: raw.name,
            variants,
        });

        Ok(())
    }

    /// Look up a map by id
    #[must_use]
    pub fn map(&self, id: MapId) -> Option<&Map> {
        self.map_index.get(&id).map(|&idx| &self.maps[idx])
    }

    /// Maps in file order
    pub fn maps(&self) -> impl Iterator<Item = &Map> {
        self.maps.iter()
    }

    /// Groups in file order
    pub fn groups(&self) -> impl Iterator<Item = &MapGroup> {
        self.groups.iter()
    }

    /// Variants of a group, in file order
    pub fn variants<'a>(&'a self, group: &'a MapGroup) -> impl Iterator<Item = &'a Map> + 'a {
        group.variants.iter().filter_map(move |id| self.map(*id))
    }

    /// Number of maps
    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Whether the catalog holds no maps
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Two groups: Harbor (TD, DM) and Quarry (TD, Siege).
    pub(crate) const SAMPLE_MAPS: &str = r#"[
        { "gid": 1, "name": "Harbor", "variants": [
            { "id": 10, "mode": "td", "players": 16 },
            { "id": 11, "mode": "DM", "players": 12, "nickname": "Harbor Docks" }
        ]},
        { "gid": 2, "name": "Quarry", "variants": [
            { "id": 20, "mode": "td", "players": 16, "gag": true },
            { "id": 21, "mode": "siege", "players": 16, "disabled": true }
        ]}
    ]"#;

    pub(crate) fn sample_catalog() -> MapCatalog {
        MapCatalog::from_json(SAMPLE_MAPS).unwrap()
    }

    #[test]
    fn test_parse_sample() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.groups().count(), 2);

        let docks = catalog.map(11).unwrap();
        assert_eq!(docks.nickname, "Harbor Docks");
        assert_eq!(docks.mode, Mode::DM);
        assert_eq!(docks.players, 12);
        assert_eq!(docks.group, 1);
    }

    #[test]
    fn test_nickname_defaults_to_group_name() {
        let catalog = sample_catalog();
        assert_eq!(catalog.map(10).unwrap().nickname, "Harbor");
    }

    #[test]
    fn test_optional_flags() {
        let catalog = sample_catalog();
        assert!(catalog.map(20).unwrap().is_gag);
        assert!(!catalog.map(10).unwrap().is_gag);
        assert!(catalog.map(21).unwrap().disabled);
        assert!(!catalog.map(20).unwrap().disabled);
    }

    #[test]
    fn test_variants_keep_file_order() {
        let catalog = sample_catalog();
        let group = catalog.groups().find(|g| g.gid == 2).unwrap();
        let ids: Vec<MapId> = catalog.variants(group).map(|m| m.id).collect();
        assert_eq!(ids, vec![20, 21]);
    }

    #[test]
    fn test_is_candidate() {
        let catalog = sample_catalog();
        let docks = catalog.map(11).unwrap();
        assert!(docks.is_candidate(Mode::DM, 12));
        assert!(docks.is_candidate(Mode::DM, 0));
        assert!(!docks.is_candidate(Mode::DM, 16));
        assert!(!docks.is_candidate(Mode::TD, 8));

        let disabled = catalog.map(21).unwrap();
        assert!(!disabled.is_candidate(Mode::Siege, 8));
    }

    #[test]
    fn test_info() {
        let catalog = sample_catalog();
        assert_eq!(catalog.map(11).unwrap().info(), "Harbor Docks DM (12)");
    }

    #[test]
    fn test_not_a_list() {
        let err = MapCatalog::from_json(r#"{"gid": 1}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_gid_must_be_u16() {
        let json = r#"[{ "gid": 70000, "name": "Big", "variants": [] }]"#;
        assert!(matches!(
            MapCatalog::from_json(json).unwrap_err(),
            CatalogError::Parse(_)
        ));
    }

    #[test]
    fn test_missing_players_is_error() {
        let json = r#"[{ "gid": 1, "name": "A", "variants": [{ "id": 1, "mode": "td" }] }]"#;
        assert!(matches!(
            MapCatalog::from_json(json).unwrap_err(),
            CatalogError::Parse(_)
        ));
    }

    #[test]
    fn test_gag_must_be_bool() {
        let json = r#"[{ "gid": 1, "name": "A", "variants": [
            { "id": 1, "mode": "td", "players": 8, "gag": "yes" }
        ]}]"#;
        assert!(matches!(
            MapCatalog::from_json(json).unwrap_err(),
            CatalogError::Parse(_)
        ));
    }

    #[test]
    fn test_empty_group_name() {
        let json = r#"[{ "gid": 3, "name": "", "variants": [] }]"#;
        assert!(matches!(
            MapCatalog::from_json(json).unwrap_err(),
            CatalogError::EmptyGroupName { gid: 3 }
        ));
    }

    #[test]
    fn test_unknown_mode() {
        let json = r#"[{ "gid": 1, "name": "A", "variants": [
            { "id": 1, "mode": "koth", "players": 8 }
        ]}]"#;
        match MapCatalog::from_json(json).unwrap_err() {
            CatalogError::UnknownMode { gid, mode } => {
                assert_eq!(gid, 1);
                assert_eq!(mode, "koth");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_nickname() {
        let json = r#"[{ "gid": 1, "name": "A", "variants": [
            { "id": 5, "mode": "td", "players": 8, "nickname": "" }
        ]}]"#;
        assert!(matches!(
            MapCatalog::from_json(json).unwrap_err(),
            CatalogError::EmptyNickname { gid: 1, id: 5 }
        ));
    }

    #[test]
    fn test_duplicate_map_id_across_groups() {
        let json = r#"[
            { "gid": 1, "name": "A", "variants": [{ "id": 5, "mode": "td", "players": 8 }] },
            { "gid": 2, "name": "B", "variants": [{ "id": 5, "mode": "dm", "players": 8 }] }
        ]"#;
        assert!(matches!(
            MapCatalog::from_json(json).unwrap_err(),
            CatalogError::DuplicateMapId { gid: 2, id: 5 }
        ));
    }

    #[test]
    fn test_duplicate_group_id() {
        let json = r#"[
            { "gid": 1, "name": "A", "variants": [] },
            { "gid": 1, "name": "B", "variants": [] }
        ]"#;
        assert!(matches!(
            MapCatalog::from_json(json).unwrap_err(),
            CatalogError::DuplicateGroupId { gid: 1 }
        ));
    }
}
