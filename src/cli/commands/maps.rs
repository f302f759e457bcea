//! CLI implementation for `mode_rotation maps`
//!
//! Lists the catalog grouped by base map.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::commands::AppContext;
use crate::cli::output::{is_json, print_detail, styled_mode};
use crate::core::catalog::{GroupId, Map, MapCatalog, MapId};
use crate::core::mode::Mode;
use crate::infra::filesystem;

#[derive(Debug, Serialize)]
struct GroupRow<'a> {
    gid: GroupId,
    name: &'a str,
    variants: Vec<VariantRow<'a>>,
}

#[derive(Debug, Serialize)]
struct VariantRow<'a> {
    id: MapId,
    nickname: &'a str,
    mode: Mode,
    players: u16,
    gag: bool,
    disabled: bool,
}

impl<'a> From<&'a Map> for VariantRow<'a> {
    fn from(map: &'a Map) -> Self {
        Self {
            id: map.id,
            nickname: &map.nickname,
            mode: map.mode,
            players: map.players,
            gag: map.is_gag,
            disabled: map.disabled,
        }
    }
}

/// Execute the maps command
pub fn execute(ctx: &AppContext, mode: Option<Mode>) -> Result<()> {
    let catalog = filesystem::load_catalog(&ctx.maps_path)
        .with_context(|| format!("Failed to load maps from {}", ctx.maps_path.display()))?;

    let groups = collect_groups(&catalog, mode);

    if is_json() {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for group in &groups {
        println!("{} (gid {})", group.name, group.gid);
        for v in &group.variants {
            let mut flags = Vec::new();
            if v.gag {
                flags.push("gag");
            }
            if v.disabled {
                flags.push("disabled");
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };

            println!(
                "  #{:<4} {} {} ({}){flags}",
                v.id,
                v.nickname,
                styled_mode(v.mode),
                v.players
            );
        }
    }

    let total: usize = groups.iter().map(|g| g.variants.len()).sum();
    print_detail(&format!("{} groups, {total} maps", groups.len()));

    Ok(())
}

/// Groups in file order, keeping only variants of `mode` when given
fn collect_groups(catalog: &MapCatalog, mode: Option<Mode>) -> Vec<GroupRow<'_>> {
    catalog
        .groups()
        .map(|group| GroupRow {
            gid: group.gid,
            name: &group.basename,
            variants: catalog
                .variants(group)
                .filter(|m| mode.map_or(true, |mode| m.mode == mode))
                .map(VariantRow::from)
                .collect(),
        })
        .filter(|g| !g.variants.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::tests::sample_catalog;

    #[test]
    fn test_collect_all_groups() {
        let catalog = sample_catalog();
        let groups = collect_groups(&catalog, None);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].variants.len(), 2);
    }

    #[test]
    fn test_collect_filters_by_mode() {
        let catalog = sample_catalog();
        let groups = collect_groups(&catalog, Some(Mode::DM));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Harbor");
        assert_eq!(groups[0].variants[0].id, 11);
    }

    #[test]
    fn test_variant_row_serializes_mode_name() {
        let catalog = sample_catalog();
        let row = VariantRow::from(catalog.map(21).unwrap());
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["mode"], "Siege");
        assert_eq!(json["disabled"], true);
    }
}
