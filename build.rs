use std::collections::BTreeMap;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SeedEntry {
    id: String,
    image: String,
    gaps: u8,
    intersections: u8,
    seesaw: u8,
    #[serde(default)]
    role: Option<String>,
    paths: BTreeMap<String, String>,
}

/// Canonical path-table order; entries are emitted in this order regardless of the JSON key order.
const DIRECTION_ORDER: [(&str, &str); 4] = [
    ("top", "Top"),
    ("right", "Right"),
    ("bottom", "Bottom"),
    ("left", "Left"),
];

fn direction_variant(name: &str) -> &'static str {
    DIRECTION_ORDER
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, variant)| *variant)
        .unwrap_or_else(|| panic!("Unknown direction in tile seed: {name}"))
}

fn role_variant(role: Option<&str>) -> &'static str {
    match role {
        None | Some("normal") => "Normal",
        Some("terminal") => "Terminal",
        Some("evacuation") => "Evacuation",
        Some(other) => panic!("Unknown tile role in tile seed: {other}"),
    }
}

fn main() {
    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("tile_type_seed.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    let seed_json = include_str!("./assets/tile_types.json");
    let entries: Vec<SeedEntry> = serde_json::from_str(seed_json).unwrap();

    writeln!(
        &mut file,
        "pub static TILE_TYPE_SEED: phf::OrderedMap<&'static str, SeedTileType> = phf::phf_ordered_map! {{"
    )
    .unwrap();

    for entry in entries {
        let paths = DIRECTION_ORDER
            .iter()
            .filter_map(|(key, variant)| {
                entry.paths.get(*key).map(|exit| {
                    format!(
                        "(crate::direction::Direction::{}, crate::direction::Direction::{})",
                        variant,
                        direction_variant(exit)
                    )
                })
            })
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(
            &mut file,
            "    \"{}\" => SeedTileType {{ image: \"{}\", gaps: {}, intersections: {}, seesaw: {}, role: crate::catalog::TileRole::{}, paths: &[{}] }},",
            entry.id,
            entry.image,
            entry.gaps,
            entry.intersections,
            entry.seesaw,
            role_variant(entry.role.as_deref()),
            paths
        )
        .unwrap();
    }

    writeln!(&mut file, "}};").unwrap();
    println!("cargo:rerun-if-changed=assets/tile_types.json");
}
