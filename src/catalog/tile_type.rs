use std::collections::BTreeMap;

use serde::Deserialize;

use crate::constants::{LEGACY_EVACUATION_TILE_IDS, LEGACY_TERMINAL_TILE_ID};
use crate::direction::{Direction, DIRECTIONS};
use crate::error::CatalogError;

/// How the traversal engine treats tiles of a given type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileRole {
    /// Follows its path table.
    #[default]
    Normal,
    /// End of the course; the route stops on arrival.
    Terminal,
    /// Part of the off-grid evacuation area. Has no paths.
    Evacuation,
}

impl TileRole {
    /// Classifies catalog entries that carry no explicit role by their stored identity.
    pub fn legacy(id: &str) -> TileRole {
        if id == LEGACY_TERMINAL_TILE_ID {
            TileRole::Terminal
        } else if LEGACY_EVACUATION_TILE_IDS.contains(&id) {
            TileRole::Evacuation
        } else {
            TileRole::Normal
        }
    }
}

/// Partial mapping from entry side to exit side, in the tile's unrotated frame.
///
/// Entries are always kept in canonical direction order (top, right, bottom, left),
/// whatever order they were declared in.
#[derive(Debug, Clone)]
pub struct PathTable {
    routes: micromap::Map<Direction, Direction, 4>,
}

impl PathTable {
    pub fn new(routes: impl IntoIterator<Item = (Direction, Direction)>) -> Self {
        let mut by_entry = [None; 4];
        for (entry, exit) in routes {
            by_entry[entry.ordinal() as usize] = Some(exit);
        }

        let mut table = micromap::Map::new();
        for entry in DIRECTIONS {
            if let Some(exit) = by_entry[entry.ordinal() as usize] {
                table.insert(entry, exit);
            }
        }
        PathTable { routes: table }
    }

    /// The side a robot leaves through after entering from `entry`, if that side is enterable.
    pub fn exit(&self, entry: Direction) -> Option<Direction> {
        self.routes.get(&entry).copied()
    }

    /// All `(entry, exit)` pairs in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (Direction, Direction)> + '_ {
        self.routes.iter().map(|(entry, exit)| (*entry, *exit))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.len() == 0
    }
}

/// Catalog definition of a tile's routing behaviour, independent of where it is placed.
#[derive(Debug, Clone)]
pub struct TileType {
    pub id: String,
    /// Display handle (image file name).
    pub image: String,
    pub gaps: u8,
    pub intersections: u8,
    pub seesaw: u8,
    pub role: TileRole,
    pub paths: PathTable,
}

impl TileType {
    pub fn is_terminal(&self) -> bool {
        self.role == TileRole::Terminal
    }

    pub fn is_evacuation(&self) -> bool {
        self.role == TileRole::Evacuation
    }
}

/// Catalog entry as stored in JSON. `_id` is accepted for documents exported from the old database.
#[derive(Debug, Deserialize)]
pub(crate) struct TileTypeDocument {
    #[serde(alias = "_id")]
    id: String,
    image: String,
    #[serde(default)]
    gaps: u8,
    #[serde(default)]
    intersections: u8,
    #[serde(default)]
    seesaw: u8,
    #[serde(default)]
    role: Option<TileRole>,
    #[serde(default)]
    paths: BTreeMap<String, Direction>,
}

impl TryFrom<TileTypeDocument> for TileType {
    type Error = CatalogError;

    fn try_from(doc: TileTypeDocument) -> Result<Self, Self::Error> {
        let role = doc.role.unwrap_or_else(|| TileRole::legacy(&doc.id));
        let routes = doc
            .paths
            .iter()
            .map(|(entry, exit)| {
                entry
                    .parse::<Direction>()
                    .map(|entry| (entry, *exit))
                    .map_err(|_| CatalogError::InvalidPathEntry {
                        tile_type: doc.id.clone(),
                        entry: entry.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TileType {
            paths: PathTable::new(routes),
            id: doc.id,
            image: doc.image,
            gaps: doc.gaps,
            intersections: doc.intersections,
            seesaw: doc.seesaw,
            role,
        })
    }
}
