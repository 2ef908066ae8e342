//! Named inventories of tile types available to map authors.

use serde::{Deserialize, Serialize};

use super::Catalog;
use crate::constants::{DEFAULT_TILE_SET_COUNT, DEFAULT_TILE_SET_ID, DEFAULT_TILE_SET_NAME};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSetEntry {
    #[serde(rename = "tileType")]
    pub tile_type: String,
    pub count: u32,
}

/// A named list of tile types with the number of physical copies available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSet {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub tiles: Vec<TileSetEntry>,
}

impl TileSet {
    /// The stock tile set: every catalog tile type, one hundred of each, in catalog order.
    pub fn default_for(catalog: &Catalog) -> TileSet {
        TileSet {
            id: DEFAULT_TILE_SET_ID.to_string(),
            name: DEFAULT_TILE_SET_NAME.to_string(),
            tiles: catalog
                .iter()
                .map(|tile_type| TileSetEntry {
                    tile_type: tile_type.id.clone(),
                    count: DEFAULT_TILE_SET_COUNT,
                })
                .collect(),
        }
    }

    /// Copies of `tile_type` in this set, or 0 if it is not part of it.
    pub fn count_of(&self, tile_type: &str) -> u32 {
        self.tiles
            .iter()
            .find(|entry| entry.tile_type == tile_type)
            .map_or(0, |entry| entry.count)
    }
}
