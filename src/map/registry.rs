use std::collections::HashMap;

use glam::IVec3;

use super::tile::PlacedTile;
use crate::error::MapError;

/// Coordinate-keyed lookup over a map's tile list.
///
/// Stores indices into the tile slice it was built from, so it stays valid as long as
/// that slice is not reordered or resized.
#[derive(Debug, Default)]
pub struct TileRegistry {
    grid_to_tile: HashMap<IVec3, usize>,
}

impl TileRegistry {
    /// Indexes `tiles` by position and clears their route fields.
    pub fn build(tiles: &mut [PlacedTile]) -> Result<Self, MapError> {
        let mut grid_to_tile = HashMap::with_capacity(tiles.len());
        for (index, tile) in tiles.iter_mut().enumerate() {
            tile.reset_route();
            if grid_to_tile.insert(tile.position, index).is_some() {
                return Err(MapError::DuplicateCoordinate(tile.position));
            }
        }
        Ok(TileRegistry { grid_to_tile })
    }

    /// Index of the tile at `position`; `None` is the ordinary "off the built map" answer.
    pub fn get(&self, position: IVec3) -> Option<usize> {
        self.grid_to_tile.get(&position).copied()
    }

    pub fn contains(&self, position: IVec3) -> bool {
        self.grid_to_tile.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.grid_to_tile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid_to_tile.is_empty()
    }
}
