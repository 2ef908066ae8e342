//! The built-in tile-type table, compiled from `assets/tile_types.json` by `build.rs`.

use super::tile_type::{PathTable, TileRole, TileType};
use crate::direction::Direction;

/// A tile type as baked into the binary.
#[derive(Debug, Copy, Clone)]
pub struct SeedTileType {
    pub image: &'static str,
    pub gaps: u8,
    pub intersections: u8,
    pub seesaw: u8,
    pub role: TileRole,
    /// `(entry, exit)` pairs, already in canonical order.
    pub paths: &'static [(Direction, Direction)],
}

impl SeedTileType {
    pub fn to_tile_type(&self, id: &str) -> TileType {
        TileType {
            id: id.to_string(),
            image: self.image.to_string(),
            gaps: self.gaps,
            intersections: self.intersections,
            seesaw: self.seesaw,
            role: self.role,
            paths: PathTable::new(self.paths.iter().copied()),
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/tile_type_seed.rs"));
