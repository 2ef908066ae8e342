#![allow(dead_code)]

use std::sync::Arc;

use glam::{IVec3, UVec3};
use linemap::catalog::{Catalog, TileType};
use linemap::direction::Rotation;
use linemap::map::{Map, PlacedTile};

/// Straight tile, left <-> right.
pub const STRAIGHT: &str = "570c27c3f5a9dabe23f3af90";
/// Straight tile, top <-> bottom.
pub const VERTICAL: &str = "570c27c3f5a9dabe23f3af97";
/// Corner tile, left <-> bottom.
pub const CORNER: &str = "570c27c3f5a9dabe23f3af93";
pub const EXIT: &str = "58cfd6549792e9313b1610e0";
pub const EVACUATION: &str = "58cfd6549792e9313b1610e1";

/// Builds maps out of seeded catalog tiles on level 0 unless placed explicitly.
pub struct MapBuilder {
    catalog: Catalog,
    tiles: Vec<PlacedTile>,
    start: IVec3,
    start2: Option<IVec3>,
}

impl MapBuilder {
    pub fn new() -> Self {
        MapBuilder {
            catalog: Catalog::seeded(),
            tiles: Vec::new(),
            start: IVec3::ZERO,
            start2: None,
        }
    }

    pub fn tile_type(&self, id: &str) -> Arc<TileType> {
        self.catalog.get(id).unwrap()
    }

    pub fn tile(self, x: i32, y: i32, id: &str, rotation: Rotation) -> Self {
        let tile = PlacedTile::new(IVec3::new(x, y, 0), self.tile_type(id), rotation);
        self.place(tile)
    }

    pub fn checkpoint(self, x: i32, y: i32, id: &str, rotation: Rotation) -> Self {
        let tile = PlacedTile::new(IVec3::new(x, y, 0), self.tile_type(id), rotation).with_checkpoint(true);
        self.place(tile)
    }

    pub fn place(mut self, tile: PlacedTile) -> Self {
        self.tiles.push(tile);
        self
    }

    pub fn start(mut self, x: i32, y: i32) -> Self {
        self.start = IVec3::new(x, y, 0);
        self
    }

    pub fn start_at(mut self, position: IVec3) -> Self {
        self.start = position;
        self
    }

    pub fn start2(mut self, x: i32, y: i32) -> Self {
        self.start2 = Some(IVec3::new(x, y, 0));
        self
    }

    pub fn build(self) -> Map {
        let extent = self
            .tiles
            .iter()
            .fold(IVec3::ONE, |extent, tile| extent.max(tile.position + IVec3::ONE));
        Map::new("test", extent.as_uvec3().max(UVec3::ONE), self.tiles, self.start, self.start2).unwrap()
    }
}

pub fn tile_at(map: &Map, x: i32, y: i32) -> &PlacedTile {
    map.tile_at(IVec3::new(x, y, 0)).unwrap()
}

/// start -> straight -> exit, all unrotated.
pub fn corridor() -> Map {
    MapBuilder::new()
        .tile(0, 0, STRAIGHT, Rotation::R0)
        .tile(1, 0, STRAIGHT, Rotation::R0)
        .tile(2, 0, EXIT, Rotation::R0)
        .start(0, 0)
        .build()
}

/// Four corners forming a closed loop with no way out.
pub fn closed_loop() -> Map {
    MapBuilder::new()
        .tile(0, 0, CORNER, Rotation::R270)
        .tile(1, 0, CORNER, Rotation::R0)
        .tile(1, 1, CORNER, Rotation::R90)
        .tile(0, 1, CORNER, Rotation::R180)
        .start(0, 0)
        .build()
}
