//! The map aggregate: placed tiles, start tiles, and the route summary written back by resolution.

pub mod document;
pub mod registry;
pub mod tile;

use std::collections::HashSet;

use glam::{IVec3, UVec3};
use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::{MapError, RouteError};
use crate::route::{self, RouteSummary};

pub use registry::TileRegistry;
pub use tile::{PlacedTile, TileItems};

#[derive(Debug, Clone)]
pub struct Map {
    pub name: String,
    /// Width, height and number of levels.
    pub dimensions: UVec3,
    pub tiles: Vec<PlacedTile>,
    /// Where the route begins.
    pub start_tile: IVec3,
    /// Where the route resumes after the robot first reaches the evacuation area.
    pub start_tile2: Option<IVec3>,

    /// Number of steps on the resolved route.
    pub index_count: u32,
    /// Checkpoints passed when the route reached (or would have reached) the evacuation area.
    pub evacuation_area_lop_index: u32,
}

impl Map {
    /// Creates a validated map.
    ///
    /// A second start tile that does not name a placed tile is dropped; stored maps use an
    /// off-grid coordinate to mean "not configured".
    pub fn new(
        name: impl Into<String>,
        dimensions: UVec3,
        tiles: Vec<PlacedTile>,
        start_tile: IVec3,
        start_tile2: Option<IVec3>,
    ) -> Result<Map, MapError> {
        let mut map = Map {
            name: name.into(),
            dimensions,
            tiles,
            start_tile,
            start_tile2,
            index_count: 0,
            evacuation_area_lop_index: 0,
        };

        if let Some(second) = map.start_tile2 {
            if map.tile_at(second).is_none() {
                debug!(map = %map.name, position = %second, "Second start tile not on the map, ignoring");
                map.start_tile2 = None;
            }
        }

        map.validate()?;
        Ok(map)
    }

    /// Checks the invariants route resolution relies on.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.dimensions.min_element() == 0 {
            return Err(MapError::InvalidDimensions(self.dimensions));
        }

        let mut seen = HashSet::with_capacity(self.tiles.len());
        for tile in &self.tiles {
            if !seen.insert(tile.position) {
                return Err(MapError::DuplicateCoordinate(tile.position));
            }
        }

        if !seen.contains(&self.start_tile) {
            return Err(MapError::MissingStartTile(self.start_tile));
        }
        Ok(())
    }

    pub fn tile_at(&self, position: IVec3) -> Option<&PlacedTile> {
        self.tiles.iter().find(|tile| tile.position == position)
    }

    /// Resolves the route and writes it onto the tiles. See [`route::resolve`].
    pub fn resolve_route(&mut self, config: &ResolverConfig) -> Result<RouteSummary, RouteError> {
        route::resolve(self, config)
    }

    /// Clears every derived field on the map and its tiles.
    pub fn reset_route(&mut self) {
        self.index_count = 0;
        self.evacuation_area_lop_index = 0;
        self.tiles.iter_mut().for_each(PlacedTile::reset_route);
    }
}
