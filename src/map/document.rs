//! JSON wire format for maps, compatible with the documents stored by the competition system.
//!
//! Fields this crate does not understand (competition, league, victims, ...) are kept in
//! `extra` so a document can be read, resolved and written back without losing them.

use std::collections::HashMap;

use glam::{IVec3, UVec3};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map as JsonMap, Value};

use super::tile::{PlacedTile, TileItems};
use super::Map;
use crate::catalog::Catalog;
use crate::config::ResolverConfig;
use crate::constants::UNSET_ANGLE;
use crate::direction::{Direction, Rotation};
use crate::error::{LinemapResult, MapError};
use crate::route::RouteSummary;

/// Formats a coordinate the way stored documents key tiles: `"x,y,z"`.
pub fn coord_key(position: IVec3) -> String {
    format!("{},{},{}", position.x, position.y, position.z)
}

/// Inverse of [`coord_key`].
pub fn parse_coord_key(key: &str) -> Result<IVec3, MapError> {
    let invalid = || MapError::InvalidCoordinateKey(key.to_string());
    let mut parts = key.split(',').map(|part| part.trim().parse::<i32>().map_err(|_| invalid()));
    let x = parts.next().ok_or_else(invalid)??;
    let y = parts.next().ok_or_else(invalid)??;
    let z = parts.next().ok_or_else(invalid)??;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok(IVec3::new(x, y, z))
}

fn angle_to_direction(angle: i32) -> Result<Option<Direction>, MapError> {
    if angle == UNSET_ANGLE {
        return Ok(None);
    }
    Direction::from_angle(angle).map(Some).ok_or(MapError::InvalidAngle(angle))
}

fn direction_to_angle(direction: Option<Direction>) -> i32 {
    direction.map_or(UNSET_ANGLE, |dir| i32::from(dir.angle()))
}

fn unset_angle() -> i32 {
    UNSET_ANGLE
}

/// Reads a route list, dropping `null` entries left behind by older resolvers.
fn deserialize_skipping_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Vec::<Option<T>>::deserialize(deserializer)?;
    Ok(items.into_iter().flatten().collect())
}

/// Accepts either a bare tile-type id or a populated tile-type object.
fn deserialize_tile_type_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TileTypeRef {
        Id(String),
        Populated {
            #[serde(alias = "_id")]
            id: String,
        },
    }

    Ok(match TileTypeRef::deserialize(deserializer)? {
        TileTypeRef::Id(id) => id,
        TileTypeRef::Populated { id } => id,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordDocument {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl From<CoordDocument> for IVec3 {
    fn from(coord: CoordDocument) -> Self {
        IVec3::new(coord.x, coord.y, coord.z)
    }
}

impl From<IVec3> for CoordDocument {
    fn from(position: IVec3) -> Self {
        CoordDocument {
            x: position.x,
            y: position.y,
            z: position.z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemsDocument {
    pub obstacles: u32,
    pub speedbumps: u32,
    pub ramp_points: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileDocument {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    #[serde(deserialize_with = "deserialize_tile_type_id")]
    pub tile_type: String,
    pub rot: i32,
    #[serde(default)]
    pub items: ItemsDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_up: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_down: Option<Direction>,
    #[serde(default)]
    pub check_point: bool,
    #[serde(default, deserialize_with = "deserialize_skipping_nulls")]
    pub index: Vec<u32>,
    #[serde(default, deserialize_with = "deserialize_skipping_nulls")]
    pub next: Vec<String>,
    #[serde(default, rename = "next_dir", deserialize_with = "deserialize_skipping_nulls")]
    pub next_dir: Vec<Direction>,
    #[serde(default = "unset_angle")]
    pub evac_entrance: i32,
    #[serde(default = "unset_angle")]
    pub evac_exit: i32,
    #[serde(flatten)]
    pub extra: JsonMap<String, Value>,
}

impl TileDocument {
    pub fn position(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }

    /// Joins the tile type from `catalog` and validates the placement.
    pub fn to_tile(&self, catalog: &Catalog) -> Result<PlacedTile, MapError> {
        let mut tile = PlacedTile::new(
            self.position(),
            catalog.get(&self.tile_type)?,
            Rotation::try_from(self.rot)?,
        )
        .with_checkpoint(self.check_point)
        .with_items(TileItems {
            obstacles: self.items.obstacles,
            speedbumps: self.items.speedbumps,
            ramp_points: self.items.ramp_points,
        });
        tile.level_up = self.level_up;
        tile.level_down = self.level_down;

        tile.index = self.index.iter().copied().collect();
        tile.next = self
            .next
            .iter()
            .map(|key| parse_coord_key(key))
            .collect::<Result<_, _>>()?;
        tile.next_dir = self.next_dir.iter().copied().collect();
        tile.evac_entrance = angle_to_direction(self.evac_entrance)?;
        tile.evac_exit = angle_to_direction(self.evac_exit)?;
        Ok(tile)
    }

    /// Overwrites the route fields with those of `tile`.
    pub fn update_route(&mut self, tile: &PlacedTile) {
        self.index = tile.index.to_vec();
        self.next = tile.next.iter().map(|&position| coord_key(position)).collect();
        self.next_dir = tile.next_dir.to_vec();
        self.evac_entrance = direction_to_angle(tile.evac_entrance);
        self.evac_exit = direction_to_angle(tile.evac_exit);
    }
}

impl From<&PlacedTile> for TileDocument {
    fn from(tile: &PlacedTile) -> Self {
        let mut document = TileDocument {
            x: tile.position.x,
            y: tile.position.y,
            z: tile.position.z,
            tile_type: tile.tile_type.id.clone(),
            rot: tile.rotation.degrees(),
            items: ItemsDocument {
                obstacles: tile.items.obstacles,
                speedbumps: tile.items.speedbumps,
                ramp_points: tile.items.ramp_points,
            },
            level_up: tile.level_up,
            level_down: tile.level_down,
            check_point: tile.checkpoint,
            index: Vec::new(),
            next: Vec::new(),
            next_dir: Vec::new(),
            evac_entrance: UNSET_ANGLE,
            evac_exit: UNSET_ANGLE,
            extra: JsonMap::new(),
        };
        document.update_route(tile);
        document
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDocument {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub length: u32,
    pub tiles: Vec<TileDocument>,
    pub start_tile: CoordDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_tile2: Option<CoordDocument>,
    #[serde(default)]
    pub index_count: u32,
    #[serde(default, rename = "EvacuationAreaLoPIndex")]
    pub evacuation_area_lop_index: u32,
    #[serde(flatten)]
    pub extra: JsonMap<String, Value>,
}

impl MapDocument {
    pub fn from_json(json: &str) -> Result<MapDocument, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builds a validated [`Map`], joining every tile type from `catalog`.
    pub fn to_map(&self, catalog: &Catalog) -> Result<Map, MapError> {
        let tiles = self
            .tiles
            .iter()
            .map(|tile| tile.to_tile(catalog))
            .collect::<Result<Vec<_>, _>>()?;

        let mut map = Map::new(
            self.name.clone(),
            UVec3::new(self.width, self.height, self.length),
            tiles,
            self.start_tile.into(),
            self.start_tile2.map(IVec3::from),
        )?;
        map.index_count = self.index_count;
        map.evacuation_area_lop_index = self.evacuation_area_lop_index;
        Ok(map)
    }

    /// Resolves the route of this document against `catalog` and writes it back in place.
    pub fn resolve(&mut self, catalog: &Catalog, config: &ResolverConfig) -> LinemapResult<RouteSummary> {
        let mut map = self.to_map(catalog)?;
        let summary = map.resolve_route(config)?;
        self.update_route(&map);
        Ok(summary)
    }

    /// Writes the route computed on `map` back into this document, keeping everything else.
    ///
    /// Tiles are matched by position; document tiles with no counterpart are left untouched.
    pub fn update_route(&mut self, map: &Map) {
        let by_position: HashMap<IVec3, &PlacedTile> = map.tiles.iter().map(|tile| (tile.position, tile)).collect();
        for document in &mut self.tiles {
            if let Some(tile) = by_position.get(&document.position()) {
                document.update_route(tile);
            }
        }
        self.index_count = map.index_count;
        self.evacuation_area_lop_index = map.evacuation_area_lop_index;
    }
}

impl From<&Map> for MapDocument {
    fn from(map: &Map) -> Self {
        MapDocument {
            name: map.name.clone(),
            width: map.dimensions.x,
            height: map.dimensions.y,
            length: map.dimensions.z,
            tiles: map.tiles.iter().map(TileDocument::from).collect(),
            start_tile: map.start_tile.into(),
            start_tile2: map.start_tile2.map(CoordDocument::from),
            index_count: map.index_count,
            evacuation_area_lop_index: map.evacuation_area_lop_index,
            extra: JsonMap::new(),
        }
    }
}
