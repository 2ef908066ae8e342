mod common;

use glam::{IVec3, UVec3};
use linemap::direction::Rotation;
use linemap::error::MapError;
use linemap::map::{Map, PlacedTile, TileRegistry};
use pretty_assertions::assert_eq;

use common::{MapBuilder, EXIT, STRAIGHT};

#[test]
fn test_registry_lookup() {
    let mut map = MapBuilder::new()
        .tile(0, 0, STRAIGHT, Rotation::R0)
        .tile(1, 0, EXIT, Rotation::R0)
        .start(0, 0)
        .build();
    let registry = TileRegistry::build(&mut map.tiles).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get(IVec3::new(1, 0, 0)), Some(1));
    assert_eq!(registry.get(IVec3::new(1, 0, 1)), None);
    assert!(registry.contains(IVec3::ZERO));
    assert!(!registry.contains(IVec3::new(-1, 0, 0)));
}

#[test]
fn test_registry_clears_route_fields() {
    let mut map = MapBuilder::new().tile(0, 0, STRAIGHT, Rotation::R0).start(0, 0).build();
    map.tiles[0].index.push(7);
    map.tiles[0].next.push(IVec3::X);

    TileRegistry::build(&mut map.tiles).unwrap();

    assert!(map.tiles[0].index.is_empty());
    assert!(map.tiles[0].next.is_empty());
}

#[test]
fn test_registry_rejects_duplicates() {
    let builder = MapBuilder::new();
    let mut tiles = vec![
        PlacedTile::new(IVec3::ZERO, builder.tile_type(STRAIGHT), Rotation::R0),
        PlacedTile::new(IVec3::ZERO, builder.tile_type(EXIT), Rotation::R90),
    ];

    assert!(matches!(
        TileRegistry::build(&mut tiles),
        Err(MapError::DuplicateCoordinate(position)) if position == IVec3::ZERO
    ));
}

#[test]
fn test_map_validation() {
    let builder = MapBuilder::new();
    let tile = || PlacedTile::new(IVec3::ZERO, builder.tile_type(STRAIGHT), Rotation::R0);

    assert!(matches!(
        Map::new("flat", UVec3::new(1, 1, 0), vec![tile()], IVec3::ZERO, None),
        Err(MapError::InvalidDimensions(_))
    ));
    assert!(matches!(
        Map::new("dup", UVec3::ONE, vec![tile(), tile()], IVec3::ZERO, None),
        Err(MapError::DuplicateCoordinate(_))
    ));
    assert!(matches!(
        Map::new("nostart", UVec3::ONE, vec![tile()], IVec3::X, None),
        Err(MapError::MissingStartTile(position)) if position == IVec3::X
    ));
}

#[test]
fn test_unplaced_second_start_is_dropped() {
    let map = MapBuilder::new().tile(0, 0, STRAIGHT, Rotation::R0).start(0, 0).start2(-1, -1).build();
    assert_eq!(map.start_tile2, None);

    let map = MapBuilder::new()
        .tile(0, 0, STRAIGHT, Rotation::R0)
        .tile(1, 0, STRAIGHT, Rotation::R0)
        .start(0, 0)
        .start2(1, 0)
        .build();
    assert_eq!(map.start_tile2, Some(IVec3::X));
}
