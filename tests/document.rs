use glam::IVec3;
use linemap::catalog::Catalog;
use linemap::config::ResolverConfig;
use linemap::direction::Direction;
use linemap::error::{CatalogError, LinemapError, MapError};
use linemap::map::document::MapDocument;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn stored_map() -> Value {
    json!({
        "_id": "5c1a0000000000000000abcd",
        "competition": "5c19ffffffffffffffffffff",
        "name": "Restart",
        "width": 6,
        "height": 1,
        "length": 1,
        "finished": true,
        "startTile": {"x": 0, "y": 0, "z": 0},
        "startTile2": {"x": 3, "y": 0, "z": 0},
        "numberOfDropTiles": 0,
        "tiles": [
            {"x": 0, "y": 0, "z": 0, "tileType": "570c27c3f5a9dabe23f3af90", "rot": 0,
             "items": {"obstacles": 1, "speedbumps": 0, "rampPoints": false}},
            {"x": 1, "y": 0, "z": 0, "tileType": {"_id": "570c27c3f5a9dabe23f3af90", "image": "tile-0.png"},
             "rot": 180, "checkPoint": true, "victims": {"top": "silver"}},
            {"x": 2, "y": 0, "z": 0, "tileType": "58cfd6549792e9313b1610e1", "rot": 0},
            {"x": 3, "y": 0, "z": 0, "tileType": "570c27c3f5a9dabe23f3af90", "rot": 0,
             "index": [42], "next": ["9,9,9"]},
            {"x": 4, "y": 0, "z": 0, "tileType": "570c27c3f5a9dabe23f3af90", "rot": 0, "checkPoint": true},
            {"x": 5, "y": 0, "z": 0, "tileType": "58cfd6549792e9313b1610e0", "rot": 90}
        ]
    })
}

fn resolve_document(value: Value) -> MapDocument {
    let mut document = MapDocument::from_json(&value.to_string()).unwrap();
    document.resolve(&Catalog::seeded(), &ResolverConfig::default()).unwrap();
    document
}

#[test]
fn test_stored_document_loads() {
    let document = MapDocument::from_json(&stored_map().to_string()).unwrap();
    let map = document.to_map(&Catalog::seeded()).unwrap();

    assert_eq!(map.name, "Restart");
    assert_eq!(map.tiles.len(), 6);
    assert_eq!(map.start_tile2, Some(IVec3::new(3, 0, 0)));
    assert_eq!(map.tiles[0].items.obstacles, 1);
    assert!(map.tiles[1].checkpoint);
    assert_eq!(map.tiles[1].tile_type.id, "570c27c3f5a9dabe23f3af90");
}

#[test]
fn test_resolved_route_written_back() {
    let document = resolve_document(stored_map());
    let output = serde_json::to_value(&document).unwrap();

    assert_eq!(output["indexCount"], json!(4));
    assert_eq!(output["EvacuationAreaLoPIndex"], json!(1));

    let tiles = &output["tiles"];
    assert_eq!(tiles[0]["index"], json!([0]));
    assert_eq!(tiles[0]["next"], json!(["1,0,0"]));
    assert_eq!(tiles[0]["next_dir"], json!(["right"]));
    assert_eq!(tiles[1]["next"], json!(["3,0,0"]));
    assert_eq!(tiles[2]["evacEntrance"], json!(270));
    assert_eq!(tiles[2]["evacExit"], json!(90));
    assert_eq!(tiles[0]["evacEntrance"], json!(-1));
    // Stale route data from the stored document is replaced.
    assert_eq!(tiles[3]["index"], json!([2]));
    assert_eq!(tiles[3]["next"], json!(["4,0,0"]));
    assert_eq!(tiles[5]["index"], json!([]));
}

#[test]
fn test_unknown_fields_preserved() {
    let document = resolve_document(stored_map());
    let output = serde_json::to_value(&document).unwrap();

    assert_eq!(output["_id"], json!("5c1a0000000000000000abcd"));
    assert_eq!(output["competition"], json!("5c19ffffffffffffffffffff"));
    assert_eq!(output["finished"], json!(true));
    assert_eq!(output["tiles"][1]["victims"], json!({"top": "silver"}));
    assert_eq!(output["tiles"][1]["checkPoint"], json!(true));
    assert_eq!(output["tiles"][0]["items"]["rampPoints"], json!(false));
}

#[test]
fn test_off_grid_second_start_ignored() {
    let mut value = stored_map();
    value["startTile2"] = json!({"x": -1, "y": -1, "z": -1});
    let document = MapDocument::from_json(&value.to_string()).unwrap();
    let map = document.to_map(&Catalog::seeded()).unwrap();

    assert_eq!(map.start_tile2, None);
}

#[test]
fn test_missing_second_start_field() {
    let mut value = stored_map();
    value.as_object_mut().unwrap().remove("startTile2");
    let document = resolve_document(value);

    assert_eq!(document.start_tile2, None);
    assert_eq!(document.index_count, 2);
    assert_eq!(document.evacuation_area_lop_index, 1);
}

#[test]
fn test_route_fields_load_back() {
    let document = resolve_document(stored_map());
    let reloaded = MapDocument::from_json(&serde_json::to_string(&document).unwrap()).unwrap();
    let map = reloaded.to_map(&Catalog::seeded()).unwrap();

    assert_eq!(map.index_count, 4);
    assert_eq!(map.tiles[1].next.as_slice(), &[IVec3::new(3, 0, 0)]);
    assert_eq!(map.tiles[1].next_dir.as_slice(), &[Direction::Right]);
    assert_eq!(map.tiles[2].evac_entrance, Some(Direction::Left));
    assert_eq!(map.tiles[2].evac_exit, Some(Direction::Right));
}

#[test]
fn test_invalid_rotation_rejected() {
    let mut value = stored_map();
    value["tiles"][0]["rot"] = json!(45);
    let document = MapDocument::from_json(&value.to_string()).unwrap();

    assert!(matches!(
        document.to_map(&Catalog::seeded()),
        Err(MapError::InvalidRotation(45))
    ));
}

#[test]
fn test_unknown_tile_type_rejected() {
    let mut value = stored_map();
    value["tiles"][2]["tileType"] = json!("000000000000000000000000");
    let document = MapDocument::from_json(&value.to_string()).unwrap();

    assert!(matches!(
        document.to_map(&Catalog::seeded()),
        Err(MapError::Catalog(CatalogError::UnknownTileType(_)))
    ));
}

#[test]
fn test_malformed_next_key_rejected() {
    let mut value = stored_map();
    value["tiles"][0]["next"] = json!(["1;0;0"]);
    let document = MapDocument::from_json(&value.to_string()).unwrap();

    assert!(matches!(
        document.to_map(&Catalog::seeded()),
        Err(MapError::InvalidCoordinateKey(_))
    ));
}

#[test]
fn test_null_route_entries_tolerated() {
    let mut value = stored_map();
    value["tiles"][0]["index"] = json!([0, null]);
    value["tiles"][0]["next"] = json!([null]);
    value["tiles"][0]["next_dir"] = json!([null]);
    value["tiles"][4]["next_dir"] = json!(["right", null]);

    let document = MapDocument::from_json(&value.to_string()).unwrap();
    assert_eq!(document.tiles[0].index, vec![0]);
    assert!(document.tiles[0].next.is_empty());
    assert!(document.tiles[0].next_dir.is_empty());
    assert_eq!(document.tiles[4].next_dir, vec![Direction::Right]);

    let resolved = resolve_document(value);
    assert_eq!(resolved.index_count, 4);
    assert_eq!(resolved.tiles[0].next_dir, vec![Direction::Right]);
}

#[test]
fn test_resolve_reports_stage_of_failure() {
    let mut value = stored_map();
    value["tiles"][0]["rot"] = json!(45);
    let mut document = MapDocument::from_json(&value.to_string()).unwrap();

    let result = document.resolve(&Catalog::seeded(), &ResolverConfig::default());
    assert!(matches!(result, Err(LinemapError::Map(MapError::InvalidRotation(45)))));
    // Nothing is written back on failure.
    assert_eq!(document.index_count, 0);
}
