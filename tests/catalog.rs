//! Validates catalog construction invariants and asset loading round-trips

use std::io::Write;
use std::path::PathBuf;

use terratile::TilesetError;
use terratile::catalog::{Slope, Tile, TileCatalog, TileRole};
use terratile::catalog::tile::ImageRef;
use terratile::io::asset::load_catalog;

fn tile(id: u32, role: TileRole, slope: Option<Slope>) -> Tile {
    Tile {
        id,
        image: ImageRef {
            path: PathBuf::from(format!("tiles/{id}.png")),
            width: 16,
            height: 16,
        },
        slope,
        role,
    }
}

const SAMPLE_ASSET: &str = r#"[
    {"id": 1, "image": "ground/top.png", "width": 16, "height": 16,
     "properties": {"role": "top"}},
    {"id": 5, "image": "ground/edge_tr.png", "width": 16, "height": 16,
     "properties": {"role": "edge_top_right", "slope": "45_up_left"}},
    {"id": 13, "image": "ground/center.png", "width": 16, "height": 16,
     "properties": {"role": "center", "glow": "soft_blue"}}
]"#;

#[test]
fn test_load_round_trip_is_value_equal() {
    let dir = tempfile::tempdir().unwrap();
    let asset_path = dir.path().join("city.json");
    let mut file = std::fs::File::create(&asset_path).unwrap();
    file.write_all(SAMPLE_ASSET.as_bytes()).unwrap();

    let first = load_catalog(&asset_path).unwrap();
    let second = load_catalog(&asset_path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    let sloped = first.lookup(5).unwrap();
    assert_eq!(sloped.slope, Some(Slope::UpLeft45));
    assert_eq!(sloped.role, TileRole::EdgeTopRight);
}

#[test]
fn test_unrecognized_property_keys_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let asset_path = dir.path().join("city.json");
    std::fs::write(&asset_path, SAMPLE_ASSET).unwrap();

    let catalog = load_catalog(&asset_path).unwrap();
    // Tile 13 carries a "glow" key no tool here recognizes
    let center = catalog.lookup(13).unwrap();
    assert_eq!(center.role, TileRole::Center);
    assert_eq!(center.slope, None);
}

#[test]
fn test_unrecognized_slope_value_fails_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let asset_path = dir.path().join("bad.json");
    std::fs::write(
        &asset_path,
        r#"[{"id": 1, "image": "a.png", "width": 16, "height": 16,
            "properties": {"role": "edge_top_left", "slope": "30_up_right"}}]"#,
    )
    .unwrap();

    let err = load_catalog(&asset_path).unwrap_err();
    match err {
        TilesetError::Parse { path, reason } => {
            assert_eq!(path, asset_path);
            assert!(reason.contains("30_up_right"));
        }
        _ => unreachable!("Expected Parse error type"),
    }
}

#[test]
fn test_duplicate_id_fails_parsing() {
    let tiles = vec![
        tile(7, TileRole::Top, None),
        tile(7, TileRole::Bottom, None),
    ];
    let err = TileCatalog::new(tiles).unwrap_err();
    match err {
        TilesetError::Parse { reason, .. } => assert!(reason.contains("duplicate tile id 7")),
        _ => unreachable!("Expected Parse error type"),
    }
}

#[test]
fn test_zero_dimension_fails_parsing() {
    let mut bad = tile(3, TileRole::Left, None);
    bad.image.height = 0;
    let err = TileCatalog::new(vec![bad]).unwrap_err();
    match err {
        TilesetError::Parse { reason, .. } => assert!(reason.contains("zero dimension")),
        _ => unreachable!("Expected Parse error type"),
    }
}

#[test]
fn test_slope_on_non_edge_role_fails_parsing() {
    let err = TileCatalog::new(vec![tile(9, TileRole::Center, Some(Slope::UpLeft45))])
        .unwrap_err();
    match err {
        TilesetError::Parse { reason, .. } => {
            assert!(reason.contains("slope"));
            assert!(reason.contains("center"));
        }
        _ => unreachable!("Expected Parse error type"),
    }
}

#[test]
fn test_slope_on_bottom_edge_is_unsupported() {
    // Bottom-edge ramps are rejected rather than silently flattened
    let err = TileCatalog::new(vec![tile(8, TileRole::EdgeBottomLeft, Some(Slope::UpRight45))])
        .unwrap_err();
    assert!(matches!(err, TilesetError::Parse { .. }));
}

#[test]
fn test_lookup_unknown_id() {
    let catalog = TileCatalog::new(vec![tile(1, TileRole::Top, None)]).unwrap();
    let err = catalog.lookup(99).unwrap_err();
    match err {
        TilesetError::UnknownTileId { id } => assert_eq!(id, 99),
        _ => unreachable!("Expected UnknownTileId error type"),
    }
}

#[test]
fn test_asset_order_is_preserved() {
    let tiles = vec![
        tile(13, TileRole::Center, None),
        tile(1, TileRole::Top, None),
        tile(4, TileRole::Bottom, None),
    ];
    let catalog = TileCatalog::new(tiles).unwrap();
    let ids: Vec<u32> = catalog.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![13, 1, 4]);
    assert_eq!(catalog.max_id(), Some(13));
}

#[test]
fn test_missing_asset_file_is_a_filesystem_error() {
    let err = load_catalog(std::path::Path::new("no_such_tileset.json")).unwrap_err();
    assert!(matches!(err, TilesetError::FileSystem { .. }));
}

#[test]
fn test_malformed_json_is_a_syntax_error() {
    let dir = tempfile::tempdir().unwrap();
    let asset_path = dir.path().join("broken.json");
    std::fs::write(&asset_path, "[{\"id\": 1,").unwrap();

    let err = load_catalog(&asset_path).unwrap_err();
    assert!(matches!(err, TilesetError::Syntax { .. }));
}
