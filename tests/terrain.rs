//! Validates terrain group construction and role resolution

use std::path::PathBuf;

use terratile::TilesetError;
use terratile::catalog::{Slope, TerrainGroup, Tile, TileCatalog, TileRole};
use terratile::catalog::tile::ImageRef;

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

fn sample_catalog() -> TileCatalog {
    TileCatalog::new(vec![
        tile(1, TileRole::Top, None),
        tile(2, TileRole::Right, None),
        tile(3, TileRole::Left, None),
        tile(4, TileRole::Bottom, None),
        tile(9, TileRole::CurveTopRight, None),
        tile(13, TileRole::Center, None),
        tile(14, TileRole::CenterSolid, None),
    ])
    .unwrap()
}

const MINIMAL: [(TileRole, u32); 5] = [
    (TileRole::Top, 1),
    (TileRole::Bottom, 4),
    (TileRole::Left, 3),
    (TileRole::Right, 2),
    (TileRole::Center, 13),
];

#[test]
fn test_minimal_group_builds() {
    let catalog = sample_catalog();
    let group = TerrainGroup::build(&catalog, "ground", &MINIMAL).unwrap();

    assert_eq!(group.name(), "ground");
    assert_eq!(group.resolve(TileRole::Top).unwrap(), 1);
    assert_eq!(group.resolve(TileRole::Center).unwrap(), 13);
}

#[test]
fn test_missing_required_roles_are_all_reported() {
    let catalog = sample_catalog();
    let partial = [(TileRole::Top, 1), (TileRole::Left, 3), (TileRole::Right, 2)];

    let err = TerrainGroup::build(&catalog, "ground", &partial).unwrap_err();
    match err {
        TilesetError::IncompleteTerrainGroup { group, missing } => {
            assert_eq!(group, "ground");
            assert_eq!(missing, vec![TileRole::Bottom, TileRole::Center]);
        }
        _ => unreachable!("Expected IncompleteTerrainGroup error type"),
    }
}

#[test]
fn test_optional_role_absence_is_per_query() {
    let catalog = sample_catalog();
    let group = TerrainGroup::build(&catalog, "ground", &MINIMAL).unwrap();

    assert!(!group.has_role(TileRole::CurveTopLeft));
    let err = group.resolve(TileRole::CurveTopLeft).unwrap_err();
    match err {
        TilesetError::RoleNotPresent { group: name, role } => {
            assert_eq!(name, "ground");
            assert_eq!(role, TileRole::CurveTopLeft);
        }
        _ => unreachable!("Expected RoleNotPresent error type"),
    }
}

#[test]
fn test_role_bound_twice_is_rejected() {
    let catalog = sample_catalog();
    let mut assignments = MINIMAL.to_vec();
    assignments.push((TileRole::Top, 2));

    let err = TerrainGroup::build(&catalog, "ground", &assignments).unwrap_err();
    match err {
        TilesetError::InvalidAssignment { group, reason } => {
            assert_eq!(group, "ground");
            assert!(reason.contains("top"));
        }
        _ => unreachable!("Expected InvalidAssignment error type"),
    }
}

#[test]
fn test_assignment_to_unknown_tile_is_rejected() {
    let catalog = sample_catalog();
    let mut assignments = MINIMAL.to_vec();
    assignments.push((TileRole::CurveTopLeft, 42));

    let err = TerrainGroup::build(&catalog, "ground", &assignments).unwrap_err();
    match err {
        TilesetError::UnknownTileId { id } => assert_eq!(id, 42),
        _ => unreachable!("Expected UnknownTileId error type"),
    }
}

#[test]
fn test_unclassified_role_cannot_be_bound() {
    let catalog = sample_catalog();
    let mut assignments = MINIMAL.to_vec();
    assignments.push((TileRole::Unclassified, 14));

    let err = TerrainGroup::build(&catalog, "ground", &assignments).unwrap_err();
    assert!(matches!(err, TilesetError::InvalidAssignment { .. }));
}

#[test]
fn test_membership_covers_exactly_the_assigned_tiles() {
    let catalog = sample_catalog();
    let group = TerrainGroup::build(&catalog, "ground", &MINIMAL).unwrap();

    for id in [1, 2, 3, 4, 13] {
        assert!(group.contains(id));
    }
    assert!(!group.contains(9));
    assert!(!group.contains(14));
    assert_eq!(group.members().len(), 5);
}

#[test]
fn test_assignment_order_is_preserved() {
    let catalog = sample_catalog();
    let group = TerrainGroup::build(&catalog, "ground", &MINIMAL).unwrap();

    let order: Vec<TileRole> = group.iter().map(|&(role, _)| role).collect();
    assert_eq!(
        order,
        vec![
            TileRole::Top,
            TileRole::Bottom,
            TileRole::Left,
            TileRole::Right,
            TileRole::Center
        ]
    );
}
