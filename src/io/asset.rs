//! Tileset asset and sidecar loading, backing image verification
//!
//! The asset is an ordered JSON list of tile records; the editor container
//! format that carries the records is not this crate's concern. Loading is
//! atomic: any invalid record aborts the whole catalog, so consumers never
//! observe a partially built tileset. The property bag is open — only the
//! `slope` and `role` keys are recognized, and an unrecognized *value* under
//! a recognized key is a parse failure, never silently skipped.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::terrain::TerrainGroup;
use crate::catalog::tile::{ImageRef, Slope, Tile, TileId, TileRole};
use crate::catalog::tileset::TileCatalog;
use crate::io::configuration::{MAX_CATALOG_TILES, MAX_GRID_DIMENSION};
use crate::io::error::{Result, TilesetError, WithPath, invalid_assignment, parse_error};
use crate::spatial::grid::LevelGrid;

/// One tile record as it appears in the asset
#[derive(Debug, Clone, Deserialize)]
pub struct TileRecord {
    /// Unique tile id
    pub id: TileId,
    /// Image path relative to the asset file
    pub image: String,
    /// Declared image width in pixels
    pub width: u32,
    /// Declared image height in pixels
    pub height: u32,
    /// Open property bag; `slope` and `role` are recognized
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

/// Terrain group declaration from a groups sidecar
#[derive(Debug, Clone, Deserialize)]
pub struct GroupSpec {
    /// Group name, used in errors and reports
    pub name: String,
    /// Role name → tile id bindings
    pub roles: BTreeMap<String, TileId>,
}

/// Occupancy grid declaration from a grid sidecar
#[derive(Debug, Clone, Deserialize)]
pub struct GridSpec {
    /// Row-major cells, rows top to bottom; `null` marks an empty cell
    pub cells: Vec<Vec<Option<TileId>>>,
}

/// Load a tile catalog from a tileset asset file
///
/// # Errors
///
/// Returns:
/// - `FileSystem` when the asset cannot be read
/// - `Syntax` when the content is not well-formed JSON
/// - `Parse` for any record or catalog invariant violation
pub fn load_catalog(path: &Path) -> Result<TileCatalog> {
    let records: Vec<TileRecord> = read_json(path)?;

    if records.len() > MAX_CATALOG_TILES {
        return Err(parse_error(format!(
            "catalog holds {} tiles, limit is {MAX_CATALOG_TILES}",
            records.len()
        )))
        .with_path(path);
    }

    let tiles = records
        .into_iter()
        .map(tile_from_record)
        .collect::<Result<Vec<Tile>>>()
        .with_path(path)?;

    TileCatalog::new(tiles).with_path(path)
}

/// Load terrain group declarations from a groups sidecar
///
/// # Errors
///
/// Returns `FileSystem` or `Syntax` when the sidecar cannot be read or parsed
pub fn load_groups(path: &Path) -> Result<Vec<GroupSpec>> {
    read_json(path)
}

/// Build terrain groups from sidecar declarations against a catalog
///
/// # Errors
///
/// Returns `InvalidAssignment` for unrecognized role names, plus every error
/// [`TerrainGroup::build`] raises for the bindings themselves
pub fn build_groups(catalog: &TileCatalog, specs: &[GroupSpec]) -> Result<Vec<TerrainGroup>> {
    specs
        .iter()
        .map(|spec| {
            let assignments = spec
                .roles
                .iter()
                .map(|(name, &id)| {
                    let role = TileRole::from_property(name).ok_or_else(|| {
                        invalid_assignment(&spec.name, format!("unrecognized role '{name}'"))
                    })?;
                    Ok((role, id))
                })
                .collect::<Result<Vec<(TileRole, TileId)>>>()?;
            TerrainGroup::build(catalog, &spec.name, &assignments)
        })
        .collect()
}

/// Load an occupancy grid from a grid sidecar
///
/// # Errors
///
/// Returns `FileSystem` or `Syntax` when the sidecar cannot be read or
/// parsed, and `Parse` for ragged rows or grids beyond the dimension limit
pub fn load_grid(path: &Path) -> Result<LevelGrid> {
    let spec: GridSpec = read_json(path)?;

    let rows = spec.cells.len();
    let cols = spec.cells.first().map_or(0, Vec::len);
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(parse_error(format!(
            "grid is {rows}x{cols}, limit is {MAX_GRID_DIMENSION} per side"
        )))
        .with_path(path);
    }

    LevelGrid::from_rows(spec.cells).with_path(path)
}

/// Verify that every backing image exists and matches its declaration
///
/// Reads image headers only; pixel data stays untouched. Image paths are
/// resolved relative to `base_dir` (normally the asset's directory).
///
/// # Errors
///
/// Returns:
/// - `AssetNotFound` when a backing image is missing
/// - `ImageRead` when a header cannot be decoded
/// - `DimensionMismatch` when the header disagrees with the declaration
pub fn verify_backing_images(catalog: &TileCatalog, base_dir: &Path) -> Result<()> {
    for tile in catalog {
        let path = base_dir.join(&tile.image.path);
        if !path.is_file() {
            return Err(TilesetError::AssetNotFound { id: tile.id, path });
        }

        let (width, height) =
            image::image_dimensions(&path).map_err(|source| TilesetError::ImageRead {
                path: path.clone(),
                source,
            })?;

        if (width, height) != (tile.width(), tile.height()) {
            return Err(TilesetError::DimensionMismatch {
                id: tile.id,
                path,
                declared: (tile.width(), tile.height()),
                actual: (width, height),
            });
        }
    }
    Ok(())
}

/// Path of a sidecar or derived file sharing `path`'s stem
pub fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.json", stem.to_string_lossy());
    path.parent().map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}

fn tile_from_record(record: TileRecord) -> Result<Tile> {
    let mut slope = None;
    let mut role = TileRole::Unclassified;

    for (key, value) in &record.properties {
        match key.as_str() {
            "slope" => {
                slope = Some(Slope::from_property(value).ok_or_else(|| {
                    parse_error(format!(
                        "tile {}: unrecognized slope value '{value}'",
                        record.id
                    ))
                })?);
            }
            "role" => {
                role = TileRole::from_property(value).ok_or_else(|| {
                    parse_error(format!(
                        "tile {}: unrecognized role value '{value}'",
                        record.id
                    ))
                })?;
            }
            // The bag is open; unrecognized keys belong to other tools
            _ => {}
        }
    }

    Ok(Tile {
        id: record.id,
        image: ImageRef {
            path: PathBuf::from(record.image),
            width: record.width,
            height: record.height,
        },
        slope,
        role,
    })
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| TilesetError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| TilesetError::Syntax {
        path: path.to_path_buf(),
        source,
    })
}
