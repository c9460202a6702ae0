//! Validation report model and export
//!
//! Reports are written beside the asset they describe and are the tool's
//! durable output: the resolved tile layer per group, plus every cell that
//! failed and why. Serialization order is deterministic so reports diff
//! cleanly across runs.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::catalog::terrain::TerrainGroup;
use crate::catalog::tile::TileId;
use crate::io::error::{Result, TilesetError};
use crate::spatial::grid::LayerResolution;

/// Validation outcome for one tileset asset
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Asset file name
    pub tileset: String,
    /// Number of tiles in the catalog
    pub tile_count: usize,
    /// Grid cells referencing ids the catalog does not define
    pub unknown_tiles: Vec<UnknownTile>,
    /// Per-group outcomes, in declaration order
    pub groups: Vec<GroupReport>,
}

/// A grid cell referencing an id outside the catalog
#[derive(Debug, Serialize)]
pub struct UnknownTile {
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
    /// The undefined id
    pub id: TileId,
}

/// Validation outcome for one terrain group
#[derive(Debug, Serialize)]
pub struct GroupReport {
    /// Group name
    pub name: String,
    /// Role bindings in the group's binding order
    pub roles: Vec<RoleBinding>,
    /// Resolved tile id per cell, present when a grid sidecar was linted
    pub resolved: Option<Vec<Vec<Option<TileId>>>>,
    /// Cells whose mask matched no variant
    pub failures: Vec<CellReport>,
}

/// One role → tile id binding
#[derive(Debug, Serialize)]
pub struct RoleBinding {
    /// Role name
    pub role: String,
    /// Bound tile id
    pub tile: TileId,
}

/// One failed cell with its error rendered for the report
#[derive(Debug, Serialize)]
pub struct CellReport {
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
    /// Rendered resolution error
    pub error: String,
}

impl GroupReport {
    /// Build a group report from its bindings and optional layer outcome
    pub fn new(group: &TerrainGroup, resolution: Option<&LayerResolution>) -> Self {
        let roles = group
            .iter()
            .map(|&(role, tile)| RoleBinding {
                role: role.as_str().to_string(),
                tile,
            })
            .collect();

        let resolved = resolution.map(|layer| {
            layer
                .tiles
                .rows()
                .into_iter()
                .map(|row| row.iter().copied().collect())
                .collect()
        });

        let failures = resolution.map_or_else(Vec::new, |layer| {
            layer
                .failures
                .iter()
                .map(|failure| CellReport {
                    row: failure.cell[0],
                    col: failure.cell[1],
                    error: failure.error.to_string(),
                })
                .collect()
        });

        Self {
            name: group.name().to_string(),
            roles,
            resolved,
            failures,
        }
    }
}

/// Write a report as pretty-printed JSON
///
/// # Errors
///
/// Returns `Syntax` if serialization fails and `FileSystem` if the file
/// cannot be written
pub fn write_report(report: &ValidationReport, path: &Path) -> Result<()> {
    let body = serde_json::to_string_pretty(report).map_err(|source| TilesetError::Syntax {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, body).map_err(|source| TilesetError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}
