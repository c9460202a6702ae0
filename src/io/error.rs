//! Error types and context management for tileset operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::catalog::tile::{TileId, TileRole};

/// Main error type for all tileset operations
///
/// Every failure in this crate is deterministic given the same inputs, so no
/// variant is retryable. The propagation policy is always "surface to caller":
/// resolution and height queries never substitute a default tile or a clamped
/// value for an error.
#[derive(Debug)]
pub enum TilesetError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Asset content is not well-formed JSON
    Syntax {
        /// Path to the asset file
        path: PathBuf,
        /// Underlying deserialization error
        source: serde_json::Error,
    },

    /// Asset parsed but violates a catalog invariant
    ///
    /// Covers duplicate tile ids, non-positive dimensions, unrecognized slope
    /// or role values, and slope classifications on tiles whose role cannot
    /// carry them. Construction is atomic: any parse failure aborts the whole
    /// catalog.
    Parse {
        /// Path to the asset file, or `<memory>` for in-memory construction
        path: PathBuf,
        /// Description of the violated invariant
        reason: String,
    },

    /// Failed to read a backing image header
    ImageRead {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Backing image for a tile could not be located
    AssetNotFound {
        /// Tile whose image reference is dangling
        id: TileId,
        /// Path where the image was expected
        path: PathBuf,
    },

    /// Declared tile dimensions disagree with the backing image
    DimensionMismatch {
        /// Tile whose declaration is wrong
        id: TileId,
        /// Path to the backing image
        path: PathBuf,
        /// Dimensions declared by the tile record (width, height)
        declared: (u32, u32),
        /// Dimensions read from the image header (width, height)
        actual: (u32, u32),
    },

    /// Tile id not present in the catalog
    UnknownTileId {
        /// The unknown id
        id: TileId,
    },

    /// A terrain group role assignment is malformed
    InvalidAssignment {
        /// Name of the terrain group
        group: String,
        /// Description of what is wrong with the assignment
        reason: String,
    },

    /// Terrain group is missing required roles
    ///
    /// A group must supply at least the four cardinal edges and a center to
    /// be usable; curves, slopes, and refined centers are optional.
    IncompleteTerrainGroup {
        /// Name of the terrain group
        group: String,
        /// Required roles absent from the assignment
        missing: Vec<TileRole>,
    },

    /// Role not defined by the terrain group
    RoleNotPresent {
        /// Name of the terrain group
        group: String,
        /// The requested role
        role: TileRole,
    },

    /// Neighbor mask matches no tile variant
    ///
    /// Raised for degenerate geometry (two opposite cardinal neighbors
    /// missing, or three or more missing). Callers must pre-validate grid
    /// shapes or accept visible seams; substituting a center tile here would
    /// hide level-design errors.
    NoMatchingVariant {
        /// Raw mask bits (N, E, S, W, NE, SE, SW, NW from bit 0)
        mask: u8,
    },

    /// Height query on a tile that carries no slope classification
    NotSloped {
        /// The flat tile that was queried
        id: TileId,
    },

    /// Sample offset outside the tile footprint
    ///
    /// `height_at` refuses to clamp so that grid-alignment bugs surface at
    /// the query site instead of as drifting ground heights.
    OutOfRange {
        /// The offending local x offset
        offset: f64,
        /// Tile width bounding the valid range
        width: f64,
    },
}

impl fmt::Display for TilesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(f, "Failed to {operation} '{}': {source}", path.display())
            }
            Self::Syntax { path, source } => {
                write!(f, "Malformed asset '{}': {source}", path.display())
            }
            Self::Parse { path, reason } => {
                write!(f, "Invalid tileset '{}': {reason}", path.display())
            }
            Self::ImageRead { path, source } => {
                write!(f, "Failed to read image '{}': {source}", path.display())
            }
            Self::AssetNotFound { id, path } => {
                write!(
                    f,
                    "Backing image for tile {id} not found at '{}'",
                    path.display()
                )
            }
            Self::DimensionMismatch {
                id,
                path,
                declared,
                actual,
            } => {
                write!(
                    f,
                    "Tile {id} declares {}x{} but '{}' is {}x{}",
                    declared.0,
                    declared.1,
                    path.display(),
                    actual.0,
                    actual.1
                )
            }
            Self::UnknownTileId { id } => {
                write!(f, "Tile id {id} is not in the catalog")
            }
            Self::InvalidAssignment { group, reason } => {
                write!(f, "Invalid assignment in terrain group '{group}': {reason}")
            }
            Self::IncompleteTerrainGroup { group, missing } => {
                write!(
                    f,
                    "Terrain group '{group}' is missing required roles: {}",
                    format_roles(missing)
                )
            }
            Self::RoleNotPresent { group, role } => {
                write!(
                    f,
                    "Terrain group '{group}' does not define role '{}'",
                    role.as_str()
                )
            }
            Self::NoMatchingVariant { mask } => {
                write!(
                    f,
                    "No tile variant matches neighbor mask {mask:#010b} (missing cardinals: {})",
                    format_missing_cardinals(*mask)
                )
            }
            Self::NotSloped { id } => {
                write!(f, "Tile {id} has no slope classification")
            }
            Self::OutOfRange { offset, width } => {
                write!(f, "Local offset {offset} is outside the tile span [0, {width}]")
            }
        }
    }
}

impl std::error::Error for TilesetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Syntax { source, .. } => Some(source),
            Self::ImageRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tileset results
pub type Result<T> = std::result::Result<T, TilesetError>;

fn format_roles(roles: &[TileRole]) -> String {
    let names: Vec<&str> = roles.iter().map(|role| role.as_str()).collect();
    names.join(", ")
}

fn format_missing_cardinals(mask: u8) -> String {
    let mut missing = Vec::new();
    for (bit, name) in [(0, "north"), (1, "east"), (2, "south"), (3, "west")] {
        if mask & (1 << bit) == 0 {
            missing.push(name);
        }
    }
    if missing.is_empty() {
        "none".to_string()
    } else {
        missing.join(", ")
    }
}

/// Placeholder path for errors raised before an asset path is known
const MEMORY_PATH: &str = "<memory>";

/// Create a parse error with no asset path attached yet
///
/// Catalog construction is path-agnostic; the io layer attaches the real
/// path via [`WithPath`] when loading from disk.
pub fn parse_error(reason: impl Into<String>) -> TilesetError {
    TilesetError::Parse {
        path: PathBuf::from(MEMORY_PATH),
        reason: reason.into(),
    }
}

/// Create an invalid terrain group assignment error
pub fn invalid_assignment(group: &str, reason: impl Into<String>) -> TilesetError {
    TilesetError::InvalidAssignment {
        group: group.to_string(),
        reason: reason.into(),
    }
}

impl From<std::io::Error> for TilesetError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "access",
            source: err,
        }
    }
}

/// Enriches parse errors with the asset path they originated from
pub trait WithPath<T> {
    /// Attach an asset path to a path-less parse error
    ///
    /// # Errors
    ///
    /// Propagates the original error, with the path applied to `Parse`
    /// variants constructed in memory
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T> WithPath<T> for Result<T> {
    fn with_path(self, asset_path: &Path) -> Result<T> {
        self.map_err(|error| match error {
            TilesetError::Parse { path, reason } if path == Path::new(MEMORY_PATH) => {
                TilesetError::Parse {
                    path: asset_path.to_path_buf(),
                    reason,
                }
            }
            other => other,
        })
    }
}
