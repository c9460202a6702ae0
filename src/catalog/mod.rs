//! Tileset catalogs and the derived views resolution runs against
//!
//! A catalog is built once per tileset asset and never mutated; terrain
//! groups are validated role tables layered over it at level-bind time.

/// Bit-level membership sets over tile ids
pub mod bitset;
/// Terrain group construction and role resolution
pub mod terrain;
/// Tile model: identifiers, image references, slopes, roles
pub mod tile;
/// Immutable catalog construction and lookup
pub mod tileset;

pub use terrain::TerrainGroup;
pub use tile::{ImageRef, Slope, Tile, TileId, TileRole};
pub use tileset::TileCatalog;
