//! Autotile variant resolution and slope collision geometry for tile-grid platformers
//!
//! The crate consumes a declarative tileset (tile records carrying image
//! references, terrain roles, and optional slope classifications), derives
//! terrain groups from it, and answers the two questions a level editor and a
//! runtime engine must agree on bit-for-bit: which tile variant belongs in a
//! grid cell given its neighbors, and where the ground surface sits inside a
//! sloped tile.

#![forbid(unsafe_code)]

/// Neighbor mask computation and tile variant resolution
pub mod autotile;
/// Immutable tileset catalogs and the terrain groups derived from them
pub mod catalog;
/// Slope height queries and ground surface helpers for platformer movement
pub mod collision;
/// Input/output operations and error handling
pub mod io;
/// Grid collaborator interface and the bundled sample grid
pub mod spatial;

pub use io::error::{Result, TilesetError};
