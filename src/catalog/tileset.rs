//! Immutable tile catalogs with atomic, validating construction
//!
//! A catalog is the in-memory form of one tileset asset: an ordered id → tile
//! mapping that never changes after construction. Reloading an asset means
//! building a fresh catalog and swapping the handle consumers hold; readers
//! can therefore share a catalog across threads without coordination.

use std::collections::HashMap;

use crate::catalog::tile::{Tile, TileId};
use crate::io::error::{Result, TilesetError, parse_error};

/// Ordered, immutable mapping from tile id to tile
///
/// Construction is total and deterministic: the resulting catalog depends
/// only on the record list, and any invariant violation aborts the whole
/// build. No partially constructed catalog is ever observable.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
    index: HashMap<TileId, usize>,
}

impl TileCatalog {
    /// Build a catalog from tiles in asset order
    ///
    /// # Errors
    ///
    /// Returns a parse error if:
    /// - two tiles share an id
    /// - a tile declares a zero width or height
    /// - a tile carries a slope classification on a role that cannot slope
    ///   (anything but the two upper edge corners; bottom edges are
    ///   deliberately unsupported rather than silently flattened)
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let mut index = HashMap::with_capacity(tiles.len());

        for (position, tile) in tiles.iter().enumerate() {
            if index.insert(tile.id, position).is_some() {
                return Err(parse_error(format!("duplicate tile id {}", tile.id)));
            }
            if tile.width() == 0 || tile.height() == 0 {
                return Err(parse_error(format!(
                    "tile {} declares a zero dimension ({}x{})",
                    tile.id,
                    tile.width(),
                    tile.height()
                )));
            }
            if let Some(slope) = tile.slope {
                if !tile.role.supports_slope() {
                    return Err(parse_error(format!(
                        "tile {}: slope '{}' requires role 'edge_top_left' or \
                         'edge_top_right', found '{}'",
                        tile.id,
                        slope.as_str(),
                        tile.role.as_str()
                    )));
                }
            }
        }

        Ok(Self { tiles, index })
    }

    /// Look up a tile by id
    ///
    /// # Errors
    ///
    /// Returns `UnknownTileId` if the id is not in the catalog
    pub fn lookup(&self, id: TileId) -> Result<&Tile> {
        self.get(id).ok_or(TilesetError::UnknownTileId { id })
    }

    /// Look up a tile by id, returning `None` when absent
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.index
            .get(&id)
            .and_then(|&position| self.tiles.get(position))
    }

    /// Whether the catalog contains the given id
    pub fn contains(&self, id: TileId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterate tiles in asset order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Number of tiles in the catalog
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Largest tile id in the catalog, if any
    ///
    /// Used to size membership sets over this catalog's id space.
    pub fn max_id(&self) -> Option<TileId> {
        self.index.keys().copied().max()
    }
}

impl<'a> IntoIterator for &'a TileCatalog {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Value equality: two catalogs are equal when they hold the same tiles in the
// same asset order. The id index is derived state and takes no part.
impl PartialEq for TileCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for TileCatalog {}
