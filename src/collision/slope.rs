//! Ramp height queries for sloped tiles
//!
//! The height function is pure, continuous, and monotonic across the tile
//! footprint, so movement code can sample it once per contact point per step
//! without caching. Queries outside the footprint fail instead of clamping;
//! a sample landing outside the tile means the caller's grid alignment is
//! wrong, and clamping would turn that bug into a subtle physics drift.

use crate::catalog::tile::{Slope, Tile};
use crate::io::error::{Result, TilesetError};

/// Ground height at a local x offset within a sloped tile
///
/// Heights are measured up from the tile's bottom edge. `UpLeft45` rises
/// linearly from 0 at `local_x = 0` to the tile height at
/// `local_x = tile width`; `UpRight45` is the exact mirror.
///
/// # Errors
///
/// Returns:
/// - `NotSloped` when the tile carries no slope classification
/// - `OutOfRange` when `local_x` falls outside `[0, tile width]` (including
///   NaN samples)
pub fn height_at(tile: &Tile, local_x: f64) -> Result<f64> {
    let slope = tile.slope.ok_or(TilesetError::NotSloped { id: tile.id })?;
    let width = f64::from(tile.width());
    let height = f64::from(tile.height());

    if !(0.0..=width).contains(&local_x) {
        return Err(TilesetError::OutOfRange {
            offset: local_x,
            width,
        });
    }

    Ok(ramp_height(slope, local_x, width, height))
}

/// Ramp surface height with bounds already validated by the caller
pub(crate) fn ramp_height(slope: Slope, local_x: f64, width: f64, height: f64) -> f64 {
    match slope {
        Slope::UpLeft45 => height * (local_x / width),
        Slope::UpRight45 => height * ((width - local_x) / width),
    }
}
