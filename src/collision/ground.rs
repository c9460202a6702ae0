//! Ground profiles and screen-space surface helpers
//!
//! Movement code works in screen space where y grows downward, while ramp
//! heights are measured up from the tile's bottom edge. The helpers here do
//! that conversion once, in one place, so the editor preview and the runtime
//! snap actors to identical surfaces.

use crate::catalog::tile::{Slope, Tile};
use crate::collision::slope::ramp_height;
use crate::io::error::{Result, TilesetError};

/// Vertical clearance kept between an actor's feet and the ground surface
///
/// Keeps ground contact stable across consecutive steps instead of
/// oscillating between grounded and airborne.
pub const SURFACE_CLEARANCE: f64 = 0.1;

/// Ground shape of a single tile
///
/// Flat for tiles with no slope classification, a linear ramp otherwise.
/// Cheap to build on demand from a tile; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundProfile {
    /// Constant ground height across the tile (the full tile height)
    Flat {
        /// Tile width in pixels
        width: f64,
        /// Ground height in pixels
        height: f64,
    },
    /// Linear ramp across the tile footprint
    Ramp {
        /// Ramp orientation
        slope: Slope,
        /// Tile width in pixels
        width: f64,
        /// Peak ramp height in pixels
        height: f64,
    },
}

impl GroundProfile {
    /// Build the ground profile of a tile
    pub fn of(tile: &Tile) -> Self {
        let width = f64::from(tile.width());
        let height = f64::from(tile.height());
        match tile.slope {
            Some(slope) => Self::Ramp {
                slope,
                width,
                height,
            },
            None => Self::Flat { width, height },
        }
    }

    /// Ground height at a local x offset, measured up from the tile bottom
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `local_x` falls outside `[0, width]`
    pub fn height_at(&self, local_x: f64) -> Result<f64> {
        let width = self.width();
        if !(0.0..=width).contains(&local_x) {
            return Err(TilesetError::OutOfRange {
                offset: local_x,
                width,
            });
        }
        Ok(match *self {
            Self::Flat { height, .. } => height,
            Self::Ramp {
                slope,
                width,
                height,
            } => ramp_height(slope, local_x, width, height),
        })
    }

    /// Tile width this profile spans
    pub const fn width(&self) -> f64 {
        match *self {
            Self::Flat { width, .. } | Self::Ramp { width, .. } => width,
        }
    }

    /// Whether the profile is a ramp
    pub const fn is_ramp(&self) -> bool {
        matches!(self, Self::Ramp { .. })
    }
}

/// Screen-space surface y at a local x offset within a tile
///
/// `tile_top` is the tile's top edge in screen space; the returned y sits on
/// the ground surface (smaller y is higher on screen).
///
/// # Errors
///
/// Returns `OutOfRange` when `local_x` falls outside the tile footprint
pub fn surface_y(tile: &Tile, tile_top: f64, local_x: f64) -> Result<f64> {
    let profile = GroundProfile::of(tile);
    let height = profile.height_at(local_x)?;
    Ok(tile_top + f64::from(tile.height()) - height)
}

/// Screen-space surface y under an actor's horizontal center
///
/// The sample point is the actor's center x, clamped into the tile footprint.
/// Clamping here is a deliberate caller-side policy: an actor crossing a tile
/// boundary may momentarily center outside the tile it stands on, and the
/// nearest in-tile sample is the correct surface. The strict
/// [`height_at`](crate::collision::slope::height_at) contract is unaffected.
///
/// # Errors
///
/// Returns `OutOfRange` only when the tile itself has a zero-width footprint,
/// which catalog validation rules out
pub fn surface_y_under_actor(
    tile: &Tile,
    tile_left: f64,
    tile_top: f64,
    actor_left: f64,
    actor_width: f64,
) -> Result<f64> {
    let center = actor_left + actor_width / 2.0;
    let local_x = (center - tile_left).clamp(0.0, f64::from(tile.width()));
    surface_y(tile, tile_top, local_x)
}

/// Actor y that rests the actor's feet on a surface
///
/// Applies [`SURFACE_CLEARANCE`] so repeated snaps do not fight the ground
/// check.
pub const fn snap_y(actor_height: f64, surface: f64) -> f64 {
    surface - actor_height + SURFACE_CLEARANCE
}
