//! Tile-ground collision geometry
//!
//! Converts slope classifications into the ramp surfaces platformer movement
//! snaps to. Everything here is a pure function over immutable tiles; physics
//! integration, broad-phase queries, and actor state stay with the caller.

/// Ground profiles and screen-space surface helpers
pub mod ground;
/// Strict ramp height queries
pub mod slope;

pub use ground::{GroundProfile, SURFACE_CLEARANCE, snap_y, surface_y, surface_y_under_actor};
pub use slope::height_at;
