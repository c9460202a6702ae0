//! Tile variant selection from neighbor masks
//!
//! Masks can satisfy more than one placement rule, so selection runs a fixed
//! priority order and the first match wins: fully enclosed cells take a
//! center, a single missing cardinal takes the edge facing the gap, two
//! adjacent missing cardinals take the matching outer curve, and anything
//! thinner is rejected outright. Degenerate geometry (one-tile-wide spans,
//! isolated cells) never falls back to a plausible-looking tile; hiding a
//! level-design error behind a center tile makes it far harder to find later.

use crate::autotile::mask::{Direction, NeighborMask};
use crate::catalog::terrain::TerrainGroup;
use crate::catalog::tile::{TileId, TileRole};
use crate::io::error::{Result, TilesetError};

/// Which center variant enclosed cells resolve to
///
/// Refined centers are an aesthetic choice, not a topological one, so they
/// are never inferred from the mask: the caller opts in explicitly. Asking
/// for a refinement the group does not define fails with `RoleNotPresent`
/// instead of quietly downgrading to the plain center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CenterStyle {
    /// The plain interior tile
    #[default]
    Plain,
    /// Solid fill treatment
    Solid,
    /// Drain detail
    Drain,
    /// Left-facing drain detail
    DrainLeft,
    /// Right-facing drain detail
    DrainRight,
}

impl CenterStyle {
    /// Role this style resolves through
    pub const fn role(self) -> TileRole {
        match self {
            Self::Plain => TileRole::Center,
            Self::Solid => TileRole::CenterSolid,
            Self::Drain => TileRole::CenterDrain,
            Self::DrainLeft => TileRole::CenterDrainLeft,
            Self::DrainRight => TileRole::CenterDrainRight,
        }
    }

    /// Parse the style names accepted on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(Self::Plain),
            "solid" => Some(Self::Solid),
            "drain" => Some(Self::Drain),
            "drain_left" => Some(Self::DrainLeft),
            "drain_right" => Some(Self::DrainRight),
            _ => None,
        }
    }

    /// Name this style parses from
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Solid => "solid",
            Self::Drain => "drain",
            Self::DrainLeft => "drain_left",
            Self::DrainRight => "drain_right",
        }
    }
}

/// Caller-selected refinements applied during resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Center variant for enclosed cells
    pub center: CenterStyle,
    /// Select diagonal-edge variants for enclosed cells with one open
    /// diagonal
    ///
    /// Takes effect only on masks computed under the eight-neighbor policy;
    /// off by default since most catalogs expose only outer curves.
    pub inner_corners: bool,
}

/// Resolve a mask against a group with default options
///
/// # Errors
///
/// Returns `NoMatchingVariant` for degenerate masks and `RoleNotPresent`
/// when the matched rule needs a role the group does not define
pub fn resolve(mask: NeighborMask, group: &TerrainGroup) -> Result<TileId> {
    resolve_with(mask, group, &ResolveOptions::default())
}

/// Resolve a mask against a group
///
/// Priority order, first match wins:
/// 1. all four cardinals present → the configured center (or an inner
///    corner, when enabled and exactly one diagonal is open)
/// 2. exactly one cardinal missing → the edge facing the gap
/// 3. two adjacent cardinals missing → the matching outer curve
/// 4. two opposite cardinals missing, or three or more → `NoMatchingVariant`
///
/// # Errors
///
/// Returns `NoMatchingVariant` for degenerate masks and `RoleNotPresent`
/// when the matched rule needs a role the group does not define
pub fn resolve_with(
    mask: NeighborMask,
    group: &TerrainGroup,
    options: &ResolveOptions,
) -> Result<TileId> {
    let north = mask.contains(Direction::North);
    let east = mask.contains(Direction::East);
    let south = mask.contains(Direction::South);
    let west = mask.contains(Direction::West);

    match (north, east, south, west) {
        (true, true, true, true) => resolve_enclosed(mask, group, options),
        (false, true, true, true) => group.resolve(TileRole::Top),
        (true, false, true, true) => group.resolve(TileRole::Right),
        (true, true, false, true) => group.resolve(TileRole::Bottom),
        (true, true, true, false) => group.resolve(TileRole::Left),
        (false, true, true, false) => group.resolve(TileRole::CurveTopLeft),
        (false, false, true, true) => group.resolve(TileRole::CurveTopRight),
        (true, true, false, false) => group.resolve(TileRole::CurveBottomLeft),
        (true, false, false, true) => group.resolve(TileRole::CurveBottomRight),
        _ => Err(TilesetError::NoMatchingVariant { mask: mask.bits() }),
    }
}

/// Select the variant for a cell whose four cardinal neighbors are present
fn resolve_enclosed(
    mask: NeighborMask,
    group: &TerrainGroup,
    options: &ResolveOptions,
) -> Result<TileId> {
    if options.inner_corners && mask.has_diagonal_info() {
        let missing: Vec<Direction> = mask.missing_diagonals().collect();
        // Exactly one open diagonal marks an inner corner; more than one is
        // ambiguous and falls through to the center rules
        if let [lone] = missing.as_slice() {
            if let Some(role) = inner_corner_role(*lone) {
                return group.resolve(role);
            }
        }
    }

    group.resolve(options.center.role())
}

/// Diagonal-edge role facing an open diagonal, `None` for cardinals
const fn inner_corner_role(direction: Direction) -> Option<TileRole> {
    match direction {
        Direction::NorthWest => Some(TileRole::EdgeTopLeft),
        Direction::NorthEast => Some(TileRole::EdgeTopRight),
        Direction::SouthWest => Some(TileRole::EdgeBottomLeft),
        Direction::SouthEast => Some(TileRole::EdgeBottomRight),
        Direction::North | Direction::East | Direction::South | Direction::West => None,
    }
}
