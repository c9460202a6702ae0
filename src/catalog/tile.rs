//! Tile model: identifiers, image references, slope classifications, roles
//!
//! These are the semantic values a tileset asset parses into. The vocabulary
//! mirrors the asset conventions: slope is only ever attached to the two
//! upper edge-corner roles, and every recognized role names the position a
//! tile occupies within a terrain blob.

use std::path::PathBuf;

/// Stable identifier for a tile, unique within one catalog
pub type TileId = u32;

/// 45-degree slope classification for ramp tiles
///
/// `UpLeft45` rises from height 0 at the tile's left edge to the full tile
/// height at its right edge; `UpRight45` is the mirror. Only these two kinds
/// exist in the supported assets; the height query contract is written so new
/// kinds can be added without changing the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slope {
    /// Ground rises as local x increases (climbing toward the right edge)
    UpLeft45,
    /// Ground falls as local x increases (climbing toward the left edge)
    UpRight45,
}

impl Slope {
    /// Parse the recognized `slope` property values
    ///
    /// Returns `None` for anything other than the two recognized strings;
    /// the io layer converts that into a parse failure rather than ignoring
    /// the property.
    pub fn from_property(value: &str) -> Option<Self> {
        match value {
            "45_up_left" => Some(Self::UpLeft45),
            "45_up_right" => Some(Self::UpRight45),
            _ => None,
        }
    }

    /// Property string this classification parses from
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpLeft45 => "45_up_left",
            Self::UpRight45 => "45_up_right",
        }
    }
}

/// Position a tile occupies within a terrain blob
///
/// Roles partition a terrain group: four cardinal edges, four diagonal edge
/// corners, four inner curves, the center family, and the wall tiles used by
/// interior sets. `Unclassified` marks tiles that take no part in autotile
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileRole {
    /// Ground edge with open space above
    Top,
    /// Ground edge with open space below
    Bottom,
    /// Ground edge with open space to the left
    Left,
    /// Ground edge with open space to the right
    Right,
    /// Diagonal edge at the blob's top-left rim
    EdgeTopLeft,
    /// Diagonal edge at the blob's top-right rim
    EdgeTopRight,
    /// Diagonal edge at the blob's bottom-left rim
    EdgeBottomLeft,
    /// Diagonal edge at the blob's bottom-right rim
    EdgeBottomRight,
    /// Outer corner open to the north and west
    CurveTopLeft,
    /// Outer corner open to the north and east
    CurveTopRight,
    /// Outer corner open to the south and west
    CurveBottomLeft,
    /// Outer corner open to the south and east
    CurveBottomRight,
    /// Fully enclosed interior tile
    Center,
    /// Interior variant with a solid fill treatment
    CenterSolid,
    /// Interior variant with a drain detail
    CenterDrain,
    /// Interior variant with a left-facing drain detail
    CenterDrainLeft,
    /// Interior variant with a right-facing drain detail
    CenterDrainRight,
    /// Interior wall tile
    Wall,
    /// Alternate interior wall treatment
    WallVariant,
    /// Tile that takes no part in autotile resolution
    Unclassified,
}

impl TileRole {
    /// Parse the recognized `role` property values
    pub fn from_property(value: &str) -> Option<Self> {
        match value {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "edge_top_left" => Some(Self::EdgeTopLeft),
            "edge_top_right" => Some(Self::EdgeTopRight),
            "edge_bottom_left" => Some(Self::EdgeBottomLeft),
            "edge_bottom_right" => Some(Self::EdgeBottomRight),
            "curve_top_left" => Some(Self::CurveTopLeft),
            "curve_top_right" => Some(Self::CurveTopRight),
            "curve_bottom_left" => Some(Self::CurveBottomLeft),
            "curve_bottom_right" => Some(Self::CurveBottomRight),
            "center" => Some(Self::Center),
            "center_solid" => Some(Self::CenterSolid),
            "center_drain" => Some(Self::CenterDrain),
            "center_drain_left" => Some(Self::CenterDrainLeft),
            "center_drain_right" => Some(Self::CenterDrainRight),
            "wall" => Some(Self::Wall),
            "wall_variant" => Some(Self::WallVariant),
            "unclassified" => Some(Self::Unclassified),
            _ => None,
        }
    }

    /// Property string this role parses from
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::EdgeTopLeft => "edge_top_left",
            Self::EdgeTopRight => "edge_top_right",
            Self::EdgeBottomLeft => "edge_bottom_left",
            Self::EdgeBottomRight => "edge_bottom_right",
            Self::CurveTopLeft => "curve_top_left",
            Self::CurveTopRight => "curve_top_right",
            Self::CurveBottomLeft => "curve_bottom_left",
            Self::CurveBottomRight => "curve_bottom_right",
            Self::Center => "center",
            Self::CenterSolid => "center_solid",
            Self::CenterDrain => "center_drain",
            Self::CenterDrainLeft => "center_drain_left",
            Self::CenterDrainRight => "center_drain_right",
            Self::Wall => "wall",
            Self::WallVariant => "wall_variant",
            Self::Unclassified => "unclassified",
        }
    }

    /// Whether this role may carry a slope classification
    ///
    /// Only the two upper edge corners slope. The assets never define slope
    /// on bottom edge corners, and rather than guess at a symmetrical policy
    /// for ceilings, bottom-edge slopes are rejected at catalog construction.
    pub const fn supports_slope(self) -> bool {
        matches!(self, Self::EdgeTopLeft | Self::EdgeTopRight)
    }
}

/// Reference to a tile's backing image with its declared dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Image path relative to the asset file
    pub path: PathBuf,
    /// Declared width in pixels
    pub width: u32,
    /// Declared height in pixels
    pub height: u32,
}

/// One tile of a catalog: identity, image, and terrain semantics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Identifier, unique within the owning catalog
    pub id: TileId,
    /// Backing image reference
    pub image: ImageRef,
    /// Slope classification, present only on upper edge-corner roles
    pub slope: Option<Slope>,
    /// Position this tile occupies within a terrain blob
    pub role: TileRole,
}

impl Tile {
    /// Tile width in pixels
    pub const fn width(&self) -> u32 {
        self.image.width
    }

    /// Tile height in pixels
    pub const fn height(&self) -> u32 {
        self.image.height
    }
}
