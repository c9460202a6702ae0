//! Grid collaborator interface and whole-layer resolution
//!
//! Levels own their grids; this module defines the interface the autotiler
//! consumes them through, plus a dense sample grid for tooling and tests.

/// Grid views, the sample level grid, and layer resolution
pub mod grid;

pub use grid::{CellFailure, GridView, GroupedGrid, LayerResolution, LevelGrid, resolve_layer};
