//! Sample level grid and whole-layer resolution
//!
//! The autotiler consumes grids through the [`GridView`] interface; levels
//! own their real grid representation. [`LevelGrid`] is the bundled dense
//! implementation used by the validation tool and tests. Out-of-bounds cells
//! are unoccupied by policy here: terrain does not wrap and does not assume
//! off-map continuation.

use ndarray::Array2;

use crate::autotile::mask::{NeighborMask, NeighborPolicy};
use crate::autotile::resolver::{ResolveOptions, resolve_with};
use crate::catalog::terrain::TerrainGroup;
use crate::catalog::tile::TileId;
use crate::io::error::{Result, TilesetError, parse_error};

/// Grid interface consumed by neighbor mask computation
///
/// Implemented by whatever owns the level's 2D arrangement of tile
/// references. The autotiler never inspects grids directly; membership
/// semantics belong to the level.
pub trait GridView {
    /// Tile occupying a cell, `None` for empty or out-of-bounds cells
    fn cell_occupant(&self, cell: [i32; 2]) -> Option<TileId>;

    /// Whether two cells hold tiles belonging to the same terrain group
    fn same_group(&self, a: [i32; 2], b: [i32; 2]) -> bool;
}

/// Dense row-major grid of optional tile ids
///
/// Rows grow downward to match screen space. Cells hold weak references into
/// a catalog: the id relation only, never ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGrid {
    cells: Array2<Option<TileId>>,
}

impl LevelGrid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), None),
        }
    }

    /// Build a grid from row-major occupancy data
    ///
    /// # Errors
    ///
    /// Returns a parse error when rows have uneven lengths
    pub fn from_rows(rows: Vec<Vec<Option<TileId>>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if rows.iter().any(|row| row.len() != width) {
            return Err(parse_error("grid rows have uneven lengths"));
        }

        let mut cells = Array2::from_elem((height, width), None);
        for (row_index, row) in rows.into_iter().enumerate() {
            for (col_index, occupant) in row.into_iter().enumerate() {
                if let Some(cell) = cells.get_mut((row_index, col_index)) {
                    *cell = occupant;
                }
            }
        }

        Ok(Self { cells })
    }

    /// Set a cell's occupant, returning whether the cell exists
    pub fn set(&mut self, cell: [usize; 2], occupant: Option<TileId>) -> bool {
        match self.cells.get_mut((cell[0], cell[1])) {
            Some(slot) => {
                *slot = occupant;
                true
            }
            None => false,
        }
    }

    /// Occupant of a cell, `None` for empty or out-of-bounds cells
    pub fn get(&self, cell: [i32; 2]) -> Option<TileId> {
        if cell[0] < 0 || cell[1] < 0 {
            return None;
        }
        self.cells
            .get((cell[0] as usize, cell[1] as usize))
            .copied()
            .flatten()
    }

    /// Grid dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

/// A grid paired with the terrain group being resolved
///
/// Supplies the membership predicate mask computation needs and implements
/// [`GridView`] for callers working through the interface.
#[derive(Debug, Clone, Copy)]
pub struct GroupedGrid<'a> {
    grid: &'a LevelGrid,
    group: &'a TerrainGroup,
}

impl<'a> GroupedGrid<'a> {
    /// Pair a grid with a terrain group
    pub const fn new(grid: &'a LevelGrid, group: &'a TerrainGroup) -> Self {
        Self { grid, group }
    }

    /// Whether the cell holds a tile belonging to the group
    ///
    /// Out-of-bounds cells are not members.
    pub fn is_member(&self, cell: [i32; 2]) -> bool {
        self.grid
            .get(cell)
            .is_some_and(|id| self.group.contains(id))
    }
}

impl GridView for GroupedGrid<'_> {
    fn cell_occupant(&self, cell: [i32; 2]) -> Option<TileId> {
        self.grid.get(cell)
    }

    fn same_group(&self, a: [i32; 2], b: [i32; 2]) -> bool {
        self.is_member(a) && self.is_member(b)
    }
}

/// A cell whose mask matched no variant, with the error it raised
#[derive(Debug)]
pub struct CellFailure {
    /// Grid position (row, col)
    pub cell: [usize; 2],
    /// The resolution error
    pub error: TilesetError,
}

/// Outcome of resolving one terrain group across a whole grid
#[derive(Debug)]
pub struct LayerResolution {
    /// Resolved tile id per cell; `None` where the cell is not a group member
    /// or resolution failed
    pub tiles: Array2<Option<TileId>>,
    /// Cells that failed, in row-major order
    pub failures: Vec<CellFailure>,
}

impl LayerResolution {
    /// Whether every member cell resolved
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolve every member cell of a grid against a terrain group
///
/// Failures are collected rather than aborting the pass: a level lint wants
/// every bad cell in one run, and a single degenerate cell must not hide the
/// rest of the layer.
pub fn resolve_layer(
    grid: &LevelGrid,
    group: &TerrainGroup,
    policy: NeighborPolicy,
    options: &ResolveOptions,
) -> LayerResolution {
    let (rows, cols) = grid.dimensions();
    let mut tiles = Array2::from_elem((rows, cols), None);
    let mut failures = Vec::new();
    let view = GroupedGrid::new(grid, group);

    for row in 0..rows {
        for col in 0..cols {
            let cell = [row as i32, col as i32];
            if !view.is_member(cell) {
                continue;
            }

            let mask = NeighborMask::compute(policy, cell, |neighbor| view.is_member(neighbor));
            match resolve_with(mask, group, options) {
                Ok(id) => {
                    if let Some(slot) = tiles.get_mut((row, col)) {
                        *slot = Some(id);
                    }
                }
                Err(error) => failures.push(CellFailure {
                    cell: [row, col],
                    error,
                }),
            }
        }
    }

    LayerResolution { tiles, failures }
}
