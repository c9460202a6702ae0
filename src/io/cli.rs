//! Command-line interface for batch tileset validation and grid linting

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::autotile::mask::NeighborPolicy;
use crate::autotile::resolver::{CenterStyle, ResolveOptions};
use crate::catalog::terrain::TerrainGroup;
use crate::catalog::tileset::TileCatalog;
use crate::io::asset::{
    build_groups, load_catalog, load_grid, load_groups, sibling_path, verify_backing_images,
};
use crate::io::configuration::{GRID_SUFFIX, GROUPS_SUFFIX, REPORT_SUFFIX};
use crate::io::error::{Result, TilesetError};
use crate::io::progress::ValidationProgress;
use crate::io::report::{GroupReport, UnknownTile, ValidationReport, write_report};
use crate::spatial::grid::{LevelGrid, resolve_layer};

#[derive(Parser)]
#[command(name = "terratile")]
#[command(
    author,
    version,
    about = "Validate tileset assets and lint terrain grids"
)]
/// Command-line arguments for the validation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Tileset JSON file or directory to validate
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Verify backing images exist and match declared dimensions
    #[arg(short = 'i', long)]
    pub check_images: bool,

    /// Resolve grids under the eight-neighbor policy with inner corner variants
    #[arg(short = 'n', long)]
    pub inner_corners: bool,

    /// Center variant for enclosed cells
    #[arg(short, long, default_value = "plain", value_parser = parse_center_style)]
    pub center: CenterStyle,

    /// Suppress progress output and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if a report exists
    #[arg(short = 'f', long)]
    pub no_skip: bool,
}

fn parse_center_style(value: &str) -> std::result::Result<CenterStyle, String> {
    CenterStyle::from_name(value).ok_or_else(|| {
        format!("unrecognized center style '{value}' (expected plain, solid, drain, drain_left, or drain_right)")
    })
}

impl Cli {
    /// Check if existing reports should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Neighbor sampling policy selected by the flags
    pub const fn policy(&self) -> NeighborPolicy {
        if self.inner_corners {
            NeighborPolicy::Full
        } else {
            NeighborPolicy::Cardinal
        }
    }

    /// Resolution options selected by the flags
    pub const fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            center: self.center,
            inner_corners: self.inner_corners,
        }
    }
}

/// Orchestrates batch validation of tileset files with progress tracking
pub struct BatchValidator {
    cli: Cli,
}

impl BatchValidator {
    /// Create a validator from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Validate every targeted tileset
    ///
    /// Each file is validated independently: one bad tileset does not stop
    /// the rest of the batch, but any failure makes the run fail overall.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be enumerated or if any file
    /// failed validation
    // Per-file failures print immediately so the batch summary stays useful
    #[allow(clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(());
        }

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ValidationProgress::new(files.len()));

        let mut failed = 0_usize;
        for file in &files {
            if let Err(error) = self.process_file(file, progress.as_ref()) {
                failed += 1;
                eprintln!("{}: {error}", file.display());
            }
            if let Some(ref bars) = progress {
                bars.complete_file();
            }
        }

        if let Some(bars) = progress {
            bars.finish();
        }

        if failed > 0 {
            return Err(TilesetError::Parse {
                path: self.cli.target.clone(),
                reason: format!("{failed} of {} tilesets failed validation", files.len()),
            });
        }
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if target.extension().and_then(|s| s.to_str()) == Some("json")
                && !Self::is_sidecar(target)
            {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(TilesetError::Parse {
                    path: target.clone(),
                    reason: "target must be a tileset JSON file".to_string(),
                })
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("json")
                    && !Self::is_sidecar(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(TilesetError::Parse {
                path: target.clone(),
                reason: "target must be a tileset JSON file or directory".to_string(),
            })
        }
    }

    /// Whether the path is a groups, grid, or report companion file
    fn is_sidecar(path: &Path) -> bool {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| {
                stem.ends_with(GROUPS_SUFFIX)
                    || stem.ends_with(GRID_SUFFIX)
                    || stem.ends_with(REPORT_SUFFIX)
            })
    }

    // Allow print for user feedback on skipped files
    #[allow(clippy::print_stderr)]
    fn should_process_file(&self, path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let report_path = sibling_path(path, REPORT_SUFFIX);
        if report_path.exists() {
            if !self.cli.quiet {
                eprintln!("Skipping: {} (report exists)", path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback on missing sidecars
    #[allow(clippy::print_stderr)]
    fn process_file(&self, path: &Path, progress: Option<&ValidationProgress>) -> Result<()> {
        let catalog = load_catalog(path)?;

        if self.cli.check_images {
            let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
            verify_backing_images(&catalog, base_dir)?;
        }

        let groups_path = sibling_path(path, GROUPS_SUFFIX);
        let specs = if groups_path.is_file() {
            load_groups(&groups_path)?
        } else {
            if !self.cli.quiet {
                eprintln!(
                    "No groups found at: {} (validated catalog only)",
                    groups_path.display()
                );
            }
            Vec::new()
        };
        let groups = build_groups(&catalog, &specs)?;
        self.warn_on_overlaps(&groups);

        let grid_path = sibling_path(path, GRID_SUFFIX);
        let grid = grid_path
            .is_file()
            .then(|| load_grid(&grid_path))
            .transpose()?;

        if let Some(bars) = progress {
            bars.begin_file(path, groups.len());
        }

        let unknown_tiles = grid
            .as_ref()
            .map_or_else(Vec::new, |level| collect_unknown_tiles(level, &catalog));

        let options = self.cli.resolve_options();
        let policy = self.cli.policy();
        let mut group_reports = Vec::with_capacity(groups.len());
        for group in &groups {
            let resolution = grid
                .as_ref()
                .map(|level| resolve_layer(level, group, policy, &options));
            group_reports.push(GroupReport::new(group, resolution.as_ref()));
            if let Some(bars) = progress {
                bars.advance();
            }
        }

        let report = ValidationReport {
            tileset: path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            tile_count: catalog.len(),
            unknown_tiles,
            groups: group_reports,
        };
        write_report(&report, &sibling_path(path, REPORT_SUFFIX))
    }

    /// Warn when groups share tiles, which makes group membership ambiguous
    // Allow print for user-facing warnings
    #[allow(clippy::print_stderr)]
    fn warn_on_overlaps(&self, groups: &[TerrainGroup]) {
        if self.cli.quiet {
            return;
        }
        for (index, first) in groups.iter().enumerate() {
            for second in groups.iter().skip(index + 1) {
                let shared = first.members().intersection(second.members());
                if !shared.is_empty() {
                    eprintln!(
                        "Warning: groups '{}' and '{}' share tiles: {shared}",
                        first.name(),
                        second.name()
                    );
                }
            }
        }
    }
}

/// Occupied grid cells whose ids the catalog does not define
fn collect_unknown_tiles(grid: &LevelGrid, catalog: &TileCatalog) -> Vec<UnknownTile> {
    let (rows, cols) = grid.dimensions();
    let mut unknown = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if let Some(id) = grid.get([row as i32, col as i32]) {
                if !catalog.contains(id) {
                    unknown.push(UnknownTile { row, col, id });
                }
            }
        }
    }
    unknown
}
