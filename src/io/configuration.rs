//! Validation tool constants and defaults

// Sidecar discovery: companion files share the asset's stem plus a suffix
/// Suffix of terrain group declaration sidecars
pub const GROUPS_SUFFIX: &str = "_groups";
/// Suffix of occupancy grid sidecars
pub const GRID_SUFFIX: &str = "_grid";
/// Suffix added to report filenames
pub const REPORT_SUFFIX: &str = "_report";

// Safety limits to prevent excessive memory allocation from bad input
/// Maximum tiles accepted per catalog
pub const MAX_CATALOG_TILES: usize = 65_536;
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
