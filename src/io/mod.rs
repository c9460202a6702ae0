//! Input/output operations and error handling

/// Tileset asset and sidecar loading, backing image verification
pub mod asset;
/// Command-line interface for batch validation
pub mod cli;
/// Validation tool constants and defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// Batch progress display
pub mod progress;
/// Validation report model and export
pub mod report;
