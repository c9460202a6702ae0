//! CLI entry point for tileset validation and terrain grid linting

use clap::Parser;
use terratile::io::cli::{BatchValidator, Cli};

fn main() -> terratile::Result<()> {
    let cli = Cli::parse();
    let validator = BatchValidator::new(cli);
    validator.process()
}
