//! Performance measurement for whole-layer resolution at varying grid densities

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use std::hint::black_box;
use std::path::PathBuf;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use terratile::autotile::{NeighborPolicy, ResolveOptions};
use terratile::catalog::{TerrainGroup, Tile, TileCatalog, TileRole};
use terratile::catalog::tile::ImageRef;
use terratile::spatial::{LevelGrid, resolve_layer};

fn tile(id: u32, role: TileRole) -> Tile {
    Tile {
        id,
        image: ImageRef {
            path: PathBuf::from(format!("tiles/{id}.png")),
            width: 16,
            height: 16,
        },
        slope: None,
        role,
    }
}

fn ground_group() -> Option<TerrainGroup> {
    let catalog = TileCatalog::new(vec![
        tile(1, TileRole::Top),
        tile(2, TileRole::Right),
        tile(3, TileRole::Left),
        tile(4, TileRole::Bottom),
        tile(9, TileRole::CurveTopRight),
        tile(10, TileRole::CurveTopLeft),
        tile(11, TileRole::CurveBottomRight),
        tile(12, TileRole::CurveBottomLeft),
        tile(13, TileRole::Center),
    ])
    .ok()?;
    TerrainGroup::build(
        &catalog,
        "ground",
        &[
            (TileRole::Top, 1),
            (TileRole::Bottom, 4),
            (TileRole::Left, 3),
            (TileRole::Right, 2),
            (TileRole::Center, 13),
            (TileRole::CurveTopLeft, 10),
            (TileRole::CurveTopRight, 9),
            (TileRole::CurveBottomLeft, 12),
            (TileRole::CurveBottomRight, 11),
        ],
    )
    .ok()
}

/// Deterministic pseudo-scatter fill so runs are comparable without a seed
fn filled_grid(size: usize, fill_percent: usize) -> LevelGrid {
    let mut grid = LevelGrid::new(size, size);
    for row in 0..size {
        for col in 0..size {
            if (row * 31 + col * 17) % 100 < fill_percent {
                grid.set([row, col], Some(13));
            }
        }
    }
    grid
}

/// Measures resolution cost as occupancy rises from sparse scatter to solid fill
fn bench_resolve_layer(c: &mut Criterion) {
    let Some(group) = ground_group() else {
        return;
    };
    let mut bench = c.benchmark_group("resolve_layer");

    for fill_percent in &[25, 50, 75, 100] {
        let grid = filled_grid(64, *fill_percent);
        bench.bench_with_input(
            BenchmarkId::from_parameter(fill_percent),
            &grid,
            |b, grid| {
                b.iter(|| {
                    resolve_layer(
                        black_box(grid),
                        &group,
                        NeighborPolicy::Cardinal,
                        &ResolveOptions::default(),
                    )
                });
            },
        );
    }
    bench.finish();
}

criterion_group!(benches, bench_resolve_layer);
criterion_main!(benches);
