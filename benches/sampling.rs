//! Performance measurement for per-contact ground height sampling

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use std::hint::black_box;
use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use terratile::catalog::{Slope, Tile, TileRole};
use terratile::catalog::tile::ImageRef;
use terratile::collision::{GroundProfile, height_at, surface_y_under_actor};

fn ramp_tile() -> Tile {
    Tile {
        id: 5,
        image: ImageRef {
            path: PathBuf::from("tiles/5.png"),
            width: 16,
            height: 16,
        },
        slope: Some(Slope::UpLeft45),
        role: TileRole::EdgeTopRight,
    }
}

/// Measures the strict height query at simulation sampling rates
fn bench_height_at(c: &mut Criterion) {
    let tile = ramp_tile();
    c.bench_function("height_at", |b| {
        b.iter(|| {
            for step in 0..64 {
                let local_x = f64::from(step) * 0.25;
                let _ = black_box(height_at(black_box(&tile), local_x));
            }
        });
    });
}

/// Measures profile construction plus sampling, the typical per-contact path
fn bench_ground_profile(c: &mut Criterion) {
    let tile = ramp_tile();
    c.bench_function("ground_profile_sample", |b| {
        b.iter(|| {
            let profile = GroundProfile::of(black_box(&tile));
            black_box(profile.height_at(black_box(7.5)))
        });
    });
}

/// Measures actor-centered surface lookup as movement code calls it
fn bench_surface_under_actor(c: &mut Criterion) {
    let tile = ramp_tile();
    c.bench_function("surface_y_under_actor", |b| {
        b.iter(|| {
            black_box(surface_y_under_actor(
                black_box(&tile),
                0.0,
                32.0,
                black_box(3.0),
                8.0,
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_height_at,
    bench_ground_profile,
    bench_surface_under_actor
);
criterion_main!(benches);
