//! # bluedisk
//!
//! `bluedisk` is a Rust library for blue-noise Poisson disk sampling in 2D and 3D, designed
//! to be used in Rust as well as compiled to WebAssembly (WASM). It generates point sets in
//! which no two points are closer than a given distance while filling the domain nearly
//! as densely as that allows, in time roughly linear in the number of points.
//!
//! ## Features
//!
//! - **Grid-accelerated**: A background grid with cells of side `r / sqrt(2)` holds at most
//!   one sample per cell, so every candidate is validated against a constant number of cells.
//! - **2D and 3D**: [`Sampler2D`] and [`Sampler3D`] share one const-generic sampling loop.
//! - **Injectable randomness**: Any [`rand::Rng`] drives a run; seed one for reproducible output.
//! - **WASM-first**: Built with `wasm-bindgen` for use from JavaScript and TypeScript.
//!
//! ## Example
//!
//! ```
//! let points = bluedisk::sample_2d(100.0, 100.0, 10.0, 30).unwrap();
//! for (i, a) in points.iter().enumerate() {
//!     for b in &points[i + 1..] {
//!         let d2 = (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2);
//!         assert!(d2 >= 100.0 - 1e-9);
//!     }
//! }
//! ```
//!
//! See the `demos/` directory for SVG plotting of a sample set.

mod bounds;
mod config;
mod error;
pub mod grid;
pub mod random;
mod sampler;
pub mod shell;
pub mod wasm;

pub use bounds::BoundingBox;
pub use config::{SamplerConfig, DEFAULT_MAX_ATTEMPTS};
pub use error::SamplingError;
pub use grid::d2::Grid2D;
pub use grid::d3::Grid3D;
pub use grid::SpatialGrid;
pub use random::RandomSource;
pub use sampler::{PoissonSampler, SampleStats, Sampler2D, Sampler3D};
pub use shell::{Annulus, Shell, SphericalShell};

/// Samples the rectangle `[0, width) x [0, height)` with a non-reproducible generator.
pub fn sample_2d(
    width: f64,
    height: f64,
    min_distance: f64,
    max_attempts: usize,
) -> Result<Vec<[f64; 2]>, SamplingError> {
    sample_2d_with_rng(width, height, min_distance, max_attempts, &mut rand::thread_rng())
}

/// Samples the rectangle `[0, width) x [0, height)` drawing from `rng`.
pub fn sample_2d_with_rng<R: RandomSource + ?Sized>(
    width: f64,
    height: f64,
    min_distance: f64,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<[f64; 2]>, SamplingError> {
    let config = SamplerConfig::new(BoundingBox::from_extent([width, height]), min_distance)
        .with_max_attempts(max_attempts);
    let mut sampler = Sampler2D::new(config)?;
    sampler.generate(rng);
    Ok(sampler.into_points())
}

/// Samples the box `[0, width) x [0, height) x [0, depth)` with a non-reproducible generator.
pub fn sample_3d(
    width: f64,
    height: f64,
    depth: f64,
    min_distance: f64,
    max_attempts: usize,
) -> Result<Vec<[f64; 3]>, SamplingError> {
    sample_3d_with_rng(width, height, depth, min_distance, max_attempts, &mut rand::thread_rng())
}

/// Samples the box `[0, width) x [0, height) x [0, depth)` drawing from `rng`.
pub fn sample_3d_with_rng<R: RandomSource + ?Sized>(
    width: f64,
    height: f64,
    depth: f64,
    min_distance: f64,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<[f64; 3]>, SamplingError> {
    let config = SamplerConfig::new(BoundingBox::from_extent([width, height, depth]), min_distance)
        .with_max_attempts(max_attempts);
    let mut sampler = Sampler3D::new(config)?;
    sampler.generate(rng);
    Ok(sampler.into_points())
}
