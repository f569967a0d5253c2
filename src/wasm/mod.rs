//! WebAssembly bindings.
//!
//! Points cross the boundary as flat `Float64Array`s (`[x0, y0, x1, y1, ...]` in 2D,
//! `[x0, y0, z0, ...]` in 3D) or, through `points()`, as arrays of coordinate arrays.

pub mod d2;
pub mod d3;
pub mod utils;
