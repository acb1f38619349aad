//! Convex hull by gift wrapping (Jarvis march).
//!
//! Purpose
//! - Compute the counterclockwise boundary of a finite integer point set,
//!   starting at a leftmost point, one "wrap" step at a time.
//! - Expose the single step (`next_hull_vertex`) and a resumable walk
//!   (`HullWalk`) so a driver can advance the construction on user input.
//!
//! Numerics
//! - Orientation is computed exactly in `i128`; any `i32` coordinates are safe.
//!
//! Collinear extremes
//! - `CollinearPolicy::Farthest` (default) keeps the farthest collinear
//!   candidate, so hull vertices are strict corners.
//! - `CollinearPolicy::ScanOrder` keeps whichever candidate the scan retained
//!   (strict `< 0` only). Non-robust: may skip a collinear extreme point.
//!
//! Code cross-refs: `Point`, `orient::{orientation, Turn}`, `wrap::HullWalk`

mod orient;
mod types;
mod wrap;

pub use orient::{orientation, Turn};
pub use types::{CollinearPolicy, Hull, HullCfg, HullError};
pub use wrap::{
    compute_hull, compute_hull_with, find_starting_point, next_hull_vertex,
    next_hull_vertex_with, HullWalk,
};
