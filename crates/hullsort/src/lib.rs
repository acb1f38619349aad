//! Core algorithms: gift-wrapping convex hull and in-place heap sort.
//!
//! Layout
//! - `point`: immutable integer 2D point.
//! - `hull`: orientation test, Jarvis march step, step iterator and driver.
//! - `heapsort`: ascending in-place sort of `f64` slices.
//! - `rand`: seeded input generators for drivers, tests and benches.
//!
//! Everything here is pure and synchronous. Printing, stepping on user input
//! and file I/O belong to the driver (`crates/cli`).

pub mod heapsort;
pub mod hull;
pub mod point;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use heapsort::{is_sorted_ascending, sort_ascending};
pub use hull::{compute_hull, compute_hull_with, CollinearPolicy, Hull, HullCfg, HullError};
pub use point::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::heapsort::{is_sorted_ascending, sort_ascending};
    pub use crate::hull::{
        compute_hull, compute_hull_with, find_starting_point, next_hull_vertex,
        next_hull_vertex_with, orientation, CollinearPolicy, Hull, HullCfg, HullError, HullWalk,
        Turn,
    };
    pub use crate::point::Point;
    pub use crate::rand::{draw_points, draw_values, Bounds2, ReplayToken};
}
