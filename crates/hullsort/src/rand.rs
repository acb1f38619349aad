//! Seeded random inputs for drivers, tests and benches.
//!
//! Model
//! - Points are drawn uniformly from an inclusive integer rectangle.
//! - Values are drawn uniformly from a half-open real interval.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the `index`-th draw of an experiment can be regenerated alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Inclusive integer rectangle `[x_min, x_max] × [y_min, y_max]`.
///
/// Invariant: `x_min <= x_max` and `y_min <= y_max` (enforced by `new`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds2 {
    x_min: i32,
    y_min: i32,
    x_max: i32,
    y_max: i32,
}

impl Default for Bounds2 {
    /// The ±10 square of the demo window.
    fn default() -> Self {
        Self {
            x_min: -10,
            y_min: -10,
            x_max: 10,
            y_max: 10,
        }
    }
}

impl Bounds2 {
    /// `None` if a minimum exceeds its maximum.
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Option<Self> {
        (x_min <= x_max && y_min <= y_max).then_some(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    #[inline]
    pub fn x_min(&self) -> i32 {
        self.x_min
    }
    #[inline]
    pub fn y_min(&self) -> i32 {
        self.y_min
    }
    #[inline]
    pub fn x_max(&self) -> i32 {
        self.x_max
    }
    #[inline]
    pub fn y_max(&self) -> i32 {
        self.y_max
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.x_min..=self.x_max).contains(&p.x()) && (self.y_min..=self.y_max).contains(&p.y())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// `n` points uniform in `bounds` (duplicates possible).
pub fn draw_points(n: usize, bounds: Bounds2, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(bounds.x_min..=bounds.x_max),
                rng.gen_range(bounds.y_min..=bounds.y_max),
            )
        })
        .collect()
}

/// `n` values uniform in `[lo, hi)`.
///
/// Returns all `lo` if the interval is empty or its width `hi - lo` is not
/// finite (e.g. `-f64::MAX..f64::MAX`).
pub fn draw_values(n: usize, lo: f64, hi: f64, tok: ReplayToken) -> Vec<f64> {
    if !(lo < hi && (hi - lo).is_finite()) {
        return vec![lo; n];
    }
    let mut rng = tok.to_std_rng();
    (0..n).map(|_| rng.gen_range(lo..hi)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draws() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_points(64, Bounds2::default(), tok);
        let b = draw_points(64, Bounds2::default(), tok);
        assert_eq!(a, b);
        let c = draw_points(64, Bounds2::default(), ReplayToken { seed: 42, index: 8 });
        assert_ne!(a, c);
    }

    #[test]
    fn points_stay_in_bounds() {
        let bounds = Bounds2::new(-3, 5, 4, 9).unwrap();
        let pts = draw_points(500, bounds, ReplayToken::new(1));
        assert!(pts.iter().all(|&p| bounds.contains(p)));
        let corner = Bounds2::new(2, 2, 2, 2).unwrap();
        assert!(draw_points(10, corner, ReplayToken::new(3))
            .iter()
            .all(|&p| p == Point::new(2, 2)));
    }

    #[test]
    fn inverted_bounds_rejected() {
        assert!(Bounds2::new(1, 0, 0, 0).is_none());
        assert!(Bounds2::new(0, 1, 0, 0).is_none());
    }

    #[test]
    fn values_in_range() {
        let v = draw_values(300, -2.5, 7.0, ReplayToken::new(9));
        assert_eq!(v.len(), 300);
        assert!(v.iter().all(|x| (-2.5..7.0).contains(x)));
        assert_eq!(draw_values(3, 1.0, 1.0, ReplayToken::new(0)), vec![1.0; 3]);
    }

    #[test]
    fn values_with_overflowing_width_do_not_panic() {
        let v = draw_values(3, -f64::MAX, f64::MAX, ReplayToken::new(2));
        assert_eq!(v, vec![-f64::MAX; 3]);
        let v = draw_values(2, f64::NEG_INFINITY, 0.0, ReplayToken::new(2));
        assert_eq!(v, vec![f64::NEG_INFINITY; 2]);
    }

    #[test]
    fn bounds_accessors_follow_new() {
        let b = Bounds2::new(-3, 5, 4, 9).unwrap();
        assert_eq!((b.x_min(), b.y_min(), b.x_max(), b.y_max()), (-3, 5, 4, 9));
        // full i32 range is a valid rectangle
        let full = Bounds2::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX).unwrap();
        assert!(draw_points(20, full, ReplayToken::new(4))
            .iter()
            .all(|&p| full.contains(p)));
    }
}
