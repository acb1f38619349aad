//! Gift-wrapping step, resumable walk and the closing driver.

use super::orient::orientation;
use super::types::{CollinearPolicy, Hull, HullCfg, HullError};
use crate::point::Point;

/// Leftmost point (minimum x); the first occurrence wins ties.
///
/// Always a hull point: nothing lies further left.
pub fn find_starting_point(points: &[Point]) -> Option<Point> {
    points.iter().copied().min_by_key(|p| p.x())
}

/// Leftmost, then lowest point. A strict corner of the hull, which the
/// farthest-collinear rule needs to close the walk.
fn lowest_leftmost(points: &[Point]) -> Option<Point> {
    points.iter().copied().min_by_key(|p| (p.x(), p.y()))
}

fn start_for(points: &[Point], cfg: &HullCfg) -> Option<Point> {
    match cfg.collinear {
        CollinearPolicy::Farthest => lowest_leftmost(points),
        CollinearPolicy::ScanOrder => find_starting_point(points),
    }
}

/// One gift-wrapping step with the default configuration.
///
/// See [`next_hull_vertex_with`].
#[inline]
pub fn next_hull_vertex(current: Point, points: &[Point]) -> Option<Point> {
    next_hull_vertex_with(current, points, &HullCfg::default())
}

/// One gift-wrapping step: the point `c` such that no point of `points` lies
/// strictly right of `current → c`.
///
/// Starts from the first point different from `current` and replaces the
/// candidate by every `w` with `orientation(current, candidate, w) < 0`.
/// Collinear ties follow `cfg.collinear`. Returns `None` when every point
/// equals `current`.
pub fn next_hull_vertex_with(current: Point, points: &[Point], cfg: &HullCfg) -> Option<Point> {
    let mut candidate = points.iter().copied().find(|&w| w != current)?;
    for &w in points {
        if w == current {
            continue;
        }
        let o = orientation(current, candidate, w);
        let replace = o < 0
            || (o == 0
                && cfg.collinear == CollinearPolicy::Farthest
                && current.distance_squared(w) > current.distance_squared(candidate));
        if replace {
            candidate = w;
        }
    }
    Some(candidate)
}

/// Step-by-step hull construction.
///
/// Yields the start vertex, then one hull vertex per call, and ends once the
/// next step returns to the start. If `points.len() + 1` steps pass without
/// closing, yields a single `Err(HullError::NoClosure)` and ends.
#[derive(Clone, Debug)]
pub struct HullWalk<'a> {
    points: &'a [Point],
    cfg: HullCfg,
    start: Option<Point>,
    current: Option<Point>,
    steps: usize,
    limit: usize,
    closed: bool,
    done: bool,
}

impl<'a> HullWalk<'a> {
    pub fn new(points: &'a [Point]) -> Self {
        Self::with_cfg(points, HullCfg::default())
    }

    pub fn with_cfg(points: &'a [Point], cfg: HullCfg) -> Self {
        Self {
            points,
            cfg,
            start: start_for(points, &cfg),
            current: None,
            steps: 0,
            limit: points.len() + 1,
            closed: false,
            done: false,
        }
    }

    /// Vertex the walk starts from and must return to.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Most recently yielded vertex.
    #[inline]
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    /// Number of wrap steps taken so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// True once a step returned to the start (or there was nothing to wrap).
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Iterator for HullWalk<'_> {
    type Item = Result<Point, HullError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(start) = self.start else {
            self.closed = true;
            self.done = true;
            return None;
        };
        let Some(current) = self.current else {
            self.current = Some(start);
            return Some(Ok(start));
        };
        if self.steps >= self.limit {
            self.done = true;
            return Some(Err(HullError::NoClosure {
                start,
                limit: self.limit,
            }));
        }
        self.steps += 1;
        match next_hull_vertex_with(current, self.points, &self.cfg) {
            Some(next) if next != start => {
                self.current = Some(next);
                Some(Ok(next))
            }
            _ => {
                self.closed = true;
                self.done = true;
                None
            }
        }
    }
}

/// Convex hull with the default configuration. See [`compute_hull_with`].
#[inline]
pub fn compute_hull(points: &[Point]) -> Result<Hull, HullError> {
    compute_hull_with(points, &HullCfg::default())
}

/// Convex hull in counterclockwise order from the start vertex.
///
/// - Fewer than two points: returned unchanged as `Hull::Degenerate`.
/// - Identical or collinear points: `Hull::Degenerate` with the trivial hull.
///   Two distinct points come back leftmost first, so `[(5,1), (2,-7)]`
///   yields `[(2,-7), (5,1)]`.
/// - No closure within `points.len() + 1` steps: `HullError::NoClosure`.
pub fn compute_hull_with(points: &[Point], cfg: &HullCfg) -> Result<Hull, HullError> {
    if points.len() < 2 {
        return Ok(Hull::Degenerate(points.to_vec()));
    }
    let chain = HullWalk::with_cfg(points, *cfg).collect::<Result<Vec<_>, _>>()?;
    Ok(Hull::from_closed_chain(chain))
}
