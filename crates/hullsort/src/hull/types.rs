//! Hull result, configuration and error types.

use thiserror::Error;

use super::orient::orientation;
use crate::point::Point;

/// How ties between exactly collinear candidates are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollinearPolicy {
    /// Keep the candidate farthest from the current vertex. Deterministic;
    /// collinear boundary points are not reported as vertices.
    #[default]
    Farthest,
    /// Keep whichever candidate the scan retained (strict `< 0` replacement
    /// only). Depends on input order.
    ScanOrder,
}

/// Hull construction settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HullCfg {
    pub collinear: CollinearPolicy,
}

/// Gift wrapping failed to return to its start vertex.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HullError {
    #[error(
        "gift wrapping did not return to ({}, {}) within {limit} steps; point set is malformed for this algorithm",
        .start.x(),
        .start.y()
    )]
    NoClosure { start: Point, limit: usize },
}

/// Counterclockwise hull boundary, implicitly closed (no repeated last vertex).
///
/// Invariants:
/// - `Polygon` has at least 3 vertices, not all collinear.
/// - `Degenerate` covers empty input, a single (possibly repeated) point and
///   collinear sets; its vertices are the trivial hull.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hull {
    Polygon(Vec<Point>),
    Degenerate(Vec<Point>),
}

impl Hull {
    /// Classify the vertices of a closed walk, e.g. collected from `HullWalk`.
    pub fn from_closed_chain(vertices: Vec<Point>) -> Self {
        if vertices.len() < 3 {
            return Hull::Degenerate(vertices);
        }
        let (a, b) = (vertices[0], vertices[1]);
        if vertices[2..].iter().all(|&c| orientation(a, b, c) == 0) {
            Hull::Degenerate(vertices)
        } else {
            Hull::Polygon(vertices)
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        match self {
            Hull::Polygon(v) | Hull::Degenerate(v) => v,
        }
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        match self {
            Hull::Polygon(v) | Hull::Degenerate(v) => v,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Hull::Degenerate(_))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices().is_empty()
    }

    /// Boundary edges `(v_i, v_{i+1})` including the closing edge.
    /// A single vertex has no edges; two vertices give the edge both ways.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let v = self.vertices();
        let n = if v.len() < 2 { 0 } else { v.len() };
        (0..n).map(move |i| (v[i], v[(i + 1) % v.len()]))
    }

    /// Twice the signed shoelace area; positive for counterclockwise order.
    pub fn doubled_area(&self) -> i128 {
        self.edges()
            .map(|(p, q)| {
                let (p, q) = (p.wide(), q.wide());
                p.x * q.y - q.x * p.y
            })
            .sum()
    }

    /// Whether `p` lies inside or on the boundary.
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Hull::Polygon(_) => self.edges().all(|(a, b)| orientation(a, b, p) >= 0),
            Hull::Degenerate(v) => match v.as_slice() {
                [] => false,
                [only] => *only == p,
                [a, b, ..] => {
                    if orientation(*a, *b, p) != 0 {
                        return false;
                    }
                    let (x_lo, x_hi) = span(v.iter().map(|q| q.x()));
                    let (y_lo, y_hi) = span(v.iter().map(|q| q.y()));
                    (x_lo..=x_hi).contains(&p.x()) && (y_lo..=y_hi).contains(&p.y())
                }
            },
        }
    }
}

fn span(values: impl Iterator<Item = i32>) -> (i32, i32) {
    values.fold((i32::MAX, i32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
