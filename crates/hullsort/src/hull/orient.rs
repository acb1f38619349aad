use crate::point::Point;

/// Turn direction of `p2` relative to the directed line `p1 → p3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Counterclockwise,
    Collinear,
    Clockwise,
}

impl Turn {
    #[inline]
    pub fn of(p1: Point, p2: Point, p3: Point) -> Self {
        match orientation(p1, p2, p3) {
            o if o < 0 => Turn::Counterclockwise,
            0 => Turn::Collinear,
            _ => Turn::Clockwise,
        }
    }
}

/// Orientation of `p2` with respect to `(p1, p3)`:
/// `(p1.x-p2.x)(p1.y-p3.y) - (p1.y-p2.y)(p1.x-p3.x)`.
///
/// - `< 0`: `p2` lies strictly counterclockwise (left) of `p1 → p3`,
///   i.e. `p3` is the more clockwise of the two seen from `p1`.
/// - `0`: collinear.
/// - `> 0`: `p2` lies clockwise (right) of `p1 → p3`.
///
/// Exact for all `i32` inputs.
#[inline]
pub fn orientation(p1: Point, p2: Point, p3: Point) -> i128 {
    let a = p1.wide() - p2.wide();
    let b = p1.wide() - p3.wide();
    a.x * b.y - a.y * b.x
}
