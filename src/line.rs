// Copyright 2026 the pathnorm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line segments.
//!
//! These are the geometry helpers consumers of a canonical [`Path`](crate::Path)
//! reach for: every `LineTo` in a canonical path is a [`Line`] from the
//! previous end point.

use core::ops::Add;

use crate::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Returns a copy of this `Line` with the end points swapped so that it
    /// points in the opposite direction.
    #[must_use]
    #[inline(always)]
    pub fn reversed(&self) -> Line {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }

    /// The displacement from the start point to the end point.
    #[inline]
    pub fn delta(self) -> Vec2 {
        self.p1 - self.p0
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        self.delta().hypot()
    }

    /// The direction of the line in radians, measured from the positive x
    /// axis towards the positive y axis.
    #[inline]
    pub fn angle(self) -> f64 {
        self.delta().angle()
    }

    /// Rise over run.
    ///
    /// Vertical lines have no slope and return `NaN`.
    #[inline]
    pub fn slope(self) -> f64 {
        let d = self.delta();
        if d.x == 0.0 {
            return f64::NAN;
        }
        d.y / d.x
    }

    /// The y coordinate where the line, extended to infinity, crosses the
    /// y axis.
    ///
    /// Vertical lines return `NaN`.
    #[inline]
    pub fn intercept(self) -> f64 {
        self.p0.y - self.slope() * self.p0.x
    }

    /// The midpoint of the line.
    #[must_use]
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// Offset both end points in place.
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.p0.translate(dx, dy);
        self.p1.translate(dx, dy);
    }

    /// Dot product of the two lines, taken as vectors.
    #[inline]
    pub fn dot(self, other: Line) -> f64 {
        self.delta().dot(other.delta())
    }

    /// The distance from `p` to the nearest point of this segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnorm::{Line, Point};
    /// let line = Line::new((0.0, 0.0), (10.0, 0.0));
    /// assert_eq!(line.distance_to_point(Point::new(5.0, 3.0)), 3.0);
    /// assert_eq!(line.distance_to_point(Point::new(13.0, 4.0)), 5.0);
    /// ```
    pub fn distance_to_point(self, p: Point) -> f64 {
        let c1 = Line::new(self.p0, p).dot(self);
        if c1 <= 0.0 {
            return p.distance(self.p0);
        }
        let c2 = self.dot(self);
        if c2 <= c1 {
            return p.distance(self.p1);
        }
        self.perp_distance_to_point(p)
    }

    /// The distance from `p` to this line extended to infinity.
    ///
    /// Zero-length lines return `NaN`.
    pub fn perp_distance_to_point(self, p: Point) -> f64 {
        let len = self.length();
        if len == 0.0 {
            return f64::NAN;
        }
        self.delta().cross(self.p0 - p).abs() / len
    }

    /// The point `len` units along the line from its start.
    ///
    /// Returns `None` for a zero-length line, which has no direction.
    pub fn point_at_length(self, len: f64) -> Option<Point> {
        let total = self.length();
        if total == 0.0 {
            return None;
        }
        Some(self.point_at_ratio(len / total))
    }

    /// The point at parameter `t`, where `0` is the start and `1` the end.
    #[inline]
    pub fn point_at_ratio(self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    /// A line with the same direction and length, starting at `p`.
    #[inline]
    pub fn parallel_through(self, p: Point) -> Line {
        Line::new(p, p + self.delta())
    }

    /// Computes the point where two lines, if extended to infinity, would cross.
    ///
    /// Parallel lines return `None`.
    pub fn intersect(self, other: Line) -> Option<Point> {
        let ab = self.delta();
        let cd = other.delta();
        let pcd = ab.cross(cd);
        if pcd == 0.0 {
            return None;
        }
        let h = cd.cross(self.p0 - other.p0) / pcd;
        Some(self.p0 + ab * h)
    }
}

impl From<(Point, Point)> for Line {
    #[inline(always)]
    fn from((from, to): (Point, Point)) -> Self {
        Line::new(from, to)
    }
}

impl Add<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn add(self, v: Vec2) -> Line {
        Line::new(self.p0 + v, self.p1 + v)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Line, Point, Vec2};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn line_reversed() {
        let l = Line::new((0.0, 0.0), (1.0, 1.0));
        let f = l.reversed();

        assert_eq!(l.p0, f.p1);
        assert_eq!(l.p1, f.p0);

        // Reversing it again should result in the original line
        assert_eq!(l, f.reversed());
    }

    #[test]
    fn line_length_and_angle() {
        let l = Line::new((1.0, 1.0), (4.0, 5.0));
        assert_eq!(l.length(), 5.0);
        let up = Line::new((0.0, 0.0), (0.0, 2.0));
        assert!((up.angle() - core::f64::consts::FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn line_slope_intercept() {
        let l = Line::new((1.0, 3.0), (3.0, 7.0));
        assert_eq!(l.slope(), 2.0);
        assert_eq!(l.intercept(), 1.0);

        let vertical = Line::new((2.0, 0.0), (2.0, 5.0));
        assert!(vertical.slope().is_nan());
        assert!(vertical.intercept().is_nan());
    }

    #[test]
    fn line_distance_to_point() {
        let l = Line::new((0.0, 0.0), (10.0, 0.0));
        // Before the start.
        assert_eq!(l.distance_to_point(Point::new(-3.0, 4.0)), 5.0);
        // Past the end.
        assert_eq!(l.distance_to_point(Point::new(13.0, -4.0)), 5.0);
        // Alongside.
        assert_eq!(l.distance_to_point(Point::new(4.0, -2.0)), 2.0);
        // The perpendicular distance ignores the end points.
        assert_eq!(l.perp_distance_to_point(Point::new(40.0, 2.0)), 2.0);

        let degenerate = Line::new((1.0, 1.0), (1.0, 1.0));
        assert!(degenerate.perp_distance_to_point(Point::ZERO).is_nan());
        assert_eq!(degenerate.distance_to_point(Point::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn line_point_at() {
        let l = Line::new((0.0, 0.0), (6.0, 8.0));
        assert_eq!(l.point_at_length(5.0), Some(Point::new(3.0, 4.0)));
        assert_eq!(l.point_at_ratio(0.5), Point::new(3.0, 4.0));
        assert_eq!(l.point_at_ratio(0.0), l.p0);
        assert_eq!(Line::new((1.0, 1.0), (1.0, 1.0)).point_at_length(1.0), None);
    }

    #[test]
    fn line_intersect() {
        let a = Line::new((0.0, 0.0), (2.0, 2.0));
        let b = Line::new((0.0, 2.0), (2.0, 0.0));
        let p = a.intersect(b).unwrap();
        assert!(p.distance(Point::new(1.0, 1.0)) < EPSILON);

        // Crossing beyond the end of both segments still counts.
        let c = Line::new((0.0, 5.0), (1.0, 5.0));
        let p = a.intersect(c).unwrap();
        assert!(p.distance(Point::new(5.0, 5.0)) < EPSILON);

        let parallel = a + Vec2::new(0.0, 1.0);
        assert_eq!(a.intersect(parallel), None);
    }

    #[test]
    fn line_dot_parallel_translate() {
        let a = Line::new((0.0, 0.0), (3.0, 0.0));
        let b = Line::new((5.0, 5.0), (7.0, 9.0));
        assert_eq!(a.dot(b), 6.0);

        let p = a.parallel_through(Point::new(1.0, 1.0));
        assert_eq!(p, Line::new((1.0, 1.0), (4.0, 1.0)));

        let mut moved = a;
        moved.translate(1.0, 2.0);
        assert_eq!(moved, Line::new((1.0, 2.0), (4.0, 2.0)));
        assert_eq!(a.midpoint(), Point::new(1.5, 0.0));
    }
}
