// Copyright 2026 the pathnorm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translating, scaling and rotating canonical paths.
//!
//! These work directly on the segment parameters. Elliptical arcs are only
//! approximately transformed: their radii are scaled by the x factor alone,
//! and rotation moves their end point without turning the ellipse.

use crate::{Path, Point, Segment, Vec2};

impl Segment {
    /// Offset every coordinate of this segment.
    #[inline]
    pub fn translate(&mut self, offset: Vec2) {
        for p in self.points_mut() {
            *p += offset;
        }
    }

    /// Scale every coordinate of this segment by `sx` horizontally and `sy`
    /// vertically.
    ///
    /// Arc radii are both multiplied by `sx`. A scale that mirrors the
    /// segment (`sx * sy < 0`) flips the arc's sweep flag, and a vertical
    /// flip (`sy < 0`) negates its x-axis rotation.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        for p in self.points_mut() {
            p.x *= sx;
            p.y *= sy;
        }
        if let Segment::ArcTo(arc) = self {
            arc.radii *= sx;
            if sx * sy < 0.0 {
                arc.sweep = !arc.sweep;
            }
            if sy < 0.0 {
                arc.x_rotation = -arc.x_rotation;
            }
        }
    }

    /// Rotate every coordinate of this segment by `angle` radians around
    /// `center`.
    ///
    /// The rotation runs from the positive x axis towards the positive y
    /// axis. Arc radii and x-axis rotation are left as they are.
    pub fn rotate(&mut self, angle: f64, center: Point) {
        if angle == 0.0 {
            return;
        }
        for p in self.points_mut() {
            *p = rotate_point(*p, angle, center);
        }
    }
}

fn rotate_point(p: Point, angle: f64, center: Point) -> Point {
    let v = p - center;
    let r = v.hypot();
    if r == 0.0 {
        return p;
    }
    center + Vec2::from_angle(v.angle() + angle) * r
}

impl Path {
    /// Offset every coordinate of this path.
    ///
    /// Translating by `v` and then by `-v` restores the path exactly when
    /// the additions are exact, as they are for integer coordinates.
    ///
    /// ```
    /// use pathnorm::{Path, Vec2};
    /// let mut path = Path::parse("M0 0 L10 0").unwrap();
    /// path.translate(Vec2::new(2.0, 3.0));
    /// assert_eq!(path.to_svg(), "M2 3L12 3");
    /// ```
    pub fn translate(&mut self, offset: Vec2) {
        for seg in self.segments_mut() {
            seg.translate(offset);
        }
    }

    /// Scale this path; see [`Segment::scale`].
    pub fn scale(&mut self, sx: f64, sy: f64) {
        for seg in self.segments_mut() {
            seg.scale(sx, sy);
        }
    }

    /// Rotate this path by `angle` radians around `center`; see
    /// [`Segment::rotate`].
    pub fn rotate(&mut self, angle: f64, center: Point) {
        if angle == 0.0 {
            return;
        }
        for seg in self.segments_mut() {
            seg.rotate(angle, center);
        }
    }
}
