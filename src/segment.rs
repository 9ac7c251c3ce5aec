// Copyright 2026 the pathnorm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical path segments.

use arrayvec::ArrayVec;

use crate::command::{Command, Role, MAX_ARITY};
use crate::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The parameters of an elliptical arc segment.
///
/// Arcs are carried through canonicalization verbatim; only their end point
/// is made absolute.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcTo {
    /// The ellipse's radii along its own (rotated) x and y axes.
    pub radii: Vec2,
    /// The rotation of the ellipse's x axis, in degrees.
    pub x_rotation: f64,
    /// Whether the arc spans more than 180 degrees.
    pub large_arc: bool,
    /// Whether the arc is drawn in the positive-angle direction.
    pub sweep: bool,
    /// The arc's end point.
    pub to: Point,
}

impl ArcTo {
    /// Build an arc from its seven parameters in path-data order:
    /// `rx ry x-rotation large-arc sweep x y`.
    ///
    /// Flags are truncated towards zero; any nonzero value is set.
    pub(crate) fn from_params(args: &[f64]) -> ArcTo {
        ArcTo {
            radii: Vec2::new(args[0], args[1]),
            x_rotation: args[2],
            large_arc: args[3].trunc() != 0.0,
            sweep: args[4].trunc() != 0.0,
            to: Point::new(args[5], args[6]),
        }
    }
}

/// One segment of a canonical path.
///
/// Every coordinate is absolute, and only the five commands that have no
/// shorthand form remain.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// `M`: start a new subpath at the point.
    MoveTo(Point),
    /// `L`: line to the point.
    LineTo(Point),
    /// `C`: cubic Bézier with two control points, then the end point.
    CurveTo(Point, Point, Point),
    /// `Q`: quadratic Bézier with a control point, then the end point.
    QuadTo(Point, Point),
    /// `A`: elliptical arc.
    ArcTo(ArcTo),
}

impl Segment {
    /// Build a segment from a canonical command and its resolved arguments.
    ///
    /// Returns `None` if `command` is a shorthand command or `args` does not
    /// have exactly [`Command::arity`] values.
    pub fn from_args(command: Command, args: &[f64]) -> Option<Segment> {
        if args.len() != command.arity() {
            return None;
        }
        let pt = |i: usize| Point::new(args[i], args[i + 1]);
        let seg = match command {
            Command::MoveTo => Segment::MoveTo(pt(0)),
            Command::LineTo => Segment::LineTo(pt(0)),
            Command::CurveTo => Segment::CurveTo(pt(0), pt(2), pt(4)),
            Command::QuadTo => Segment::QuadTo(pt(0), pt(2)),
            Command::ArcTo => Segment::ArcTo(ArcTo::from_params(args)),
            _ => return None,
        };
        Some(seg)
    }

    /// The command of this segment.
    pub fn command(&self) -> Command {
        match self {
            Segment::MoveTo(_) => Command::MoveTo,
            Segment::LineTo(_) => Command::LineTo,
            Segment::CurveTo(..) => Command::CurveTo,
            Segment::QuadTo(..) => Command::QuadTo,
            Segment::ArcTo(_) => Command::ArcTo,
        }
    }

    /// The command letter of this segment.
    #[inline]
    pub fn letter(&self) -> char {
        self.command().letter()
    }

    /// The end point of this segment.
    pub fn end(&self) -> Point {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) | Segment::QuadTo(_, p) => p,
            Segment::CurveTo(_, _, p) => p,
            Segment::ArcTo(arc) => arc.to,
        }
    }

    /// The parameters of this segment in declared order.
    ///
    /// Arc flags are reported as `0.0` or `1.0`. Each parameter's meaning is
    /// given by the matching entry of [`Command::roles`].
    pub fn params(&self) -> ArrayVec<f64, MAX_ARITY> {
        let mut out = ArrayVec::new();
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => out.extend([p.x, p.y]),
            Segment::CurveTo(p1, p2, p3) => out.extend([p1.x, p1.y, p2.x, p2.y, p3.x, p3.y]),
            Segment::QuadTo(p1, p2) => out.extend([p1.x, p1.y, p2.x, p2.y]),
            Segment::ArcTo(arc) => out.extend([
                arc.radii.x,
                arc.radii.y,
                arc.x_rotation,
                flag(arc.large_arc),
                flag(arc.sweep),
                arc.to.x,
                arc.to.y,
            ]),
        }
        out
    }

    /// The parameters of this segment paired with their roles.
    pub fn params_with_roles(&self) -> impl Iterator<Item = (Role, f64)> {
        let roles = self.command().roles();
        roles.iter().copied().zip(self.params())
    }

    /// Whether every parameter of this segment is finite.
    pub fn is_finite(&self) -> bool {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => p.is_finite(),
            Segment::CurveTo(p1, p2, p3) => p1.is_finite() && p2.is_finite() && p3.is_finite(),
            Segment::QuadTo(p1, p2) => p1.is_finite() && p2.is_finite(),
            Segment::ArcTo(arc) => {
                arc.radii.is_finite() && arc.x_rotation.is_finite() && arc.to.is_finite()
            }
        }
    }

    /// Mutable access to every coordinate point of this segment.
    pub(crate) fn points_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        let points: ArrayVec<&mut Point, 3> = match self {
            Segment::MoveTo(p) | Segment::LineTo(p) => [p].into_iter().collect(),
            Segment::CurveTo(p1, p2, p3) => [p1, p2, p3].into_iter().collect(),
            Segment::QuadTo(p1, p2) => [p1, p2].into_iter().collect(),
            Segment::ArcTo(arc) => [&mut arc.to].into_iter().collect(),
        };
        points.into_iter()
    }
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_canonical_only() {
        assert_eq!(
            Segment::from_args(Command::LineTo, &[1., 2.]),
            Some(Segment::LineTo(Point::new(1., 2.)))
        );
        assert_eq!(Segment::from_args(Command::Horiz, &[1.]), None);
        assert_eq!(Segment::from_args(Command::LineTo, &[1.]), None);
        assert_eq!(Segment::from_args(Command::ClosePath, &[]), None);
    }

    #[test]
    fn arc_flags() {
        let seg = Segment::from_args(Command::ArcTo, &[5., 6., 30., 0.7, -2., 1., 2.]).unwrap();
        let Segment::ArcTo(arc) = seg else {
            panic!("expected an arc, got {seg:?}");
        };
        assert!(!arc.large_arc);
        assert!(arc.sweep);
        assert_eq!(seg.params().as_slice(), [5., 6., 30., 0., 1., 1., 2.]);
        assert_eq!(seg.end(), Point::new(1., 2.));
    }

    #[test]
    fn params_follow_roles() {
        let seg = Segment::CurveTo(Point::new(1., 2.), Point::new(3., 4.), Point::new(5., 6.));
        let xs: Vec<f64> = seg
            .params_with_roles()
            .filter(|(role, _)| *role == Role::X)
            .map(|(_, v)| v)
            .collect();
        assert_eq!(xs, [1., 3., 5.]);
        assert_eq!(seg.letter(), 'C');
    }

    #[test]
    fn finiteness() {
        assert!(Segment::QuadTo(Point::new(1., 1.), Point::new(2., 2.)).is_finite());
        assert!(!Segment::LineTo(Point::new(f64::INFINITY, 0.)).is_finite());
        let seg = Segment::from_args(Command::ArcTo, &[f64::NAN, 1., 0., 0., 0., 1., 1.]).unwrap();
        assert!(!seg.is_finite());
    }

    #[test]
    fn points_mut_visits_coordinates() {
        let mut seg = Segment::QuadTo(Point::new(1., 1.), Point::new(2., 2.));
        for p in seg.points_mut() {
            p.translate(1., 0.);
        }
        assert_eq!(seg, Segment::QuadTo(Point::new(2., 1.), Point::new(3., 2.)));
    }
}
