// Copyright 2026 the pathnorm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonicalizing state machine.

use core::fmt;

use arrayvec::ArrayVec;

use crate::command::{Command, Role, MAX_ARITY};
use crate::lexer::{Token, Tokens, Truncation};
use crate::{ArcTo, Point, Segment};

/// The path did not begin with a moveto.
///
/// This is the only way parsing can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MalformedPathError {
    /// The command that came first instead of a moveto.
    pub found: Command,
    /// Byte offset of that command's letter.
    pub offset: usize,
}

impl fmt::Display for MalformedPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path must begin with a moveto, found `{}` at byte {}",
            self.found.letter(),
            self.offset
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MalformedPathError {}

/// Turns a stream of [`Token`]s into canonical [`Segment`]s.
///
/// Relative coordinates are made absolute against the pen, `H` and `V`
/// become `L`, `S` and `T` become `C` and `Q` with their first control point
/// reflected, and `Z` becomes an `L` back to the start of the subpath.
///
/// The first token must be a moveto; otherwise the iterator yields a single
/// [`MalformedPathError`] and ends.
///
/// # Examples
///
/// ```
/// use pathnorm::{Canonicalizer, Point, Segment};
/// let segs: Result<Vec<_>, _> = Canonicalizer::new("m1 1 h2").collect();
/// assert_eq!(
///     segs.unwrap(),
///     [Segment::MoveTo(Point::new(1., 1.)), Segment::LineTo(Point::new(3., 1.))]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Canonicalizer<'a> {
    tokens: Tokens<'a>,
    pen: Point,
    subpath_start: Point,
    last_control: Point,
    last_command: Option<Command>,
    failed: bool,
}

impl<'a> Canonicalizer<'a> {
    /// Canonicalize the path data in `data`.
    pub fn new(data: &'a str) -> Canonicalizer<'a> {
        Canonicalizer::from_tokens(Tokens::new(data))
    }

    /// Canonicalize an existing token stream.
    pub fn from_tokens(tokens: Tokens<'a>) -> Canonicalizer<'a> {
        Canonicalizer {
            tokens,
            pen: Point::ZERO,
            subpath_start: Point::ZERO,
            last_control: Point::ZERO,
            last_command: None,
            failed: false,
        }
    }

    /// The truncated argument group that ended the input early, if any.
    ///
    /// See [`Tokens::truncation`].
    pub fn truncation(&self) -> Option<Truncation> {
        self.tokens.truncation()
    }

    /// The current pen position.
    pub fn pen(&self) -> Point {
        self.pen
    }

    fn step(&mut self, token: Token) -> Segment {
        let Token {
            command,
            relative,
            mut args,
            ..
        } = token;
        if relative {
            resolve_relative(command, &mut args, self.pen);
        }
        let pen = self.pen;
        let at = |i: usize| Point::new(args[i], args[i + 1]);
        let seg = match command {
            Command::MoveTo => Segment::MoveTo(at(0)),
            Command::LineTo => Segment::LineTo(at(0)),
            Command::Horiz => Segment::LineTo(Point::new(args[0], pen.y)),
            Command::Vert => Segment::LineTo(Point::new(pen.x, args[0])),
            Command::CurveTo => Segment::CurveTo(at(0), at(2), at(4)),
            Command::SmoothCurveTo => {
                let ctrl1 = self.reflected_control(Command::CurveTo, Command::SmoothCurveTo);
                Segment::CurveTo(ctrl1, at(0), at(2))
            }
            Command::QuadTo => Segment::QuadTo(at(0), at(2)),
            Command::SmoothQuadTo => {
                let ctrl = self.reflected_control(Command::QuadTo, Command::SmoothQuadTo);
                Segment::QuadTo(ctrl, at(0))
            }
            Command::ArcTo => Segment::ArcTo(ArcTo::from_params(&args)),
            Command::ClosePath => Segment::LineTo(self.subpath_start),
        };

        self.pen = seg.end();
        self.last_control = match seg {
            Segment::CurveTo(_, ctrl2, _) => ctrl2,
            Segment::QuadTo(ctrl, _) => ctrl,
            _ => self.pen,
        };
        if let Segment::MoveTo(p) = seg {
            self.subpath_start = p;
        }
        self.last_command = Some(command);
        seg
    }

    /// The first control point of a smooth curve.
    ///
    /// This is the previous control point mirrored through the pen when the
    /// previous command was `plain` or `smooth`, and the pen itself otherwise.
    fn reflected_control(&self, plain: Command, smooth: Command) -> Point {
        match self.last_command {
            Some(c) if c == plain || c == smooth => self.pen.reflect(self.last_control),
            _ => self.pen,
        }
    }
}

fn resolve_relative(command: Command, args: &mut ArrayVec<f64, MAX_ARITY>, pen: Point) {
    for (arg, role) in args.iter_mut().zip(command.roles()) {
        match role {
            Role::X => *arg += pen.x,
            Role::Y => *arg += pen.y,
            _ => {}
        }
    }
}

impl Iterator for Canonicalizer<'_> {
    type Item = Result<Segment, MalformedPathError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let token = self.tokens.next()?;
        if self.last_command.is_none() && token.command != Command::MoveTo {
            self.failed = true;
            return Some(Err(MalformedPathError {
                found: token.command,
                offset: token.offset,
            }));
        }
        Some(Ok(self.step(token)))
    }
}

impl core::iter::FusedIterator for Canonicalizer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec2;

    fn canon(data: &str) -> Vec<Segment> {
        Canonicalizer::new(data)
            .collect::<Result<_, _>>()
            .unwrap()
    }

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn horizontal_vertical() {
        assert_eq!(
            canon("M0,0H10"),
            [Segment::MoveTo(pt(0., 0.)), Segment::LineTo(pt(10., 0.))]
        );
        assert_eq!(
            canon("M0,0V10"),
            [Segment::MoveTo(pt(0., 0.)), Segment::LineTo(pt(0., 10.))]
        );
        assert_eq!(
            canon("M1,2 h3 v4 H0 V0"),
            [
                Segment::MoveTo(pt(1., 2.)),
                Segment::LineTo(pt(4., 2.)),
                Segment::LineTo(pt(4., 6.)),
                Segment::LineTo(pt(0., 6.)),
                Segment::LineTo(pt(0., 0.)),
            ]
        );
    }

    #[test]
    fn implicit_lineto() {
        assert_eq!(
            canon("M0,0 L10,10 20,20"),
            [
                Segment::MoveTo(pt(0., 0.)),
                Segment::LineTo(pt(10., 10.)),
                Segment::LineTo(pt(20., 20.)),
            ]
        );
        assert_eq!(
            canon("m1,1 2,2 3,3"),
            [
                Segment::MoveTo(pt(1., 1.)),
                Segment::LineTo(pt(3., 3.)),
                Segment::LineTo(pt(6., 6.)),
            ]
        );
    }

    #[test]
    fn relative_accumulates() {
        assert_eq!(canon("m0,0 l10,10 l10,10"), canon("M0,0 L10,10 L20,20"));
        assert_eq!(
            canon("M10 10 c1 2 3 4 5 6 q1 1 2 2"),
            [
                Segment::MoveTo(pt(10., 10.)),
                Segment::CurveTo(pt(11., 12.), pt(13., 14.), pt(15., 16.)),
                Segment::QuadTo(pt(16., 17.), pt(17., 18.)),
            ]
        );
    }

    #[test]
    fn smooth_cubic_reflects() {
        let segs = canon("M0,0 C10,0 20,10 20,20 S30,40 40,40");
        assert_eq!(
            segs[2],
            Segment::CurveTo(pt(20., 30.), pt(30., 40.), pt(40., 40.))
        );
        // Chained smooth curves reflect the previous smooth curve's control.
        let segs = canon("M0,0 C10,0 20,10 20,20 S30,40 40,40 s10,0 10,10");
        assert_eq!(
            segs[3],
            Segment::CurveTo(pt(50., 40.), pt(50., 40.), pt(50., 50.))
        );
    }

    #[test]
    fn smooth_without_predecessor_uses_pen() {
        assert_eq!(
            canon("M5,5 S10,10 20,20")[1],
            Segment::CurveTo(pt(5., 5.), pt(10., 10.), pt(20., 20.))
        );
        // A quadratic does not feed a smooth cubic.
        assert_eq!(
            canon("M0,0 Q10,0 10,10 S20,20 30,30")[2],
            Segment::CurveTo(pt(10., 10.), pt(20., 20.), pt(30., 30.))
        );
        assert_eq!(
            canon("M0,0 C0,5 5,10 10,10 T20,20")[2],
            Segment::QuadTo(pt(10., 10.), pt(20., 20.))
        );
    }

    #[test]
    fn smooth_quad_reflects() {
        assert_eq!(
            canon("M0,0 Q10,0 10,10 T10,20 t0,10"),
            [
                Segment::MoveTo(pt(0., 0.)),
                Segment::QuadTo(pt(10., 0.), pt(10., 10.)),
                Segment::QuadTo(pt(10., 20.), pt(10., 20.)),
                Segment::QuadTo(pt(10., 20.), pt(10., 30.)),
            ]
        );
    }

    #[test]
    fn closepath_returns_to_start() {
        assert_eq!(
            canon("M1,1 L5,1 L5,5 z l2,0"),
            [
                Segment::MoveTo(pt(1., 1.)),
                Segment::LineTo(pt(5., 1.)),
                Segment::LineTo(pt(5., 5.)),
                Segment::LineTo(pt(1., 1.)),
                Segment::LineTo(pt(3., 1.)),
            ]
        );
        // Numbers after a closepath draw lines from the subpath start.
        assert_eq!(
            canon("M2,2 L4,4 z 1,0")[3],
            Segment::LineTo(pt(3., 2.))
        );
        // Each moveto starts a new closure target.
        assert_eq!(
            canon("M0,0 L1,0 Z M10,10 L11,10 Z")[5],
            Segment::LineTo(pt(10., 10.))
        );
    }

    #[test]
    fn arc_passes_through() {
        let segs = canon("M10,10 a5 6 30 1 0 10 20");
        assert_eq!(
            segs[1],
            Segment::ArcTo(ArcTo {
                radii: Vec2::new(5., 6.),
                x_rotation: 30.,
                large_arc: true,
                sweep: false,
                to: pt(20., 30.),
            })
        );
    }

    #[test]
    fn must_start_with_moveto() {
        let mut it = Canonicalizer::new("  L10,10 M0,0");
        assert_eq!(
            it.next(),
            Some(Err(MalformedPathError {
                found: Command::LineTo,
                offset: 2,
            }))
        );
        assert_eq!(it.next(), None);
        assert!(Canonicalizer::new("z").next().unwrap().is_err());
        // An empty path is fine.
        assert_eq!(Canonicalizer::new("").next(), None);
    }

    #[test]
    fn truncation_keeps_prefix() {
        let mut it = Canonicalizer::new("M0,0 L1,1 C1,2,3");
        assert_eq!(it.by_ref().filter_map(Result::ok).count(), 2);
        assert_eq!(it.pen(), pt(1., 1.));
        let t = it.truncation().unwrap();
        assert_eq!((t.command, t.expected, t.found), (Command::CurveTo, 6, 3));
    }
}
