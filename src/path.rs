// Copyright 2026 the pathnorm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonical path.

use alloc::vec::Vec;
use core::ops::Deref;
use core::str::FromStr;

use crate::canon::{Canonicalizer, MalformedPathError};
use crate::lexer::Truncation;
use crate::{Line, Point, Segment};

/// A canonical path: absolute, shorthand-free segments.
///
/// A non-empty path always begins with [`Segment::MoveTo`]. Closepath
/// commands have been replaced by a line back to the start of their
/// subpath.
///
/// # Examples
///
/// ```
/// use pathnorm::Path;
/// let path = Path::parse("m10 10 h5 v5 z").unwrap();
/// assert_eq!(path.to_svg(), "M10 10L15 10L15 15L10 10");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Segment>);

impl Path {
    /// Create a new, empty path.
    pub fn new() -> Path {
        Path::default()
    }

    /// Parse and canonicalize path data.
    ///
    /// A trailing argument group that is too short for its command ends
    /// parsing silently; use [`Path::parse_with_truncation`] to find out
    /// whether that happened.
    pub fn parse(data: &str) -> Result<Path, MalformedPathError> {
        Canonicalizer::new(data).collect::<Result<_, _>>().map(Path)
    }

    /// Parse and canonicalize path data, also reporting a truncated final
    /// argument group.
    ///
    /// ```
    /// use pathnorm::{Command, Path};
    /// let (path, truncation) = Path::parse_with_truncation("M0 0 L1 1 L2").unwrap();
    /// assert_eq!(path.len(), 2);
    /// assert_eq!(truncation.unwrap().command, Command::LineTo);
    /// ```
    pub fn parse_with_truncation(
        data: &str,
    ) -> Result<(Path, Option<Truncation>), MalformedPathError> {
        let mut canon = Canonicalizer::new(data);
        let segments = canon.by_ref().collect::<Result<_, _>>()?;
        Ok((Path(segments), canon.truncation()))
    }

    /// Create a path from segments.
    ///
    /// Returns `None` if `segments` is non-empty and does not begin with a
    /// moveto.
    pub fn from_segments(segments: Vec<Segment>) -> Option<Path> {
        match segments.first() {
            Some(Segment::MoveTo(_)) | None => Some(Path(segments)),
            Some(_) => None,
        }
    }

    /// The segments of this path.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Mutable access to the segments of this path.
    ///
    /// Replacing the first segment with anything but a moveto breaks the
    /// path's invariant.
    #[inline]
    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.0
    }

    /// Whether every parameter of every segment is finite.
    ///
    /// Numbers too large for `f64` (such as `1e999`) parse as infinity; a
    /// path containing them cannot be written back out faithfully.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(Segment::is_finite)
    }

    /// Consume the path, returning its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.0
    }

    /// The straight lines of this path, each paired with the point it
    /// starts from.
    ///
    /// ```
    /// use pathnorm::{Line, Path};
    /// let path = Path::parse("M0 0 H3 V4 Z").unwrap();
    /// let total: f64 = path.lines().map(Line::length).sum();
    /// assert_eq!(total, 12.0);
    /// ```
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        let mut start = Point::ZERO;
        self.0.iter().filter_map(move |seg| {
            let p0 = start;
            start = seg.end();
            match seg {
                Segment::LineTo(p1) => Some(Line::new(p0, *p1)),
                _ => None,
            }
        })
    }
}

impl Deref for Path {
    type Target = [Segment];

    fn deref(&self) -> &[Segment] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = core::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Path {
    type Err = MalformedPathError;

    fn from_str(s: &str) -> Result<Path, MalformedPathError> {
        Path::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Command;

    #[test]
    fn starts_with_moveto() {
        for d in [
            "M0 0",
            "m5 5 l1 1 h2 v3 c1 1 2 2 3 3 s1 1 2 2 q1 1 2 2 t1 1 a1 1 0 0 1 2 2 z",
            "M1 2 3 4 5 6Z m1 1",
        ] {
            let path = Path::parse(d).unwrap();
            assert_eq!(path[0].command(), Command::MoveTo, "{d}");
            assert!(path.iter().all(|s| s.command().is_canonical()), "{d}");
        }
    }

    #[test]
    fn empty_and_malformed() {
        assert_eq!(Path::parse("").unwrap(), Path::new());
        assert_eq!(Path::parse("   ").unwrap().len(), 0);
        let err = Path::parse("L1 1").unwrap_err();
        assert_eq!(err.found, Command::LineTo);
        assert_eq!(
            err.to_string(),
            "path must begin with a moveto, found `L` at byte 0"
        );
        assert!("c1 1 2 2 3 3".parse::<Path>().is_err());
    }

    #[test]
    fn truncation_is_reported() {
        let (path, truncation) = Path::parse_with_truncation("M0 0 L1 1 2").unwrap();
        assert_eq!(path, Path::parse("M0 0 L1 1").unwrap());
        let t = truncation.unwrap();
        assert_eq!(t.to_string(), "`L` at byte 5 needs 2 arguments, found 1");

        let (_, truncation) = Path::parse_with_truncation("M0 0 L1 1").unwrap();
        assert_eq!(truncation, None);
    }

    #[test]
    fn from_segments_checks_moveto() {
        assert!(Path::from_segments(vec![]).is_some());
        assert!(Path::from_segments(vec![Segment::LineTo(Point::ZERO)]).is_none());
        let path = Path::from_segments(vec![
            Segment::MoveTo(Point::ZERO),
            Segment::LineTo(Point::new(1., 0.)),
        ])
        .unwrap();
        assert_eq!(path.into_segments().len(), 2);
    }

    #[test]
    fn lines_track_start_points() {
        let path = Path::parse("M1 1 L4 5 Q0 0 9 9 L9 10").unwrap();
        let lines: Vec<Line> = path.lines().collect();
        assert_eq!(
            lines,
            [Line::new((1., 1.), (4., 5.)), Line::new((9., 9.), (9., 10.))]
        );
        assert_eq!(lines[0].length(), 5.0);
    }
}
