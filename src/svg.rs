// Copyright 2026 the pathnorm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writing canonical paths back out as SVG path data.

use alloc::string::{String, ToString};
use core::fmt;

use crate::{Path, Segment};

impl Path {
    /// Convert the path to an SVG path string representation.
    ///
    /// Every segment is written as its uppercase command letter followed by
    /// its parameters separated by spaces, with no separator between
    /// segments. Numbers are written in their shortest form that parses back
    /// to the same value, so when [`Path::is_finite`] holds,
    /// `Path::parse(&path.to_svg())` reproduces `path` exactly.
    ///
    /// Infinities and NaN are written as `inf` and `NaN`, which are not path
    /// numbers, so parsing such output does not reproduce the path.
    ///
    /// No attempt is made to produce a short string (reducing precision,
    /// using relative movement).
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        let mut params = self.params().into_iter();
        if let Some(first) = params.next() {
            write!(f, "{first}")?;
        }
        for p in params {
            write!(f, " {p}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in self.segments() {
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}
