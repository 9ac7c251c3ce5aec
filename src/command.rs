// Copyright 2026 the pathnorm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path command metadata: letters, arity and argument roles.

/// The largest number of arguments any command takes (the elliptical arc).
pub const MAX_ARITY: usize = 7;

/// The semantic meaning of one numeric argument of a command.
///
/// Roles decide how relative coordinates are resolved and how transforms
/// apply to a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// An x coordinate.
    X,
    /// A y coordinate.
    Y,
    /// An ellipse radius.
    Radius,
    /// The x-axis rotation of an ellipse, in degrees.
    Rotation,
    /// The sweep flag of an elliptical arc.
    Sweep,
    /// Anything else (the large-arc flag).
    Other,
}

/// One of the ten path commands, regardless of case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// `M`: start a new subpath.
    MoveTo,
    /// `L`: straight line.
    LineTo,
    /// `H`: horizontal line.
    Horiz,
    /// `V`: vertical line.
    Vert,
    /// `C`: cubic Bézier.
    CurveTo,
    /// `S`: cubic Bézier with a reflected first control point.
    SmoothCurveTo,
    /// `Q`: quadratic Bézier.
    QuadTo,
    /// `T`: quadratic Bézier with a reflected control point.
    SmoothQuadTo,
    /// `A`: elliptical arc.
    ArcTo,
    /// `Z`: close the current subpath.
    ClosePath,
}

use Role::{Other, Radius, Rotation, Sweep, X, Y};

const XY: &[Role] = &[X, Y];
const XYXY: &[Role] = &[X, Y, X, Y];

impl Command {
    /// Look up a command letter.
    ///
    /// Returns the command and whether the letter was lowercase (relative).
    /// Any byte that is not one of `MLHVCSQTAZ` in either case yields `None`.
    ///
    /// ```
    /// use pathnorm::Command;
    /// assert_eq!(Command::from_letter(b'c'), Some((Command::CurveTo, true)));
    /// assert_eq!(Command::from_letter(b'B'), None);
    /// ```
    pub const fn from_letter(letter: u8) -> Option<(Command, bool)> {
        let relative = letter.is_ascii_lowercase();
        let cmd = match letter.to_ascii_uppercase() {
            b'M' => Command::MoveTo,
            b'L' => Command::LineTo,
            b'H' => Command::Horiz,
            b'V' => Command::Vert,
            b'C' => Command::CurveTo,
            b'S' => Command::SmoothCurveTo,
            b'Q' => Command::QuadTo,
            b'T' => Command::SmoothQuadTo,
            b'A' => Command::ArcTo,
            b'Z' => Command::ClosePath,
            _ => return None,
        };
        Some((cmd, relative))
    }

    /// Whether `letter` is a command letter in either case.
    #[inline]
    pub const fn is_letter(letter: u8) -> bool {
        Command::from_letter(letter).is_some()
    }

    /// The uppercase letter of this command.
    pub const fn letter(self) -> char {
        match self {
            Command::MoveTo => 'M',
            Command::LineTo => 'L',
            Command::Horiz => 'H',
            Command::Vert => 'V',
            Command::CurveTo => 'C',
            Command::SmoothCurveTo => 'S',
            Command::QuadTo => 'Q',
            Command::SmoothQuadTo => 'T',
            Command::ArcTo => 'A',
            Command::ClosePath => 'Z',
        }
    }

    /// The role of each argument, in order.
    pub const fn roles(self) -> &'static [Role] {
        match self {
            Command::MoveTo | Command::LineTo | Command::SmoothQuadTo => XY,
            Command::Horiz => &[X],
            Command::Vert => &[Y],
            Command::CurveTo => &[X, Y, X, Y, X, Y],
            Command::SmoothCurveTo | Command::QuadTo => XYXY,
            Command::ArcTo => &[Radius, Radius, Rotation, Other, Sweep, X, Y],
            Command::ClosePath => &[],
        }
    }

    /// The number of arguments this command consumes.
    #[inline]
    pub const fn arity(self) -> usize {
        self.roles().len()
    }

    /// The command implied by extra arguments after this one.
    ///
    /// A moveto followed by more coordinates draws lines, and so does a
    /// closepath followed by numbers; everything else repeats itself.
    pub const fn implied_next(self) -> Command {
        match self {
            Command::MoveTo | Command::ClosePath => Command::LineTo,
            other => other,
        }
    }

    /// Whether this command survives canonicalization unchanged.
    ///
    /// Canonical paths only contain `M`, `L`, `C`, `Q` and `A`.
    pub const fn is_canonical(self) -> bool {
        matches!(
            self,
            Command::MoveTo | Command::LineTo | Command::CurveTo | Command::QuadTo | Command::ArcTo
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Command; 10] = [
        Command::MoveTo,
        Command::LineTo,
        Command::Horiz,
        Command::Vert,
        Command::CurveTo,
        Command::SmoothCurveTo,
        Command::QuadTo,
        Command::SmoothQuadTo,
        Command::ArcTo,
        Command::ClosePath,
    ];

    #[test]
    fn letters_round_trip() {
        for cmd in ALL {
            let upper = cmd.letter() as u8;
            assert_eq!(Command::from_letter(upper), Some((cmd, false)));
            assert_eq!(
                Command::from_letter(upper.to_ascii_lowercase()),
                Some((cmd, true))
            );
        }
        for b in [b'e', b'E', b'B', b',', b'0', b'-', b' '] {
            assert!(!Command::is_letter(b), "{}", b as char);
        }
    }

    #[test]
    fn arities() {
        let arities: Vec<usize> = ALL.iter().map(|c| c.arity()).collect();
        assert_eq!(arities, [2, 2, 1, 1, 6, 4, 4, 2, 7, 0]);
        assert!(ALL.iter().all(|c| c.arity() <= MAX_ARITY));
    }

    #[test]
    fn implied() {
        assert_eq!(Command::MoveTo.implied_next(), Command::LineTo);
        assert_eq!(Command::ClosePath.implied_next(), Command::LineTo);
        assert_eq!(Command::ArcTo.implied_next(), Command::ArcTo);
        assert_eq!(Command::Horiz.implied_next(), Command::Horiz);
    }

    #[test]
    fn canonical_set() {
        let canonical: String = ALL
            .iter()
            .filter(|c| c.is_canonical())
            .map(|c| c.letter())
            .collect();
        assert_eq!(canonical, "MLCQA");
    }
}
