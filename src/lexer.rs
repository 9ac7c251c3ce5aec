// Copyright 2026 the pathnorm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting path data into command tokens.
//!
//! [`Tokens`] is the permissive tokenizer the canonicalizer runs on: it
//! skips anything it does not understand and expands implicit command
//! repetition. [`Lexemes`] is a strict scanner that reports the first byte
//! that is neither a command, a number, nor a delimiter.

use core::fmt;

use arrayvec::ArrayVec;

use crate::command::{Command, MAX_ARITY};

/// One command with exactly [`Command::arity`] arguments, as written.
///
/// Arguments are not yet resolved: relative coordinates are still relative,
/// and shorthand commands are still shorthand.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The command.
    pub command: Command,
    /// Whether the command letter was lowercase.
    pub relative: bool,
    /// The arguments, in the order they appeared.
    pub args: ArrayVec<f64, MAX_ARITY>,
    /// Byte offset of the command letter this token came from.
    ///
    /// Implied commands report the offset of the explicit letter that
    /// started their group.
    pub offset: usize,
}

/// A trailing argument group that was too short for its command.
///
/// The tokenizer stops at the first such group; everything before it is
/// still delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Truncation {
    /// The command whose arguments ran out.
    pub command: Command,
    /// Byte offset of the command letter of the group.
    pub offset: usize,
    /// The command's arity.
    pub expected: usize,
    /// How many arguments were left over.
    pub found: usize,
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` at byte {} needs {} arguments, found {}",
            self.command.letter(),
            self.offset,
            self.expected,
            self.found
        )
    }
}

/// A lazy iterator over the [`Token`]s of a path string.
///
/// A command letter followed by more numbers than it needs is repeated (or,
/// for moveto and closepath, followed by implied linetos). Bytes that are
/// neither command letters nor part of a number are skipped. When a group
/// ends with fewer numbers than its command needs, iteration stops and
/// [`Tokens::truncation`] reports why.
///
/// # Examples
///
/// ```
/// use pathnorm::{Command, Tokens};
/// let commands: Vec<_> = Tokens::new("M0,0 1,1 z").map(|t| t.command).collect();
/// assert_eq!(commands, [Command::MoveTo, Command::LineTo, Command::ClosePath]);
/// ```
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    data: &'a [u8],
    ix: usize,
    group_end: usize,
    current: Option<(Command, bool)>,
    group_offset: usize,
    done: bool,
    truncation: Option<Truncation>,
}

impl<'a> Tokens<'a> {
    /// Start tokenizing `data`.
    pub fn new(data: &'a str) -> Tokens<'a> {
        Tokens {
            data: data.as_bytes(),
            ix: 0,
            group_end: 0,
            current: None,
            group_offset: 0,
            done: false,
            truncation: None,
        }
    }

    /// The truncation that ended iteration, if any.
    ///
    /// This is only meaningful once the iterator has returned `None`.
    pub fn truncation(&self) -> Option<Truncation> {
        self.truncation
    }

    /// Move to the next command letter and set up its group.
    ///
    /// Returns `false` when the input is exhausted.
    fn start_group(&mut self) -> bool {
        let Some(pos) = self.data[self.ix..]
            .iter()
            .position(|&b| Command::is_letter(b))
            .map(|p| p + self.ix)
        else {
            self.ix = self.data.len();
            return false;
        };
        self.current = Command::from_letter(self.data[pos]);
        self.group_offset = pos;
        self.ix = pos + 1;
        self.group_end = self.data[self.ix..]
            .iter()
            .position(|&b| Command::is_letter(b))
            .map_or(self.data.len(), |p| p + self.ix);
        true
    }

    /// The next number in the current group, skipping anything else.
    fn next_number(&mut self) -> Option<f64> {
        while self.ix < self.group_end {
            if let Some(len) = scan_number(&self.data[self.ix..self.group_end]) {
                let start = self.ix;
                self.ix += len;
                // The scanned bytes are ASCII, so this is a valid str.
                let text = core::str::from_utf8(&self.data[start..self.ix]).ok()?;
                if let Ok(value) = text.parse() {
                    return Some(value);
                }
            } else {
                self.ix += 1;
            }
        }
        None
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while !self.done {
            let Some((command, relative)) = self.current else {
                if !self.start_group() {
                    self.done = true;
                }
                continue;
            };
            let expected = command.arity();
            let mut args = ArrayVec::new();
            while args.len() < expected {
                match self.next_number() {
                    Some(value) => args.push(value),
                    None => break,
                }
            }
            if expected > 0 && args.is_empty() {
                // Group exhausted; go look for the next command letter.
                self.current = None;
                self.ix = self.group_end;
                continue;
            }
            if args.len() < expected {
                self.truncation = Some(Truncation {
                    command,
                    offset: self.group_offset,
                    expected,
                    found: args.len(),
                });
                self.done = true;
                return None;
            }
            self.current = Some((command.implied_next(), relative));
            return Some(Token {
                command,
                relative,
                args,
                offset: self.group_offset,
            });
        }
        None
    }
}

impl core::iter::FusedIterator for Tokens<'_> {}

/// Length of the number at the start of `s`, if there is one.
///
/// Accepts an optional sign, then `digits.digits`, `digits.`, `.digits` or
/// `digits`, then an optional exponent. An `e` not followed by digits is not
/// part of the number.
fn scan_number(s: &[u8]) -> Option<usize> {
    let mut i = 0;
    if matches!(s.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_digits = count_digits(&s[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if s.get(i) == Some(&b'.') {
        frac_digits = count_digits(&s[i + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    if matches!(s.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(s.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&s[j.min(s.len())..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    Some(i)
}

fn count_digits(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// A lexical element of path data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lexeme<'a> {
    /// A command letter, in the case it was written.
    Command(u8),
    /// The text of a number.
    Number(&'a str),
}

/// Path data contained a byte that is not a command, number or delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidPathData {
    /// Byte offset of the offending input.
    pub offset: usize,
}

impl fmt::Display for InvalidPathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid path data at byte {}", self.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidPathData {}

/// A strict scanner over the [`Lexeme`]s of a path string.
///
/// Whitespace and commas separate lexemes. Unlike [`Tokens`], nothing is
/// skipped silently: the first unrecognized byte is reported as an error
/// and ends iteration.
///
/// ```
/// use pathnorm::{Lexeme, Lexemes};
/// let lexemes: Result<Vec<_>, _> = Lexemes::new("M1-2").collect();
/// assert_eq!(
///     lexemes.unwrap(),
///     [Lexeme::Command(b'M'), Lexeme::Number("1"), Lexeme::Number("-2")]
/// );
/// assert_eq!(Lexemes::new("M1 #").nth(2).unwrap().unwrap_err().offset, 3);
/// ```
#[derive(Clone, Debug)]
pub struct Lexemes<'a> {
    data: &'a str,
    ix: usize,
    failed: bool,
}

impl<'a> Lexemes<'a> {
    /// Start scanning `data`.
    pub fn new(data: &'a str) -> Lexemes<'a> {
        Lexemes {
            data,
            ix: 0,
            failed: false,
        }
    }
}

impl<'a> Iterator for Lexemes<'a> {
    type Item = Result<Lexeme<'a>, InvalidPathData>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let bytes = self.data.as_bytes();
        while let Some(&b) = bytes.get(self.ix) {
            if matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b',') {
                self.ix += 1;
            } else {
                break;
            }
        }
        let &b = bytes.get(self.ix)?;
        if Command::is_letter(b) {
            self.ix += 1;
            return Some(Ok(Lexeme::Command(b)));
        }
        if let Some(len) = scan_number(&bytes[self.ix..]) {
            let text = &self.data[self.ix..self.ix + len];
            self.ix += len;
            return Some(Ok(Lexeme::Number(text)));
        }
        self.failed = true;
        Some(Err(InvalidPathData { offset: self.ix }))
    }
}

impl core::iter::FusedIterator for Lexemes<'_> {}
