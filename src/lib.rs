// Copyright 2026 the pathnorm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical SVG path data.
//!
//! The pathnorm library turns SVG path data into a small, fully explicit
//! form: every coordinate absolute, every shorthand command (`H`, `V`, `S`,
//! `T`, `Z`) expanded, and every implicitly repeated command written out.
//! What is left is a [`Path`] of [`Segment`]s using only `M`, `L`, `C`, `Q`
//! and `A`, which geometry code can consume without knowing anything about
//! the path grammar.
//!
//! # Examples
//!
//! Canonicalizing, transforming and writing a path:
//! ```
//! use pathnorm::{Path, Point, Segment, Vec2};
//!
//! let mut path = Path::parse("M0,0 C10,0 20,10 20,20 S30,40 40,40").unwrap();
//! // The smooth curve's first control point is the reflection of (20, 10)
//! // through the pen at (20, 20).
//! assert_eq!(
//!     path[2],
//!     Segment::CurveTo(Point::new(20., 30.), Point::new(30., 40.), Point::new(40., 40.))
//! );
//!
//! path.translate(Vec2::new(-20., -20.));
//! assert_eq!(path.to_svg(), "M-20 -20C-10 -20 0 -10 0 0C0 10 10 20 20 20");
//! ```
//!
//! Lower level access is available through [`Tokens`], which splits path
//! data into commands and their arguments, and [`Canonicalizer`], the state
//! machine that resolves them.
//!
//! # Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   and implement `std::error::Error` for the error types.
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//! - `mint`: Enable `From`/`Into` conversion of pathnorm and [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on various types.
//! - `schemars`: Add best-effort support for using pathnorm types in JSON schemas using
//!   [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! Note that pathnorm does require that an allocator is available (i.e. it uses [alloc]).
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars

#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::shadow_unrelated,
    clippy::missing_assert_message,
    clippy::missing_errors_doc,
    clippy::exhaustive_enums,
    clippy::match_same_arms,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("pathnorm requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod canon;
mod command;
mod common;
mod lexer;
mod line;
mod path;
mod point;
mod segment;
mod svg;
mod transform;
mod vec2;

pub use crate::canon::{Canonicalizer, MalformedPathError};
pub use crate::command::{Command, Role, MAX_ARITY};
pub use crate::lexer::{InvalidPathData, Lexeme, Lexemes, Token, Tokens, Truncation};
pub use crate::line::Line;
pub use crate::path::Path;
pub use crate::point::Point;
pub use crate::segment::{ArcTo, Segment};
pub use crate::vec2::Vec2;
