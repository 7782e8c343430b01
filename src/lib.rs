//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining fallible steps
//!
//! ```
//! use outcome_rail::{err, ok, Outcome};
//!
//! fn parse_int(input: &str) -> Outcome<&'static str, i32> {
//!     match input.parse() {
//!         Ok(n) => ok(n),
//!         Err(_) => err("bad input"),
//!     }
//! }
//!
//! fn valid_month(n: i32) -> Outcome<&'static str, i32> {
//!     if (1..=12).contains(&n) {
//!         ok(n)
//!     } else {
//!         err("bad input")
//!     }
//! }
//!
//! let month = ok("3").and_then(parse_int).and_then(valid_month);
//! assert_eq!(month, ok(3));
//!
//! let bad = ok("13").and_then(parse_int).and_then(valid_month);
//! assert_eq!(bad, err("bad input"));
//! ```
//!
//! ## Lifting across independent outcomes
//!
//! ```
//! use outcome_rail::{err, lift, ok, Outcome};
//!
//! let sum: Outcome<&str, i32> = ok(1).map3(ok(2), ok(3), |a, b, c| a + b + c);
//! assert_eq!(sum, ok(6));
//!
//! // The first positional error wins, later operands stay untouched:
//! let failed: Outcome<&str, i32> = ok(1).map3(err("x"), err("y"), |a, b: i32, c: i32| a + b + c);
//! assert_eq!(failed, err("x"));
//!
//! // Arbitrary arity via the macro:
//! let wide: Outcome<&str, i32> = lift!(|a, b, c, d, e, f| a + b + c + d + e + f,
//!     ok(1), ok(2), ok(3), ok(4), ok(5), ok(6));
//! assert_eq!(wide, ok(21));
//! ```
//!
//! ## Applicative chains
//!
//! ```
//! use outcome_rail::{ok, ApplyError, FnSlot, Outcome};
//!
//! let add3 = |a: i32| FnSlot::fun(move |b: i32| FnSlot::fun(move |c: i32| a + b + c));
//! let sum: Outcome<ApplyError<&str>, i32> = ok(FnSlot::fun(add3))
//!     .and_map(ok(1))
//!     .and_map(ok(2))
//!     .and_map(ok(3));
//! assert_eq!(sum, ok(6));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

/// Boundary conversions between Outcome, Result, and Option
pub mod convert;
/// Arbitrary-arity lifting macro
pub mod macros;
/// The Outcome type and its combinator set
pub mod outcome;
/// Data-last, pipeline-style combinator forms
pub mod pipe;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for Option and Result interop
pub mod traits;

// Re-export the core surface at the root, but encourage using
// prelude/pipe/convert modules for focused imports.
pub use convert::*;
pub use outcome::{err, ok, ApplyError, FnSlot, NotAFunction, Outcome};
pub use traits::*;
