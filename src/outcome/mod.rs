//! The [`Outcome`] sum type and its combinator set.
//!
//! This module provides [`Outcome`], a fail-fast two-variant container for
//! the result of a fallible computation, together with the combinators that
//! transform, chain, and lift it. Unlike an accumulating validation type,
//! `Outcome` carries exactly one error and short-circuits on the first
//! failure in a chain.
//!
//! # Key Components
//!
//! - [`Outcome`] - Core type holding either a success value or an error
//! - [`ok`] / [`err`] - Free-standing variant constructors
//! - Fixed-arity lifting (`map2`..`map5`) over independent outcomes
//! - [`FnSlot`] / [`Outcome::and_map`] - Applicative application one
//!   argument at a time, with the in-band [`NotAFunction`] misuse error
//! - Iterator adapters over the success value
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{err, ok, Outcome};
//!
//! let chained: Outcome<&str, i32> = ok(1).map(|n| n + 1).and_then(|n| ok(n * 10));
//! assert_eq!(chained, ok(20));
//!
//! let halted: Outcome<&str, i32> = err("bad input").map(|n: i32| n + 1);
//! assert_eq!(halted, err("bad input"));
//! ```
pub mod apply;
pub mod core;
pub mod iter;
pub mod lift;

pub use self::apply::{ApplyError, FnSlot, NotAFunction};
pub use self::core::{err, ok, Outcome};
pub use self::iter::*;
// Note: lift provides the map2..map5 impl blocks for Outcome, which are
// automatically available when this module is compiled.
