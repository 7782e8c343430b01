//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`FnSlot`], [`ApplyError`], [`NotAFunction`]
//! - **Constructors**: [`ok`], [`err`]
//! - **Macros**: [`lift!`](crate::lift)
//! - **Traits**: [`OptionExt`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn first_word(line: &str) -> Outcome<&'static str, &str> {
//!     line.split_whitespace().next().into_outcome("empty line")
//! }
//!
//! assert_eq!(first_word("hello world"), ok("hello"));
//! assert_eq!(first_word("   "), err("empty line"));
//! ```

// Macros
pub use crate::lift;

// Core type and constructors
pub use crate::outcome::{err, ok, ApplyError, FnSlot, NotAFunction, Outcome};

// Traits
pub use crate::traits::{OptionExt, ResultExt};
