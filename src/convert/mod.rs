//! Boundary conversions between [`Outcome`], `Result`, and `Option`.
//!
//! These adapters make it straightforward to adopt `outcome-rail`
//! incrementally: wrap the results and options produced by existing APIs at
//! the edge of a pipeline, and flatten outcomes back out when handing
//! values to external callers.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::ok;
//!
//! let parsed: Result<i32, &str> = Ok(42);
//! assert_eq!(result_to_outcome(parsed), ok(42));
//!
//! let found: Option<i32> = Some(42);
//! assert_eq!(option_to_outcome(found, "missing"), ok(42));
//! ```

use crate::outcome::core::Outcome;

/// Converts an optional value into an outcome, supplying the error used
/// when the value is absent.
///
/// # Arguments
///
/// * `option` - The optional value to convert
/// * `error` - The error payload used for `None`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
/// use outcome_rail::{err, ok};
///
/// assert_eq!(option_to_outcome(Some(1), "missing"), ok(1));
/// assert_eq!(option_to_outcome(None::<i32>, "missing"), err("missing"));
/// ```
#[inline]
pub fn option_to_outcome<E, A>(option: Option<A>, error: E) -> Outcome<E, A> {
    Outcome::from_option(option, error)
}

/// Keeps only the success side of an outcome.
///
/// The error payload is discarded and cannot be recovered from the option
/// side.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_option;
/// use outcome_rail::{err, ok, Outcome};
///
/// assert_eq!(outcome_to_option(ok::<&str, _>(1)), Some(1));
/// assert_eq!(outcome_to_option(err::<_, i32>("bad input")), None);
/// ```
#[inline]
pub fn outcome_to_option<E, A>(outcome: Outcome<E, A>) -> Option<A> {
    outcome.to_option()
}

/// Converts a plain `Result` into an outcome.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::err;
///
/// let failed: Result<i32, &str> = Err("bad input");
/// assert_eq!(result_to_outcome(failed), err("bad input"));
/// ```
#[inline]
pub fn result_to_outcome<E, A>(result: Result<A, E>) -> Outcome<E, A> {
    Outcome::from_result(result)
}

/// Converts an outcome into a plain `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::ok;
///
/// assert_eq!(outcome_to_result(ok::<&str, _>(1)), Ok(1));
/// ```
#[inline]
pub fn outcome_to_result<E, A>(outcome: Outcome<E, A>) -> Result<A, E> {
    outcome.into_result()
}

impl<E, A> From<Result<A, E>> for Outcome<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<E, A> From<Outcome<E, A>> for Result<A, E> {
    #[inline]
    fn from(outcome: Outcome<E, A>) -> Self {
        outcome.into_result()
    }
}
