//! Extension trait for converting `Result` values into outcomes.

use crate::outcome::core::Outcome;

/// Extension trait for converting a plain `Result` into an [`Outcome`]
/// without leaving method-chaining style.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ResultExt;
/// use outcome_rail::{err, ok};
///
/// let parsed: Result<i32, &str> = "42".parse().map_err(|_| "bad input");
/// assert_eq!(parsed.into_outcome(), ok(42));
///
/// let failed: Result<i32, &str> = Err("bad input");
/// assert_eq!(failed.into_outcome(), err("bad input"));
/// ```
pub trait ResultExt<A, E> {
    /// Converts the result into an outcome, preserving both sides.
    fn into_outcome(self) -> Outcome<E, A>;
}

impl<A, E> ResultExt<A, E> for Result<A, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<E, A> {
        Outcome::from_result(self)
    }
}
