//! Extension trait for converting `Option` values into outcomes.

use crate::outcome::core::Outcome;

/// Extension trait for converting an `Option` into an [`Outcome`] without
/// leaving method-chaining style.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::OptionExt;
/// use outcome_rail::{err, ok};
///
/// assert_eq!(Some(1).into_outcome("missing"), ok(1));
/// assert_eq!(None::<i32>.into_outcome("missing"), err("missing"));
/// ```
pub trait OptionExt<A> {
    /// Converts the option into an outcome, using `error` when the value is
    /// absent.
    fn into_outcome<E>(self, error: E) -> Outcome<E, A>;
}

impl<A> OptionExt<A> for Option<A> {
    #[inline]
    fn into_outcome<E>(self, error: E) -> Outcome<E, A> {
        Outcome::from_option(self, error)
    }
}
