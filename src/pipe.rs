//! Data-last, pipeline-style forms of the [`Outcome`] combinators.
//!
//! Each function here takes the callback (or fallback value) first and
//! returns a closure awaiting the outcome operand(s), which suits
//! higher-order plumbing: building a transformation up front and handing it
//! to whatever produces the outcome later.
//!
//! Every function is a thin delegate to the matching inherent method on
//! [`Outcome`], so the two invocation styles cannot drift apart.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ok, pipe, Outcome};
//!
//! let double = pipe::map(|n: i32| n * 2);
//! let outcome: Outcome<&str, i32> = double(ok(21));
//! assert_eq!(outcome, ok(42));
//! ```

use crate::outcome::apply::{FnSlot, NotAFunction};
use crate::outcome::core::Outcome;

/// Data-last form of [`Outcome::map`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, ok, pipe, Outcome};
///
/// let upper = pipe::map(|s: &str| s.to_uppercase());
/// assert_eq!(upper(ok::<&str, _>("hello")), ok("HELLO".to_string()));
///
/// let upper = pipe::map(|s: &str| s.to_uppercase());
/// let halted: Outcome<&str, String> = upper(err("bad input"));
/// assert_eq!(halted, err("bad input"));
/// ```
#[inline]
pub fn map<E, A, B, F>(f: F) -> impl FnOnce(Outcome<E, A>) -> Outcome<E, B>
where
    F: FnOnce(A) -> B,
{
    move |outcome| outcome.map(f)
}

/// Data-last form of [`Outcome::map_err`].
#[inline]
pub fn map_err<E, G, A, F>(f: F) -> impl FnOnce(Outcome<E, A>) -> Outcome<G, A>
where
    F: FnOnce(E) -> G,
{
    move |outcome| outcome.map_err(f)
}

/// Data-last form of [`Outcome::and_then`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, ok, pipe, Outcome};
///
/// fn valid_month(n: i32) -> Outcome<&'static str, i32> {
///     if (1..=12).contains(&n) {
///         ok(n)
///     } else {
///         err("bad input")
///     }
/// }
///
/// let check = pipe::and_then(valid_month);
/// assert_eq!(check(ok(13)), err("bad input"));
/// ```
#[inline]
pub fn and_then<E, A, B, F>(f: F) -> impl FnOnce(Outcome<E, A>) -> Outcome<E, B>
where
    F: FnOnce(A) -> Outcome<E, B>,
{
    move |outcome| outcome.and_then(f)
}

/// Data-last form of [`Outcome::with_default`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, pipe, Outcome};
///
/// let or_zero = pipe::with_default(0);
/// assert_eq!(or_zero(err::<&str, i32>("bad input")), 0);
/// ```
#[inline]
pub fn with_default<E, A>(default: A) -> impl FnOnce(Outcome<E, A>) -> A {
    move |outcome| outcome.with_default(default)
}

/// Data-last form of [`Outcome::with_default_else`].
#[inline]
pub fn with_default_else<E, A, F>(default: F) -> impl FnOnce(Outcome<E, A>) -> A
where
    F: FnOnce() -> A,
{
    move |outcome| outcome.with_default_else(default)
}

/// Data-last form of [`Outcome::from_option`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, ok, pipe, Outcome};
///
/// let required = pipe::from_option("missing");
/// assert_eq!(required(Some(1)), ok(1));
///
/// let required = pipe::from_option("missing");
/// assert_eq!(required(None::<i32>), err("missing"));
/// ```
#[inline]
pub fn from_option<E, A>(error: E) -> impl FnOnce(Option<A>) -> Outcome<E, A> {
    move |option| Outcome::from_option(option, error)
}

/// Free-function form of [`Outcome::to_option`].
#[inline]
pub fn to_option<E, A>(outcome: Outcome<E, A>) -> Option<A> {
    outcome.to_option()
}

/// Data-last form of [`Outcome::map2`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{ok, pipe, Outcome};
///
/// let add = pipe::map2(|a: i32, b: i32| a + b);
/// assert_eq!(add(ok::<&str, _>(1), ok(2)), ok(3));
/// ```
#[inline]
pub fn map2<E, A, B, C, F>(f: F) -> impl FnOnce(Outcome<E, A>, Outcome<E, B>) -> Outcome<E, C>
where
    F: FnOnce(A, B) -> C,
{
    move |first, second| first.map2(second, f)
}

/// Data-last form of [`Outcome::map3`].
#[inline]
pub fn map3<E, A, B, C, D, F>(
    f: F,
) -> impl FnOnce(Outcome<E, A>, Outcome<E, B>, Outcome<E, C>) -> Outcome<E, D>
where
    F: FnOnce(A, B, C) -> D,
{
    move |first, second, third| first.map3(second, third, f)
}

/// Data-last form of [`Outcome::map4`].
#[inline]
pub fn map4<E, A, B, C, D, T, F>(
    f: F,
) -> impl FnOnce(Outcome<E, A>, Outcome<E, B>, Outcome<E, C>, Outcome<E, D>) -> Outcome<E, T>
where
    F: FnOnce(A, B, C, D) -> T,
{
    move |first, second, third, fourth| first.map4(second, third, fourth, f)
}

/// Data-last form of [`Outcome::map5`].
#[inline]
#[allow(clippy::type_complexity)]
pub fn map5<E, A, B, C, D, T, U, F>(
    f: F,
) -> impl FnOnce(
    Outcome<E, A>,
    Outcome<E, B>,
    Outcome<E, C>,
    Outcome<E, D>,
    Outcome<E, T>,
) -> Outcome<E, U>
where
    F: FnOnce(A, B, C, D, T) -> U,
{
    move |first, second, third, fourth, fifth| first.map5(second, third, fourth, fifth, f)
}

/// Data-last form of [`Outcome::and_map`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{ok, pipe, ApplyError, FnSlot, Outcome};
///
/// let apply = pipe::and_map(ok(FnSlot::fun(|n: i32| n * 2)));
/// let outcome: Outcome<ApplyError<&str>, i32> = apply(ok(21));
/// assert_eq!(outcome, ok(42));
/// ```
#[inline]
pub fn and_map<E, F, V, A, B>(
    slot: Outcome<E, FnSlot<F, V>>,
) -> impl FnOnce(Outcome<E, A>) -> Outcome<E, B>
where
    F: FnOnce(A) -> B,
    E: From<NotAFunction>,
{
    move |argument| slot.and_map(argument)
}
