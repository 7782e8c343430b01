//! Applicative application with a run-time-checked function slot.
//!
//! [`Outcome::and_map`] applies a wrapped function to a wrapped argument,
//! one argument at a time. Because the wrapped function may itself return
//! another [`FnSlot`], repeated `and_map` calls build up an N-ary
//! application without needing a fixed-arity `map6`, `map7`, and so on.
//!
//! The function slot is data, not a type-level guarantee: a [`FnSlot`] can
//! hold a plain value instead of a callable, and applying such a slot
//! produces the in-band [`NotAFunction`] error rather than a panic. This
//! keeps programmer errors on the same error rail as domain failures.
//!
//! # Examples
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

use core::convert::Infallible;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::outcome::core::Outcome;

/// The function slot of an applicative application.
///
/// A slot either holds a function awaiting its next argument (`Fun`) or a
/// plain value that cannot be applied (`Value`). [`Outcome::and_map`] on a
/// `Value` slot yields [`NotAFunction`] in-band.
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum FnSlot<F, V> {
    /// A callable payload, ready for one more argument.
    Fun(F),
    /// A payload that cannot be applied.
    Value(V),
}

impl<F> FnSlot<F, Infallible> {
    /// Wraps a function, marking the slot as callable.
    ///
    /// The value side is pinned to [`Infallible`], so curried chains built
    /// from nested `FnSlot::fun` calls infer without annotations.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::FnSlot;
    ///
    /// let slot = FnSlot::fun(|n: i32| n + 1);
    /// assert!(matches!(slot, FnSlot::Fun(_)));
    /// ```
    #[inline]
    pub fn fun(f: F) -> Self {
        FnSlot::Fun(f)
    }
}

impl<F, V> FnSlot<F, V> {
    /// Returns `true` if the slot holds a callable.
    #[must_use]
    #[inline]
    pub fn is_fun(&self) -> bool {
        matches!(self, Self::Fun(_))
    }
}

impl<A, B, V> FnSlot<fn(A) -> B, V> {
    /// Wraps a plain value, marking the slot as not callable.
    ///
    /// Applying the resulting slot yields [`NotAFunction`]. The function
    /// side is a phantom `fn` pointer; annotate the surrounding outcome (or
    /// spell the pointer type out) when inference has nothing else to go
    /// on.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, ok, ApplyError, FnSlot, NotAFunction, Outcome};
    ///
    /// let misused: Outcome<ApplyError<&str>, i32> = ok(FnSlot::value(1)).and_map(ok(1));
    /// assert_eq!(misused, err(ApplyError::NotAFunction(NotAFunction)));
    /// ```
    #[inline]
    pub fn value(value: V) -> Self {
        FnSlot::Value(value)
    }
}

/// In-band misuse error raised when [`Outcome::and_map`] finds a
/// non-callable payload in its function slot.
///
/// Deliberately a separate type from domain errors so downstream code can
/// match on it specifically; [`ApplyError`] is a ready-made union of the
/// two kinds. The tag and message are fixed, exposed through
/// [`KIND`](NotAFunction::KIND) and [`MESSAGE`](NotAFunction::MESSAGE).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash, Default)]
pub struct NotAFunction;

impl NotAFunction {
    /// Tag identifying this error kind.
    pub const KIND: &'static str = "not-a-function";

    /// Fixed human-readable explanation of the misuse.
    pub const MESSAGE: &'static str =
        "`and_map` can only be applied to an outcome whose function slot holds a callable";

    /// Returns the kind tag.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> &'static str {
        Self::KIND
    }

    /// Returns the fixed message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &'static str {
        Self::MESSAGE
    }
}

impl fmt::Display for NotAFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Self::KIND, Self::MESSAGE)
    }
}

impl core::error::Error for NotAFunction {}

/// Error channel for applicative chains: a caller-supplied domain error or
/// the [`NotAFunction`] misuse error.
///
/// [`Outcome::and_map`] requires `E: From<NotAFunction>`; this union is the
/// ready-made error type satisfying that bound while keeping the two kinds
/// distinguishable by `match`. Repeated `and_map` calls keep the same error
/// type instead of nesting wrappers.
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, ApplyError, FnSlot, Outcome};
///
/// let halted: Outcome<ApplyError<&str>, i32> =
///     err::<_, FnSlot<fn(i32) -> i32, i32>>(ApplyError::Domain("bad input"))
///         .and_map(err(ApplyError::Domain("unused")));
/// assert_eq!(halted, err(ApplyError::Domain("bad input")));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum ApplyError<E> {
    /// An error produced by the caller's own fallible steps.
    Domain(E),
    /// The in-band `and_map` misuse error.
    NotAFunction(NotAFunction),
}

impl<E> From<NotAFunction> for ApplyError<E> {
    #[inline]
    fn from(error: NotAFunction) -> Self {
        ApplyError::NotAFunction(error)
    }
}

impl<E: fmt::Display> fmt::Display for ApplyError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::Domain(error) => write!(f, "{error}"),
            ApplyError::NotAFunction(error) => write!(f, "{error}"),
        }
    }
}

impl<E> core::error::Error for ApplyError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ApplyError::Domain(error) => Some(error),
            ApplyError::NotAFunction(error) => Some(error),
        }
    }
}

impl<E, F, V> Outcome<E, FnSlot<F, V>> {
    /// Applies the wrapped function to the wrapped argument.
    ///
    /// Checks run in a fixed order: an `Err` in the function slot is
    /// returned first; an `Ok` slot holding a plain value then fails with
    /// [`NotAFunction`] regardless of the argument's state; only then is an
    /// `Err` argument propagated; with everything in order, the function is
    /// applied and the output wrapped as `Ok`.
    ///
    /// When the wrapped function is curried through nested
    /// [`FnSlot::fun`] calls, chaining `and_map` peels one argument per
    /// call, generalizing [`map2`](Outcome::map2)..[`map5`](Outcome::map5)
    /// to arbitrary arity.
    ///
    /// # Arguments
    ///
    /// * `argument` - The outcome supplying the function's next argument
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ok, ApplyError, FnSlot, Outcome};
    ///
    /// let doubled: Outcome<ApplyError<&str>, i32> =
    ///     ok(FnSlot::fun(|n: i32| n * 2)).and_map(ok(21));
    /// assert_eq!(doubled, ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn and_map<A, B>(self, argument: Outcome<E, A>) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
        E: From<NotAFunction>,
    {
        match self {
            Outcome::Err(error) => Outcome::Err(error),
            Outcome::Ok(FnSlot::Value(_)) => Outcome::Err(E::from(NotAFunction)),
            Outcome::Ok(FnSlot::Fun(f)) => match argument {
                Outcome::Err(error) => Outcome::Err(error),
                Outcome::Ok(value) => Outcome::Ok(f(value)),
            },
        }
    }
}
