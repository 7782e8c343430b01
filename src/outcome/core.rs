#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fail-fast outcome of a fallible computation.
///
/// `Outcome<E, A>` represents a computation that either succeeded with a value
/// of type `A` or failed with a single error of type `E`. Every combinator
/// consumes the outcome and returns a new one; once a chain is carrying an
/// `Err`, all later transformation steps are skipped and their callbacks are
/// never invoked, so the original error surfaces unchanged at the end of the
/// chain.
///
/// Values are immutable once constructed and compare structurally (same
/// variant, equal payload), which makes outcomes safe to share across any
/// number of concurrent readers and convenient to assert on in tests.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `E` and `A` do
/// (requires the `serde` feature).
///
/// # Type Parameters
///
/// * `E` - The error type
/// * `A` - The success value type
///
/// # Variants
///
/// * `Ok(A)` - Contains the success value
/// * `Err(E)` - Contains the error payload
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, ok, Outcome};
///
/// let doubled: Outcome<&str, i32> = ok(21).map(|n| n * 2);
/// assert_eq!(doubled, ok(42));
///
/// let failed: Outcome<&str, i32> = err("bad input").map(|n: i32| n * 2);
/// assert_eq!(failed, err("bad input"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<E, A> {
    Ok(A),
    Err(E),
}

/// Wraps a value in the `Ok` variant.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ok, Outcome};
///
/// let outcome: Outcome<&str, i32> = ok(1);
/// assert!(outcome.is_ok());
/// ```
#[inline]
pub fn ok<E, A>(value: A) -> Outcome<E, A> {
    Outcome::Ok(value)
}

/// Wraps an error in the `Err` variant.
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, Outcome};
///
/// let outcome: Outcome<&str, i32> = err("bad input");
/// assert!(outcome.is_err());
/// ```
#[inline]
pub fn err<E, A>(error: E) -> Outcome<E, A> {
    Outcome::Err(error)
}

impl<A> Outcome<&'static str, A> {
    /// Totalizing constructor lifting a possibly-absent value.
    ///
    /// Only absence counts as failure: `None` becomes `Err("null value")`,
    /// while every present value passes through as `Ok`, including zero,
    /// `false`, the empty string, and NaN. The check is absence-only, never
    /// emptiness or zero-ness of the payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, ok, Outcome};
    ///
    /// assert_eq!(Outcome::of(Some(0)), ok(0));
    /// assert_eq!(Outcome::of(Some(false)), ok(false));
    /// assert_eq!(Outcome::of(Some("")), ok(""));
    ///
    /// let absent: Outcome<&str, i32> = Outcome::of(None);
    /// assert_eq!(absent, err("null value"));
    /// ```
    #[inline]
    pub fn of(value: Option<A>) -> Self {
        match value {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Err("null value"),
        }
    }
}

impl<E, A> Outcome<E, A> {
    /// Converts an optional value into an outcome, supplying the error to
    /// use when the value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, ok, Outcome};
    ///
    /// assert_eq!(Outcome::from_option(Some(1), "missing"), ok(1));
    /// assert_eq!(Outcome::<_, i32>::from_option(None, "missing"), err("missing"));
    /// ```
    #[inline]
    pub fn from_option(option: Option<A>, error: E) -> Self {
        match option {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Err(error),
        }
    }

    /// Converts a plain `Result` into an outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ok, Outcome};
    ///
    /// let parsed: Result<i32, &str> = Ok(7);
    /// assert_eq!(Outcome::from_result(parsed), ok(7));
    /// ```
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }

    /// Returns `true` if the outcome holds a success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ok, Outcome};
    ///
    /// let outcome: Outcome<&str, i32> = ok(42);
    /// assert!(outcome.is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome holds an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, Outcome};
    ///
    /// let outcome: Outcome<&str, i32> = err("bad input");
    /// assert!(outcome.is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Maps the success value using the provided function.
    ///
    /// If the outcome is an `Err`, the error is preserved unchanged and `f`
    /// is never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `A` to type `B`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ok, Outcome};
    ///
    /// let outcome: Outcome<&str, i32> = ok(1).map(|n| n + 1);
    /// assert_eq!(outcome, ok(2));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<B, F>(self, f: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the error payload using the provided function.
    ///
    /// If the outcome is an `Ok`, the success value is preserved unchanged
    /// and `f` is never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the error from type `E` to type `G`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, Outcome};
    ///
    /// let outcome: Outcome<String, i32> =
    ///     err("bad input").map_err(|e: &str| e.to_uppercase());
    /// assert_eq!(outcome, err("BAD INPUT".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<G, A>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// Invokes `f` on the success value and returns whatever outcome it
    /// produces; an `Err` short-circuits past `f` untouched. Chaining
    /// `and_then` is associative, with [`ok`] as the identity element.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next fallible step
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, ok, Outcome};
    ///
    /// fn valid_month(n: i32) -> Outcome<&'static str, i32> {
    ///     if (1..=12).contains(&n) {
    ///         ok(n)
    ///     } else {
    ///         err("bad input")
    ///     }
    /// }
    ///
    /// assert_eq!(ok(3).and_then(valid_month), ok(3));
    /// assert_eq!(ok(13).and_then(valid_month), err("bad input"));
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Extracts the success value, falling back to `default` on failure.
    ///
    /// Terminal operation: the error payload is discarded permanently and
    /// cannot be recovered afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, ok, Outcome};
    ///
    /// let present: Outcome<&str, i32> = ok(1);
    /// assert_eq!(present.with_default(0), 1);
    ///
    /// let failed: Outcome<&str, i32> = err("bad input");
    /// assert_eq!(failed.with_default(0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn with_default(self, default: A) -> A {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Lazily-evaluated sibling of [`with_default`](Outcome::with_default).
    ///
    /// The closure runs only when the outcome is an `Err`, so a costly
    /// fallback is never built on the success path. Like `with_default`,
    /// this discards the error permanently.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, Outcome};
    ///
    /// let failed: Outcome<&str, String> = err("bad input");
    /// assert_eq!(failed.with_default_else(|| "fallback".to_string()), "fallback");
    /// ```
    #[must_use]
    #[inline]
    pub fn with_default_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default(),
        }
    }

    /// Converts to an [`Option`], keeping only the success side.
    ///
    /// The error payload is discarded and cannot be recovered from the
    /// option side.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, ok, Outcome};
    ///
    /// let present: Outcome<&str, i32> = ok(1);
    /// assert_eq!(present.to_option(), Some(1));
    ///
    /// let failed: Outcome<&str, i32> = err("bad input");
    /// assert_eq!(failed.to_option(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn to_option(self) -> Option<A> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Extracts the error, if any.
    ///
    /// Returns `Some(error)` for `Err`, `None` for `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, Outcome};
    ///
    /// let failed: Outcome<&str, i32> = err("bad input");
    /// assert_eq!(failed.into_error(), Some("bad input"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Converts into a plain `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ok, Outcome};
    ///
    /// let outcome: Outcome<&str, i32> = ok(1);
    /// assert_eq!(outcome.into_result(), Ok(1));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}
