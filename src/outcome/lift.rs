//! Fixed-arity lifting over independent outcomes.
//!
//! `map2`..`map5` combine 2–5 outcomes produced independently of one
//! another. Operands are inspected strictly left to right by position: the
//! first `Err` becomes the overall result, and neither the payloads of
//! later operands nor the callback are touched. All four are defined
//! through the [`lift!`](crate::lift) macro, so the ordering contract has a
//! single source of truth, and the macro itself covers arities beyond
//! five.

use crate::outcome::core::Outcome;

impl<E, A> Outcome<E, A> {
    /// Combines two outcomes with a binary function, failing on the first
    /// positional `Err`.
    ///
    /// # Arguments
    ///
    /// * `second` - The second operand
    /// * `f` - Function applied to both unwrapped values when all operands are `Ok`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, ok, Outcome};
    ///
    /// let sum: Outcome<&str, i32> = ok(1).map2(ok(2), |a, b| a + b);
    /// assert_eq!(sum, ok(3));
    ///
    /// let failed: Outcome<&str, i32> = err("left").map2(err("right"), |a: i32, b: i32| a + b);
    /// assert_eq!(failed, err("left"));
    /// ```
    #[must_use]
    #[inline]
    pub fn map2<B, C, F>(self, second: Outcome<E, B>, f: F) -> Outcome<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        crate::lift!(f, self, second)
    }

    /// Three-operand form of [`map2`](Outcome::map2).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{err, ok, Outcome};
    ///
    /// let sum: Outcome<&str, i32> = ok(1).map3(ok(2), err("x"), |a, b, c: i32| a + b + c);
    /// assert_eq!(sum, err("x"));
    /// ```
    #[must_use]
    #[inline]
    pub fn map3<B, C, D, F>(
        self,
        second: Outcome<E, B>,
        third: Outcome<E, C>,
        f: F,
    ) -> Outcome<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        crate::lift!(f, self, second, third)
    }

    /// Four-operand form of [`map2`](Outcome::map2).
    #[must_use]
    #[inline]
    pub fn map4<B, C, D, T, F>(
        self,
        second: Outcome<E, B>,
        third: Outcome<E, C>,
        fourth: Outcome<E, D>,
        f: F,
    ) -> Outcome<E, T>
    where
        F: FnOnce(A, B, C, D) -> T,
    {
        crate::lift!(f, self, second, third, fourth)
    }

    /// Five-operand form of [`map2`](Outcome::map2).
    #[must_use]
    #[inline]
    pub fn map5<B, C, D, T, U, F>(
        self,
        second: Outcome<E, B>,
        third: Outcome<E, C>,
        fourth: Outcome<E, D>,
        fifth: Outcome<E, T>,
        f: F,
    ) -> Outcome<E, U>
    where
        F: FnOnce(A, B, C, D, T) -> U,
    {
        crate::lift!(f, self, second, third, fourth, fifth)
    }

    /// Pairs two outcomes into a tuple, failing on the first positional `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ok, Outcome};
    ///
    /// let pair: Outcome<&str, (i32, &str)> = ok(1).zip(ok("one"));
    /// assert_eq!(pair, ok((1, "one")));
    /// ```
    #[must_use]
    #[inline]
    pub fn zip<B>(self, other: Outcome<E, B>) -> Outcome<E, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }
}
