//! Arbitrary-arity lifting for [`Outcome`](crate::Outcome) values.
//!
//! The [`lift!`](crate::lift) macro is the variadic counterpart of the
//! fixed-arity [`map2`](crate::Outcome::map2)..[`map5`](crate::Outcome::map5)
//! methods; those methods are themselves defined through it, so every
//! lifting form in the crate shares one short-circuit ordering contract.

/// Applies an N-ary function across N `Outcome` operands, failing fast.
///
/// Operands are inspected strictly left to right by position: the first
/// `Err` encountered becomes the overall result, and neither the remaining
/// operands' payloads nor the function are touched. With every operand
/// `Ok`, the function receives the unwrapped values in positional order and
/// the output is wrapped as `Ok`.
///
/// Later operand expressions are only evaluated once every operand to their
/// left was `Ok`, so an error computed upstream surfaces in positional
/// order when several inputs are failing.
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, lift, ok, Outcome};
///
/// let sum: Outcome<&str, i32> = lift!(|a, b, c| a + b + c, ok(1), ok(2), ok(3));
/// assert_eq!(sum, ok(6));
///
/// let failed: Outcome<&str, i32> =
///     lift!(|a: i32, b: i32| a + b, err("left"), err("right"));
/// assert_eq!(failed, err("left"));
///
/// // Arities beyond map5 need no dedicated method:
/// let wide: Outcome<&str, i32> = lift!(
///     |a, b, c, d, e, f| a + b + c + d + e + f,
///     ok(1), ok(2), ok(3), ok(4), ok(5), ok(6),
/// );
/// assert_eq!(wide, ok(21));
/// ```
#[macro_export]
macro_rules! lift {
    (@bind $f:expr, ($($value:expr),*), $head:expr $(, $rest:expr)*) => {
        match $head {
            $crate::Outcome::Ok(__ok) => $crate::lift!(@bind $f, ($($value,)* __ok) $(, $rest)*),
            $crate::Outcome::Err(__err) => $crate::Outcome::Err(__err),
        }
    };
    (@bind $f:expr, ($($value:expr),*)) => {
        $crate::Outcome::Ok(($f)($($value),*))
    };
    ($f:expr, $($outcome:expr),+ $(,)?) => {
        $crate::lift!(@bind $f, (), $($outcome),+)
    };
}
