//! Algebraic laws the combinator set is expected to uphold.

use std::cell::Cell;

use outcome_rail::{err, ok, pipe, Outcome};

fn add1(n: i32) -> i32 {
    n + 1
}

fn double(n: i32) -> i32 {
    n * 2
}

fn half(n: i32) -> Outcome<&'static str, i32> {
    if n % 2 == 0 {
        ok(n / 2)
    } else {
        err("odd")
    }
}

fn describe(n: i32) -> Outcome<&'static str, String> {
    ok(n.to_string())
}

#[test]
fn map_identity() {
    let outcome: Outcome<&str, i32> = ok(1);
    assert_eq!(outcome.clone().map(|x| x), outcome);
}

#[test]
fn map_composition() {
    for outcome in [ok(3), err("bad input")] {
        let composed: Outcome<&str, i32> = outcome.clone().map(|x| double(add1(x)));
        assert_eq!(outcome.map(add1).map(double), composed);
    }
}

#[test]
fn err_absorbs_map_without_invoking_callback() {
    let calls = Cell::new(0u32);
    let outcome: Outcome<&str, i32> = err("e").map(|x: i32| {
        calls.set(calls.get() + 1);
        x
    });
    assert_eq!(outcome, err("e"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn err_absorbs_and_then_without_invoking_callback() {
    let calls = Cell::new(0u32);
    let outcome: Outcome<&str, i32> = err("e").and_then(|x: i32| {
        calls.set(calls.get() + 1);
        ok(x)
    });
    assert_eq!(outcome, err("e"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_then_left_identity() {
    assert_eq!(ok(4).and_then(half), half(4));
    assert_eq!(ok(3).and_then(half), half(3));
}

#[test]
fn and_then_right_identity() {
    for outcome in [ok(4), err("bad input")] {
        assert_eq!(outcome.clone().and_then(ok), outcome);
    }
}

#[test]
fn and_then_associativity() {
    for outcome in [ok(4), ok(3), err("bad input")] {
        let nested = outcome.clone().and_then(|x| half(x).and_then(describe));
        assert_eq!(outcome.and_then(half).and_then(describe), nested);
    }
}

#[test]
fn map_err_is_noop_on_ok() {
    let outcome: Outcome<usize, i32> = ok(1).map_err(|e: &str| e.len());
    assert_eq!(outcome, ok(1));
}

#[test]
fn map_is_noop_on_err() {
    let outcome: Outcome<&str, i32> = err("e").map(add1);
    assert_eq!(outcome, err("e"));
}

#[test]
fn lifting_returns_first_positional_err_regardless_of_later_state() {
    let positions: [(Outcome<&str, i32>, Outcome<&str, i32>, &str); 3] = [
        (err("first"), err("second"), "first"),
        (err("first"), ok(2), "first"),
        (ok(1), err("second"), "second"),
    ];
    for (first, second, expected) in positions {
        assert_eq!(first.map2(second, |a, b| a + b), err(expected));
    }
}

#[test]
fn pipe_forms_agree_with_methods_on_both_variants() {
    for outcome in [ok(4), err("bad input")] {
        assert_eq!(
            pipe::map(add1)(outcome.clone()),
            outcome.clone().map(add1)
        );
        assert_eq!(
            pipe::and_then(half)(outcome.clone()),
            outcome.clone().and_then(half)
        );
        assert_eq!(
            pipe::map_err(str::len)(outcome.clone()),
            outcome.clone().map_err(str::len)
        );
        assert_eq!(
            pipe::with_default(0)(outcome.clone()),
            outcome.with_default(0)
        );
    }
}
