use outcome_rail::convert::{
    option_to_outcome, outcome_to_option, outcome_to_result, result_to_outcome,
};
use outcome_rail::{err, ok, pipe, OptionExt, Outcome, ResultExt};

#[test]
fn of_treats_absence_as_failure() {
    let absent: Outcome<&str, i32> = Outcome::of(None);
    assert_eq!(absent, err("null value"));
}

#[test]
fn of_passes_zero_through() {
    assert_eq!(Outcome::of(Some(0)), ok(0));
}

#[test]
fn of_passes_false_through() {
    assert_eq!(Outcome::of(Some(false)), ok(false));
}

#[test]
fn of_passes_empty_string_through() {
    assert_eq!(Outcome::of(Some("")), ok(""));
    assert_eq!(Outcome::of(Some(String::new())), ok(String::new()));
}

#[test]
fn of_passes_nan_through_as_success() {
    let outcome = Outcome::of(Some(f64::NAN));
    assert!(matches!(outcome, Outcome::Ok(value) if value.is_nan()));
}

#[test]
fn of_preserves_negative_zero() {
    let value = Outcome::of(Some(-0.0f64)).with_default(1.0);
    assert_eq!(value.to_bits(), (-0.0f64).to_bits());
}

#[test]
fn from_option_uses_supplied_error_for_none() {
    assert_eq!(Outcome::from_option(Some(1), "error"), ok(1));
    assert_eq!(
        Outcome::<_, i32>::from_option(None, "error from nothing"),
        err("error from nothing")
    );
}

#[test]
fn from_option_pipe_form_matches_method() {
    let method = Outcome::from_option(Some(1), "missing");
    let piped = pipe::from_option("missing")(Some(1));
    assert_eq!(method, piped);
}

#[test]
fn to_option_keeps_only_the_success_side() {
    assert_eq!(ok::<&str, _>(1).to_option(), Some(1));
    assert_eq!(err::<_, i32>("error").to_option(), None);
    assert_eq!(pipe::to_option(ok::<&str, _>(1)), Some(1));
}

#[test]
fn option_round_trip() {
    let through: Outcome<&str, i32> = Outcome::from_option(ok::<&str, _>(1).to_option(), "gone");
    assert_eq!(through, ok(1));

    let dropped: Outcome<&str, i32> = Outcome::from_option(err("detail").to_option(), "gone");
    assert_eq!(dropped, err("gone"));
}

#[test]
fn result_round_trip() {
    let outcome: Outcome<&str, i32> = result_to_outcome(Ok(1));
    assert_eq!(outcome_to_result(outcome), Ok(1));

    let outcome: Outcome<&str, i32> = result_to_outcome(Err("bad input"));
    assert_eq!(outcome_to_result(outcome), Err("bad input"));
}

#[test]
fn from_impls_convert_both_directions() {
    let outcome: Outcome<&str, i32> = Result::Ok(1).into();
    assert_eq!(outcome, ok(1));

    let result: Result<i32, &str> = err("bad input").into();
    assert_eq!(result, Err("bad input"));
}

#[test]
fn option_ext_converts_in_place() {
    assert_eq!(Some(1).into_outcome("missing"), ok(1));
    assert_eq!(None::<i32>.into_outcome("missing"), err("missing"));
    assert_eq!(option_to_outcome(Some(1), "missing"), ok(1));
}

#[test]
fn result_ext_converts_in_place() {
    let parsed: Result<i32, &str> = Ok(42);
    assert_eq!(parsed.into_outcome(), ok(42));
    assert_eq!(outcome_to_option(ok::<&str, _>(42)), Some(42));
}
