#![cfg(feature = "serde")]

use outcome_rail::{ApplyError, NotAFunction, Outcome};

#[test]
fn outcome_serializes_as_tagged_variant() {
    let present: Outcome<String, i32> = Outcome::Ok(42);
    assert_eq!(serde_json::to_string(&present).unwrap(), r#"{"Ok":42}"#);

    let failed: Outcome<String, i32> = Outcome::Err("bad input".to_string());
    assert_eq!(
        serde_json::to_string(&failed).unwrap(),
        r#"{"Err":"bad input"}"#
    );
}

#[test]
fn outcome_round_trips_through_json() {
    for outcome in [
        Outcome::<String, i32>::Ok(7),
        Outcome::Err("bad input".to_string()),
    ] {
        let encoded = serde_json::to_string(&outcome).unwrap();
        let decoded: Outcome<String, i32> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, outcome);
    }
}

#[test]
fn apply_error_round_trips_through_json() {
    for error in [
        ApplyError::<String>::Domain("boom".to_string()),
        ApplyError::NotAFunction(NotAFunction),
    ] {
        let encoded = serde_json::to_string(&error).unwrap();
        let decoded: ApplyError<String> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, error);
    }
}
