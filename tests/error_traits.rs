use std::error::Error;
use std::io;

use outcome_rail::{ApplyError, NotAFunction};

#[test]
fn test_error_trait_impl() {
    // Verify ApplyError<io::Error> implements std::error::Error
    let io_err = io::Error::new(io::ErrorKind::Other, "root cause");
    let err = ApplyError::Domain(io_err);

    assert!(err.source().is_some());
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "root cause");
}

#[test]
fn test_not_a_function_source() {
    let err: ApplyError<io::Error> = ApplyError::NotAFunction(NotAFunction);

    let source = err.source().unwrap();
    assert!(source.to_string().starts_with("not-a-function"));
}

#[test]
fn test_display_format_domain() {
    let err: ApplyError<&str> = ApplyError::Domain("core error");
    assert_eq!(format!("{}", err), "core error");
}

#[test]
fn test_display_format_not_a_function() {
    let err = NotAFunction;
    assert_eq!(
        format!("{}", err),
        format!("{}: {}", NotAFunction::KIND, NotAFunction::MESSAGE)
    );

    let wrapped: ApplyError<&str> = ApplyError::NotAFunction(NotAFunction);
    assert_eq!(format!("{}", wrapped), format!("{}", NotAFunction));
}
