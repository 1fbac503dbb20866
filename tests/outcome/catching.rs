use outcome_rail::Outcome;
use std::panic;

#[test]
fn run_catching_wraps_normal_completion() {
    let outcome = Outcome::run_catching(|| "done");
    assert_eq!(outcome.into_value(), Some("done"));
}

#[test]
fn run_catching_captures_panic_payload() {
    let outcome = Outcome::<()>::run_catching(|| panic!("boom"));

    assert!(outcome.is_failure());
    let err = outcome.exception_or_none().unwrap();
    assert_eq!(err.downcast_ref::<&str>(), Some(&"boom"));
    assert_eq!(err.message(), "boom");
}

#[test]
fn run_catching_keeps_formatted_and_typed_payloads() {
    let code = 7;
    let formatted = Outcome::<()>::run_catching(|| panic!("code {code}"));
    assert_eq!(
        formatted.exception_or_none().and_then(|e| e.downcast_ref::<String>()).map(String::as_str),
        Some("code 7")
    );

    let typed = Outcome::<()>::run_catching(|| panic::panic_any(404_u16));
    let err = typed.exception_or_none().unwrap();
    assert!(err.is::<u16>());
    assert_eq!(err.message(), "Box<dyn Any>");
}

#[test]
fn run_catching_result_captures_err_and_panic() {
    let ok = Outcome::run_catching_result(|| "12".parse::<u8>());
    assert_eq!(ok.into_value(), Some(12));

    let err = Outcome::run_catching_result(|| "300".parse::<u8>());
    assert!(err.exception_or_none().unwrap().is::<std::num::ParseIntError>());

    let panicked = Outcome::<u8>::run_catching_result(|| -> Result<u8, std::num::ParseIntError> {
        panic!("parser crashed")
    });
    assert_eq!(
        panicked.exception_or_none().map(|e| e.message()),
        Some("parser crashed".to_string())
    );
}

#[test]
fn captured_panic_round_trips_through_get_or_throw() {
    let outcome = Outcome::<()>::run_catching(|| panic::panic_any(String::from("original")));

    let payload =
        panic::catch_unwind(panic::AssertUnwindSafe(|| outcome.get_or_throw())).unwrap_err();
    assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("original"));
}

#[test]
fn map_catching_captures_transform_panic() {
    let outcome = Outcome::success(0).map_catching(|d: i32| {
        if d == 0 {
            panic!("division by zero");
        }
        10 / d
    });

    assert!(outcome.is_failure());
    assert_eq!(
        outcome.exception_or_none().map(|e| e.message()),
        Some("division by zero".to_string())
    );
}

#[test]
fn map_catching_passes_failure_through_without_calling_transform() {
    let mut called = false;
    let outcome = Outcome::<i32>::failure("upstream").map_catching(|x| {
        called = true;
        x
    });

    assert!(!called);
    assert_eq!(
        outcome.exception_or_none().and_then(|e| e.downcast_ref::<&str>()),
        Some(&"upstream")
    );
}

#[test]
fn map_catching_wraps_normal_result() {
    let outcome = Outcome::success(3).map_catching(|x| x * 3);
    assert_eq!(outcome.into_value(), Some(9));
}

#[test]
fn recover_catching_captures_transform_panic() {
    let outcome = Outcome::<i32>::failure("first").recover_catching(|_| panic!("second"));

    assert!(outcome.is_failure());
    assert_eq!(outcome.exception_or_none().and_then(|e| e.downcast_ref::<&str>()), Some(&"second"));
}

#[test]
fn recover_catching_recovers_and_leaves_success_alone() {
    let recovered = Outcome::<i32>::failure("first").recover_catching(|e| e.message().len() as i32);
    assert_eq!(recovered.into_value(), Some(5));

    let untouched = Outcome::success(1).recover_catching(|_| 2);
    assert_eq!(untouched.into_value(), Some(1));
}
