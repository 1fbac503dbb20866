use outcome_rail::Outcome;
use std::panic;

pub mod catching;

#[test]
fn success_helpers_behave_as_expected() {
    let outcome = Outcome::success(5);

    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert_eq!(outcome.get_or_none(), Some(&5));
    assert!(outcome.exception_or_none().is_none());
    assert_eq!(outcome.get_or_throw(), 5);
}

#[test]
fn failure_helpers_behave_as_expected() {
    let outcome = Outcome::<i32>::failure("error");

    assert!(outcome.is_failure());
    assert!(!outcome.is_success());
    assert!(outcome.get_or_none().is_none());

    let err = outcome.exception_or_none().unwrap();
    assert_eq!(err.downcast_ref::<&str>(), Some(&"error"));
    assert_eq!(err.message(), "error");
}

#[test]
fn get_or_throw_resumes_with_the_original_payload() {
    #[derive(Debug, PartialEq)]
    struct Quota(u32);

    impl std::fmt::Display for Quota {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "quota {}", self.0)
        }
    }

    let payload = panic::catch_unwind(|| Outcome::<()>::failure(Quota(3)).get_or_throw())
        .unwrap_err();

    assert_eq!(payload.downcast_ref::<Quota>(), Some(&Quota(3)));
    assert!(payload.downcast_ref::<outcome_rail::CaughtError>().is_none());
}

#[test]
fn recaught_typed_error_keeps_its_type_but_not_its_message() {
    #[derive(Debug, PartialEq)]
    struct Quota(u32);

    impl std::fmt::Display for Quota {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "quota {}", self.0)
        }
    }

    let recaught = Outcome::<()>::run_catching(|| Outcome::<()>::failure(Quota(3)).get_or_throw());
    let err = recaught.exception_or_none().unwrap();

    assert_eq!(err.message(), "Box<dyn Any>");
    assert_eq!(err.downcast_ref::<Quota>(), Some(&Quota(3)));
}

#[test]
fn throw_on_failure_is_silent_on_success() {
    Outcome::success(()).throw_on_failure();

    let payload =
        panic::catch_unwind(|| Outcome::<()>::failure("flush failed").throw_on_failure())
            .unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"flush failed"));
}

#[test]
fn get_or_default_picks_value_or_default() {
    assert_eq!(Outcome::success(1).get_or_default(9), 1);
    assert_eq!(Outcome::<i32>::failure("e").get_or_default(9), 9);
}

#[test]
fn get_or_else_only_calls_fallback_on_failure() {
    let mut calls = 0;
    let value = Outcome::success(1).get_or_else(|_| {
        calls += 1;
        0
    });
    assert_eq!(value, 1);
    assert_eq!(calls, 0);

    let value = Outcome::<usize>::failure("four").get_or_else(|e| e.message().len());
    assert_eq!(value, 4);
}

#[test]
fn get_or_else_lets_fallback_panic_unwind() {
    let payload = panic::catch_unwind(|| {
        Outcome::<i32>::failure("first").get_or_else(|_| panic!("second"))
    })
    .unwrap_err();

    assert_eq!(payload.downcast_ref::<&str>(), Some(&"second"));
}

#[test]
fn fold_invokes_exactly_one_branch() {
    let mut hits = (0, 0);
    let rendered = Outcome::success(2).fold(
        |v| {
            hits.0 += 1;
            v * 10
        },
        |_| {
            hits.1 += 1;
            -1
        },
    );
    assert_eq!(rendered, 20);
    assert_eq!(hits, (1, 0));

    let mut hits = (0, 0);
    let rendered = Outcome::<i32>::failure("nope").fold(
        |v| {
            hits.0 += 1;
            v
        },
        |_| {
            hits.1 += 1;
            -1
        },
    );
    assert_eq!(rendered, -1);
    assert_eq!(hits, (0, 1));
}

#[test]
fn map_transforms_success_values() {
    let outcome = Outcome::success("Hello").map(|_| "World");
    assert_eq!(outcome.get_or_throw(), "World");

    let outcome = Outcome::success(4).map(|x| x * 2).map(|x| x + 1);
    assert_eq!(outcome.into_value(), Some(9));
}

#[test]
fn map_passes_the_same_failure_through_without_calling_transform() {
    let original = Outcome::<i32>::failure(String::from("broken"));
    let payload_addr = original.exception_or_none().unwrap().error() as *const _ as *const ();

    let mut called = false;
    let mapped = original.map(|x| {
        called = true;
        x + 1
    });

    assert!(!called);
    let err = mapped.exception_or_none().unwrap();
    assert_eq!(err.error() as *const _ as *const (), payload_addr);
    assert_eq!(err.downcast_ref::<String>().map(String::as_str), Some("broken"));
}

#[test]
fn map_lets_transform_panic_unwind() {
    let payload =
        panic::catch_unwind(|| Outcome::success(1).map(|_: i32| -> i32 { panic!("in map") }))
            .unwrap_err();

    assert_eq!(payload.downcast_ref::<&str>(), Some(&"in map"));
}

#[test]
fn recover_turns_failure_into_success() {
    let outcome =
        Outcome::<String>::failure("missing").recover(|e| format!("default for {}", e.message()));
    assert_eq!(outcome.into_value(), Some("default for missing".to_string()));
}

#[test]
fn recover_leaves_success_untouched() {
    let mut called = false;
    let outcome = Outcome::success(3).recover(|_| {
        called = true;
        0
    });

    assert!(!called);
    assert_eq!(outcome.into_value(), Some(3));
}

#[test]
fn recover_lets_transform_panic_unwind() {
    let payload = panic::catch_unwind(|| {
        Outcome::<i32>::failure("first").recover(|_| panic!("recovery failed"))
    })
    .unwrap_err();

    assert_eq!(payload.downcast_ref::<&str>(), Some(&"recovery failed"));
}

#[test]
fn and_then_chains_and_short_circuits() {
    let half = |x: i32| {
        if x % 2 == 0 {
            Outcome::success(x / 2)
        } else {
            Outcome::failure(format!("{x} is odd"))
        }
    };

    assert_eq!(Outcome::success(8).and_then(half).and_then(half).into_value(), Some(2));

    let odd = Outcome::success(6).and_then(half).and_then(half);
    assert_eq!(odd.exception_or_none().map(|e| e.message()), Some("3 is odd".to_string()));
}

#[test]
fn into_result_and_back() {
    let ok: Result<i32, _> = Outcome::success(1).into_result();
    assert_eq!(ok.unwrap(), 1);

    let err = Outcome::<i32>::failure("bad").into_result().unwrap_err();
    assert_eq!(err.downcast_ref::<&str>(), Some(&"bad"));

    let outcome: Outcome<i32> = Err::<i32, &str>("bad").into();
    assert!(outcome.is_failure());
}

#[test]
fn display_renders_success_and_failure() {
    assert_eq!(Outcome::success(42).to_string(), "success(42)");

    let failure = Outcome::<i32>::failure("exploded").context("step 1");
    let rendered = failure.to_string();
    let (first, rest) = rendered.split_once('\n').unwrap();

    assert_eq!(first, "step 1 -> exploded");
    assert_eq!(rest, failure.exception_or_none().unwrap().trace().to_string());
}

#[test]
fn context_is_ignored_on_success() {
    let mut called = false;
    let outcome = Outcome::success(1).context("unused").context_with(|| {
        called = true;
        "never".to_string()
    });

    assert!(!called);
    assert_eq!(outcome.into_value(), Some(1));
}
