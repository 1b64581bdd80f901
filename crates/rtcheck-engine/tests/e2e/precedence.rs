//! Check precedence and build-once behavior

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rtcheck_sdk::{predicate, CustomCheckConfig, Value};

use super::harness::*;

#[test]
fn test_parameter_predicate_beats_type_level_validator() {
    let f = Fixture::new();
    f.rt.custom_check(&f.dep1, predicate(|_| Some("type-level".to_string())));
    let target = f.method_target(vec![class_type(&f.dep1)], None, noop());
    f.rt.check(
        &target,
        Some("method"),
        0,
        CustomCheckConfig::new().with_predicate(|v| {
            v.as_object().is_none().then(|| "not an object".to_string())
        }),
    );
    f.rt.check_params(&target, Some("method")).unwrap();

    let t = f.new_instance(&target);
    // The type-level validator would reject everything
    expect_ok(f.rt.invoke(&t, "method", &[f.d1.clone()]));
}

#[test]
fn test_type_level_validator_beats_default_check() {
    let f = Fixture::new();
    f.rt.custom_check(&f.dep1, predicate(|_| None));
    let target = f.method_target(vec![class_type(&f.dep1)], None, noop());
    f.rt.check_params(&target, Some("method")).unwrap();

    let t = f.new_instance(&target);
    // The default check would reject a Dependency2
    expect_ok(f.rt.invoke(&t, "method", &[f.d2.clone()]));
}

#[test]
fn test_type_level_validator_applies_to_exact_class_only() {
    let f = Fixture::new();
    f.rt.custom_check(&f.dep2, predicate(|_| Some("Invalid".to_string())));
    let target = f.method_target(vec![class_type(&f.dep1)], None, noop());
    f.rt.check_params(&target, Some("method")).unwrap();

    let t = f.new_instance(&target);
    expect_ok(f.rt.invoke(&t, "method", &[f.d1.clone()]));
    expect_type_error(
        f.rt.invoke(&t, "method", &[f.d2.clone()]),
        "is expected of type 'Dependency1'",
    );
}

#[test]
fn test_checks_are_built_once() {
    let f = Fixture::new();
    let evaluations = Arc::new(AtomicUsize::new(0));
    let counter = evaluations.clone();
    let target = f.method_target(vec![None], None, noop());
    f.rt.check(
        &target,
        Some("method"),
        0,
        CustomCheckConfig::new().with_predicate(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
            None
        }),
    );
    f.rt.check_params(&target, Some("method")).unwrap();

    let t = f.new_instance(&target);
    expect_ok(f.rt.invoke(&t, "method", &[Value::from("x")]));
    assert_eq!(evaluations.load(Ordering::Relaxed), 1);
    expect_ok(f.rt.invoke(&t, "method", &[Value::from("x")]));
    assert_eq!(evaluations.load(Ordering::Relaxed), 2);
}

#[test]
fn test_repeated_valid_calls_agree() {
    let f = Fixture::new();
    let target = f.checked_constructor(vec![class_type(&f.dep1)]);

    for _ in 0..3 {
        expect_ok(f.rt.construct(&target, &[f.d1.clone()]));
    }
    for _ in 0..3 {
        expect_type_error(f.rt.construct(&target, &[f.d2.clone()]), "The parameter '0'");
    }
}
