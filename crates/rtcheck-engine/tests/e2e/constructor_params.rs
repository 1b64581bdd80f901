//! Checked constructors

use rtcheck_sdk::{native_fn, predicate, CustomCheckConfig, ExpectedType, Value};

use super::harness::*;

#[test]
fn test_types_match() {
    let f = Fixture::new();
    let target = f.checked_constructor(vec![class_type(&f.dep1)]);

    let t = expect_ok(f.rt.construct(&target, &[f.d1.clone()]));
    assert!(t.is_instance_of(&target));
}

#[test]
fn test_instance_is_still_an_instance_of_the_original() {
    let f = Fixture::new();
    let original = f.rt.define_class("Target", None);
    f.rt.define_constructor(&original, vec![class_type(&f.dep1)], noop())
        .unwrap();
    let wrapped = f.rt.check_params(&original, None).unwrap();

    let t = expect_ok(f.rt.construct(&wrapped, &[f.d1.clone()]));
    assert!(t.is_instance_of(&original));
    assert!(t.is_instance_of(&wrapped));
    assert_eq!(t.type_name(), "Target");
}

#[test]
fn test_type_mismatch_names_the_parameter() {
    let f = Fixture::new();
    let target = f.checked_constructor(vec![class_type(&f.dep1), class_type(&f.dep2)]);

    expect_type_error(
        f.rt.construct(&target, &[f.d1.clone(), f.d1.clone()]),
        "The parameter '1'",
    );
    expect_type_error(
        f.rt.construct(&target, &[f.d1.clone(), f.d1.clone()]),
        "TypeCheckError when constructing an instance of 'Target'. The parameter '1' \
         is expected of type 'Dependency2', but was '[object Object]' of type 'Dependency1'",
    );
}

#[test]
fn test_null_is_rejected() {
    let f = Fixture::new();
    let target = f.checked_constructor(vec![class_type(&f.dep1)]);

    expect_type_error(f.rt.construct(&target, &[Value::Null]), "The parameter '0'");
}

#[test]
fn test_nullable_parameter_accepts_null() {
    let f = Fixture::new();
    let target = f.rt.define_class("Target", None);
    f.rt.define_constructor(&target, vec![class_type(&f.dep1)], noop())
        .unwrap();
    f.rt.check(&target, None, 0, CustomCheckConfig::new().nullable());
    let target = f.rt.check_params(&target, None).unwrap();

    expect_ok(f.rt.construct(&target, &[Value::Null]));
    expect_ok(f.rt.construct(&target, &[Value::Undefined]));
    expect_type_error(f.rt.construct(&target, &[f.d2.clone()]), "The parameter '0'");
}

#[test]
fn test_custom_check() {
    let f = Fixture::new();
    let target = f.rt.define_class("Target", None);
    f.rt.define_constructor(&target, vec![None], noop()).unwrap();
    f.rt.check(&target, None, 0, expect_custom("expected"));
    let target = f.rt.check_params(&target, None).unwrap();

    expect_type_error(
        f.rt.construct(&target, &[Value::from("blah")]),
        "TypeCheckError when constructing",
    );
    expect_type_error(f.rt.construct(&target, &[Value::from("blah")]), "CustomError");
    expect_ok(f.rt.construct(&target, &[Value::from("expected")]));
}

#[test]
fn test_type_level_check() {
    let f = Fixture::new();
    let dependency = f.rt.define_class("Dependency", None);
    f.rt.define_constructor(
        &dependency,
        vec![None],
        native_fn(|this, args| {
            if let Some(obj) = this.as_object() {
                obj.set("value", args.first().cloned().unwrap_or_default());
            }
            Ok(Value::Undefined)
        }),
    )
    .unwrap();
    f.rt.custom_check(
        &dependency,
        predicate(|t| match t.as_object() {
            Some(obj) if obj.get("value").as_str() == Some("expected") => None,
            _ => Some("Invalid".to_string()),
        }),
    );
    let target = f.checked_constructor(vec![class_type(&dependency)]);

    let invalid = expect_ok(f.rt.construct(&dependency, &[Value::from("invalid")]));
    let valid = expect_ok(f.rt.construct(&dependency, &[Value::from("expected")]));
    expect_type_error(f.rt.construct(&target, &[invalid]), "The parameter '0'");
    expect_ok(f.rt.construct(&target, &[valid]));
}

#[test]
fn test_untyped_parameter_without_check() {
    let f = Fixture::new();
    let target = f.checked_constructor(vec![None]);

    expect_ok(f.rt.construct(&target, &[f.d1.clone()]));
    expect_ok(f.rt.construct(&target, &[Value::Null]));
}

#[test]
fn test_number() {
    let f = Fixture::new();
    let target = f.checked_constructor(vec![Some(ExpectedType::number())]);

    expect_ok(f.rt.construct(&target, &[Value::from(234)]));
    expect_type_error(
        f.rt.construct(&target, &[Value::from("str")]),
        "is expected of type 'Number', but was 'str' of type 'String'",
    );
}

#[test]
fn test_string() {
    let f = Fixture::new();
    let target = f.checked_constructor(vec![Some(ExpectedType::string())]);

    expect_ok(f.rt.construct(&target, &[Value::from("str")]));
    expect_type_error(
        f.rt.construct(&target, &[Value::from(234)]),
        "is expected of type 'String', but was '234' of type 'Number'",
    );
}

#[test]
fn test_boolean() {
    let f = Fixture::new();
    let target = f.checked_constructor(vec![Some(ExpectedType::boolean())]);

    expect_ok(f.rt.construct(&target, &[Value::from(true)]));
    expect_type_error(f.rt.construct(&target, &[Value::from(234)]), "'Boolean'");
}

#[test]
fn test_arrays() {
    let f = Fixture::new();
    let target = f.checked_constructor(vec![Some(ExpectedType::array())]);

    expect_ok(f.rt.construct(&target, &[Value::array(Vec::new())]));
    expect_type_error(f.rt.construct(&target, &[Value::from(234)]), "'Array'");
}

#[test]
fn test_subclass_instances_pass() {
    let f = Fixture::new();
    let special = f.rt.define_class("SpecialDependency", Some(&f.dep1));
    let target = f.checked_constructor(vec![class_type(&f.dep1)]);

    let s = f.new_instance(&special);
    expect_ok(f.rt.construct(&target, &[s]));
}

#[test]
fn test_extra_arguments_are_not_checked() {
    let f = Fixture::new();
    let target = f.checked_constructor(vec![class_type(&f.dep1)]);

    expect_ok(f.rt.construct(&target, &[f.d1.clone(), Value::Null, Value::from(1)]));
}

#[test]
fn test_missing_arguments_are_checked_as_undefined() {
    let f = Fixture::new();
    let target = f.checked_constructor(vec![class_type(&f.dep1), class_type(&f.dep2)]);

    expect_type_error(
        f.rt.construct(&target, &[f.d1.clone()]),
        "The parameter '1' is expected of type 'Dependency2', but was 'undefined' of type 'undefined'",
    );
}

#[test]
fn test_rejected_construction_never_runs_the_body() {
    let f = Fixture::new();
    let target = f.rt.define_class("Target", None);
    f.rt.define_constructor(
        &target,
        vec![Some(ExpectedType::number())],
        native_fn(|_, _| Err("constructor body ran".into())),
    )
    .unwrap();
    let target = f.rt.check_params(&target, None).unwrap();

    expect_type_error(f.rt.construct(&target, &[Value::Null]), "The parameter '0'");
    let err = f.rt.construct(&target, &[Value::from(1)]).unwrap_err();
    assert!(!err.is_type_check());
    assert!(err.to_string().contains("constructor body ran"));
}

#[test]
fn test_constructor_receives_arguments_and_receiver() {
    let f = Fixture::new();
    let point = f.rt.define_class("Point", None);
    f.rt.define_constructor(
        &point,
        vec![Some(ExpectedType::number()), Some(ExpectedType::number())],
        native_fn(|this, args| {
            if let Some(obj) = this.as_object() {
                obj.set("x", args[0].clone());
                obj.set("y", args[1].clone());
            }
            Ok(Value::Undefined)
        }),
    )
    .unwrap();
    let point = f.rt.check_params(&point, None).unwrap();

    let p = expect_ok(f.rt.construct(&point, &[Value::from(1), Value::from(2)]));
    let obj = p.as_object().unwrap();
    assert_eq!(obj.get("x"), Value::from(1));
    assert_eq!(obj.get("y"), Value::from(2));
}

#[test]
fn test_methods_are_inherited_by_the_wrapper() {
    let f = Fixture::new();
    let target = f.rt.define_class("Target", None);
    f.rt.define_method(&target, "answer", Vec::new(), None, returning(Value::from(42)))
        .unwrap();
    let target = f.rt.check_params(&target, None).unwrap();

    let t = expect_ok(f.rt.construct(&target, &[]));
    assert_eq!(expect_ok(f.rt.invoke(&t, "answer", &[])), Value::from(42));
}

#[test]
fn test_nullable_parameter_skips_type_level_check() {
    let f = Fixture::new();
    let dependency = f.rt.define_class("Dependency", None);
    f.rt.custom_check(
        &dependency,
        predicate(|t| match t.as_object() {
            Some(obj) if obj.get("value").as_str() == Some("expected") => None,
            _ => Some("Invalid".to_string()),
        }),
    );
    let target = f.rt.define_class("Target", None);
    f.rt.define_constructor(&target, vec![class_type(&dependency)], noop())
        .unwrap();
    f.rt.check(&target, None, 0, CustomCheckConfig::new().nullable());
    let target = f.rt.check_params(&target, None).unwrap();

    expect_ok(f.rt.construct(&target, &[Value::Null]));
    expect_ok(f.rt.construct(&target, &[Value::Undefined]));
    expect_ok(f.rt.construct(&target, &[]));
    let d = f.new_instance(&dependency);
    expect_type_error(
        f.rt.construct(&target, &[d]),
        "The parameter '0' failed the check: Invalid",
    );
}
