//! Falsification Tests: Category B - Assertion Semantics (P011-P018)
//!
//! # Toyota Way: Poka-Yoke (ポカヨケ)
//! Checks must reject exactly what they claim to reject, no more.

use proptest::prelude::*;
use serde_json::{Value, json};

use prueba_core::assert::{assert_equal, assert_false, assert_not_null, assert_true, json_type};

/// P011: equal values pass
#[test]
fn p011_equal_values_pass() {
    assert!(assert_equal(&5, &5, None).is_ok(), "P011 FALSIFIED");
    assert!(assert_equal(&json!(5), &json!(5), None).is_ok(), "P011 FALSIFIED");
}

/// P012: no type coercion between number and string
#[test]
fn p012_number_is_not_string() {
    let err = assert_equal(&json!(5), &json!("5"), None);
    assert!(err.is_err(), "P012 FALSIFIED: 5 == \"5\"");
}

/// P013: diagnostics carry both sides, serialized
#[test]
fn p013_diagnostics_name_both_sides() {
    let err = assert_equal(&json!({"k": [1, 2]}), &json!(null), "shape").unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("shape"));
    assert!(text.contains("Expected: null"), "P013 FALSIFIED: {text}");
    assert!(text.contains(r#"Actual: {"k":[1,2]}"#), "P013 FALSIFIED: {text}");
}

/// P014: falsy but present values are not null
#[test]
fn p014_falsy_values_are_present() {
    for value in [json!(0), json!(""), json!(false), json!([]), json!({})] {
        assert!(
            assert_not_null(&value, None).is_ok(),
            "P014 FALSIFIED: {value} treated as null"
        );
    }
}

/// P015: null and absent values are rejected
#[test]
fn p015_null_and_absent_rejected() {
    assert!(assert_not_null(&Value::Null, None).is_err(), "P015 FALSIFIED: null");
    assert!(
        assert_not_null(&None::<i32>, None).is_err(),
        "P015 FALSIFIED: absent"
    );
}

/// P016: only the boolean itself satisfies assert_true / assert_false
#[test]
fn p016_truthiness_is_not_enough() {
    for truthy in [json!(1), json!("true"), json!([true]), json!({"a": true})] {
        assert!(assert_true(&truthy, None).is_err(), "P016 FALSIFIED: {truthy}");
    }
    for falsy in [json!(0), json!(""), Value::Null] {
        assert!(assert_false(&falsy, None).is_err(), "P016 FALSIFIED: {falsy}");
    }
    assert!(assert_true(&true, None).is_ok());
    assert!(assert_false(&false, None).is_ok());
}

proptest! {
    /// P017: integers never equal their string rendering
    #[test]
    fn p017_no_coercion_for_any_integer(n in any::<i64>()) {
        prop_assert!(assert_equal(&json!(n), &json!(n.to_string()), None).is_err());
        prop_assert!(assert_equal(&json!(n), &json!(n), None).is_ok());
    }

    /// P018: json_type reports "string" for every string
    #[test]
    fn p018_json_type_strings(s in ".*") {
        prop_assert_eq!(json_type(&json!(s)), "string");
        prop_assert!(assert_not_null(&json!(s), None).is_ok());
    }
}
