//! Built-in self-test suite.
//!
//! The list is declared statically, in execution order:
//! 1. `test_save_data`
//! 2. `test_save_data_with_null`
//! 3. `test_save_data_with_object`
//! 4. `test_do_get`

use serde::Serialize;
use serde_json::{Value, json};

use prueba_core::assert::{assert_equal, assert_not_null, json_type};
use prueba_core::{AssertionError, DuplicateTestName, TestOutcome, TestSuite};

use crate::echo::save_data;
use crate::handler::Handler;
use crate::request::Request;

/// Returns the built-in suite, bound to `handler`.
///
/// # Errors
/// Returns an error if two built-in tests share a name.
pub fn builtin(handler: &Handler) -> Result<TestSuite, DuplicateTestName> {
    let page_handler = handler.clone();
    TestSuite::builder()
        .test("test_save_data", test_save_data)
        .test("test_save_data_with_null", test_save_data_with_null)
        .test("test_save_data_with_object", test_save_data_with_object)
        .test("test_do_get", move || test_do_get(&page_handler))
        .build()
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, AssertionError> {
    serde_json::to_value(value).map_err(|e| AssertionError::new(format!("unserializable: {e}")))
}

/// Echoing a flat object succeeds and returns the data.
///
/// # Errors
/// Returns the first failed assertion.
pub fn test_save_data() -> TestOutcome {
    let result = to_json(&save_data(json!({"test": "data", "number": 123})))?;

    assert_equal(
        &result["success"],
        &json!(true),
        "saveData should return success=true",
    )?;
    assert_equal(
        &result["message"],
        &json!("Saved"),
        "saveData should return correct message",
    )?;
    assert_not_null(&result["data"], "saveData should return data")
}

/// Echoing `null` still yields an object with a boolean `success`.
///
/// # Errors
/// Returns the first failed assertion.
pub fn test_save_data_with_null() -> TestOutcome {
    let result = to_json(&save_data(Value::Null))?;

    assert_equal(json_type(&result), "object", "saveData should return an object")?;
    assert_equal(
        json_type(&result["success"]),
        "boolean",
        "result should have success field",
    )
}

/// Echoing nested objects and arrays succeeds.
///
/// # Errors
/// Returns the first failed assertion.
pub fn test_save_data_with_object() -> TestOutcome {
    let result = save_data(json!({
        "user": "test",
        "items": [1, 2, 3],
        "nested": {"key": "value"},
    }));

    assert_equal(
        &result.success,
        &true,
        "saveData should handle complex objects",
    )
}

/// The page entry point returns a page.
///
/// # Errors
/// Returns the first failed assertion, or the handler's own error.
pub fn test_do_get(handler: &Handler) -> TestOutcome {
    let output = handler
        .handle_get(&Request::new())
        .map_err(|e| AssertionError::new(e.to_string()))?;

    let page = output.as_html();
    assert_not_null(&page, "doGet should return a result")?;
    if let Some(page) = page {
        assert_equal(
            page.title(),
            handler.config().title.as_str(),
            "doGet should render the configured title",
        )?;
    }
    Ok(())
}
