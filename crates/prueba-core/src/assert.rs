//! Assertion primitives for test procedures.
//!
//! Every check returns `Ok(())` or an [`AssertionError`] carrying a
//! human-readable diagnosis, so procedures chain them with `?` and the
//! runner sees the failure.

use serde::Serialize;
use serde_json::Value;

use crate::error::{AssertionError, TestOutcome};

const DEFAULT_EQUAL_MESSAGE: &str = "Assertion failed";
const DEFAULT_NOT_NULL_MESSAGE: &str = "Value should not be null or undefined";

/// Values that can be null or absent.
pub trait Nullable {
    /// Returns true for null or absent values.
    fn is_null_or_absent(&self) -> bool;
}

impl Nullable for Value {
    fn is_null_or_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T> Nullable for Option<T> {
    fn is_null_or_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null_or_absent(&self) -> bool {
        (**self).is_null_or_absent()
    }
}

macro_rules! never_null {
    ($($ty:ty),* $(,)?) => {
        $(impl Nullable for $ty {
            fn is_null_or_absent(&self) -> bool {
                false
            }
        })*
    };
}

never_null!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

/// Serializes a value for diagnostics, like `JSON.stringify` would.
fn render<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

/// Fails unless `actual == expected`.
///
/// Equality is the type's own `PartialEq`, with no coercion: for dynamic
/// [`Value`]s the number `5` and the string `"5"` differ.
///
/// # Errors
/// Returns an [`AssertionError`] naming both values.
pub fn assert_equal<'m, T>(
    actual: &T,
    expected: &T,
    message: impl Into<Option<&'m str>>,
) -> TestOutcome
where
    T: PartialEq + Serialize + ?Sized,
{
    if actual == expected {
        return Ok(());
    }
    Err(AssertionError::new(format!(
        "{}\n  Expected: {}\n  Actual: {}",
        message.into().unwrap_or(DEFAULT_EQUAL_MESSAGE),
        render(expected),
        render(actual),
    )))
}

/// Fails when `value` is JSON null or an absent `Option`.
///
/// Falsy but present values (`0`, `""`, `false`) pass.
///
/// # Errors
/// Returns an [`AssertionError`] with the supplied or default message.
pub fn assert_not_null<'m, T>(value: &T, message: impl Into<Option<&'m str>>) -> TestOutcome
where
    T: Nullable + ?Sized,
{
    if value.is_null_or_absent() {
        return Err(AssertionError::new(
            message.into().unwrap_or(DEFAULT_NOT_NULL_MESSAGE),
        ));
    }
    Ok(())
}

/// Fails unless `value` is exactly the boolean `true`.
///
/// # Errors
/// Returns an [`AssertionError`]; the default message shows the value.
pub fn assert_true<'m, T>(value: &T, message: impl Into<Option<&'m str>>) -> TestOutcome
where
    T: Serialize + ?Sized,
{
    assert_bool(value, true, message.into())
}

/// Fails unless `value` is exactly the boolean `false`.
///
/// # Errors
/// Returns an [`AssertionError`]; the default message shows the value.
pub fn assert_false<'m, T>(value: &T, message: impl Into<Option<&'m str>>) -> TestOutcome
where
    T: Serialize + ?Sized,
{
    assert_bool(value, false, message.into())
}

fn assert_bool<T>(value: &T, expected: bool, message: Option<&str>) -> TestOutcome
where
    T: Serialize + ?Sized,
{
    if matches!(serde_json::to_value(value), Ok(Value::Bool(b)) if b == expected) {
        return Ok(());
    }
    Err(AssertionError::new(message.map_or_else(
        || format!("Value should be {expected}, but was: {}", render(value)),
        str::to_string,
    )))
}

/// Returns the JSON kind of a value.
///
/// Absent fields index to `Value::Null`, so they report `"null"`.
#[must_use]
pub const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
