#![deny(missing_docs)]

//! Runtime assertions that raise structured failures.
//!
//! Checks are available as methods on a configured [`Asserter`] and as free
//! functions using the default configuration. Each returns
//! `Result<(), AssertError>`; a failed check yields
//! [`AssertError::Assertion`] with the operands, an operator tag and the call
//! site, while argument preconditions yield [`AssertError::Contract`] or
//! [`AssertError::Range`].
//!
//! ```
//! use verity_assert::{deep_equal, Value};
//!
//! let a = Value::array([Value::from(1), Value::from("two")]);
//! let b = Value::array([Value::from(1), Value::from("two")]);
//! deep_equal(&a, &b, None).unwrap();
//!
//! let err = deep_equal(&a, &Value::Null, None).unwrap_err();
//! assert_eq!(err.message(), "[Object: Array] deepEqual null");
//! ```

mod asserter;
mod buffer;
mod catch;
pub mod expect;

use std::future::Future;

pub use asserter::Asserter;
pub use expect::Expectation;
pub use verity_core::{
    is_encoding, AssertConfig, AssertError, AssertionFailure, Class, Encoding, ErrorKind,
    Operator, Value, MAX_LENGTH,
};
pub use verity_eq::is_deep_equal;

pub use crate::{
    deep_equal as deep_strict_equal, equal as strict_equal,
    not_deep_equal as not_deep_strict_equal, not_equal as not_strict_equal,
};
/// The strict-mode namespace; every check here is already strict.
pub use crate as strict;

/// Requires `value` to be truthy.
#[track_caller]
pub fn ok(value: &Value, message: Option<&str>) -> Result<(), AssertError> {
    Asserter::default().ok(value, message)
}

/// Requires same-value equality.
#[track_caller]
pub fn equal(actual: &Value, expected: &Value, message: Option<&str>) -> Result<(), AssertError> {
    Asserter::default().equal(actual, expected, message)
}

/// Requires the operands to differ under same-value equality.
#[track_caller]
pub fn not_equal(
    actual: &Value,
    expected: &Value,
    message: Option<&str>,
) -> Result<(), AssertError> {
    Asserter::default().not_equal(actual, expected, message)
}

/// Always fails.
#[track_caller]
pub fn fail(message: Option<&str>) -> Result<(), AssertError> {
    Asserter::default().fail(message)
}

/// Requires structural equality.
#[track_caller]
pub fn deep_equal(
    actual: &Value,
    expected: &Value,
    message: Option<&str>,
) -> Result<(), AssertError> {
    Asserter::default().deep_equal(actual, expected, message)
}

/// Requires structural inequality.
#[track_caller]
pub fn not_deep_equal(
    actual: &Value,
    expected: &Value,
    message: Option<&str>,
) -> Result<(), AssertError> {
    Asserter::default().not_deep_equal(actual, expected, message)
}

/// Requires byte-content equality; text operands default to hex.
#[track_caller]
pub fn buffer_equal(
    actual: &Value,
    expected: &Value,
    encoding: Option<Encoding>,
    message: Option<&str>,
) -> Result<(), AssertError> {
    Asserter::default().buffer_equal(actual, expected, encoding, message)
}

/// Requires the byte contents to differ.
#[track_caller]
pub fn not_buffer_equal(
    actual: &Value,
    expected: &Value,
    encoding: Option<Encoding>,
    message: Option<&str>,
) -> Result<(), AssertError> {
    Asserter::default().not_buffer_equal(actual, expected, encoding, message)
}

/// Requires `func` to raise a value satisfying `expected`.
#[track_caller]
pub fn throws<T>(
    func: impl FnOnce() -> Result<T, Value>,
    expected: Option<&Expectation>,
    message: Option<&str>,
) -> Result<(), AssertError> {
    Asserter::default().throws(func, expected, message)
}

/// Requires the future produced by `func` to resolve to an error satisfying
/// `expected`.
#[track_caller]
pub fn rejects<'a, T, F, Fut>(
    func: F,
    expected: Option<&'a Expectation>,
    message: Option<&'a str>,
) -> impl Future<Output = Result<(), AssertError>> + 'a
where
    F: FnOnce() -> Fut + 'a,
    Fut: Future<Output = Result<T, Value>> + 'a,
    T: 'a,
{
    Asserter::default().rejects(func, expected, message)
}

/// Requires `value` to be null or undefined.
#[track_caller]
pub fn if_error(value: &Value) -> Result<(), AssertError> {
    Asserter::default().if_error(value)
}

/// Returns a contract violation unless `value` holds.
pub fn enforce(value: bool, name: &str, kind: &str) -> Result<(), AssertError> {
    verity_core::enforce(value, name, kind)
}

/// Returns a range violation unless `value` holds.
pub fn range(value: bool, name: &str) -> Result<(), AssertError> {
    verity_core::range(value, name)
}
