//! The configured assertion surface.

use std::future::Future;
use std::panic::Location;

use tracing::debug;
use verity_core::{
    render, same_value, AssertConfig, AssertError, AssertionFailure, Encoding, Operator, Value,
};
use verity_eq::is_deep_equal;

use crate::buffer::operands;
use crate::catch::{observe, observe_async};
use crate::expect::Expectation;

/// Evaluates checks and raises structured failures.
///
/// Every check returns `Ok(())` when it holds. Failures record the call site
/// of the check, so `?` propagation keeps pointing at the failing line.
#[derive(Debug, Clone, Default)]
pub struct Asserter {
    config: AssertConfig,
}

impl Asserter {
    /// Builds an asserter after validating `config`.
    pub fn new(config: AssertConfig) -> Result<Self, AssertError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AssertConfig {
        &self.config
    }

    /// Requires `value` to be truthy.
    #[track_caller]
    pub fn ok(&self, value: &Value, message: Option<&str>) -> Result<(), AssertError> {
        if value.is_truthy() {
            return Ok(());
        }
        Err(self.failure(Operator::Truthy, Value::Bool(false), Value::Bool(true), message))
    }

    /// Requires same-value equality.
    #[track_caller]
    pub fn equal(
        &self,
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        if same_value(actual, expected) {
            return Ok(());
        }
        Err(self.failure(Operator::StrictEqual, actual.clone(), expected.clone(), message))
    }

    /// Requires the operands to differ under same-value equality.
    #[track_caller]
    pub fn not_equal(
        &self,
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        if !same_value(actual, expected) {
            return Ok(());
        }
        Err(self.failure(Operator::NotStrictEqual, actual.clone(), expected.clone(), message))
    }

    /// Always fails. The message defaults to `Failed`.
    #[track_caller]
    pub fn fail(&self, message: Option<&str>) -> Result<(), AssertError> {
        let message = message.filter(|text| !text.is_empty()).unwrap_or("Failed");
        Err(self.failure(Operator::Truthy, Value::Bool(false), Value::Bool(true), Some(message)))
    }

    /// Requires structural equality.
    #[track_caller]
    pub fn deep_equal(
        &self,
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        if is_deep_equal(actual, expected) {
            return Ok(());
        }
        Err(self.failure(Operator::DeepEqual, actual.clone(), expected.clone(), message))
    }

    /// Requires structural inequality.
    #[track_caller]
    pub fn not_deep_equal(
        &self,
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        if !is_deep_equal(actual, expected) {
            return Ok(());
        }
        Err(self.failure(Operator::NotDeepEqual, actual.clone(), expected.clone(), message))
    }

    /// Requires byte-content equality of a Buffer and a Buffer or encoded text.
    /// Text is decoded with `encoding`, or the configured default.
    #[track_caller]
    pub fn buffer_equal(
        &self,
        actual: &Value,
        expected: &Value,
        encoding: Option<Encoding>,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        self.compare_bytes(actual, expected, encoding, message, true)
    }

    /// Requires the byte contents to differ.
    #[track_caller]
    pub fn not_buffer_equal(
        &self,
        actual: &Value,
        expected: &Value,
        encoding: Option<Encoding>,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        self.compare_bytes(actual, expected, encoding, message, false)
    }

    #[track_caller]
    fn compare_bytes(
        &self,
        actual: &Value,
        expected: &Value,
        encoding: Option<Encoding>,
        message: Option<&str>,
        want_equal: bool,
    ) -> Result<(), AssertError> {
        let encoding = encoding.unwrap_or(self.config.default_encoding);
        let (left, right) = operands(actual, expected, encoding)?;
        if (left == right) == want_equal {
            return Ok(());
        }
        let operator = if want_equal {
            Operator::BufferEqual
        } else {
            Operator::NotBufferEqual
        };
        Err(self.failure(
            operator,
            Value::from(hex::encode(&left)),
            Value::from(hex::encode(&right)),
            message,
        ))
    }

    /// Requires `func` to raise, and the raised value to satisfy `expected`
    /// when one is given. Panics inside `func` count as raises.
    #[track_caller]
    pub fn throws<T>(
        &self,
        func: impl FnOnce() -> Result<T, Value>,
        expected: Option<&Expectation>,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        let location = Location::caller();
        if accepts(observe(func), expected) {
            return Ok(());
        }
        Err(raise(
            location,
            self.config.max_length,
            Operator::Throws,
            Value::Bool(false),
            Value::Bool(true),
            message,
        ))
    }

    /// Asynchronous form of [`Asserter::throws`]: the future returned by
    /// `func` must resolve to an error (or panic while polled).
    ///
    /// The call site is captured when `rejects` is called, not when the
    /// returned future is awaited.
    #[track_caller]
    pub fn rejects<'a, T, F, Fut>(
        &self,
        func: F,
        expected: Option<&'a Expectation>,
        message: Option<&'a str>,
    ) -> impl Future<Output = Result<(), AssertError>> + 'a
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = Result<T, Value>> + 'a,
        T: 'a,
    {
        let location = Location::caller();
        let max_length = self.config.max_length;
        async move {
            let raised = observe_async(async move { func().await }).await;
            if accepts(raised, expected) {
                return Ok(());
            }
            Err(raise(
                location,
                max_length,
                Operator::Rejects,
                Value::Bool(false),
                Value::Bool(true),
                message,
            ))
        }
    }

    /// Requires `value` to be null or undefined.
    #[track_caller]
    pub fn if_error(&self, value: &Value) -> Result<(), AssertError> {
        if value.is_nullish() {
            return Ok(());
        }
        let detail = match value.get("message") {
            Some(Value::String(text)) => {
                if text.is_empty() {
                    value
                        .as_object()
                        .and_then(|object| object.class())
                        .map(|class| class.name().to_string())
                        .unwrap_or_default()
                } else {
                    text
                }
            }
            _ => render(value, self.config.max_length),
        };
        let message = format!("ifError got unwanted exception: {detail}");
        Err(self.failure(Operator::IfError, value.clone(), Value::Null, Some(&message)))
    }

    /// Returns a contract violation unless `value` holds.
    pub fn enforce(&self, value: bool, name: &str, kind: &str) -> Result<(), AssertError> {
        verity_core::enforce(value, name, kind)
    }

    /// Returns a range violation unless `value` holds.
    pub fn range(&self, value: bool, name: &str) -> Result<(), AssertError> {
        verity_core::range(value, name)
    }

    #[track_caller]
    fn failure(
        &self,
        operator: Operator,
        actual: Value,
        expected: Value,
        message: Option<&str>,
    ) -> AssertError {
        raise(
            Location::caller(),
            self.config.max_length,
            operator,
            actual,
            expected,
            message,
        )
    }
}

fn accepts(raised: Option<Value>, expected: Option<&Expectation>) -> bool {
    match (raised, expected) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(value), Some(expectation)) => expectation.matches(&value),
    }
}

fn raise(
    location: &'static Location<'static>,
    max_length: usize,
    operator: Operator,
    actual: Value,
    expected: Value,
    message: Option<&str>,
) -> AssertError {
    let failure =
        AssertionFailure::new(operator, actual, expected, message, max_length).at(location);
    debug!(
        operator = %failure.operator(),
        location = %failure.location(),
        "assertion failed: {}",
        failure.message()
    );
    AssertError::Assertion(failure)
}
