//! Structured error types shared across verity crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::panic::Location;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::class::ErrorKind;
use crate::render::render;
use crate::value::{Fields, Value};

/// Stable code carried by every assertion failure.
pub const ERR_ASSERTION: &str = "ERR_ASSERTION";
/// Stable code carried by type-contract violations.
pub const ERR_INVALID_ARG_TYPE: &str = "ERR_INVALID_ARG_TYPE";
/// Stable code carried by range violations.
pub const ERR_OUT_OF_RANGE: &str = "ERR_OUT_OF_RANGE";

/// Structured payload attached to contract and range violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (argument names, expected types, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Names the check that produced an [`AssertionFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Truthiness checks and unconditional failures.
    Truthy,
    /// Identity equality.
    StrictEqual,
    /// Identity inequality.
    NotStrictEqual,
    /// Structural equality.
    DeepEqual,
    /// Structural inequality.
    NotDeepEqual,
    /// Byte-content equality.
    BufferEqual,
    /// Byte-content inequality.
    NotBufferEqual,
    /// Synchronous raise expectation.
    Throws,
    /// Asynchronous raise expectation.
    Rejects,
    /// Null-equivalence of an error slot.
    IfError,
}

impl Operator {
    /// Returns the tag written into synthesized failure messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Truthy => "==",
            Operator::StrictEqual => "===",
            Operator::NotStrictEqual => "!==",
            Operator::DeepEqual => "deepEqual",
            Operator::NotDeepEqual => "notDeepEqual",
            Operator::BufferEqual => "bufferEqual",
            Operator::NotBufferEqual => "notBufferEqual",
            Operator::Throws => "throws",
            Operator::Rejects => "rejects",
            Operator::IfError => "ifError",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The failure signal raised when an assertion check does not hold.
#[derive(Debug, Clone)]
pub struct AssertionFailure {
    message: String,
    operator: Operator,
    actual: Value,
    expected: Value,
    generated_message: bool,
    location: &'static Location<'static>,
}

impl AssertionFailure {
    /// Builds a failure, synthesizing `"<actual> <operator> <expected>"` when no
    /// message is supplied. Rendered operands are bounded by `max_length`.
    #[track_caller]
    pub fn new(
        operator: Operator,
        actual: Value,
        expected: Value,
        message: Option<&str>,
        max_length: usize,
    ) -> Self {
        let (message, generated_message) = match message {
            Some(text) if !text.is_empty() => (text.to_string(), false),
            _ => (
                format!(
                    "{} {} {}",
                    render(&actual, max_length),
                    operator,
                    render(&expected, max_length)
                ),
                true,
            ),
        };
        Self {
            message,
            operator,
            actual,
            expected,
            generated_message,
            location: Location::caller(),
        }
    }

    /// Overrides the recorded call site.
    pub fn at(mut self, location: &'static Location<'static>) -> Self {
        self.location = location;
        self
    }

    /// Returns the human readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the operator naming the failed check.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the value observed by the check.
    pub fn actual(&self) -> &Value {
        &self.actual
    }

    /// Returns the value the check expected.
    pub fn expected(&self) -> &Value {
        &self.expected
    }

    /// Whether the message was synthesized from the operands.
    pub fn generated_message(&self) -> bool {
        self.generated_message
    }

    /// Returns the call site that invoked the failing check.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &'static str {
        ERR_ASSERTION
    }

    /// Returns the display name of the failure.
    pub fn name(&self) -> &'static str {
        "AssertionError [ERR_ASSERTION]"
    }
}

impl Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Canonical error type for verity assertions.
#[derive(Debug, Clone, Error)]
pub enum AssertError {
    /// A check did not hold.
    #[error("{0}")]
    Assertion(AssertionFailure),
    /// A function was called with an argument of the wrong type.
    #[error("contract violation: {0}")]
    Contract(ErrorInfo),
    /// A numeric precondition was violated.
    #[error("range violation: {0}")]
    Range(ErrorInfo),
}

impl AssertError {
    /// Builds the contract violation `'<name>' must be a(n) <kind>.`.
    pub fn contract(name: &str, kind: &str) -> Self {
        AssertError::Contract(
            ErrorInfo::new(ERR_INVALID_ARG_TYPE, format!("'{name}' must be a(n) {kind}."))
                .with_context("argument", name)
                .with_context("expected_type", kind),
        )
    }

    /// Builds the range violation `'<name>' is out of range.`.
    pub fn range(name: &str) -> Self {
        AssertError::Range(
            ErrorInfo::new(ERR_OUT_OF_RANGE, format!("'{name}' is out of range."))
                .with_context("argument", name),
        )
    }

    /// Returns the failure signal when this error is an assertion failure.
    pub fn failure(&self) -> Option<&AssertionFailure> {
        match self {
            AssertError::Assertion(failure) => Some(failure),
            AssertError::Contract(_) | AssertError::Range(_) => None,
        }
    }

    /// Returns the structured payload of contract and range violations.
    pub fn info(&self) -> Option<&ErrorInfo> {
        match self {
            AssertError::Assertion(_) => None,
            AssertError::Contract(info) | AssertError::Range(info) => Some(info),
        }
    }

    /// Returns the bare message without family prefix or context.
    pub fn message(&self) -> &str {
        match self {
            AssertError::Assertion(failure) => failure.message(),
            AssertError::Contract(info) | AssertError::Range(info) => &info.message,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        match self {
            AssertError::Assertion(failure) => failure.code(),
            AssertError::Contract(info) | AssertError::Range(info) => &info.code,
        }
    }

    /// Converts the error into a runtime error object so it can be raised and
    /// matched like any other value.
    pub fn to_value(&self) -> Value {
        match self {
            AssertError::Assertion(failure) => {
                let mut fields = Fields::new();
                fields.insert("code".into(), Value::from(failure.code()));
                fields.insert("operator".into(), Value::from(failure.operator().as_str()));
                fields.insert(
                    "generatedMessage".into(),
                    Value::Bool(failure.generated_message()),
                );
                fields.insert("actual".into(), failure.actual().clone());
                fields.insert("expected".into(), failure.expected().clone());
                Value::error_with_fields(ErrorKind::Assertion, failure.message(), fields)
            }
            AssertError::Contract(info) => info_value(ErrorKind::TypeError, info),
            AssertError::Range(info) => info_value(ErrorKind::RangeError, info),
        }
    }
}

fn info_value(kind: ErrorKind, info: &ErrorInfo) -> Value {
    let mut fields = Fields::new();
    fields.insert("code".into(), Value::from(info.code.as_str()));
    Value::error_with_fields(kind, info.message.as_str(), fields)
}

/// Returns a contract violation for `name` unless `value` holds.
pub fn enforce(value: bool, name: &str, kind: &str) -> Result<(), AssertError> {
    if value {
        Ok(())
    } else {
        Err(AssertError::contract(name, kind))
    }
}

/// Returns a range violation for `name` unless `value` holds.
pub fn range(value: bool, name: &str) -> Result<(), AssertError> {
    if value {
        Ok(())
    } else {
        Err(AssertError::range(name))
    }
}

impl From<AssertError> for Value {
    fn from(err: AssertError) -> Self {
        err.to_value()
    }
}
