use verity_core::errors::{AssertError, AssertionFailure, ErrorInfo, Operator};
use verity_core::{enforce, range, Class, ErrorKind, Value};

#[test]
fn contract_violation_surface() {
    let err = enforce(false, "x", "boolean").unwrap_err();
    assert!(matches!(err, AssertError::Contract(_)));
    assert_eq!(err.message(), "'x' must be a(n) boolean.");
    assert_eq!(err.code(), "ERR_INVALID_ARG_TYPE");
    assert_eq!(err.info().unwrap().context["argument"], "x");
    assert!(enforce(true, "x", "number").is_ok());
}

#[test]
fn range_violation_surface() {
    let err = range(false, "x").unwrap_err();
    assert!(matches!(err, AssertError::Range(_)));
    assert_eq!(err.message(), "'x' is out of range.");
    assert!(err.failure().is_none());
    assert!(range(true, "x").is_ok());
}

#[test]
fn generated_message_uses_rendered_operands() {
    let failure = AssertionFailure::new(
        Operator::StrictEqual,
        Value::from(1),
        Value::from("1"),
        None,
        300,
    );
    assert_eq!(failure.message(), "1 === \"1\"");
    assert!(failure.generated_message());
    assert_eq!(failure.code(), "ERR_ASSERTION");
    assert_eq!(failure.location().file(), file!());
}

#[test]
fn supplied_message_is_verbatim() {
    let failure = AssertionFailure::new(
        Operator::DeepEqual,
        Value::Null,
        Value::Undefined,
        Some("custom"),
        300,
    );
    assert_eq!(failure.message(), "custom");
    assert!(!failure.generated_message());

    let empty = AssertionFailure::new(Operator::Truthy, Value::Bool(false), Value::Bool(true), Some(""), 300);
    assert_eq!(empty.message(), "false == true");
}

#[test]
fn errors_convert_into_runtime_values() {
    let err = AssertError::contract("actual", "buffer");
    let value = err.to_value();
    let object = value.as_object().unwrap();
    assert!(object.instance_of(&Class::error(ErrorKind::TypeError)));
    assert!(object.instance_of(&Class::error(ErrorKind::Error)));
    assert_eq!(value.get("message").unwrap().as_str(), Some("'actual' must be a(n) buffer."));
    assert_eq!(value.get("code").unwrap().as_str(), Some("ERR_INVALID_ARG_TYPE"));

    let failure = AssertError::Assertion(AssertionFailure::new(
        Operator::Throws,
        Value::Bool(false),
        Value::Bool(true),
        None,
        300,
    ));
    let value = failure.to_value();
    assert_eq!(value.get("name").unwrap().as_str(), Some("AssertionError"));
    assert_eq!(value.get("operator").unwrap().as_str(), Some("throws"));
}

#[test]
fn error_info_display_includes_context() {
    let info = ErrorInfo::new("E001", "problem")
        .with_context("argument", "x")
        .with_hint("pass a number");
    assert_eq!(
        info.to_string(),
        "problem (code: E001) | context: [argument=x] | hint: pass a number"
    );
}
