use futures::executor::block_on;
use verity_assert::{
    enforce, fail, range, rejects, throws, Class, ErrorKind, Expectation, Operator, Value,
};
use verity_core::Pattern;

fn foobar(kind: ErrorKind) -> Result<(), Value> {
    Err(Value::error(kind, "foobar"))
}

fn plain() -> Result<(), Value> {
    foobar(ErrorKind::Error)
}

fn ranged() -> Result<(), Value> {
    foobar(ErrorKind::RangeError)
}

fn pattern(source: &str) -> Expectation {
    Expectation::pattern(source).unwrap()
}

fn message_record(message: Value) -> Expectation {
    Expectation::fields(Value::record([("message", message)]))
}

fn regexp(source: &str) -> Value {
    Value::regexp(Pattern::new(source).unwrap())
}

#[test]
fn throws_requires_a_raise() {
    throws(plain, None, None).unwrap();
    let err = throws(|| Ok::<_, Value>(()), None, None).unwrap_err();
    let failure = err.failure().unwrap();
    assert_eq!(failure.operator(), Operator::Throws);
    assert_eq!(err.message(), "false throws true");
}

#[test]
fn throws_with_pattern() {
    throws(plain, Some(&pattern("foobar")), None).unwrap();
    assert!(throws(plain, Some(&pattern("foobaz")), None).is_err());
}

#[test]
fn throws_with_predicate() {
    let accept = Expectation::predicate(|err| err.to_display_string().contains("foobar"));
    let reject = Expectation::predicate(|err| err.to_display_string().contains("foobaz"));
    throws(plain, Some(&accept), None).unwrap();
    assert!(throws(plain, Some(&reject), None).is_err());
}

#[test]
fn throws_with_class() {
    let expectation = Expectation::class(ErrorKind::RangeError);
    throws(ranged, Some(&expectation), None).unwrap();
    assert!(throws(plain, Some(&expectation), None).is_err());

    let custom = Class::user("ParseError", Some(Class::error(ErrorKind::Error)));
    let raised = custom.clone();
    let custom_raise = move || -> Result<(), Value> {
        Err(Value::error_of(raised.clone(), "bad", Default::default()))
    };
    throws(custom_raise.clone(), Some(&Expectation::class(custom)), None).unwrap();
    throws(custom_raise, Some(&Expectation::class(ErrorKind::Error)), None).unwrap();
}

#[test]
fn throws_with_error_template() {
    let template = Expectation::fields(Value::error(ErrorKind::RangeError, "foobar"));
    throws(ranged, Some(&template), None).unwrap();
    assert!(throws(plain, Some(&template), None).is_err());
}

#[test]
fn throws_with_field_record() {
    throws(ranged, Some(&message_record(Value::from("foobar"))), None).unwrap();
    assert!(throws(plain, Some(&message_record(Value::from("foobaz"))), None).is_err());
    throws(ranged, Some(&message_record(regexp("foobar"))), None).unwrap();
    assert!(throws(plain, Some(&message_record(regexp("foobaz"))), None).is_err());
}

#[test]
fn throws_observes_panics() {
    let expectation = pattern("exploded");
    throws(
        || -> Result<(), Value> { panic!("exploded") },
        Some(&expectation),
        None,
    )
    .unwrap();
}

#[test]
fn throws_sees_nested_assertion_failures() {
    throws(|| fail(Some("foobar")).map_err(Value::from), Some(&pattern("foobar")), None).unwrap();

    let type_error = Expectation::fields(Value::error(
        ErrorKind::TypeError,
        "'x' must be a(n) boolean.",
    ));
    enforce(true, "x", "number").unwrap();
    throws(
        || -> Result<(), Value> {
            enforce(false, "x", "boolean")?;
            Ok(())
        },
        Some(&type_error),
        None,
    )
    .unwrap();

    let range_error = Expectation::fields(Value::error(ErrorKind::RangeError, "'x' is out of range."));
    range(true, "x").unwrap();
    throws(
        || -> Result<(), Value> {
            range(false, "x")?;
            Ok(())
        },
        Some(&range_error),
        None,
    )
    .unwrap();
}

#[test]
fn rejects_mirrors_throws() {
    block_on(async {
        rejects(|| async { plain() }, None, None).await.unwrap();
        let err = rejects(|| async { Ok::<_, Value>(()) }, None, None)
            .await
            .unwrap_err();
        assert_eq!(err.failure().unwrap().operator(), Operator::Rejects);

        let accepting = [
            pattern("foobar"),
            Expectation::predicate(|err| err.to_display_string().contains("foobar")),
            Expectation::class(ErrorKind::RangeError),
            Expectation::fields(Value::error(ErrorKind::RangeError, "foobar")),
            message_record(Value::from("foobar")),
            message_record(regexp("foobar")),
        ];
        for expectation in &accepting {
            rejects(|| async { ranged() }, Some(expectation), None)
                .await
                .unwrap();
        }

        let refusing = [
            pattern("foobaz"),
            Expectation::predicate(|err| err.to_display_string().contains("foobaz")),
            Expectation::class(ErrorKind::RangeError),
            Expectation::fields(Value::error(ErrorKind::RangeError, "foobar")),
            message_record(Value::from("foobaz")),
            message_record(regexp("foobaz")),
        ];
        for expectation in &refusing {
            assert!(rejects(|| async { plain() }, Some(expectation), Some("nope"))
                .await
                .is_err());
        }
    });
}

#[test]
fn rejects_records_the_call_site() {
    let line = line!() + 1;
    let pending = rejects(|| async { Ok::<_, Value>(()) }, None, None);
    let err = block_on(pending).unwrap_err();
    assert_eq!(err.failure().unwrap().location().line(), line);
}

#[test]
fn rejects_observes_panics_while_polling() {
    block_on(async {
        rejects(
            || async {
                if true {
                    panic!("late");
                }
                Ok::<_, Value>(())
            },
            Some(&pattern("late")),
            None,
        )
        .await
        .unwrap();
    });
}

#[test]
fn contract_errors_expose_their_kind() {
    let err = enforce(false, "x", "boolean").unwrap_err();
    assert_eq!(err.message(), "'x' must be a(n) boolean.");
    assert!(err.failure().is_none());
    let err = range(false, "x").unwrap_err();
    assert_eq!(err.message(), "'x' is out of range.");
}
