use proptest::prelude::*;
use verity_assert::{deep_equal, equal, not_deep_equal, not_equal, Value};

fn primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        "[a-z]{0,4}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn identity_and_structure_agree_on_primitives(a in primitive(), b in primitive()) {
        prop_assert_eq!(equal(&a, &b, None).is_ok(), deep_equal(&a, &b, None).is_ok());
        prop_assert_eq!(not_equal(&a, &b, None).is_ok(), not_deep_equal(&a, &b, None).is_ok());
        prop_assert_ne!(equal(&a, &b, None).is_ok(), not_equal(&a, &b, None).is_ok());
    }

    #[test]
    fn long_text_is_truncated_in_messages(text in "[a-z]{301,400}") {
        let err = equal(&Value::from(text.as_str()), &Value::Null, None).unwrap_err();
        let quoted = format!("\"{}\"", &text[..300]);
        prop_assert_eq!(err.message(), format!("{quoted} === null"));
    }
}
