use verity_core::{AssertError, Body, Encoding, Value};

/// Copies the bytes of a Buffer value.
pub(crate) fn buffer_bytes(value: &Value) -> Option<Vec<u8>> {
    let object = value.as_object()?;
    let data = object.borrow();
    match &data.body {
        Body::Buffer(bytes) => Some(bytes.clone()),
        _ => None,
    }
}

/// Resolves the two operands of a byte-content check. `actual` must be a
/// Buffer; `expected` may be a Buffer or text decoded with `encoding`.
pub(crate) fn operands(
    actual: &Value,
    expected: &Value,
    encoding: Encoding,
) -> Result<(Vec<u8>, Vec<u8>), AssertError> {
    let left = buffer_bytes(actual).ok_or_else(|| AssertError::contract("actual", "buffer"))?;
    let right = match expected {
        Value::String(text) => encoding.decode(text),
        other => buffer_bytes(other),
    }
    .ok_or_else(|| AssertError::contract("expected", "buffer"))?;
    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_operands_are_decoded() {
        let actual = Value::buffer(vec![1, 2, 3]);
        let (left, right) = operands(&actual, &Value::from("010203"), Encoding::Hex).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn undecodable_text_is_a_contract_violation() {
        let actual = Value::buffer(vec![1, 2, 3]);
        let err = operands(&actual, &Value::from("10203"), Encoding::Hex).unwrap_err();
        assert_eq!(err.message(), "'expected' must be a(n) buffer.");
    }

    #[test]
    fn non_buffer_actual_is_rejected_first() {
        let err = operands(&Value::from("010203"), &Value::from(1), Encoding::Hex).unwrap_err();
        assert_eq!(err.message(), "'actual' must be a(n) buffer.");
    }
}
