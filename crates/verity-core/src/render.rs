//! Value summaries for failure messages and text coercion.

use crate::value::{Body, Object, Value};

/// Default bound on rendered text and binary summaries.
pub const MAX_LENGTH: usize = 300;

/// Summarizes a value for a synthesized failure message.
///
/// Text is truncated to `max_length` characters and JSON-quoted; buffers show
/// at most `max_length / 2` bytes as hex; composites render as their class name.
pub fn render(value: &Value, max_length: usize) -> String {
    match value {
        Value::Undefined => "undefined".into(),
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(text) => {
            let truncated: String = text.chars().take(max_length).collect();
            serde_json::to_string(&truncated).unwrap_or_else(|_| format!("\"{truncated}\""))
        }
        Value::Symbol(symbol) => symbol.to_string(),
        Value::BigInt(n) => format!("{n}n"),
        Value::Function(function) => match function.name() {
            Some(name) => format!("[Function: {name}]"),
            None => "[Function]".into(),
        },
        Value::Object(object) => render_object(object, max_length),
    }
}

fn render_object(object: &Object, max_length: usize) -> String {
    let data = object.borrow();
    if let Body::Buffer(bytes) = &data.body {
        let end = bytes.len().min(max_length >> 1);
        return format!("[Buffer: {}]", hex::encode(&bytes[..end]));
    }
    match &data.proto {
        Some(class) if class.name() != "Object" && !class.name().is_empty() => {
            format!("[Object: {}]", class.name())
        }
        _ => "[Object]".into(),
    }
}

/// Formats a double using the shortest round-trip text, switching to exponent
/// notation outside `[1e-6, 1e21)`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".into();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if n == 0.0 {
        return "0".into();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Coerces a value into text. Cyclic sequences render their back-references as
/// empty strings.
pub fn display_string(value: &Value) -> String {
    let mut path = Vec::new();
    display_into(value, &mut path)
}

fn display_into(value: &Value, path: &mut Vec<usize>) -> String {
    match value {
        Value::Undefined => "undefined".into(),
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(text) => text.clone(),
        Value::Symbol(symbol) => symbol.to_string(),
        Value::BigInt(n) => n.to_string(),
        Value::Function(function) => {
            format!("function {}() {{ [native code] }}", function.name().unwrap_or(""))
        }
        Value::Object(object) => {
            if path.contains(&object.id()) {
                return String::new();
            }
            path.push(object.id());
            let text = display_object(object, path);
            path.pop();
            text
        }
    }
}

fn display_object(object: &Object, path: &mut Vec<usize>) -> String {
    let data = object.borrow();
    match &data.body {
        Body::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Undefined | Value::Null => String::new(),
                other => display_into(other, path),
            })
            .collect::<Vec<_>>()
            .join(","),
        Body::Error(error) => {
            let name = match error.fields.get("name") {
                Some(Value::String(name)) => name.clone(),
                _ => data
                    .proto
                    .as_ref()
                    .map_or_else(|| "Error".to_string(), |class| class.name().to_string()),
            };
            match (name.is_empty(), error.message.is_empty()) {
                (_, true) => name,
                (true, false) => error.message.clone(),
                (false, false) => format!("{name}: {}", error.message),
            }
        }
        Body::RegExp(pattern) => pattern.to_string(),
        Body::Date(timestamp) => timestamp.to_string(),
        Body::Buffer(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Body::View(view) if view.kind() != crate::view::ViewKind::DataView => {
            view.element_texts().join(",")
        }
        body => format!("[object {}]", body.tag().name()),
    }
}
