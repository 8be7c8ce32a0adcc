//! Matching raised values against caller expectations.

use std::fmt;

use verity_core::{AssertError, Body, Class, Pattern, Tag, Value};
use verity_eq::is_deep_equal;

/// What a raised value must look like for `throws` and `rejects` to accept it.
pub enum Expectation {
    /// The raised value's text form must match the pattern.
    Pattern(Pattern),
    /// The predicate must return `true` for the raised value.
    Predicate(Box<dyn Fn(&Value) -> bool>),
    /// The raised value must be an instance of the class.
    Class(Class),
    /// Every own field of the template must be present on the raised value and
    /// deep-equal it. Pattern fields are tested against text fields instead.
    /// Error templates also require matching `name` and `message`.
    Fields(Value),
}

impl Expectation {
    /// Compiles `source` into a pattern expectation.
    pub fn pattern(source: &str) -> Result<Self, AssertError> {
        Pattern::new(source).map(Expectation::Pattern)
    }

    /// Wraps a predicate.
    pub fn predicate(check: impl Fn(&Value) -> bool + 'static) -> Self {
        Expectation::Predicate(Box::new(check))
    }

    /// Requires an instance of `class`.
    pub fn class(class: impl Into<Class>) -> Self {
        Expectation::Class(class.into())
    }

    /// Requires the fields of `template`.
    pub fn fields(template: Value) -> Self {
        Expectation::Fields(template)
    }

    /// Returns true when `raised` satisfies the expectation.
    pub fn matches(&self, raised: &Value) -> bool {
        match self {
            Expectation::Pattern(pattern) => pattern.is_match(&raised.to_display_string()),
            Expectation::Predicate(check) => check(raised),
            Expectation::Class(class) => raised
                .as_object()
                .map_or(false, |object| object.instance_of(class)),
            Expectation::Fields(template) => fields_match(template, raised),
        }
    }
}

fn fields_match(template: &Value, raised: &Value) -> bool {
    let Some(object) = template.as_object() else {
        return false;
    };
    if raised.is_nullish() {
        return false;
    }
    let mut keys = object.own_keys();
    if object.tag() == Tag::Error {
        keys.extend(["name".to_string(), "message".to_string()]);
    }
    if keys.is_empty() {
        return false;
    }
    keys.iter().all(|key| {
        let (Some(expect), Some(value)) = (template.get(key), raised.get(key)) else {
            return false;
        };
        if let Value::String(text) = &value {
            if let Some(matched) = test_pattern(&expect, text) {
                return matched;
            }
        }
        is_deep_equal(&value, &expect)
    })
}

fn test_pattern(expect: &Value, text: &str) -> Option<bool> {
    let object = expect.as_object()?;
    let data = object.borrow();
    match &data.body {
        Body::RegExp(pattern) => Some(pattern.is_match(text)),
        _ => None,
    }
}

impl fmt::Debug for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Expectation::Predicate(_) => f.write_str("Predicate(..)"),
            Expectation::Class(class) => f.debug_tuple("Class").field(class).finish(),
            Expectation::Fields(template) => f.debug_tuple("Fields").field(template).finish(),
        }
    }
}

impl From<Pattern> for Expectation {
    fn from(pattern: Pattern) -> Self {
        Expectation::Pattern(pattern)
    }
}

impl From<Class> for Expectation {
    fn from(class: Class) -> Self {
        Expectation::Class(class)
    }
}
