//! Runtime values under comparison.
//!
//! Primitives are held inline. Composite values live behind an [`Object`]
//! handle: a shared, interior-mutable cell whose pointer is its identity. Two
//! handles cloned from one another refer to the same object, which is what lets
//! callers build self-referential graphs and mutate them in place.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::class::{Builtin, Class, ErrorKind};
use crate::errors::AssertError;
use crate::pattern::Pattern;
use crate::render;
use crate::types::{BigInt, Function, Symbol, Timestamp};
use crate::view::{TypedView, ViewKind};

/// Own keyed fields of a record or error. Ordering is irrelevant for equality.
pub type Fields = BTreeMap<String, Value>;

/// Any datum the comparator or the assertion surface can inspect.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The empty reference.
    Null,
    /// Booleans.
    Bool(bool),
    /// IEEE-754 doubles, including NaN and signed zero.
    Number(f64),
    /// Text.
    String(String),
    /// Unique atoms.
    Symbol(Symbol),
    /// Arbitrary-precision integers.
    BigInt(BigInt),
    /// Callables.
    Function(Function),
    /// Composite values.
    Object(Object),
}

/// Category tag of a composite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Plain keyed records.
    Object,
    /// Ordered sequences.
    Array,
    /// Legacy positional-argument bundles.
    Arguments,
    /// Key-value associations.
    Map,
    /// Unordered distinct-element collections.
    Set,
    /// Raw fixed-size binary regions.
    ArrayBuffer,
    /// Typed views, including byte buffers.
    View(ViewKind),
    /// Timestamps.
    Date,
    /// Regular-expression patterns.
    RegExp,
    /// Boxed errors.
    Error,
}

impl Tag {
    /// Returns the tag name as reported by `[object <Name>]`.
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Object => "Object",
            Tag::Array => "Array",
            Tag::Arguments => "Arguments",
            Tag::Map => "Map",
            Tag::Set => "Set",
            Tag::ArrayBuffer => "ArrayBuffer",
            Tag::View(kind) => kind.name(),
            Tag::Date => "Date",
            Tag::RegExp => "RegExp",
            Tag::Error => "Error",
        }
    }
}

/// Message and own fields of a boxed error.
#[derive(Debug, Clone, Default)]
pub struct ErrorBody {
    /// Error message text.
    pub message: String,
    /// Own enumerable fields such as `code`.
    pub fields: Fields,
}

/// Category-specific payload of a composite value.
#[derive(Debug, Clone)]
pub enum Body {
    /// Plain keyed record.
    Record(Fields),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Legacy positional-argument bundle.
    Arguments(Vec<Value>),
    /// Key-value association.
    Map(ValueMap),
    /// Unordered distinct-element collection.
    Set(ValueSet),
    /// Byte buffer.
    Buffer(Vec<u8>),
    /// Raw fixed-size binary region.
    ArrayBuffer(Vec<u8>),
    /// Typed numeric view.
    View(TypedView),
    /// Timestamp.
    Date(Timestamp),
    /// Regular-expression pattern.
    RegExp(Pattern),
    /// Boxed error.
    Error(ErrorBody),
}

impl Body {
    /// Returns the category tag. Buffers report the tag of an unsigned 8-bit
    /// view and are told apart from plain views only by their class.
    pub fn tag(&self) -> Tag {
        match self {
            Body::Record(_) => Tag::Object,
            Body::Array(_) => Tag::Array,
            Body::Arguments(_) => Tag::Arguments,
            Body::Map(_) => Tag::Map,
            Body::Set(_) => Tag::Set,
            Body::Buffer(_) => Tag::View(ViewKind::Uint8),
            Body::ArrayBuffer(_) => Tag::ArrayBuffer,
            Body::View(view) => Tag::View(view.kind()),
            Body::Date(_) => Tag::Date,
            Body::RegExp(_) => Tag::RegExp,
            Body::Error(_) => Tag::Error,
        }
    }

    /// Returns the class a freshly constructed body of this category gets.
    pub fn default_class(&self) -> Class {
        match self {
            Body::Record(_) | Body::Arguments(_) => Class::OBJECT,
            Body::Array(_) => Class::ARRAY,
            Body::Map(_) => Class::MAP,
            Body::Set(_) => Class::SET,
            Body::Buffer(_) => Class::BUFFER,
            Body::ArrayBuffer(_) => Class::ARRAY_BUFFER,
            Body::View(view) => Class::Builtin(Builtin::View(view.kind())),
            Body::Date(_) => Class::DATE,
            Body::RegExp(_) => Class::REGEXP,
            Body::Error(_) => Class::error(ErrorKind::Error),
        }
    }
}

/// Prototype and payload of a composite value.
#[derive(Debug)]
pub struct ObjectData {
    /// Prototype identity; `None` is a null prototype.
    pub proto: Option<Class>,
    /// Category payload.
    pub body: Body,
}

/// Shared handle to a composite value.
#[derive(Clone)]
pub struct Object(Rc<RefCell<ObjectData>>);

impl Object {
    /// Wraps a body with an explicit prototype.
    pub fn new(proto: Option<Class>, body: Body) -> Self {
        Self(Rc::new(RefCell::new(ObjectData { proto, body })))
    }

    /// Wraps a body with the default class of its category.
    pub fn from_body(body: Body) -> Self {
        let proto = Some(body.default_class());
        Self::new(proto, body)
    }

    /// Returns the identity key of this object.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Borrows the object for reading.
    ///
    /// # Panics
    ///
    /// Panics while a mutable borrow obtained from [`Object::borrow_mut`] is alive.
    pub fn borrow(&self) -> Ref<'_, ObjectData> {
        self.0.borrow()
    }

    /// Borrows the object for writing.
    ///
    /// # Panics
    ///
    /// Panics while any other borrow of the same object is alive.
    pub fn borrow_mut(&self) -> RefMut<'_, ObjectData> {
        self.0.borrow_mut()
    }

    /// Returns the category tag.
    pub fn tag(&self) -> Tag {
        self.borrow().body.tag()
    }

    /// Returns the prototype identity.
    pub fn class(&self) -> Option<Class> {
        self.borrow().proto.clone()
    }

    /// Returns true when `class` appears in this object's prototype chain.
    pub fn instance_of(&self, class: &Class) -> bool {
        self.class().map_or(false, |proto| proto.is_a(class))
    }

    /// Reads an own keyed field of a record or error.
    pub fn field(&self, key: &str) -> Option<Value> {
        match &self.borrow().body {
            Body::Record(fields) => fields.get(key).cloned(),
            Body::Error(error) => error.fields.get(key).cloned(),
            _ => None,
        }
    }

    /// Writes an own keyed field, returning the previous value.
    pub fn set_field(
        &self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>, AssertError> {
        match &mut self.borrow_mut().body {
            Body::Record(fields) => Ok(fields.insert(key.into(), value)),
            Body::Error(error) => Ok(error.fields.insert(key.into(), value)),
            _ => Err(AssertError::contract("target", "keyed record")),
        }
    }

    /// Deletes an own keyed field, returning its value.
    pub fn remove_field(&self, key: &str) -> Result<Option<Value>, AssertError> {
        match &mut self.borrow_mut().body {
            Body::Record(fields) => Ok(fields.remove(key)),
            Body::Error(error) => Ok(error.fields.remove(key)),
            _ => Err(AssertError::contract("target", "keyed record")),
        }
    }

    /// Reads a sequence element.
    pub fn index(&self, index: usize) -> Option<Value> {
        match &self.borrow().body {
            Body::Array(items) | Body::Arguments(items) => items.get(index).cloned(),
            _ => None,
        }
    }

    /// Appends to a sequence.
    pub fn push(&self, value: Value) -> Result<(), AssertError> {
        match &mut self.borrow_mut().body {
            Body::Array(items) | Body::Arguments(items) => {
                items.push(value);
                Ok(())
            }
            _ => Err(AssertError::contract("target", "sequence")),
        }
    }

    /// Removes the last element of a sequence.
    pub fn pop(&self) -> Result<Option<Value>, AssertError> {
        match &mut self.borrow_mut().body {
            Body::Array(items) | Body::Arguments(items) => Ok(items.pop()),
            _ => Err(AssertError::contract("target", "sequence")),
        }
    }

    /// Overwrites a sequence element, returning the previous value.
    pub fn set_index(&self, index: usize, value: Value) -> Result<Value, AssertError> {
        match &mut self.borrow_mut().body {
            Body::Array(items) | Body::Arguments(items) => match items.get_mut(index) {
                Some(slot) => Ok(std::mem::replace(slot, value)),
                None => Err(AssertError::range("index")),
            },
            _ => Err(AssertError::contract("target", "sequence")),
        }
    }

    /// Returns the own enumerable keys in the order `Object.keys` would.
    pub fn own_keys(&self) -> Vec<String> {
        match &self.borrow().body {
            Body::Record(fields) => fields.keys().cloned().collect(),
            Body::Error(error) => error.fields.keys().cloned().collect(),
            Body::Array(items) | Body::Arguments(items) => {
                (0..items.len()).map(|idx| idx.to_string()).collect()
            }
            Body::Buffer(bytes) => (0..bytes.len()).map(|idx| idx.to_string()).collect(),
            Body::View(view) => (0..view.len()).map(|idx| idx.to_string()).collect(),
            Body::Map(_)
            | Body::Set(_)
            | Body::ArrayBuffer(_)
            | Body::Date(_)
            | Body::RegExp(_) => Vec::new(),
        }
    }

    /// Looks `key` up the way the `in` operator sees it: own fields first, then
    /// the accessors every object of the category exposes.
    pub fn get(&self, key: &str) -> Option<Value> {
        let data = self.borrow();
        match &data.body {
            Body::Record(fields) => fields.get(key).cloned(),
            Body::Error(error) => match error.fields.get(key) {
                Some(value) => Some(value.clone()),
                None => match key {
                    "message" => Some(Value::String(error.message.clone())),
                    "name" => data
                        .proto
                        .as_ref()
                        .map(|class| Value::String(class.name().to_string())),
                    _ => None,
                },
            },
            Body::Array(items) | Body::Arguments(items) => match key {
                "length" => Some(Value::Number(items.len() as f64)),
                _ => key.parse::<usize>().ok().and_then(|idx| items.get(idx).cloned()),
            },
            Body::Buffer(bytes) | Body::ArrayBuffer(bytes) => match key {
                "length" | "byteLength" => Some(Value::Number(bytes.len() as f64)),
                _ => key
                    .parse::<usize>()
                    .ok()
                    .and_then(|idx| bytes.get(idx))
                    .map(|byte| Value::Number(f64::from(*byte))),
            },
            Body::View(view) => match key {
                "length" => Some(Value::Number(view.len() as f64)),
                "byteLength" => Some(Value::Number(view.bytes().len() as f64)),
                _ => None,
            },
            Body::Map(map) => (key == "size").then(|| Value::Number(map.len() as f64)),
            Body::Set(set) => (key == "size").then(|| Value::Number(set.len() as f64)),
            Body::RegExp(pattern) => match key {
                "source" => Some(Value::String(pattern.source().to_string())),
                "flags" => Some(Value::String(pattern.flags().to_string())),
                "lastIndex" => Some(Value::Number(pattern.last_index() as f64)),
                _ => None,
            },
            Body::Date(_) => None,
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(data) => {
                let class = data.proto.as_ref().map_or("null", |class| class.name());
                write!(f, "Object({} {} @{:#x})", data.body.tag().name(), class, self.id())
            }
            Err(_) => write!(f, "Object(<borrowed> @{:#x})", self.id()),
        }
    }
}

impl Value {
    /// Builds a plain record.
    pub fn record<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self::object(Body::Record(collect_fields(fields)))
    }

    /// Builds a record with a null prototype.
    pub fn null_record<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Object(Object::new(None, Body::Record(collect_fields(fields))))
    }

    /// Builds a record whose prototype is `class`.
    pub fn instance<I, K>(class: Class, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Object(Object::new(Some(class), Body::Record(collect_fields(fields))))
    }

    /// Builds an ordered sequence.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Self::object(Body::Array(items.into_iter().collect()))
    }

    /// Builds a positional-argument bundle.
    pub fn arguments(items: impl IntoIterator<Item = Value>) -> Self {
        Self::object(Body::Arguments(items.into_iter().collect()))
    }

    /// Builds a key-value association.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Self::object(Body::Map(entries.into_iter().collect()))
    }

    /// Builds an unordered collection.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        Self::object(Body::Set(items.into_iter().collect()))
    }

    /// Builds a byte buffer.
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Self::object(Body::Buffer(bytes.into()))
    }

    /// Builds a raw binary region.
    pub fn array_buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Self::object(Body::ArrayBuffer(bytes.into()))
    }

    /// Builds a typed view.
    pub fn view(view: TypedView) -> Self {
        Self::object(Body::View(view))
    }

    /// Builds a timestamp.
    pub fn date(timestamp: Timestamp) -> Self {
        Self::object(Body::Date(timestamp))
    }

    /// Builds a pattern value.
    pub fn regexp(pattern: Pattern) -> Self {
        Self::object(Body::RegExp(pattern))
    }

    /// Builds a boxed error of a builtin kind.
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::error_with_fields(kind, message, Fields::new())
    }

    /// Builds a boxed error of a builtin kind carrying extra own fields.
    pub fn error_with_fields(kind: ErrorKind, message: impl Into<String>, fields: Fields) -> Self {
        Self::error_of(Class::error(kind), message, fields)
    }

    /// Builds a boxed error whose prototype is `class`.
    pub fn error_of(class: Class, message: impl Into<String>, fields: Fields) -> Self {
        Value::Object(Object::new(
            Some(class),
            Body::Error(ErrorBody {
                message: message.into(),
                fields,
            }),
        ))
    }

    /// Builds a fresh symbol.
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Symbol::new(description))
    }

    /// Builds a named function.
    pub fn function(name: &str) -> Self {
        Value::Function(Function::named(name))
    }

    fn object(body: Body) -> Self {
        Value::Object(Object::from_body(body))
    }

    /// Returns the composite handle, if any.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the text of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the number of a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true for `Undefined` and `Null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Truthiness: false, zero, NaN, empty text, zero big integers and the
    /// nullish values are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !(n.is_nan() || *n == 0.0),
            Value::String(text) => !text.is_empty(),
            Value::BigInt(n) => !n.is_zero(),
            Value::Symbol(_) | Value::Function(_) | Value::Object(_) => true,
        }
    }

    /// Returns the primitive type name, with composites reported as `object`.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::BigInt(_) => "bigint",
            Value::Function(_) => "function",
        }
    }

    /// Looks up a property on a composite value. Primitives expose nothing.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// Coerces the value into text the way string conversion would.
    pub fn to_display_string(&self) -> String {
        render::display_string(self)
    }
}

fn collect_fields<I, K>(fields: I) -> Fields
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    fields.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

/// Same-value equality: identity for symbols, functions and objects, content
/// for text and big integers, and for numbers NaN equals NaN while +0 and -0
/// differ.
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if x.is_nan() && y.is_nan() {
                true
            } else {
                x == y && x.is_sign_negative() == y.is_sign_negative()
            }
        }
        _ => same_reference(a, b),
    }
}

/// Same-value-zero equality used for collection membership: like
/// [`same_value`] except +0 and -0 are equal.
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => (x.is_nan() && y.is_nan()) || x == y,
        _ => same_reference(a, b),
    }
}

fn same_reference(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x.ptr_eq(y),
        (Value::Function(x), Value::Function(y)) => x.ptr_eq(y),
        (Value::Object(x), Value::Object(y)) => x.ptr_eq(y),
        _ => false,
    }
}

fn normalize_key(value: Value) -> Value {
    match value {
        Value::Number(n) if n == 0.0 => Value::Number(0.0),
        other => other,
    }
}

/// Insertion-ordered association keyed by same-value-zero.
#[derive(Debug, Clone, Default)]
pub struct ValueMap {
    entries: Vec<(Value, Value)>,
}

impl ValueMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &Value) -> Option<usize> {
        self.entries.iter().position(|(k, _)| same_value_zero(k, key))
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    /// Returns true when `key` is present.
    pub fn contains_key(&self, key: &Value) -> bool {
        self.position(key).is_some()
    }

    /// Stores `value` under `key`, keeping the original insertion slot when the
    /// key already exists.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((normalize_key(key), value));
                None
            }
        }
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        self.position(key).map(|idx| self.entries.remove(idx).1)
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl FromIterator<(Value, Value)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = ValueMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Insertion-ordered collection of distinct values under same-value-zero.
#[derive(Debug, Clone, Default)]
pub struct ValueSet {
    items: Vec<Value>,
}

impl ValueSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true when `value` is a member.
    pub fn contains(&self, value: &Value) -> bool {
        self.items.iter().any(|item| same_value_zero(item, value))
    }

    /// Adds `value`, returning false when it was already present.
    pub fn insert(&mut self, value: Value) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.items.push(normalize_key(value));
        true
    }

    /// Removes `value`, returning whether it was present.
    pub fn remove(&mut self, value: &Value) -> bool {
        match self.items.iter().position(|item| same_value_zero(item, value)) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Iterates over members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }
}

impl FromIterator<Value> for ValueSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = ValueSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_value_flips_native_irregularities() {
        assert!(same_value(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
        assert!(!same_value(&Value::Number(0.0), &Value::Number(-0.0)));
        assert!(same_value_zero(&Value::Number(0.0), &Value::Number(-0.0)));
    }

    #[test]
    fn map_keys_normalize_negative_zero() {
        let mut map = ValueMap::new();
        map.insert(Value::Number(-0.0), Value::from("zero"));
        assert!(map.contains_key(&Value::Number(0.0)));
        let stored = map.keys().next().and_then(Value::as_number).unwrap();
        assert!(stored.is_sign_positive());
    }

    #[test]
    fn error_lookup_exposes_name_and_message() {
        let err = Value::error(ErrorKind::RangeError, "foobar");
        assert_eq!(err.get("message").unwrap().as_str(), Some("foobar"));
        assert_eq!(err.get("name").unwrap().as_str(), Some("RangeError"));
        assert!(err.get("stack").is_none());
    }
}
