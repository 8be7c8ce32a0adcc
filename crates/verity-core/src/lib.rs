#![deny(missing_docs)]

//! Value model, rendering and error types shared by the verity crates.
//!
//! Values are either primitives held inline or composites behind an
//! identity-carrying [`Object`] handle. Every composite reports a category
//! [`Tag`] and a prototype [`Class`]; the comparator in `verity-eq` dispatches on
//! both. Failures raised by the assertion surface are [`AssertError`]s.

pub mod class;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod pattern;
pub mod render;
mod types;
pub mod value;
pub mod view;

pub use class::{Builtin, Class, ClassDef, ErrorKind};
pub use config::AssertConfig;
pub use encoding::{is_encoding, Encoding};
pub use errors::{enforce, range, AssertError, AssertionFailure, ErrorInfo, Operator};
pub use pattern::{Pattern, PatternFlags};
pub use render::{render, MAX_LENGTH};
pub use types::{BigInt, Function, Symbol, Timestamp};
pub use value::{
    same_value, same_value_zero, Body, ErrorBody, Fields, Object, ObjectData, Tag, Value,
    ValueMap, ValueSet,
};
pub use view::{TypedView, ViewKind};
