//! Prototype identities attached to composite values.

use std::fmt;
use std::rc::Rc;

use crate::view::ViewKind;

/// Builtin error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The root error class.
    Error,
    /// Type-contract violations.
    TypeError,
    /// Out-of-range values.
    RangeError,
    /// Malformed source text.
    SyntaxError,
    /// Unresolvable references.
    ReferenceError,
    /// Errors raised by evaluation.
    EvalError,
    /// Malformed URIs.
    UriError,
    /// Assertion failures converted into runtime values.
    Assertion,
}

impl ErrorKind {
    /// Returns the constructor name.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::UriError => "URIError",
            ErrorKind::Assertion => "AssertionError",
        }
    }
}

/// Classes provided by the value model itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Plain records and argument bundles.
    Object,
    /// Ordered sequences.
    Array,
    /// Key-value associations.
    Map,
    /// Unordered distinct-element collections.
    Set,
    /// Byte buffers.
    Buffer,
    /// Raw fixed-size binary regions.
    ArrayBuffer,
    /// Typed numeric views.
    View(ViewKind),
    /// Timestamps.
    Date,
    /// Regular-expression patterns.
    RegExp,
    /// Boxed errors.
    Error(ErrorKind),
}

impl Builtin {
    /// Returns the constructor name.
    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Object => "Object",
            Builtin::Array => "Array",
            Builtin::Map => "Map",
            Builtin::Set => "Set",
            Builtin::Buffer => "Buffer",
            Builtin::ArrayBuffer => "ArrayBuffer",
            Builtin::View(kind) => kind.name(),
            Builtin::Date => "Date",
            Builtin::RegExp => "RegExp",
            Builtin::Error(kind) => kind.name(),
        }
    }

    fn parent(&self) -> Option<Builtin> {
        match self {
            Builtin::Object => None,
            Builtin::Buffer => Some(Builtin::View(ViewKind::Uint8)),
            Builtin::Error(ErrorKind::Error) => Some(Builtin::Object),
            Builtin::Error(_) => Some(Builtin::Error(ErrorKind::Error)),
            _ => Some(Builtin::Object),
        }
    }
}

/// A user-declared class.
#[derive(Debug)]
pub struct ClassDef {
    name: String,
    parent: Option<Class>,
}

/// Prototype identity of a composite value.
///
/// Builtin classes compare by value; user classes compare by identity, so two
/// separately declared classes with the same name are distinct.
#[derive(Clone)]
pub enum Class {
    /// A class provided by the value model.
    Builtin(Builtin),
    /// A class declared by the caller.
    User(Rc<ClassDef>),
}

impl Class {
    /// The root record class.
    pub const OBJECT: Class = Class::Builtin(Builtin::Object);
    /// The sequence class.
    pub const ARRAY: Class = Class::Builtin(Builtin::Array);
    /// The map class.
    pub const MAP: Class = Class::Builtin(Builtin::Map);
    /// The set class.
    pub const SET: Class = Class::Builtin(Builtin::Set);
    /// The byte buffer class.
    pub const BUFFER: Class = Class::Builtin(Builtin::Buffer);
    /// The raw binary region class.
    pub const ARRAY_BUFFER: Class = Class::Builtin(Builtin::ArrayBuffer);
    /// The timestamp class.
    pub const DATE: Class = Class::Builtin(Builtin::Date);
    /// The pattern class.
    pub const REGEXP: Class = Class::Builtin(Builtin::RegExp);

    /// Declares a new user class. Without an explicit parent the class extends
    /// [`Class::OBJECT`].
    pub fn user(name: impl Into<String>, parent: Option<Class>) -> Self {
        Class::User(Rc::new(ClassDef {
            name: name.into(),
            parent,
        }))
    }

    /// Returns the builtin error class of the given kind.
    pub fn error(kind: ErrorKind) -> Self {
        Class::Builtin(Builtin::Error(kind))
    }

    /// Returns the constructor name.
    pub fn name(&self) -> &str {
        match self {
            Class::Builtin(builtin) => builtin.name(),
            Class::User(def) => &def.name,
        }
    }

    /// Returns the direct parent class, if any.
    pub fn parent(&self) -> Option<Class> {
        match self {
            Class::Builtin(builtin) => builtin.parent().map(Class::Builtin),
            Class::User(def) => Some(def.parent.clone().unwrap_or(Class::OBJECT)),
        }
    }

    /// Returns true when `ancestor` is this class or appears in its parent chain.
    pub fn is_a(&self, ancestor: &Class) -> bool {
        let mut current = Some(self.clone());
        while let Some(class) = current {
            if class == *ancestor {
                return true;
            }
            current = class.parent();
        }
        false
    }

    /// Returns true for the error classes and everything derived from them.
    pub fn is_error(&self) -> bool {
        self.is_a(&Class::error(ErrorKind::Error))
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Class::Builtin(a), Class::Builtin(b)) => a == b,
            (Class::User(a), Class::User(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Class::Builtin(builtin) => write!(f, "Class({})", builtin.name()),
            Class::User(def) => write!(f, "Class({} @{:p})", def.name, Rc::as_ptr(def)),
        }
    }
}

impl From<Builtin> for Class {
    fn from(builtin: Builtin) -> Self {
        Class::Builtin(builtin)
    }
}

impl From<ErrorKind> for Class {
    fn from(kind: ErrorKind) -> Self {
        Class::error(kind)
    }
}

impl From<ViewKind> for Class {
    fn from(kind: ViewKind) -> Self {
        Class::Builtin(Builtin::View(kind))
    }
}
