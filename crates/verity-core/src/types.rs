use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::errors::AssertError;

/// Millisecond-precision instant. `None` marks an invalid date, which never
/// equals another date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp(Option<i64>);

impl Timestamp {
    /// Creates a timestamp from milliseconds since the Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Self(Some(millis))
    }

    /// Creates an invalid timestamp.
    pub fn invalid() -> Self {
        Self(None)
    }

    /// Captures the current wall-clock time.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Converts a chrono datetime.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(Some(datetime.timestamp_millis()))
    }

    /// Returns milliseconds since the epoch, or `None` for an invalid date.
    pub fn millis(&self) -> Option<i64> {
        self.0
    }

    /// Moves the timestamp to a new instant.
    pub fn set_millis(&mut self, millis: i64) {
        self.0 = Some(millis);
    }

    /// Returns true when both timestamps are valid and name the same instant.
    pub fn same_instant(&self, other: &Timestamp) -> bool {
        matches!((self.0, other.0), (Some(a), Some(b)) if a == b)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.and_then(DateTime::<Utc>::from_timestamp_millis) {
            Some(datetime) => f.write_str(&datetime.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => f.write_str("Invalid Date"),
        }
    }
}

/// Arbitrary-precision integer stored as normalized decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    digits: String,
}

impl BigInt {
    /// Returns true for negative values.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true for zero.
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    fn normalized(negative: bool, digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Self {
                negative: false,
                digits: "0".into(),
            };
        }
        Self {
            negative,
            digits: trimmed.to_string(),
        }
    }
}

impl FromStr for BigInt {
    type Err = AssertError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AssertError::contract("digits", "integer"));
        }
        Ok(Self::normalized(negative, digits))
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from(value as i128)
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::normalized(false, &value.to_string())
    }
}

impl From<i128> for BigInt {
    fn from(value: i128) -> Self {
        Self::normalized(value < 0, &value.unsigned_abs().to_string())
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

/// A unique atom. Two symbols are equal only when they are the same symbol.
#[derive(Clone)]
pub struct Symbol(Rc<Option<String>>);

impl Symbol {
    /// Creates a fresh symbol with an optional description.
    pub fn new(description: Option<&str>) -> Self {
        Self(Rc::new(description.map(str::to_string)))
    }

    /// Returns the description.
    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} @{:p}", Rc::as_ptr(&self.0))
    }
}

/// An opaque callable compared by identity.
#[derive(Clone)]
pub struct Function(Rc<Option<String>>);

impl Function {
    /// Creates a named function.
    pub fn named(name: &str) -> Self {
        Self(Rc::new(Some(name.to_string())))
    }

    /// Creates an anonymous function.
    pub fn anonymous() -> Self {
        Self(Rc::new(None))
    }

    /// Returns the function name.
    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Function({} @{:p})",
            self.name().unwrap_or("<anonymous>"),
            Rc::as_ptr(&self.0)
        )
    }
}
