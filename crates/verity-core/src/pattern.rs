//! Regular-expression pattern values.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::errors::{AssertError, ErrorInfo, ERR_INVALID_ARG_TYPE};

/// Flags carried by a [`Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PatternFlags {
    /// `g`: match every occurrence.
    pub global: bool,
    /// `i`: case-insensitive matching.
    pub ignore_case: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multiline: bool,
    /// `s`: `.` matches line terminators.
    pub dot_all: bool,
    /// `u`: unicode-aware matching.
    pub unicode: bool,
    /// `y`: matching is anchored at the position cursor.
    pub sticky: bool,
}

impl FromStr for PatternFlags {
    type Err = AssertError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut flags = PatternFlags::default();
        for flag in text.chars() {
            let slot = match flag {
                'g' => &mut flags.global,
                'i' => &mut flags.ignore_case,
                'm' => &mut flags.multiline,
                's' => &mut flags.dot_all,
                'u' => &mut flags.unicode,
                'y' => &mut flags.sticky,
                _ => return Err(invalid_flags(text)),
            };
            if *slot {
                return Err(invalid_flags(text));
            }
            *slot = true;
        }
        Ok(flags)
    }
}

impl fmt::Display for PatternFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multiline, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.sticky, 'y'),
        ];
        for (set, flag) in pairs {
            if set {
                write!(f, "{flag}")?;
            }
        }
        Ok(())
    }
}

fn invalid_flags(text: &str) -> AssertError {
    AssertError::Contract(
        ErrorInfo::new(ERR_INVALID_ARG_TYPE, format!("'{text}' is not a valid flag set."))
            .with_context("argument", "flags"),
    )
}

/// A compiled pattern together with its source text, flags and position cursor.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    flags: PatternFlags,
    last_index: usize,
    regex: Regex,
}

impl Pattern {
    /// Compiles `source` without flags.
    pub fn new(source: &str) -> Result<Self, AssertError> {
        Self::with_flags(source, "")
    }

    /// Compiles `source` with a flag string such as `"gi"`.
    pub fn with_flags(source: &str, flags: &str) -> Result<Self, AssertError> {
        let flags: PatternFlags = flags.parse()?;
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multiline)
            .dot_matches_new_line(flags.dot_all)
            .build()
            .map_err(|err| {
                AssertError::Contract(
                    ErrorInfo::new(
                        ERR_INVALID_ARG_TYPE,
                        format!("'{source}' is not a valid pattern."),
                    )
                    .with_context("argument", "source")
                    .with_hint(err.to_string()),
                )
            })?;
        Ok(Self {
            source: source.to_string(),
            flags,
            last_index: 0,
            regex,
        })
    }

    /// Returns the source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the flags.
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Returns the position cursor used by sticky and global matching.
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Moves the position cursor.
    pub fn set_last_index(&mut self, index: usize) {
        self.last_index = index;
    }

    /// Tests the pattern against `text`.
    pub fn is_match(&self, text: &str) -> bool {
        if self.flags.sticky {
            return text
                .get(self.last_index..)
                .and_then(|rest| self.regex.find(rest))
                .map_or(false, |found| found.start() == 0);
        }
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.flags == other.flags
            && self.last_index == other.last_index
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("flags", &self.flags.to_string())
            .field("last_index", &self.last_index)
            .finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}
