//! Assertion configuration: rendering bound and default buffer encoding.

use serde::{Deserialize, Serialize};

use crate::encoding::Encoding;
use crate::errors::{range, AssertError};
use crate::render::MAX_LENGTH;

/// Configuration options that control how assertions render and decode operands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssertConfig {
    /// Bound on rendered text; buffers render at most half as many bytes.
    pub max_length: usize,
    /// Encoding applied to text operands of the byte-content checks when the
    /// caller does not name one.
    pub default_encoding: Encoding,
}

impl AssertConfig {
    /// Checks that the configuration can render anything at all.
    pub fn validate(&self) -> Result<(), AssertError> {
        range(self.max_length > 0, "max_length")
    }
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            max_length: MAX_LENGTH,
            default_encoding: Encoding::Hex,
        }
    }
}
