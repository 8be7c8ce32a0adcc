//! Text encodings accepted by the byte-content checks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AssertError;

/// Recognized encoding names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Low byte of every UTF-16 unit.
    Ascii,
    /// Alias of [`Encoding::Latin1`].
    Binary,
    /// Standard or URL-safe base64, padding optional.
    Base64,
    /// Pairs of hexadecimal digits.
    Hex,
    /// Low byte of every UTF-16 unit.
    Latin1,
    /// Alias of [`Encoding::Utf16le`].
    Ucs2,
    /// Little-endian UTF-16 units.
    Utf16le,
    /// UTF-8.
    Utf8,
}

impl Encoding {
    /// Every recognized encoding.
    pub const ALL: [Encoding; 8] = [
        Encoding::Ascii,
        Encoding::Binary,
        Encoding::Base64,
        Encoding::Hex,
        Encoding::Latin1,
        Encoding::Ucs2,
        Encoding::Utf16le,
        Encoding::Utf8,
    ];

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Ascii => "ascii",
            Encoding::Binary => "binary",
            Encoding::Base64 => "base64",
            Encoding::Hex => "hex",
            Encoding::Latin1 => "latin1",
            Encoding::Ucs2 => "ucs2",
            Encoding::Utf16le => "utf16le",
            Encoding::Utf8 => "utf8",
        }
    }

    /// Decodes `text` into bytes. Returns `None` when the text is not valid in
    /// this encoding, e.g. odd-length or non-hex input for [`Encoding::Hex`].
    pub fn decode(&self, text: &str) -> Option<Vec<u8>> {
        match self {
            Encoding::Hex => {
                if text.len() & 1 == 1 {
                    return None;
                }
                hex::decode(text).ok()
            }
            Encoding::Base64 => {
                let cleaned: String = text
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        '-' => '+',
                        '_' => '/',
                        other => other,
                    })
                    .collect();
                let config = base64::STANDARD_NO_PAD.decode_allow_trailing_bits(true);
                base64::decode_config(cleaned.trim_end_matches('='), config).ok()
            }
            Encoding::Ascii | Encoding::Binary | Encoding::Latin1 => {
                Some(text.encode_utf16().map(|unit| unit as u8).collect())
            }
            Encoding::Ucs2 | Encoding::Utf16le => Some(
                text.encode_utf16()
                    .flat_map(|unit| unit.to_le_bytes())
                    .collect(),
            ),
            Encoding::Utf8 => Some(text.as_bytes().to_vec()),
        }
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Hex
    }
}

impl FromStr for Encoding {
    type Err = AssertError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Encoding::ALL
            .into_iter()
            .find(|encoding| encoding.as_str() == name)
            .ok_or_else(|| AssertError::contract("encoding", "encoding"))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true when `name` is a recognized encoding.
pub fn is_encoding(name: &str) -> bool {
    name.parse::<Encoding>().is_ok()
}
