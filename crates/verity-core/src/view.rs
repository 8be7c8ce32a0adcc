//! Typed numeric views over raw bytes.

use crate::errors::{range, AssertError};

/// Element layout of a typed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Signed 8-bit integers.
    Int8,
    /// Unsigned 8-bit integers.
    Uint8,
    /// Unsigned 8-bit integers with clamped writes.
    Uint8Clamped,
    /// Signed 16-bit integers.
    Int16,
    /// Unsigned 16-bit integers.
    Uint16,
    /// Signed 32-bit integers.
    Int32,
    /// Unsigned 32-bit integers.
    Uint32,
    /// 32-bit floats.
    Float32,
    /// 64-bit floats.
    Float64,
    /// Signed 64-bit integers.
    BigInt64,
    /// Unsigned 64-bit integers.
    BigUint64,
    /// Untyped byte-addressed view.
    DataView,
}

impl ViewKind {
    /// Returns the constructor name.
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Int8 => "Int8Array",
            ViewKind::Uint8 => "Uint8Array",
            ViewKind::Uint8Clamped => "Uint8ClampedArray",
            ViewKind::Int16 => "Int16Array",
            ViewKind::Uint16 => "Uint16Array",
            ViewKind::Int32 => "Int32Array",
            ViewKind::Uint32 => "Uint32Array",
            ViewKind::Float32 => "Float32Array",
            ViewKind::Float64 => "Float64Array",
            ViewKind::BigInt64 => "BigInt64Array",
            ViewKind::BigUint64 => "BigUint64Array",
            ViewKind::DataView => "DataView",
        }
    }

    /// Returns the width of one element in bytes.
    pub fn element_size(&self) -> usize {
        match self {
            ViewKind::Int8 | ViewKind::Uint8 | ViewKind::Uint8Clamped | ViewKind::DataView => 1,
            ViewKind::Int16 | ViewKind::Uint16 => 2,
            ViewKind::Int32 | ViewKind::Uint32 | ViewKind::Float32 => 4,
            ViewKind::Float64 | ViewKind::BigInt64 | ViewKind::BigUint64 => 8,
        }
    }
}

/// A typed view owning its little-endian backing bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedView {
    kind: ViewKind,
    bytes: Vec<u8>,
}

macro_rules! view_constructor {
    ($name:ident, $ty:ty, $kind:ident) => {
        #[doc = concat!("Builds a `", stringify!($kind), "` view from the given elements.")]
        pub fn $name(values: &[$ty]) -> Self {
            let mut bytes = Vec::with_capacity(values.len() * std::mem::size_of::<$ty>());
            for value in values {
                bytes.extend_from_slice(&value.to_le_bytes());
            }
            Self {
                kind: ViewKind::$kind,
                bytes,
            }
        }
    };
}

impl TypedView {
    /// Wraps raw bytes. The length must be a multiple of the element size.
    pub fn from_bytes(kind: ViewKind, bytes: Vec<u8>) -> Result<Self, AssertError> {
        range(bytes.len() % kind.element_size() == 0, "bytes")?;
        Ok(Self { kind, bytes })
    }

    view_constructor!(int8, i8, Int8);
    view_constructor!(uint8, u8, Uint8);
    view_constructor!(int16, i16, Int16);
    view_constructor!(uint16, u16, Uint16);
    view_constructor!(int32, i32, Int32);
    view_constructor!(uint32, u32, Uint32);
    view_constructor!(float32, f32, Float32);
    view_constructor!(float64, f64, Float64);
    view_constructor!(bigint64, i64, BigInt64);
    view_constructor!(biguint64, u64, BigUint64);

    /// Returns the element layout.
    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    /// Returns the backing bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the backing bytes for in-place writes.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.kind.element_size()
    }

    /// Returns true when the view holds no elements.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Overwrites the element at `index` with the little-endian bytes of `value`.
    pub fn write<const N: usize>(&mut self, index: usize, value: [u8; N]) -> Result<(), AssertError> {
        range(N == self.kind.element_size(), "value")?;
        let end = index
            .checked_mul(N)
            .and_then(|start| start.checked_add(N))
            .filter(|end| *end <= self.bytes.len())
            .ok_or_else(|| AssertError::range("index"))?;
        self.bytes[end - N..end].copy_from_slice(&value);
        Ok(())
    }

    /// Decodes every element into its textual form.
    pub fn element_texts(&self) -> Vec<String> {
        let size = self.kind.element_size();
        self.bytes
            .chunks_exact(size)
            .map(|chunk| match self.kind {
                ViewKind::Int8 => (chunk[0] as i8).to_string(),
                ViewKind::Uint8 | ViewKind::Uint8Clamped | ViewKind::DataView => {
                    chunk[0].to_string()
                }
                ViewKind::Int16 => i16::from_le_bytes([chunk[0], chunk[1]]).to_string(),
                ViewKind::Uint16 => u16::from_le_bytes([chunk[0], chunk[1]]).to_string(),
                ViewKind::Int32 => i32::from_le_bytes(word(chunk)).to_string(),
                ViewKind::Uint32 => u32::from_le_bytes(word(chunk)).to_string(),
                ViewKind::Float32 => {
                    crate::render::format_number(f32::from_le_bytes(word(chunk)) as f64)
                }
                ViewKind::Float64 => crate::render::format_number(f64::from_le_bytes(dword(chunk))),
                ViewKind::BigInt64 => i64::from_le_bytes(dword(chunk)).to_string(),
                ViewKind::BigUint64 => u64::from_le_bytes(dword(chunk)).to_string(),
            })
            .collect()
    }
}

fn word(chunk: &[u8]) -> [u8; 4] {
    [chunk[0], chunk[1], chunk[2], chunk[3]]
}

fn dword(chunk: &[u8]) -> [u8; 8] {
    let mut out = [0u8; 8];
    out.copy_from_slice(&chunk[..8]);
    out
}
