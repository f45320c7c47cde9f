use std::fmt;
use std::str::FromStr;

use serde::de::IntoDeserializer;
use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::{Deserialize, Serialize};

use crate::field::{FieldError, Result};

/// Numeric family of an element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
	/// Boolean flag stored in one byte.
	Bool,
	/// Two's complement signed integer.
	SignedInt,
	/// Unsigned integer.
	UnsignedInt,
	/// IEEE floating point.
	Float,
	/// Pair of IEEE floats (real, imaginary).
	Complex,
}

/// Fixed-width element type tag for arrays and scalar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
	/// 8-bit boolean.
	#[serde(alias = "bool_")]
	Bool,
	/// Signed 8-bit integer.
	#[serde(alias = "byte")]
	Int8,
	/// Signed 16-bit integer.
	#[serde(alias = "short")]
	Int16,
	/// Signed 32-bit integer.
	#[serde(alias = "intc")]
	Int32,
	/// Signed 64-bit integer.
	#[serde(alias = "longlong")]
	Int64,
	/// Unsigned 8-bit integer.
	#[serde(alias = "ubyte")]
	UInt8,
	/// Unsigned 16-bit integer.
	#[serde(alias = "ushort")]
	UInt16,
	/// Unsigned 32-bit integer.
	#[serde(alias = "uintc")]
	UInt32,
	/// Unsigned 64-bit integer.
	#[serde(alias = "ulonglong")]
	UInt64,
	/// IEEE half precision float.
	#[serde(alias = "half")]
	Float16,
	/// IEEE single precision float.
	#[serde(alias = "single")]
	Float32,
	/// IEEE double precision float.
	#[serde(alias = "double")]
	Float64,
	/// Platform extended precision float.
	#[serde(alias = "longdouble")]
	Float128,
	/// Complex of two single precision floats.
	#[serde(alias = "csingle")]
	Complex64,
	/// Complex of two double precision floats.
	#[serde(alias = "cdouble")]
	Complex128,
	/// Complex of two extended precision floats.
	#[serde(alias = "clongdouble")]
	Complex256,
}

impl ElementType {
	/// Every declared tag, in declaration order.
	pub const ALL: [ElementType; 16] = [
		Self::Bool,
		Self::Int8,
		Self::Int16,
		Self::Int32,
		Self::Int64,
		Self::UInt8,
		Self::UInt16,
		Self::UInt32,
		Self::UInt64,
		Self::Float16,
		Self::Float32,
		Self::Float64,
		Self::Float128,
		Self::Complex64,
		Self::Complex128,
		Self::Complex256,
	];

	/// Canonical lowercase name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int8 => "int8",
			Self::Int16 => "int16",
			Self::Int32 => "int32",
			Self::Int64 => "int64",
			Self::UInt8 => "uint8",
			Self::UInt16 => "uint16",
			Self::UInt32 => "uint32",
			Self::UInt64 => "uint64",
			Self::Float16 => "float16",
			Self::Float32 => "float32",
			Self::Float64 => "float64",
			Self::Float128 => "float128",
			Self::Complex64 => "complex64",
			Self::Complex128 => "complex128",
			Self::Complex256 => "complex256",
		}
	}

	/// Numeric family.
	pub fn kind(self) -> ElementKind {
		match self {
			Self::Bool => ElementKind::Bool,
			Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 => ElementKind::SignedInt,
			Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64 => ElementKind::UnsignedInt,
			Self::Float16 | Self::Float32 | Self::Float64 | Self::Float128 => ElementKind::Float,
			Self::Complex64 | Self::Complex128 | Self::Complex256 => ElementKind::Complex,
		}
	}

	/// Storage width in bits.
	pub fn bits(self) -> u32 {
		match self {
			Self::Bool | Self::Int8 | Self::UInt8 => 8,
			Self::Int16 | Self::UInt16 | Self::Float16 => 16,
			Self::Int32 | Self::UInt32 | Self::Float32 => 32,
			Self::Int64 | Self::UInt64 | Self::Float64 | Self::Complex64 => 64,
			Self::Float128 | Self::Complex128 => 128,
			Self::Complex256 => 256,
		}
	}

	/// Storage width in bytes.
	pub fn item_size(self) -> usize {
		(self.bits() / 8) as usize
	}

	/// Whether values of this type can be represented natively.
	pub fn is_available(self) -> bool {
		!matches!(self, Self::Float128 | Self::Complex256)
	}

	/// Fail with [`FieldError::UnsupportedElementType`] for unavailable tags.
	pub fn ensure_available(self) -> Result<Self> {
		if self.is_available() {
			Ok(self)
		} else {
			Err(FieldError::UnsupportedElementType { name: self.name() })
		}
	}

	/// Inclusive integer range, `None` for non-integer kinds.
	pub fn int_range(self) -> Option<(i128, i128)> {
		let range = match self {
			Self::Int8 => (i128::from(i8::MIN), i128::from(i8::MAX)),
			Self::Int16 => (i128::from(i16::MIN), i128::from(i16::MAX)),
			Self::Int32 => (i128::from(i32::MIN), i128::from(i32::MAX)),
			Self::Int64 => (i128::from(i64::MIN), i128::from(i64::MAX)),
			Self::UInt8 => (0, i128::from(u8::MAX)),
			Self::UInt16 => (0, i128::from(u16::MAX)),
			Self::UInt32 => (0, i128::from(u32::MAX)),
			Self::UInt64 => (0, i128::from(u64::MAX)),
			_ => return None,
		};
		Some(range)
	}

	/// Parse an npy type descriptor such as `<f4`, `|b1` or `>i8`.
	pub fn from_descr(descr: &str) -> Result<Self> {
		let unsupported = || FieldError::UnsupportedDescr { descr: descr.to_owned() };

		let body = descr.strip_prefix(['<', '>', '|', '=']).unwrap_or(descr);
		let mut chars = body.chars();
		let code = chars.next().ok_or_else(unsupported)?;
		let size: usize = chars.as_str().parse().map_err(|_| unsupported())?;

		let found = match (code, size) {
			('b', 1) | ('?', 1) => Self::Bool,
			('i', 1) => Self::Int8,
			('i', 2) => Self::Int16,
			('i', 4) => Self::Int32,
			('i', 8) => Self::Int64,
			('u', 1) => Self::UInt8,
			('u', 2) => Self::UInt16,
			('u', 4) => Self::UInt32,
			('u', 8) => Self::UInt64,
			('f', 2) => Self::Float16,
			('f', 4) => Self::Float32,
			('f', 8) => Self::Float64,
			('f', 12) | ('f', 16) => Self::Float128,
			('c', 8) => Self::Complex64,
			('c', 16) => Self::Complex128,
			('c', 24) | ('c', 32) => Self::Complex256,
			_ => return Err(unsupported()),
		};
		Ok(found)
	}
}

impl fmt::Display for ElementType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for ElementType {
	type Err = FieldError;

	fn from_str(name: &str) -> Result<Self> {
		let lowered = name.trim().to_ascii_lowercase();
		let deserializer: StrDeserializer<'_, ValueError> = lowered.as_str().into_deserializer();
		Self::deserialize(deserializer).map_err(|_| FieldError::UnknownElementType { name: name.to_owned() })
	}
}
