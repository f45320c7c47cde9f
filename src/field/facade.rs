//! One named field type per element type.
//!
//! Each type validates a single raw input into its native value and is usable
//! directly as a serde model field.

use std::ops::Deref;

use half::f16;
use num_complex::Complex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::field::{Element, ElementType, FieldMeta, FieldValidator, RawValue, Result, Scalar, ScalarField};

macro_rules! scalar_types {
	($($(#[$doc:meta])* $name:ident($native:ty) => $tag:ident;)*) => {
		$(
			$(#[$doc])*
			#[derive(Debug, Clone, Copy, PartialEq)]
			pub struct $name(pub $native);

			impl $name {
				/// Element type this field stores.
				pub const ELEMENT_TYPE: ElementType = ElementType::$tag;

				/// Validate one raw input.
				pub fn validate(raw: impl Into<RawValue>, meta: &FieldMeta) -> Result<Self> {
					let scalar = ScalarField(Self::ELEMENT_TYPE).validate(raw.into(), meta)?;
					Ok(Self(<$native as Element>::from_scalar(scalar)))
				}

				/// Native value.
				pub fn get(self) -> $native {
					self.0
				}
			}

			impl Deref for $name {
				type Target = $native;

				fn deref(&self) -> &$native {
					&self.0
				}
			}

			impl PartialEq<$native> for $name {
				fn eq(&self, other: &$native) -> bool {
					self.0 == *other
				}
			}

			impl From<$native> for $name {
				fn from(value: $native) -> Self {
					Self(value)
				}
			}

			impl From<$name> for Scalar {
				fn from(value: $name) -> Self {
					value.0.into_scalar()
				}
			}

			impl Serialize for $name {
				fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
					self.0.into_scalar().to_json().serialize(serializer)
				}
			}

			impl<'de> Deserialize<'de> for $name {
				fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
					let value = Value::deserialize(deserializer)?;
					Self::validate(value, &FieldMeta::UNTYPED).map_err(D::Error::custom)
				}
			}
		)*
	};
}

scalar_types! {
	/// Boolean field.
	Bool(bool) => Bool;
	/// Signed 8-bit integer field.
	Int8(i8) => Int8;
	/// Signed 16-bit integer field.
	Int16(i16) => Int16;
	/// Signed 32-bit integer field.
	Int32(i32) => Int32;
	/// Signed 64-bit integer field.
	Int64(i64) => Int64;
	/// Unsigned 8-bit integer field.
	UInt8(u8) => UInt8;
	/// Unsigned 16-bit integer field.
	UInt16(u16) => UInt16;
	/// Unsigned 32-bit integer field.
	UInt32(u32) => UInt32;
	/// Unsigned 64-bit integer field.
	UInt64(u64) => UInt64;
	/// Half precision float field.
	Float16(f16) => Float16;
	/// Single precision float field.
	Float32(f32) => Float32;
	/// Double precision float field.
	Float64(f64) => Float64;
	/// Single precision complex field.
	Complex64(Complex<f32>) => Complex64;
	/// Double precision complex field.
	Complex128(Complex<f64>) => Complex128;
}

/// Alias of [`Float16`].
pub type Half = Float16;
/// Alias of [`Float32`].
pub type Single = Float32;
/// Alias of [`Float64`].
pub type Double = Float64;
/// Alias of [`Int16`].
pub type Short = Int16;
/// Alias of [`Int32`].
pub type Intc = Int32;
