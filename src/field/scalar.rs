use half::f16;
use num_complex::Complex;
use serde_json::{Number, Value};

use crate::field::{ElementKind, ElementType, FieldError, Result};

/// One value of an available element type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
	/// `bool` value.
	Bool(bool),
	/// `int8` value.
	Int8(i8),
	/// `int16` value.
	Int16(i16),
	/// `int32` value.
	Int32(i32),
	/// `int64` value.
	Int64(i64),
	/// `uint8` value.
	UInt8(u8),
	/// `uint16` value.
	UInt16(u16),
	/// `uint32` value.
	UInt32(u32),
	/// `uint64` value.
	UInt64(u64),
	/// `float16` value.
	Float16(f16),
	/// `float32` value.
	Float32(f32),
	/// `float64` value.
	Float64(f64),
	/// `complex64` value.
	Complex64(Complex<f32>),
	/// `complex128` value.
	Complex128(Complex<f64>),
}

impl Scalar {
	/// Element type tag of this value.
	pub fn element_type(self) -> ElementType {
		match self {
			Self::Bool(_) => ElementType::Bool,
			Self::Int8(_) => ElementType::Int8,
			Self::Int16(_) => ElementType::Int16,
			Self::Int32(_) => ElementType::Int32,
			Self::Int64(_) => ElementType::Int64,
			Self::UInt8(_) => ElementType::UInt8,
			Self::UInt16(_) => ElementType::UInt16,
			Self::UInt32(_) => ElementType::UInt32,
			Self::UInt64(_) => ElementType::UInt64,
			Self::Float16(_) => ElementType::Float16,
			Self::Float32(_) => ElementType::Float32,
			Self::Float64(_) => ElementType::Float64,
			Self::Complex64(_) => ElementType::Complex64,
			Self::Complex128(_) => ElementType::Complex128,
		}
	}

	/// Truth value; non-zero numbers are `true`.
	pub fn to_bool(self) -> bool {
		match self {
			Self::Bool(v) => v,
			Self::Complex64(v) => v.re != 0.0 || v.im != 0.0,
			Self::Complex128(v) => v.re != 0.0 || v.im != 0.0,
			other => other.to_f64() != 0.0,
		}
	}

	/// Integer view; floats truncate toward zero and saturate, NaN maps to zero.
	pub fn to_i128(self) -> i128 {
		match self {
			Self::Bool(v) => i128::from(v),
			Self::Int8(v) => i128::from(v),
			Self::Int16(v) => i128::from(v),
			Self::Int32(v) => i128::from(v),
			Self::Int64(v) => i128::from(v),
			Self::UInt8(v) => i128::from(v),
			Self::UInt16(v) => i128::from(v),
			Self::UInt32(v) => i128::from(v),
			Self::UInt64(v) => i128::from(v),
			Self::Float16(v) => v.to_f64() as i128,
			Self::Float32(v) => v as i128,
			Self::Float64(v) => v as i128,
			Self::Complex64(v) => v.re as i128,
			Self::Complex128(v) => v.re as i128,
		}
	}

	/// Single precision view; complex values drop the imaginary part.
	pub fn to_f32(self) -> f32 {
		match self {
			Self::Float16(v) => v.to_f32(),
			Self::Float32(v) => v,
			Self::Float64(v) => v as f32,
			Self::Complex64(v) => v.re,
			Self::Complex128(v) => v.re as f32,
			other => other.to_i128() as f32,
		}
	}

	/// Double precision view; complex values drop the imaginary part.
	pub fn to_f64(self) -> f64 {
		match self {
			Self::Float16(v) => v.to_f64(),
			Self::Float32(v) => f64::from(v),
			Self::Float64(v) => v,
			Self::Complex64(v) => f64::from(v.re),
			Self::Complex128(v) => v.re,
			other => other.to_i128() as f64,
		}
	}

	/// Half precision view.
	pub fn to_f16(self) -> f16 {
		match self {
			Self::Float16(v) => v,
			Self::Float32(v) => f16::from_f32(v),
			Self::Complex64(v) => f16::from_f32(v.re),
			other => f16::from_f64(other.to_f64()),
		}
	}

	/// Single precision complex view.
	pub fn to_c64(self) -> Complex<f32> {
		match self {
			Self::Complex64(v) => v,
			Self::Complex128(v) => Complex::new(v.re as f32, v.im as f32),
			other => Complex::new(other.to_f32(), 0.0),
		}
	}

	/// Double precision complex view.
	pub fn to_c128(self) -> Complex<f64> {
		match self {
			Self::Complex64(v) => Complex::new(f64::from(v.re), f64::from(v.im)),
			Self::Complex128(v) => v,
			other => Complex::new(other.to_f64(), 0.0),
		}
	}

	/// Cast with fixed-width `astype` semantics: integers wrap, floats truncate.
	pub fn cast(self, to: ElementType) -> Result<Self> {
		let out = match to {
			ElementType::Bool => Self::Bool(self.to_bool()),
			ElementType::Int8 => Self::Int8(self.to_i128() as i8),
			ElementType::Int16 => Self::Int16(self.to_i128() as i16),
			ElementType::Int32 => Self::Int32(self.to_i128() as i32),
			ElementType::Int64 => Self::Int64(self.to_i128() as i64),
			ElementType::UInt8 => Self::UInt8(self.to_i128() as u8),
			ElementType::UInt16 => Self::UInt16(self.to_i128() as u16),
			ElementType::UInt32 => Self::UInt32(self.to_i128() as u32),
			ElementType::UInt64 => Self::UInt64(self.to_i128() as u64),
			ElementType::Float16 => Self::Float16(self.to_f16()),
			ElementType::Float32 => Self::Float32(self.to_f32()),
			ElementType::Float64 => Self::Float64(self.to_f64()),
			ElementType::Complex64 => Self::Complex64(self.to_c64()),
			ElementType::Complex128 => Self::Complex128(self.to_c128()),
			ElementType::Float128 | ElementType::Complex256 => {
				return Err(FieldError::UnsupportedElementType { name: to.name() });
			}
		};
		Ok(out)
	}

	/// Natural value of a JSON leaf: bool, int64, uint64 (beyond int64), float64 or complex128.
	///
	/// Numeric strings are accepted only when `parse_strings` is set.
	pub fn from_literal(value: &Value, parse_strings: bool) -> Result<Self> {
		match value {
			Value::Bool(v) => Ok(Self::Bool(*v)),
			Value::Number(number) => Ok(number_scalar(number)),
			Value::String(text) if parse_strings => parse_numeric(text),
			Value::Object(map) if !map.contains_key("path") && (map.contains_key("re") || map.contains_key("im")) => {
				let part = |name: &str| match map.get(name) {
					None => Ok(0.0),
					Some(part) => part.as_f64().ok_or_else(|| FieldError::InvalidLiteral {
						value: value.to_string(),
						to: ElementType::Complex128.name(),
					}),
				};
				Ok(Self::Complex128(Complex::new(part("re")?, part("im")?)))
			}
			other => Err(FieldError::NotNumeric { got: json_kind(other) }),
		}
	}

	/// Checked construction of `to` from a JSON leaf.
	///
	/// Unlike [`Scalar::cast`], integer overflow, non-finite floats converted to
	/// integers, and complex values converted to real types are failures.
	pub fn coerce(value: &Value, to: ElementType) -> Result<Self> {
		let to = to.ensure_available()?;
		let literal = match (value, to.kind()) {
			(Value::String(_), ElementKind::Bool) => {
				return Err(FieldError::InvalidLiteral {
					value: value.to_string(),
					to: to.name(),
				});
			}
			_ => Self::from_literal(value, true)?,
		};
		literal.checked_cast(to, value)
	}

	fn checked_cast(self, to: ElementType, source: &Value) -> Result<Self> {
		let invalid = || FieldError::InvalidLiteral {
			value: source.to_string(),
			to: to.name(),
		};
		let overflow = || FieldError::Overflow {
			value: source.to_string(),
			to: to.name(),
		};

		let literal_kind = self.element_type().kind();
		if literal_kind == ElementKind::Complex && !matches!(to.kind(), ElementKind::Complex | ElementKind::Bool) {
			return Err(invalid());
		}

		if let Some((min, max)) = to.int_range() {
			let whole = match self {
				Self::Float64(v) if !v.is_finite() => return Err(invalid()),
				Self::Float64(v) => {
					let truncated = v.trunc();
					if truncated < min as f64 || truncated > max as f64 {
						return Err(overflow());
					}
					truncated as i128
				}
				other => other.to_i128(),
			};
			if whole < min || whole > max {
				return Err(overflow());
			}
			// `whole` is range-checked, so the narrowing below is exact.
			let exact = if whole > i128::from(i64::MAX) { Self::UInt64(whole as u64) } else { Self::Int64(whole as i64) };
			return exact.cast(to);
		}

		self.cast(to)
	}

	/// JSON rendering; non-finite floats become `null`, complex values `{"re", "im"}`.
	pub fn to_json(self) -> Value {
		match self {
			Self::Bool(v) => Value::Bool(v),
			Self::Int8(v) => Value::from(v),
			Self::Int16(v) => Value::from(v),
			Self::Int32(v) => Value::from(v),
			Self::Int64(v) => Value::from(v),
			Self::UInt8(v) => Value::from(v),
			Self::UInt16(v) => Value::from(v),
			Self::UInt32(v) => Value::from(v),
			Self::UInt64(v) => Value::from(v),
			Self::Float16(v) => float_json(v.to_f64()),
			Self::Float32(v) => float_json(f64::from(v)),
			Self::Float64(v) => float_json(v),
			Self::Complex64(v) => complex_json(f64::from(v.re), f64::from(v.im)),
			Self::Complex128(v) => complex_json(v.re, v.im),
		}
	}
}

fn number_scalar(number: &Number) -> Scalar {
	if let Some(v) = number.as_i64() {
		Scalar::Int64(v)
	} else if let Some(v) = number.as_u64() {
		Scalar::UInt64(v)
	} else {
		Scalar::Float64(number.as_f64().unwrap_or(f64::NAN))
	}
}

fn parse_numeric(text: &str) -> Result<Scalar> {
	let trimmed = text.trim();
	if let Ok(v) = trimmed.parse::<i64>() {
		return Ok(Scalar::Int64(v));
	}
	if let Ok(v) = trimmed.parse::<u64>() {
		return Ok(Scalar::UInt64(v));
	}
	trimmed.parse::<f64>().map(Scalar::Float64).map_err(|_| FieldError::NotNumeric { got: "string" })
}

fn float_json(v: f64) -> Value {
	Number::from_f64(v).map_or(Value::Null, Value::Number)
}

fn complex_json(re: f64, im: f64) -> Value {
	let mut map = serde_json::Map::new();
	map.insert("re".to_owned(), float_json(re));
	map.insert("im".to_owned(), float_json(im));
	Value::Object(map)
}

/// Short JSON kind label for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests;
