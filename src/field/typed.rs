use std::ops::Deref;

use ndarray::ArrayD;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::field::array::nested_json;
use crate::field::{Array, ArrayAdapter, Element, FieldMeta, FieldValidator, RawValue, Result, TolerantArrayAdapter};

/// Array-valued model field type.
pub trait ArrayField: Sized {
	/// Field configuration passed to the adapter.
	fn meta() -> FieldMeta;

	/// Take ownership of a validated array.
	fn from_array(array: Array) -> Self;

	/// Run the strict adapter.
	fn validate(raw: impl Into<RawValue>) -> Result<Self> {
		ArrayAdapter.validate(raw.into(), &Self::meta()).map(Self::from_array)
	}
}

impl ArrayField for Array {
	fn meta() -> FieldMeta {
		FieldMeta::UNTYPED
	}

	fn from_array(array: Array) -> Self {
		array
	}
}

/// Array field whose element type is fixed by `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray<T: Element>(pub ArrayD<T>);

impl<T: Element> NdArray<T> {
	/// Validate any raw input into this field.
	pub fn validate(raw: impl Into<RawValue>) -> Result<Self> {
		<Self as ArrayField>::validate(raw)
	}

	/// Unwrap the typed array.
	pub fn into_inner(self) -> ArrayD<T> {
		self.0
	}
}

impl<T: Element> ArrayField for NdArray<T> {
	fn meta() -> FieldMeta {
		FieldMeta::of(T::ELEMENT_TYPE)
	}

	fn from_array(array: Array) -> Self {
		Self(array.into_typed())
	}
}

impl<T: Element> Deref for NdArray<T> {
	type Target = ArrayD<T>;

	fn deref(&self) -> &ArrayD<T> {
		&self.0
	}
}

impl<T: Element> From<NdArray<T>> for Array {
	fn from(value: NdArray<T>) -> Self {
		T::wrap(value.0)
	}
}

/// Tolerant array field: invalid input is stored as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Potential<F>(pub Option<F>);

/// Tolerant array field with a fixed element type.
pub type PotentialNdArray<T> = Potential<NdArray<T>>;

impl<F: ArrayField> Potential<F> {
	/// Validate, downgrading validation failures to `None`.
	pub fn validate(raw: impl Into<RawValue>) -> Result<Self> {
		let array = TolerantArrayAdapter.validate(raw.into(), &F::meta())?;
		Ok(Self(array.map(F::from_array)))
	}
}

impl<F> Potential<F> {
	/// Validated value, if the input was valid.
	pub fn get(&self) -> Option<&F> {
		self.0.as_ref()
	}

	/// Whether validation produced no value.
	pub fn is_none(&self) -> bool {
		self.0.is_none()
	}

	/// Unwrap into the inner option.
	pub fn into_inner(self) -> Option<F> {
		self.0
	}
}

impl<F> Default for Potential<F> {
	fn default() -> Self {
		Self(None)
	}
}

impl Serialize for Array {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.to_json().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for Array {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		<Self as ArrayField>::validate(value).map_err(D::Error::custom)
	}
}

impl<T: Element> Serialize for NdArray<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		nested_json(self.0.view()).serialize(serializer)
	}
}

impl<'de, T: Element> Deserialize<'de> for NdArray<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		Self::validate(value).map_err(D::Error::custom)
	}
}

impl<F: Serialize> Serialize for Potential<F> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.0.serialize(serializer)
	}
}

impl<'de, F: ArrayField> Deserialize<'de> for Potential<F> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		Self::validate(value).map_err(D::Error::custom)
	}
}

#[cfg(test)]
mod tests;
