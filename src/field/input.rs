use ndarray::ArrayD;
use serde_json::Value;

use crate::field::{Array, Element, ElementType, FieldError, FileDesc, Result, Scalar};

/// Per-field configuration handed to validators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldMeta {
	/// Element type the stored value must have; `None` keeps the input's own type.
	pub declared_element_type: Option<ElementType>,
}

impl FieldMeta {
	/// Field without a declared element type.
	pub const UNTYPED: Self = Self { declared_element_type: None };

	/// Field declared with `element_type`.
	pub fn of(element_type: ElementType) -> Self {
		Self {
			declared_element_type: Some(element_type),
		}
	}
}

/// Input accepted by field validators.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
	/// Literal JSON: nested sequences, a bare number, or a descriptor mapping.
	Json(Value),
	/// Already-typed scalar value.
	Scalar(Scalar),
	/// In-memory array.
	Array(Array),
	/// Explicit file reference.
	File(FileDesc),
}

impl RawValue {
	/// Resolve JSON descriptor mappings into [`RawValue::File`].
	///
	/// A mapping with `path` is a descriptor, one with `re`/`im` stays a complex
	/// literal, and any other mapping is a descriptor missing its path.
	pub fn normalize(self) -> Result<Self> {
		match self {
			Self::Json(Value::Object(map)) if map.contains_key("path") => FileDesc::from_mapping(&map).map(Self::File),
			Self::Json(Value::Object(map)) if map.contains_key("re") || map.contains_key("im") => Ok(Self::Json(Value::Object(map))),
			Self::Json(Value::Object(_)) => Err(FieldError::InvalidDescriptor {
				reason: "missing field `path`".to_owned(),
			}),
			other => Ok(other),
		}
	}

	/// Short description for error messages.
	pub fn describe(&self) -> String {
		match self {
			Self::Json(value) => crate::field::scalar::json_kind(value).to_owned(),
			Self::Scalar(scalar) => scalar.element_type().name().to_owned(),
			Self::Array(array) => format!("{}-d {} array", array.ndim(), array.element_type()),
			Self::File(desc) => format!("file {}", desc.path.display()),
		}
	}
}

impl From<Value> for RawValue {
	fn from(value: Value) -> Self {
		Self::Json(value)
	}
}

impl From<Scalar> for RawValue {
	fn from(scalar: Scalar) -> Self {
		Self::Scalar(scalar)
	}
}

impl From<Array> for RawValue {
	fn from(array: Array) -> Self {
		Self::Array(array)
	}
}

impl From<FileDesc> for RawValue {
	fn from(desc: FileDesc) -> Self {
		Self::File(desc)
	}
}

impl<T: Element> From<ArrayD<T>> for RawValue {
	fn from(array: ArrayD<T>) -> Self {
		Self::Array(T::wrap(array))
	}
}
