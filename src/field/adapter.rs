use serde_json::{Map, Value};

use crate::field::{Array, ElementType, FieldError, FieldMeta, RawValue, Result, Scalar, array_from_json, load_array};

/// Validation hook a field type exposes to models.
pub trait FieldValidator {
	/// Stored value produced by a successful validation.
	type Output;

	/// Schema type name for this field.
	fn type_name(&self, meta: Option<&FieldMeta>) -> String;

	/// Coerce `raw` into the stored value.
	fn validate(&self, raw: RawValue, meta: &FieldMeta) -> Result<Self::Output>;

	/// Merge this field's contribution into its schema mapping.
	fn modify_schema(&self, schema: &mut Map<String, Value>, meta: Option<&FieldMeta>) {
		schema.insert("type".to_owned(), Value::String(self.type_name(meta)));
	}
}

/// Strict array field: every failure propagates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayAdapter;

impl FieldValidator for ArrayAdapter {
	type Output = Array;

	fn type_name(&self, meta: Option<&FieldMeta>) -> String {
		match meta.and_then(|meta| meta.declared_element_type) {
			Some(element_type) => format!("ndarray[{element_type}]"),
			None => "ndarray".to_owned(),
		}
	}

	fn validate(&self, raw: RawValue, meta: &FieldMeta) -> Result<Array> {
		let declared = meta.declared_element_type;
		match raw.normalize()? {
			RawValue::Json(value) => array_from_json(&value, declared),
			RawValue::Scalar(scalar) => cast_declared(Array::from_scalar(scalar), declared),
			RawValue::Array(array) => cast_declared(array, declared),
			RawValue::File(desc) => cast_declared(load_array(&desc)?, declared),
		}
	}
}

fn cast_declared(array: Array, declared: Option<ElementType>) -> Result<Array> {
	match declared {
		Some(element_type) => array.cast(element_type),
		None => Ok(array),
	}
}

/// Tolerant array field: validation failures yield `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TolerantArrayAdapter;

impl FieldValidator for TolerantArrayAdapter {
	type Output = Option<Array>;

	fn type_name(&self, meta: Option<&FieldMeta>) -> String {
		ArrayAdapter.type_name(meta)
	}

	fn validate(&self, raw: RawValue, meta: &FieldMeta) -> Result<Option<Array>> {
		match ArrayAdapter.validate(raw, meta) {
			Ok(array) => Ok(Some(array)),
			Err(err) if err.is_validation() => {
				tracing::debug!(error = %err, "discarding invalid array input");
				Ok(None)
			}
			Err(err) => Err(err),
		}
	}
}

/// Scalar field of one element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarField(pub ElementType);

impl FieldValidator for ScalarField {
	type Output = Scalar;

	fn type_name(&self, _meta: Option<&FieldMeta>) -> String {
		self.0.name().to_owned()
	}

	fn validate(&self, raw: RawValue, meta: &FieldMeta) -> Result<Scalar> {
		let type_name = self.0.name();
		if meta.declared_element_type.is_some() {
			return Err(FieldError::NoSubfields { type_name });
		}
		let to = self.0.ensure_available()?;

		let not_scalar = |raw: &RawValue| FieldError::NotScalar {
			type_name,
			got: raw.describe(),
		};
		match raw {
			RawValue::Scalar(scalar) if scalar.element_type() == to => Ok(scalar),
			RawValue::Scalar(scalar) => scalar.cast(to),
			RawValue::Array(ref array) => match array.as_scalar() {
				Some(scalar) => scalar.cast(to),
				None => Err(not_scalar(&raw)),
			},
			RawValue::Json(Value::Array(_)) | RawValue::File(_) => Err(not_scalar(&raw)),
			RawValue::Json(Value::Object(ref map)) if map.contains_key("path") => Err(not_scalar(&raw)),
			RawValue::Json(value) => Scalar::coerce(&value, to),
		}
	}
}
