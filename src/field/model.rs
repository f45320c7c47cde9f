//! Models declared at runtime from JSON.
//!
//! A declaration names each field and its kind:
//!
//! ```json
//! {
//!   "title": "Settings",
//!   "fields": {
//!     "weights": {"type": "ndarray", "dtype": "float32"},
//!     "mask": {"type": "potential_ndarray", "required": false},
//!     "gain": {"type": "double"}
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::field::scalar::json_kind;
use crate::field::{
	Array, ArrayAdapter, ElementType, FieldError, FieldMeta, FieldValidator, RawValue, Result, Scalar, ScalarField, TolerantArrayAdapter,
};

/// Validator family of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// Strict array field.
	Array,
	/// Tolerant array field.
	PotentialArray,
	/// Scalar field of one element type.
	Scalar(ElementType),
}

/// One declared model field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FieldDeclJson")]
pub struct FieldDecl {
	/// Validator family.
	pub kind: FieldKind,
	/// Declared element type; scalar fields reject it at validation time.
	pub dtype: Option<ElementType>,
	/// Whether the input must provide this field.
	pub required: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldDeclJson {
	#[serde(rename = "type")]
	kind: String,
	#[serde(default)]
	dtype: Option<String>,
	#[serde(default = "required_by_default")]
	required: bool,
}

fn required_by_default() -> bool {
	true
}

impl TryFrom<FieldDeclJson> for FieldDecl {
	type Error = FieldError;

	fn try_from(raw: FieldDeclJson) -> Result<Self> {
		let kind = match raw.kind.trim().to_ascii_lowercase().as_str() {
			"ndarray" => FieldKind::Array,
			"potential_ndarray" => FieldKind::PotentialArray,
			name => FieldKind::Scalar(ElementType::from_str(name)?),
		};
		Ok(Self {
			kind,
			dtype: raw.dtype.as_deref().map(ElementType::from_str).transpose()?,
			required: raw.required,
		})
	}
}

impl FieldDecl {
	/// Configuration handed to the field's validator.
	pub fn meta(&self) -> FieldMeta {
		FieldMeta {
			declared_element_type: self.dtype,
		}
	}

	/// Run this field's validator on one input.
	pub fn validate(&self, raw: RawValue) -> Result<FieldValue> {
		let meta = self.meta();
		match self.kind {
			FieldKind::Array => ArrayAdapter.validate(raw, &meta).map(FieldValue::Array),
			FieldKind::PotentialArray => Ok(TolerantArrayAdapter.validate(raw, &meta)?.map_or(FieldValue::Absent, FieldValue::Array)),
			FieldKind::Scalar(element_type) => ScalarField(element_type).validate(raw, &meta).map(FieldValue::Scalar),
		}
	}

	/// Schema mapping for this field.
	pub fn schema(&self, name: &str) -> Map<String, Value> {
		let mut schema = Map::new();
		schema.insert("title".to_owned(), Value::String(title_case(name)));
		let meta = self.meta();
		match self.kind {
			FieldKind::Array => ArrayAdapter.modify_schema(&mut schema, Some(&meta)),
			FieldKind::PotentialArray => TolerantArrayAdapter.modify_schema(&mut schema, Some(&meta)),
			FieldKind::Scalar(element_type) => ScalarField(element_type).modify_schema(&mut schema, Some(&meta)),
		}
		schema
	}
}

/// Runtime model declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelSpec {
	/// Model name used as the schema title.
	#[serde(default = "default_title")]
	pub title: String,
	/// Declared fields by name.
	pub fields: BTreeMap<String, FieldDecl>,
}

fn default_title() -> String {
	"Model".to_owned()
}

impl ModelSpec {
	/// Parse a declaration from JSON text.
	pub fn from_json_str(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}

	/// Read a declaration file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let text = fs::read_to_string(path)?;
		Self::from_json_str(&text)
	}

	/// Validate a JSON document, stopping at the first failing field.
	pub fn validate_value(&self, input: &Value) -> Result<Model> {
		match input {
			Value::Object(map) => self.validate(map),
			other => Err(FieldError::NotAnObject { got: json_kind(other) }),
		}
	}

	/// Validate an input mapping, stopping at the first failing field.
	///
	/// Undeclared keys are ignored; absent optional fields are never loaded.
	pub fn validate(&self, input: &Map<String, Value>) -> Result<Model> {
		for key in input.keys().filter(|key| !self.fields.contains_key(*key)) {
			tracing::trace!(model = %self.title, field = %key, "ignoring undeclared input key");
		}

		let mut values = BTreeMap::new();
		for (name, decl) in &self.fields {
			let value = match input.get(name) {
				None | Some(Value::Null) if !decl.required => {
					tracing::debug!(model = %self.title, field = %name, "optional field absent");
					FieldValue::Absent
				}
				None => return Err(FieldError::MissingField { field: name.clone() }),
				Some(raw) => decl.validate(RawValue::Json(raw.clone())).map_err(|err| err.in_field(name.as_str()))?,
			};
			values.insert(name.clone(), value);
		}

		Ok(Model {
			title: self.title.clone(),
			values,
		})
	}

	/// JSON schema of the model with each field's contribution merged in.
	pub fn schema(&self) -> Value {
		let properties: Map<String, Value> = self.fields.iter().map(|(name, decl)| (name.clone(), Value::Object(decl.schema(name)))).collect();
		let required: Vec<Value> = self
			.fields
			.iter()
			.filter(|(_, decl)| decl.required)
			.map(|(name, _)| Value::String(name.clone()))
			.collect();

		let mut schema = Map::new();
		schema.insert("title".to_owned(), Value::String(self.title.clone()));
		schema.insert("type".to_owned(), Value::String("object".to_owned()));
		schema.insert("properties".to_owned(), Value::Object(properties));
		if !required.is_empty() {
			schema.insert("required".to_owned(), Value::Array(required));
		}
		Value::Object(schema)
	}
}

/// Stored value of one validated field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
	/// Validated array.
	Array(Array),
	/// Validated scalar.
	Scalar(Scalar),
	/// Optional field not provided, or tolerant field with invalid input.
	Absent,
}

impl FieldValue {
	/// JSON rendering; arrays become nested lists.
	pub fn to_json(&self) -> Value {
		match self {
			Self::Array(array) => array.to_json(),
			Self::Scalar(scalar) => scalar.to_json(),
			Self::Absent => Value::Null,
		}
	}
}

impl Serialize for FieldValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.to_json().serialize(serializer)
	}
}

/// Validated model instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
	/// Declaration title.
	pub title: String,
	values: BTreeMap<String, FieldValue>,
}

impl Model {
	/// Stored value of a declared field.
	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.values.get(name)
	}

	/// Declared field names with their values.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
		self.values.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// JSON object of every field, arrays as nested lists.
	pub fn to_json(&self) -> Value {
		Value::Object(self.values.iter().map(|(name, value)| (name.clone(), value.to_json())).collect())
	}
}

fn title_case(name: &str) -> String {
	name.split('_')
		.filter(|word| !word.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}
