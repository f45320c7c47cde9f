use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors produced while validating array and scalar field values.
#[derive(Debug, Error)]
pub enum FieldError {
	/// Descriptor path does not end in `.npy` or `.npz`.
	#[error("expected npz or npy file, got {path}")]
	UnsupportedExtension {
		/// Offending descriptor path.
		path: PathBuf,
	},
	/// Descriptor path could not be opened because it does not exist.
	#[error("path does not exist {path}")]
	PathNotFound {
		/// Absolute path that failed to open.
		path: PathBuf,
	},
	/// Descriptor path opened but is not a regular file.
	#[error("not a regular file {path}")]
	NotAFile {
		/// Absolute path of the non-file entry.
		path: PathBuf,
	},
	/// Requested member is absent from an npz archive.
	#[error("key {key} not found in npz {path}")]
	KeyNotFound {
		/// Requested member name.
		key: String,
		/// Archive path.
		path: PathBuf,
	},
	/// Npz archive has no members to fall back on.
	#[error("npz archive {path} has no members")]
	EmptyArchive {
		/// Archive path.
		path: PathBuf,
	},
	/// Container bytes could not be decoded.
	#[error("failed to load numpy data from file {path}: {reason}")]
	Malformed {
		/// Container path.
		path: PathBuf,
		/// Decoder message.
		reason: String,
	},
	/// Npy type descriptor has no array element counterpart.
	#[error("unsupported array descriptor {descr}")]
	UnsupportedDescr {
		/// Raw descriptor text.
		descr: String,
	},
	/// Element type is declared but has no native representation here.
	#[error("element type {name} is not available on this platform")]
	UnsupportedElementType {
		/// Element type name.
		name: &'static str,
	},
	/// Element type name did not parse.
	#[error("unknown element type {name}")]
	UnknownElementType {
		/// User-provided name.
		name: String,
	},
	/// Leaf scalar type was declared with a nested element type.
	#[error("{type_name} has no subfields")]
	NoSubfields {
		/// Scalar type name.
		type_name: &'static str,
	},
	/// Mapping input did not describe a file.
	#[error("invalid file descriptor: {reason}")]
	InvalidDescriptor {
		/// Deserializer message.
		reason: String,
	},
	/// Nested sequence rows disagree in length or nesting depth.
	#[error("setting an array element with a sequence: inhomogeneous shape at depth {depth}")]
	Jagged {
		/// Nesting depth of the first mismatch.
		depth: usize,
	},
	/// Input leaf is not a number.
	#[error("expected a nested sequence of numbers, got {got}")]
	NotNumeric {
		/// JSON kind of the offending leaf.
		got: &'static str,
	},
	/// Literal cannot be converted to the requested element type.
	#[error("could not convert {value} to {to}")]
	InvalidLiteral {
		/// Rendered literal.
		value: String,
		/// Target element type name.
		to: &'static str,
	},
	/// Literal is outside the range of the requested integer type.
	#[error("value {value} out of range for {to}")]
	Overflow {
		/// Rendered literal.
		value: String,
		/// Target element type name.
		to: &'static str,
	},
	/// Element count does not fit the requested shape.
	#[error("shape {shape:?} does not match {len} elements")]
	Shape {
		/// Requested shape.
		shape: Vec<usize>,
		/// Available element count.
		len: usize,
	},
	/// Scalar field received structured input.
	#[error("{type_name} expects a single value, got {got}")]
	NotScalar {
		/// Scalar type name.
		type_name: &'static str,
		/// Description of the input.
		got: String,
	},
	/// Required model field was not provided.
	#[error("field required: {field}")]
	MissingField {
		/// Field name.
		field: String,
	},
	/// Model input document is not a JSON object.
	#[error("model input must be an object, got {got}")]
	NotAnObject {
		/// JSON kind of the document.
		got: &'static str,
	},
	/// Validation failure attributed to one model field.
	#[error("{field}: {source}")]
	Field {
		/// Field name.
		field: String,
		/// Underlying failure.
		#[source]
		source: Box<FieldError>,
	},
	/// Filesystem or stream IO failure unrelated to a missing file.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Model declaration or document is not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}

impl FieldError {
	/// Whether this is a validation failure a tolerant field may swallow.
	pub fn is_validation(&self) -> bool {
		match self {
			Self::Io(_) | Self::Json(_) => false,
			Self::Field { source, .. } => source.is_validation(),
			_ => true,
		}
	}

	/// Attach a model field name to this error.
	pub fn in_field(self, field: impl Into<String>) -> Self {
		Self::Field {
			field: field.into(),
			source: Box::new(self),
		}
	}
}

#[cfg(test)]
mod tests;
