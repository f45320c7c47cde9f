use std::io;
use std::path::PathBuf;

use super::FieldError;

fn io_error() -> FieldError {
	io::Error::new(io::ErrorKind::PermissionDenied, "denied").into()
}

fn json_error() -> FieldError {
	serde_json::from_str::<serde_json::Value>("{").map_err(FieldError::from).expect_err("truncated json")
}

#[test]
fn loader_and_literal_failures_are_validation() {
	let failures = [
		FieldError::UnsupportedExtension { path: PathBuf::from("a.csv") },
		FieldError::PathNotFound { path: PathBuf::from("/a.npy") },
		FieldError::NotAFile { path: PathBuf::from("/a.npy") },
		FieldError::KeyNotFound {
			key: "b".to_owned(),
			path: PathBuf::from("/a.npz"),
		},
		FieldError::EmptyArchive { path: PathBuf::from("/a.npz") },
		FieldError::Malformed {
			path: PathBuf::from("/a.npy"),
			reason: "truncated".to_owned(),
		},
		FieldError::UnsupportedDescr { descr: "<U1".to_owned() },
		FieldError::UnsupportedElementType { name: "float128" },
		FieldError::UnknownElementType { name: "matrix".to_owned() },
		FieldError::NoSubfields { type_name: "float32" },
		FieldError::InvalidDescriptor { reason: "missing path".to_owned() },
		FieldError::Jagged { depth: 1 },
		FieldError::NotNumeric { got: "string" },
		FieldError::InvalidLiteral {
			value: "\"absc\"".to_owned(),
			to: "float32",
		},
		FieldError::Overflow {
			value: "256".to_owned(),
			to: "uint8",
		},
		FieldError::Shape { shape: vec![2, 2], len: 3 },
		FieldError::NotScalar {
			type_name: "int32",
			got: "list".to_owned(),
		},
		FieldError::MissingField { field: "K".to_owned() },
		FieldError::NotAnObject { got: "array" },
	];

	for err in failures {
		assert!(err.is_validation(), "expected validation failure: {err}");
	}
}

#[test]
fn io_and_json_failures_are_not_validation() {
	assert!(!io_error().is_validation());
	assert!(!json_error().is_validation());
}

#[test]
fn field_wrapper_defers_to_source() {
	let wrapped = FieldError::Jagged { depth: 2 }.in_field("K");
	assert!(wrapped.is_validation());
	assert_eq!(wrapped.to_string(), "K: setting an array element with a sequence: inhomogeneous shape at depth 2");

	let wrapped = io_error().in_field("K").in_field("outer");
	assert!(!wrapped.is_validation());
	assert_eq!(wrapped.to_string(), "outer: K: io: denied");
}
