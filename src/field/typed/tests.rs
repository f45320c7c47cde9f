use std::collections::BTreeMap;

use ndarray::{Array2, IxDyn, arr1, arr2};
use ndfield_testkit::{eye_f64, npy_from, scratch_dir, write_file, write_npz};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::field::{Array, ElementType, FileDesc, NdArray, Potential, PotentialNdArray};

#[derive(Debug, Deserialize, Serialize)]
struct Settings {
	weights: NdArray<f32>,
	#[serde(default)]
	bias: Option<NdArray<f64>>,
}

#[test]
fn typed_field_from_literal_and_array() {
	let from_literal = NdArray::<f32>::validate(json!([1, 2])).expect("literal validates");
	assert_eq!(from_literal.into_inner(), arr1(&[1.0_f32, 2.0]).into_dyn());

	let from_array = NdArray::<f32>::validate(Array2::<f64>::eye(2).into_dyn()).expect("array validates");
	assert_eq!(*from_array, arr2(&[[1.0_f32, 0.0], [0.0, 1.0]]).into_dyn());
}

#[test]
fn settings_from_npy_descriptor() {
	let dir = scratch_dir();
	let path = write_file(dir.path(), "eye.npy", &eye_f64(2));

	let settings: Settings = serde_json::from_value(json!({"weights": {"path": path}})).expect("settings parse");
	assert_eq!(settings.weights.shape(), &[2, 2]);
	assert_eq!(settings.weights[IxDyn(&[1, 1])], 1.0_f32);
	assert!(settings.bias.is_none());
}

#[test]
fn settings_from_npz_member() {
	let dir = scratch_dir();
	let path = write_npz(
		dir.path(),
		"weights.npz",
		&[("a.npy", npy_from(&[1], &[0_i64])), ("values.npy", npy_from(&[3], &[1_i64, 2, 3]))],
	);

	let settings: Settings = serde_json::from_value(json!({
		"weights": {"path": path, "key": "values"},
		"bias": [0.5],
	}))
	.expect("settings parse");
	assert_eq!(*settings.weights, arr1(&[1.0_f32, 2.0, 3.0]).into_dyn());
	assert_eq!(settings.bias.map(NdArray::into_inner), Some(arr1(&[0.5_f64]).into_dyn()));
}

#[test]
fn strict_field_reports_failures() {
	let err = serde_json::from_value::<Settings>(json!({"weights": "absc"})).expect_err("string rejected");
	assert!(err.to_string().contains("expected a nested sequence of numbers"), "unexpected error: {err}");

	let err = serde_json::from_value::<Settings>(json!({"weights": {"path": "missing.npy"}})).expect_err("missing file");
	assert!(err.to_string().contains("path does not exist"), "unexpected error: {err}");

	let err = serde_json::from_value::<Settings>(json!({"weights": {"path": "weights.csv"}})).expect_err("bad extension");
	assert!(err.to_string().contains("expected npz or npy file"), "unexpected error: {err}");
}

#[test]
fn potential_field_is_none_on_invalid_input() {
	#[derive(Deserialize)]
	struct Loose {
		values: PotentialNdArray<f32>,
	}

	let loose: Loose = serde_json::from_value(json!({"values": "absc"})).expect("tolerant parse");
	assert!(loose.values.is_none());

	let loose: Loose = serde_json::from_value(json!({"values": {"path": "missing.npz", "key": "b"}})).expect("tolerant parse");
	assert!(loose.values.is_none());

	let loose: Loose = serde_json::from_value(json!({"values": [1, 2]})).expect("tolerant parse");
	assert_eq!(loose.values.get().map(|values| values.len()), Some(2));
}

#[test]
fn potential_file_descriptor_with_missing_key() {
	let dir = scratch_dir();
	let path = write_npz(dir.path(), "one.npz", &[("a.npy", npy_from(&[1], &[1_u8]))]);

	let value = Potential::<Array>::validate(FileDesc::with_key(&path, "b")).expect("tolerant");
	assert_eq!(value, Potential(None));
}

#[test]
fn untyped_array_keeps_inferred_type() {
	let array: Array = serde_json::from_value(json!([[1, 2], [3, 4]])).expect("array parse");
	assert_eq!(array.element_type(), ElementType::Int64);
	assert_eq!(serde_json::to_value(&array).expect("serializes"), json!([[1, 2], [3, 4]]));
}

#[test]
fn nested_models_serialize_arrays_as_lists() {
	#[derive(Serialize, Deserialize)]
	struct Inner {
		array: NdArray<i32>,
	}

	#[derive(Serialize, Deserialize)]
	struct Outer {
		inner: BTreeMap<String, Inner>,
	}

	let outer: Outer = serde_json::from_value(json!({
		"inner": {"a": {"array": [1.0, 2.0]}, "b": {"array": [[3], [4]]}},
	}))
	.expect("nested parse");

	let rendered = serde_json::to_value(&outer).expect("serializes");
	assert_eq!(rendered, json!({"inner": {"a": {"array": [1, 2]}, "b": {"array": [[3], [4]]}}}));
}

#[test]
fn potential_serializes_as_option() {
	let some = Potential::<NdArray<u8>>::validate(json!([1])).expect("tolerant");
	assert_eq!(serde_json::to_value(&some).expect("serializes"), json!([1]));
	assert_eq!(serde_json::to_value(Potential::<NdArray<u8>>::default()).expect("serializes"), json!(null));
}
