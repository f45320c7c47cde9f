#![allow(missing_docs)]

use std::collections::BTreeMap;

use ndarray::{Array2, arr1, arr2};
use ndfield::field::{Array, ElementType, FileDesc, NdArray, PotentialNdArray};
use ndfield_testkit::{npy_from, scratch_dir, write_file, write_npz};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Serialize, Deserialize)]
struct MySettings {
	#[serde(rename = "K")]
	k: NdArray<f32>,
}

fn arange(n: i64) -> Vec<u8> {
	let values: Vec<i64> = (0..n).collect();
	npy_from(&[values.len()], &values)
}

fn settings(value: Value) -> serde_json::Result<MySettings> {
	serde_json::from_value(value)
}

#[test]
fn init_from_values() {
	let cfg = settings(json!({"K": [1, 2]})).expect("literal settings");
	assert_eq!(*cfg.k, arr1(&[1.0_f32, 2.0]).into_dyn());
	assert!(serde_json::to_string(&cfg).is_ok_and(|text| text.contains("[1.0,2.0]")));

	let cfg = MySettings {
		k: NdArray::validate(Array2::<f64>::eye(2).into_dyn()).expect("array validates"),
	};
	assert_eq!(*cfg.k, arr2(&[[1.0_f32, 0.0], [0.0, 1.0]]).into_dyn());
}

#[test]
fn load_from_npy_path() {
	let dir = scratch_dir();
	let path = write_file(dir.path(), "data.npy", &arange(5));

	let cfg = settings(json!({"K": {"path": path}})).expect("npy settings");
	assert_eq!(*cfg.k, arr1(&[0.0_f32, 1.0, 2.0, 3.0, 4.0]).into_dyn());
}

#[test]
fn load_from_file_desc() {
	let dir = scratch_dir();
	let path = write_file(dir.path(), "data.npy", &arange(5));

	let k = NdArray::<f32>::validate(FileDesc::new(&path)).expect("descriptor validates");
	assert_eq!(k.into_inner(), arr1(&[0.0_f32, 1.0, 2.0, 3.0, 4.0]).into_dyn());
}

#[test]
fn load_field_from_npz() {
	let dir = scratch_dir();
	let path = write_npz(dir.path(), "data.npz", &[("values.npy", arange(5))]);

	let cfg = settings(json!({"K": {"path": path, "key": "values"}})).expect("npz settings");
	assert_eq!(*cfg.k, arr1(&[0.0_f32, 1.0, 2.0, 3.0, 4.0]).into_dyn());

	let cfg = settings(json!({"K": {"path": path}})).expect("default member");
	assert_eq!(cfg.k.len(), 5);
}

#[test]
fn exceptional_inputs() {
	let dir = scratch_dir();
	let missing_npz = dir.path().join("nosuchfile.npz");
	let missing_npy = dir.path().join("nosuchfile.npy");

	assert!(settings(json!({"K": {"path": missing_npz, "key": "values"}})).is_err());
	assert!(settings(json!({"K": {"path": missing_npy, "key": "nosuchkey"}})).is_err());
	assert!(settings(json!({"K": {"path": missing_npy}})).is_err());
	assert!(settings(json!({"K": "absc"})).is_err());
	assert!(settings(json!({})).is_err());
}

#[test]
fn unspecified_element_type() {
	#[derive(Deserialize, Serialize)]
	struct MySettingsNoGeneric {
		#[serde(rename = "K")]
		k: Array,
	}

	let cfg: MySettingsNoGeneric = serde_json::from_value(json!({"K": [1, 2]})).expect("untyped settings");
	assert_eq!(cfg.k.element_type(), ElementType::Int64);
	assert_eq!(cfg.k, Array::from(arr1(&[1_i64, 2]).into_dyn()));

	let encoded = serde_json::to_value(&cfg).expect("serializes");
	assert_eq!(encoded, json!({"K": [1, 2]}));
}

#[test]
fn optional_construction() {
	#[derive(Deserialize)]
	struct MySettingsOptional {
		#[serde(rename = "K", default)]
		k: Option<NdArray<f32>>,
	}

	let cfg: MySettingsOptional = serde_json::from_value(json!({})).expect("unset field");
	assert!(cfg.k.is_none());

	let cfg: MySettingsOptional = serde_json::from_value(json!({"K": [1, 2]})).expect("set field");
	assert_eq!(cfg.k.map(|k| k.ndim()), Some(1));
}

#[test]
fn potential_array() {
	#[derive(Deserialize)]
	struct MySettingsPotential {
		#[serde(rename = "K")]
		k: PotentialNdArray<f32>,
	}

	let dir = scratch_dir();
	let path = write_npz(dir.path(), "data.npz", &[("values.npy", arange(5))]);

	let cfg: MySettingsPotential = serde_json::from_value(json!({"K": {"path": path, "key": "values"}})).expect("tolerant");
	assert_eq!(cfg.k.get().map(|k| k.iter().copied().collect::<Vec<_>>()), Some(vec![0.0_f32, 1.0, 2.0, 3.0, 4.0]));

	let nothere = dir.path().join("nothere.npz");
	let cfg: MySettingsPotential = serde_json::from_value(json!({"K": {"path": nothere, "key": "values"}})).expect("tolerant");
	assert!(cfg.k.is_none());

	let cfg: MySettingsPotential = serde_json::from_value(json!({"K": {"path": path, "key": "nothere"}})).expect("tolerant");
	assert!(cfg.k.is_none());
}

#[test]
fn nested_models() {
	#[derive(Serialize, Deserialize)]
	struct MyModelField {
		#[serde(rename = "K")]
		k: NdArray<f32>,
	}

	#[derive(Serialize, Deserialize)]
	struct MyModel {
		#[serde(rename = "L")]
		l: BTreeMap<String, MyModelField>,
	}

	let model: MyModel = serde_json::from_value(json!({"L": {"a": {"K": [1.0, 2.0]}}})).expect("nested settings");
	assert_eq!(model.l["a"].k.iter().copied().collect::<Vec<_>>(), vec![1.0_f32, 2.0]);
	assert_eq!(serde_json::to_value(&model).expect("serializes"), json!({"L": {"a": {"K": [1.0, 2.0]}}}));
}
