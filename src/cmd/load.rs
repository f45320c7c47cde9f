use std::path::PathBuf;

use ndfield::field::{Array, ArrayAdapter, ElementType, FieldMeta, FieldValidator, FileDesc, Result, TolerantArrayAdapter};

use crate::cmd::util::{emit_json, shape_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub key: Option<String>,
	#[arg(long)]
	pub dtype: Option<ElementType>,
	#[arg(long)]
	pub tolerant: bool,
	#[arg(long)]
	pub json: bool,
}

/// Load one array through the field adapter and print it.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		key,
		dtype,
		tolerant,
		json,
	} = args;

	let desc = FileDesc { path, key };
	let meta = FieldMeta {
		declared_element_type: dtype,
	};
	let array = if tolerant {
		TolerantArrayAdapter.validate(desc.clone().into(), &meta)?
	} else {
		Some(ArrayAdapter.validate(desc.clone().into(), &meta)?)
	};

	if json {
		return emit_json(&ArrayJson::new(Some(&desc), array.as_ref()));
	}

	print_array(array.as_ref());
	Ok(())
}

/// Print dtype, shape and values, or `value: none` for a discarded input.
pub(crate) fn print_array(array: Option<&Array>) {
	match array {
		Some(array) => {
			println!("dtype: {}", array.element_type());
			println!("shape: {}", shape_label(array.shape()));
			println!("values: {}", array.to_json());
		}
		None => println!("value: none"),
	}
}

#[derive(serde::Serialize)]
pub(crate) struct ArrayJson {
	#[serde(skip_serializing_if = "Option::is_none")]
	path: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	key: Option<String>,
	dtype: Option<&'static str>,
	shape: Option<Vec<usize>>,
	values: serde_json::Value,
}

impl ArrayJson {
	pub(crate) fn new(desc: Option<&FileDesc>, array: Option<&Array>) -> Self {
		Self {
			path: desc.map(|desc| desc.path.display().to_string()),
			key: desc.and_then(|desc| desc.key.clone()),
			dtype: array.map(|array| array.element_type().name()),
			shape: array.map(|array| array.shape().to_vec()),
			values: array.map_or(serde_json::Value::Null, Array::to_json),
		}
	}
}
