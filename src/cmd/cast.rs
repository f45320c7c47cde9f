use ndfield::field::{ArrayAdapter, ElementType, FieldMeta, FieldValidator, RawValue, Result};
use serde_json::Value;

use crate::cmd::load::{ArrayJson, print_array};
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// JSON literal; text that is not valid JSON is taken as a string.
	pub literal: String,
	#[arg(long)]
	pub dtype: Option<ElementType>,
	#[arg(long)]
	pub json: bool,
}

/// Build an array from a literal, inferring the element type unless one is given.
pub fn run(args: Args) -> Result<()> {
	let Args { literal, dtype, json } = args;

	let value = serde_json::from_str(&literal).unwrap_or(Value::String(literal));
	let meta = FieldMeta {
		declared_element_type: dtype,
	};
	let array = ArrayAdapter.validate(RawValue::Json(value), &meta)?;

	if json {
		return emit_json(&ArrayJson::new(None, Some(&array)));
	}

	print_array(Some(&array));
	Ok(())
}
