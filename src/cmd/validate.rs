use std::fs;
use std::path::PathBuf;

use ndfield::field::{ModelSpec, Result};
use serde_json::Value;

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Model declaration file.
	pub model: PathBuf,
	/// JSON document to validate.
	pub input: PathBuf,
}

/// Validate a document against a model declaration and print the stored values.
pub fn run(args: Args) -> Result<()> {
	let Args { model, input } = args;

	let spec = ModelSpec::from_path(&model)?;
	let document: Value = serde_json::from_str(&fs::read_to_string(&input)?)?;
	let validated = spec.validate_value(&document)?;

	emit_json(&validated.to_json())
}
