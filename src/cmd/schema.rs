use std::path::PathBuf;

use ndfield::field::{ModelSpec, Result};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Model declaration file.
	pub model: PathBuf,
}

/// Print the JSON schema of a model declaration.
pub fn run(args: Args) -> Result<()> {
	let spec = ModelSpec::from_path(&args.model)?;
	emit_json(&spec.schema())
}
