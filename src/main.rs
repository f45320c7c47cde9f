#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod tracing_config;

#[derive(Parser)]
#[command(name = "ndfield", about = "Validated numpy array field tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List arrays stored in an .npy or .npz file.
	Info(cmd::info::Args),
	/// Load one array, optionally cast to an element type.
	Load(cmd::load::Args),
	/// Build an array from a JSON literal.
	Cast(cmd::cast::Args),
	/// Validate a JSON document against a model declaration.
	Validate(cmd::validate::Args),
	/// Print the JSON schema of a model declaration.
	Schema(cmd::schema::Args),
}

fn main() {
	tracing_config::init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> ndfield::field::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Load(args) => cmd::load::run(args),
		Commands::Cast(args) => cmd::cast::run(args),
		Commands::Validate(args) => cmd::validate::run(args),
		Commands::Schema(args) => cmd::schema::run(args),
	}
}
