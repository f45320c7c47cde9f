use std::path::PathBuf;

use ndfield::field::{MemberInfo, Result, inspect};

use crate::cmd::util::{emit_json, shape_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print container kind and the header of every stored array.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;
	let info = inspect(&path)?;

	if json {
		return emit_json(&InfoJson {
			path: info.path.display().to_string(),
			container: info.container.as_str(),
			members: info.members.iter().map(MemberJson::from).collect(),
		});
	}

	println!("path: {}", info.path.display());
	println!("container: {}", info.container.as_str());
	println!("members: {}", info.members.len());
	for member in &info.members {
		println!(
			"  {}: {} {}{}",
			member.name.as_deref().unwrap_or("-"),
			member.element_type,
			shape_label(&member.shape),
			if member.fortran_order { " fortran" } else { "" }
		);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct MemberJson {
	name: Option<String>,
	dtype: &'static str,
	shape: Vec<usize>,
	fortran_order: bool,
}

impl From<&MemberInfo> for MemberJson {
	fn from(member: &MemberInfo) -> Self {
		Self {
			name: member.name.clone(),
			dtype: member.element_type.name(),
			shape: member.shape.clone(),
			fortran_order: member.fortran_order,
		}
	}
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	container: &'static str,
	members: Vec<MemberJson>,
}
