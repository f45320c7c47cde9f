use serde::Serialize;

use ndfield::field::Result;

/// Print a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Render a shape as `[d0, d1, ...]`.
pub(crate) fn shape_label(shape: &[usize]) -> String {
	let dims: Vec<String> = shape.iter().map(usize::to_string).collect();
	format!("[{}]", dims.join(", "))
}

#[cfg(test)]
mod tests {
	use super::shape_label;

	#[test]
	fn shape_label_formats_dims() {
		assert_eq!(shape_label(&[]), "[]");
		assert_eq!(shape_label(&[3]), "[3]");
		assert_eq!(shape_label(&[2, 0, 4]), "[2, 0, 4]");
	}
}
