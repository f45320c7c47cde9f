use serde_json::Value;

use crate::field::{Array, ElementType, FieldError, Result, Scalar};

/// Build an array from nested JSON sequences.
///
/// With a declared element type each leaf goes through checked construction;
/// without one the element type is inferred from the leaves.
pub fn array_from_json(value: &Value, declared: Option<ElementType>) -> Result<Array> {
	let mut walk = ShapeWalk::default();
	walk.visit(value, 0)?;
	let ShapeWalk { shape, leaves, .. } = walk;

	match declared {
		Some(element_type) => {
			let element_type = element_type.ensure_available()?;
			let scalars = leaves.into_iter().map(|leaf| Scalar::coerce(leaf, element_type)).collect::<Result<Vec<_>>>()?;
			Array::from_scalars(&shape, scalars, element_type)
		}
		None => {
			let literals = leaves.into_iter().map(|leaf| Scalar::from_literal(leaf, false)).collect::<Result<Vec<_>>>()?;
			let element_type = infer_element_type(&literals);
			Array::from_scalars(&shape, literals, element_type)
		}
	}
}

/// Default element type for a set of JSON literals.
pub fn infer_element_type(literals: &[Scalar]) -> ElementType {
	if literals.is_empty() {
		return ElementType::Float64;
	}

	let mut any_complex = false;
	let mut any_float = false;
	let mut any_int = false;
	let mut any_negative = false;
	let mut any_beyond_i64 = false;

	for literal in literals {
		match literal {
			Scalar::Bool(_) => {}
			Scalar::Complex64(_) | Scalar::Complex128(_) => any_complex = true,
			Scalar::Float16(_) | Scalar::Float32(_) | Scalar::Float64(_) => any_float = true,
			Scalar::UInt64(value) if *value > i64::MAX as u64 => {
				any_int = true;
				any_beyond_i64 = true;
			}
			other => {
				any_int = true;
				any_negative |= other.to_i128() < 0;
			}
		}
	}

	if any_complex {
		ElementType::Complex128
	} else if any_float {
		ElementType::Float64
	} else if any_beyond_i64 {
		if any_negative { ElementType::Float64 } else { ElementType::UInt64 }
	} else if any_int {
		ElementType::Int64
	} else {
		ElementType::Bool
	}
}

#[derive(Default)]
struct ShapeWalk<'a> {
	shape: Vec<usize>,
	leaf_depth: Option<usize>,
	leaves: Vec<&'a Value>,
}

impl<'a> ShapeWalk<'a> {
	fn visit(&mut self, value: &'a Value, depth: usize) -> Result<()> {
		match value {
			Value::Array(items) => {
				if self.leaf_depth.is_some_and(|leaf_depth| depth >= leaf_depth) {
					return Err(FieldError::Jagged { depth });
				}
				match self.shape.get(depth) {
					None => self.shape.push(items.len()),
					Some(&expected) if expected != items.len() => return Err(FieldError::Jagged { depth }),
					Some(_) => {}
				}
				for item in items {
					self.visit(item, depth + 1)?;
				}
			}
			leaf => {
				match self.leaf_depth {
					None if depth != self.shape.len() => return Err(FieldError::Jagged { depth }),
					None => self.leaf_depth = Some(depth),
					Some(leaf_depth) if leaf_depth != depth => return Err(FieldError::Jagged { depth }),
					Some(_) => {}
				}
				self.leaves.push(leaf);
			}
		}
		Ok(())
	}
}
