use std::fmt;

use half::f16;
use ndarray::ArrayD;
use num_complex::Complex;

use crate::field::{Array, ElementType, Scalar};

/// Native Rust type backing one available [`ElementType`].
pub trait Element: Copy + PartialEq + fmt::Debug + npyz::Deserialize + 'static {
	/// Tag of this element type.
	const ELEMENT_TYPE: ElementType;

	/// Convert any scalar with `astype` semantics.
	fn from_scalar(scalar: Scalar) -> Self;

	/// Wrap as a dynamic scalar.
	fn into_scalar(self) -> Scalar;

	/// Wrap a typed array as a dynamic array.
	fn wrap(array: ArrayD<Self>) -> Array;

	/// Take the typed array back out, or return the input when the type differs.
	fn try_take(array: Array) -> Result<ArrayD<Self>, Array>;
}

macro_rules! impl_element {
	($native:ty, $tag:ident, |$scalar:ident| $convert:expr) => {
		impl Element for $native {
			const ELEMENT_TYPE: ElementType = ElementType::$tag;

			fn from_scalar($scalar: Scalar) -> Self {
				$convert
			}

			fn into_scalar(self) -> Scalar {
				Scalar::$tag(self)
			}

			fn wrap(array: ArrayD<Self>) -> Array {
				Array::$tag(array)
			}

			fn try_take(array: Array) -> Result<ArrayD<Self>, Array> {
				match array {
					Array::$tag(inner) => Ok(inner),
					other => Err(other),
				}
			}
		}
	};
}

impl_element!(bool, Bool, |scalar| scalar.to_bool());
impl_element!(i8, Int8, |scalar| scalar.to_i128() as i8);
impl_element!(i16, Int16, |scalar| scalar.to_i128() as i16);
impl_element!(i32, Int32, |scalar| scalar.to_i128() as i32);
impl_element!(i64, Int64, |scalar| scalar.to_i128() as i64);
impl_element!(u8, UInt8, |scalar| scalar.to_i128() as u8);
impl_element!(u16, UInt16, |scalar| scalar.to_i128() as u16);
impl_element!(u32, UInt32, |scalar| scalar.to_i128() as u32);
impl_element!(u64, UInt64, |scalar| scalar.to_i128() as u64);
impl_element!(f16, Float16, |scalar| scalar.to_f16());
impl_element!(f32, Float32, |scalar| scalar.to_f32());
impl_element!(f64, Float64, |scalar| scalar.to_f64());
impl_element!(Complex<f32>, Complex64, |scalar| scalar.to_c64());
impl_element!(Complex<f64>, Complex128, |scalar| scalar.to_c128());
