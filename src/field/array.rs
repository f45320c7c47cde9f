use half::f16;
use ndarray::{ArrayD, ArrayViewD, IxDyn};
use num_complex::Complex;
use serde_json::Value;

use crate::field::{Element, ElementType, FieldError, Result, Scalar};

/// Multi-dimensional array holding one available element type.
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
	/// `bool` elements.
	Bool(ArrayD<bool>),
	/// `int8` elements.
	Int8(ArrayD<i8>),
	/// `int16` elements.
	Int16(ArrayD<i16>),
	/// `int32` elements.
	Int32(ArrayD<i32>),
	/// `int64` elements.
	Int64(ArrayD<i64>),
	/// `uint8` elements.
	UInt8(ArrayD<u8>),
	/// `uint16` elements.
	UInt16(ArrayD<u16>),
	/// `uint32` elements.
	UInt32(ArrayD<u32>),
	/// `uint64` elements.
	UInt64(ArrayD<u64>),
	/// `float16` elements.
	Float16(ArrayD<f16>),
	/// `float32` elements.
	Float32(ArrayD<f32>),
	/// `float64` elements.
	Float64(ArrayD<f64>),
	/// `complex64` elements.
	Complex64(ArrayD<Complex<f32>>),
	/// `complex128` elements.
	Complex128(ArrayD<Complex<f64>>),
}

/// Run the same generic body against whichever typed array is inside.
macro_rules! with_array {
	($value:expr, $arr:ident => $body:expr) => {
		match $value {
			Array::Bool($arr) => $body,
			Array::Int8($arr) => $body,
			Array::Int16($arr) => $body,
			Array::Int32($arr) => $body,
			Array::Int64($arr) => $body,
			Array::UInt8($arr) => $body,
			Array::UInt16($arr) => $body,
			Array::UInt32($arr) => $body,
			Array::UInt64($arr) => $body,
			Array::Float16($arr) => $body,
			Array::Float32($arr) => $body,
			Array::Float64($arr) => $body,
			Array::Complex64($arr) => $body,
			Array::Complex128($arr) => $body,
		}
	};
}

impl Array {
	/// Build an array of `element_type` from scalars in row-major order.
	pub fn from_scalars(shape: &[usize], scalars: Vec<Scalar>, element_type: ElementType) -> Result<Self> {
		fn build<T: Element>(shape: &[usize], scalars: Vec<Scalar>) -> Result<Array> {
			let len = scalars.len();
			let data: Vec<T> = scalars.into_iter().map(T::from_scalar).collect();
			let array = ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|_| FieldError::Shape { shape: shape.to_vec(), len })?;
			Ok(T::wrap(array))
		}

		match element_type.ensure_available()? {
			ElementType::Bool => build::<bool>(shape, scalars),
			ElementType::Int8 => build::<i8>(shape, scalars),
			ElementType::Int16 => build::<i16>(shape, scalars),
			ElementType::Int32 => build::<i32>(shape, scalars),
			ElementType::Int64 => build::<i64>(shape, scalars),
			ElementType::UInt8 => build::<u8>(shape, scalars),
			ElementType::UInt16 => build::<u16>(shape, scalars),
			ElementType::UInt32 => build::<u32>(shape, scalars),
			ElementType::UInt64 => build::<u64>(shape, scalars),
			ElementType::Float16 => build::<f16>(shape, scalars),
			ElementType::Float32 => build::<f32>(shape, scalars),
			ElementType::Float64 => build::<f64>(shape, scalars),
			ElementType::Complex64 => build::<Complex<f32>>(shape, scalars),
			ElementType::Complex128 => build::<Complex<f64>>(shape, scalars),
			ElementType::Float128 | ElementType::Complex256 => Err(FieldError::UnsupportedElementType { name: element_type.name() }),
		}
	}

	/// Zero-dimensional array holding one scalar.
	pub fn from_scalar(scalar: Scalar) -> Self {
		fn build<T: Element>(value: T) -> Array {
			T::wrap(ArrayD::from_elem(IxDyn(&[]), value))
		}

		match scalar {
			Scalar::Bool(v) => build(v),
			Scalar::Int8(v) => build(v),
			Scalar::Int16(v) => build(v),
			Scalar::Int32(v) => build(v),
			Scalar::Int64(v) => build(v),
			Scalar::UInt8(v) => build(v),
			Scalar::UInt16(v) => build(v),
			Scalar::UInt32(v) => build(v),
			Scalar::UInt64(v) => build(v),
			Scalar::Float16(v) => build(v),
			Scalar::Float32(v) => build(v),
			Scalar::Float64(v) => build(v),
			Scalar::Complex64(v) => build(v),
			Scalar::Complex128(v) => build(v),
		}
	}

	/// Element type tag.
	pub fn element_type(&self) -> ElementType {
		match self {
			Self::Bool(_) => ElementType::Bool,
			Self::Int8(_) => ElementType::Int8,
			Self::Int16(_) => ElementType::Int16,
			Self::Int32(_) => ElementType::Int32,
			Self::Int64(_) => ElementType::Int64,
			Self::UInt8(_) => ElementType::UInt8,
			Self::UInt16(_) => ElementType::UInt16,
			Self::UInt32(_) => ElementType::UInt32,
			Self::UInt64(_) => ElementType::UInt64,
			Self::Float16(_) => ElementType::Float16,
			Self::Float32(_) => ElementType::Float32,
			Self::Float64(_) => ElementType::Float64,
			Self::Complex64(_) => ElementType::Complex64,
			Self::Complex128(_) => ElementType::Complex128,
		}
	}

	/// Length of each axis.
	pub fn shape(&self) -> &[usize] {
		with_array!(self, arr => arr.shape())
	}

	/// Number of axes.
	pub fn ndim(&self) -> usize {
		with_array!(self, arr => arr.ndim())
	}

	/// Total element count.
	pub fn len(&self) -> usize {
		with_array!(self, arr => arr.len())
	}

	/// Whether the array has no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// All elements in logical row-major order.
	pub fn scalars(&self) -> Vec<Scalar> {
		with_array!(self, arr => arr.iter().map(|value| value.into_scalar()).collect())
	}

	/// The single element of a zero-dimensional array.
	pub fn as_scalar(&self) -> Option<Scalar> {
		if self.ndim() != 0 {
			return None;
		}
		self.scalars().into_iter().next()
	}

	/// Copy into a typed array, casting with `astype` semantics.
	pub fn to_typed<T: Element>(&self) -> ArrayD<T> {
		with_array!(self, arr => arr.mapv(|value| T::from_scalar(value.into_scalar())))
	}

	/// Convert into a typed array, reusing storage when the type already matches.
	pub fn into_typed<T: Element>(self) -> ArrayD<T> {
		match T::try_take(self) {
			Ok(array) => array,
			Err(other) => other.to_typed(),
		}
	}

	/// Cast every element to `to`; a matching type is returned unchanged.
	pub fn cast(self, to: ElementType) -> Result<Self> {
		if self.element_type() == to {
			return Ok(self);
		}

		let out = match to {
			ElementType::Bool => Self::Bool(self.to_typed()),
			ElementType::Int8 => Self::Int8(self.to_typed()),
			ElementType::Int16 => Self::Int16(self.to_typed()),
			ElementType::Int32 => Self::Int32(self.to_typed()),
			ElementType::Int64 => Self::Int64(self.to_typed()),
			ElementType::UInt8 => Self::UInt8(self.to_typed()),
			ElementType::UInt16 => Self::UInt16(self.to_typed()),
			ElementType::UInt32 => Self::UInt32(self.to_typed()),
			ElementType::UInt64 => Self::UInt64(self.to_typed()),
			ElementType::Float16 => Self::Float16(self.to_typed()),
			ElementType::Float32 => Self::Float32(self.to_typed()),
			ElementType::Float64 => Self::Float64(self.to_typed()),
			ElementType::Complex64 => Self::Complex64(self.to_typed()),
			ElementType::Complex128 => Self::Complex128(self.to_typed()),
			ElementType::Float128 | ElementType::Complex256 => return Err(FieldError::UnsupportedElementType { name: to.name() }),
		};
		Ok(out)
	}

	/// Nested JSON lists, the `tolist` rendering; zero-dimensional arrays render as a bare value.
	pub fn to_json(&self) -> Value {
		with_array!(self, arr => nested_json(arr.view()))
	}
}

pub(crate) fn nested_json<T: Element>(view: ArrayViewD<'_, T>) -> Value {
	if view.ndim() == 0 {
		return view.iter().next().map_or(Value::Null, |value| value.into_scalar().to_json());
	}
	Value::Array(view.outer_iter().map(nested_json).collect())
}

impl<T: Element> From<ArrayD<T>> for Array {
	fn from(array: ArrayD<T>) -> Self {
		T::wrap(array)
	}
}
