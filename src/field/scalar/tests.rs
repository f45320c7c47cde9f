use half::f16;
use num_complex::Complex;
use serde_json::json;

use crate::field::{ElementType, FieldError, Scalar};

#[test]
fn cast_truncates_floats_to_integers() {
	assert_eq!(Scalar::Float64(1.9).cast(ElementType::Int32).expect("casts"), Scalar::Int32(1));
	assert_eq!(Scalar::Float64(-1.9).cast(ElementType::Int32).expect("casts"), Scalar::Int32(-1));
	assert_eq!(Scalar::Float32(7.5).cast(ElementType::UInt8).expect("casts"), Scalar::UInt8(7));
}

#[test]
fn cast_wraps_integers_like_astype() {
	assert_eq!(Scalar::Int64(300).cast(ElementType::Int8).expect("casts"), Scalar::Int8(44));
	assert_eq!(Scalar::Int64(-1).cast(ElementType::UInt16).expect("casts"), Scalar::UInt16(u16::MAX));
	assert_eq!(Scalar::UInt64(u64::MAX).cast(ElementType::Int64).expect("casts"), Scalar::Int64(-1));
}

#[test]
fn cast_matches_native_construction() {
	let value = 16_777_217_i64;
	assert_eq!(Scalar::Int64(value).cast(ElementType::Float32).expect("casts"), Scalar::Float32(value as f32));
	assert_eq!(Scalar::Float64(0.1).cast(ElementType::Float16).expect("casts"), Scalar::Float16(f16::from_f64(0.1)));
	assert_eq!(Scalar::Float64(0.1).cast(ElementType::Float32).expect("casts"), Scalar::Float32(0.1_f32));
}

#[test]
fn cast_to_bool_and_complex() {
	assert_eq!(Scalar::Float64(0.0).cast(ElementType::Bool).expect("casts"), Scalar::Bool(false));
	assert_eq!(Scalar::Int8(-3).cast(ElementType::Bool).expect("casts"), Scalar::Bool(true));
	assert_eq!(Scalar::Bool(true).cast(ElementType::Float64).expect("casts"), Scalar::Float64(1.0));
	assert_eq!(Scalar::Int32(2).cast(ElementType::Complex64).expect("casts"), Scalar::Complex64(Complex::new(2.0, 0.0)));
	assert_eq!(
		Scalar::Complex128(Complex::new(1.5, -2.0)).cast(ElementType::Float32).expect("casts"),
		Scalar::Float32(1.5)
	);
}

#[test]
fn cast_to_unavailable_type_fails() {
	let err = Scalar::Float64(1.0).cast(ElementType::Complex256).expect_err("complex256 unavailable");
	assert!(matches!(err, FieldError::UnsupportedElementType { name: "complex256" }));
}

#[test]
fn literal_natural_types() {
	assert_eq!(Scalar::from_literal(&json!(true), false).expect("bool"), Scalar::Bool(true));
	assert_eq!(Scalar::from_literal(&json!(-4), false).expect("int"), Scalar::Int64(-4));
	assert_eq!(Scalar::from_literal(&json!(u64::MAX), false).expect("uint"), Scalar::UInt64(u64::MAX));
	assert_eq!(Scalar::from_literal(&json!(2.5), false).expect("float"), Scalar::Float64(2.5));
	assert_eq!(
		Scalar::from_literal(&json!({"re": 1.0, "im": 2.0}), false).expect("complex"),
		Scalar::Complex128(Complex::new(1.0, 2.0))
	);
}

#[test]
fn literal_rejects_strings_unless_parsing() {
	let err = Scalar::from_literal(&json!("absc"), false).expect_err("strings rejected");
	assert!(matches!(err, FieldError::NotNumeric { got: "string" }));
	assert_eq!(Scalar::from_literal(&json!("12"), true).expect("numeric string"), Scalar::Int64(12));
	assert_eq!(Scalar::from_literal(&json!(" 1.5 "), true).expect("numeric string"), Scalar::Float64(1.5));
	assert!(Scalar::from_literal(&json!(null), true).is_err());
}

#[test]
fn coerce_builds_requested_type() {
	assert_eq!(Scalar::coerce(&json!(1), ElementType::Float32).expect("coerces"), Scalar::Float32(1.0));
	assert_eq!(Scalar::coerce(&json!(1.0), ElementType::Float32).expect("coerces"), Scalar::Float32(1.0));
	assert_eq!(Scalar::coerce(&json!(1.0), ElementType::Int32).expect("coerces"), Scalar::Int32(1));
	assert_eq!(Scalar::coerce(&json!(1.9), ElementType::Int32).expect("coerces"), Scalar::Int32(1));
	assert_eq!(Scalar::coerce(&json!("3"), ElementType::UInt8).expect("coerces"), Scalar::UInt8(3));
	assert_eq!(Scalar::coerce(&json!(u64::MAX), ElementType::UInt64).expect("coerces"), Scalar::UInt64(u64::MAX));
}

#[test]
fn coerce_rejects_out_of_range_integers() {
	let err = Scalar::coerce(&json!(300), ElementType::Int8).expect_err("overflow");
	assert!(matches!(err, FieldError::Overflow { to: "int8", .. }));

	let err = Scalar::coerce(&json!(-1), ElementType::UInt32).expect_err("overflow");
	assert!(matches!(err, FieldError::Overflow { to: "uint32", .. }));

	let err = Scalar::coerce(&json!(1e20), ElementType::Int64).expect_err("overflow");
	assert!(matches!(err, FieldError::Overflow { to: "int64", .. }));
}

#[test]
fn coerce_rejects_lossy_kinds() {
	let err = Scalar::coerce(&json!({"re": 1.0, "im": 1.0}), ElementType::Float64).expect_err("complex to real");
	assert!(matches!(err, FieldError::InvalidLiteral { to: "float64", .. }));

	let err = Scalar::coerce(&json!("yes"), ElementType::Bool).expect_err("string to bool");
	assert!(matches!(err, FieldError::InvalidLiteral { to: "bool", .. }));

	let err = Scalar::coerce(&json!([1]), ElementType::Int32).expect_err("sequence is not a leaf");
	assert!(matches!(err, FieldError::NotNumeric { got: "array" }));
}

#[test]
fn json_rendering() {
	assert_eq!(Scalar::Float32(1.5).to_json(), json!(1.5));
	assert_eq!(Scalar::UInt8(7).to_json(), json!(7));
	assert_eq!(Scalar::Float64(f64::NAN).to_json(), json!(null));
	assert_eq!(Scalar::Complex64(Complex::new(1.0, -1.0)).to_json(), json!({"re": 1.0, "im": -1.0}));
}
