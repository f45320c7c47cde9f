mod adapter;
mod array;
mod desc;
mod dtype;
mod element;
mod error;
pub mod facade;
mod input;
mod load;
mod model;
mod nested;
mod scalar;
mod typed;

/// Field validators and their schema hook.
pub use adapter::{ArrayAdapter, FieldValidator, ScalarField, TolerantArrayAdapter};
/// Dynamic multi-dimensional array.
pub use array::Array;
/// On-disk array references.
pub use desc::{Container, FileDesc};
/// Element type tags.
pub use dtype::{ElementKind, ElementType};
/// Native element trait.
pub use element::Element;
/// Error and result aliases.
pub use error::{FieldError, Result};
/// Validator inputs and configuration.
pub use input::{FieldMeta, RawValue};
/// Npy and npz loading.
pub use load::{ContainerInfo, MemberInfo, inspect, load_array};
/// Runtime model declarations.
pub use model::{FieldDecl, FieldKind, FieldValue, Model, ModelSpec};
/// Nested sequence construction and default inference.
pub use nested::{array_from_json, infer_element_type};
/// Single element values.
pub use scalar::Scalar;
/// Serde field types.
pub use typed::{ArrayField, NdArray, Potential, PotentialNdArray};
