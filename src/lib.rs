//! Validated numpy array fields for serde models.

/// Array and scalar field validation, npy/npz loading, and runtime models.
pub mod field;
