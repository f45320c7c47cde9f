use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::field::{FieldError, Result};

/// Reference to array data stored on disk, with an optional npz member key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDesc {
	/// Location of the `.npy` or `.npz` file.
	pub path: PathBuf,
	/// Npz member to select; the first stored member when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub key: Option<String>,
}

impl FileDesc {
	/// Descriptor without a member key.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into(), key: None }
	}

	/// Descriptor selecting one npz member.
	pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			key: Some(key.into()),
		}
	}

	/// Build from a JSON mapping with a `path` entry and optional `key` entry.
	///
	/// Unknown entries are ignored.
	pub fn from_mapping(map: &Map<String, Value>) -> Result<Self> {
		serde_json::from_value(Value::Object(map.clone())).map_err(|err| FieldError::InvalidDescriptor { reason: err.to_string() })
	}

	/// Member key to look up, treating an empty key as absent.
	pub fn member_key(&self) -> Option<&str> {
		self.key.as_deref().filter(|key| !key.is_empty())
	}
}

/// Resolve `path` against the current directory.
///
/// Fails as a descriptor error when the path is empty or the current directory is gone.
pub(crate) fn absolute_path(path: &Path) -> Result<PathBuf> {
	std::path::absolute(path).map_err(|err| FieldError::InvalidDescriptor {
		reason: format!("cannot resolve {}: {err}", path.display()),
	})
}

/// On-disk container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
	/// Single unnamed array (`.npy`).
	Npy,
	/// Zip archive of named arrays (`.npz`).
	Npz,
}

impl Container {
	/// Detect the container from a case-insensitive file extension.
	pub fn from_path(path: &Path) -> Option<Self> {
		let ext = path.extension()?.to_str()?;
		if ext.eq_ignore_ascii_case("npy") {
			Some(Self::Npy)
		} else if ext.eq_ignore_ascii_case("npz") {
			Some(Self::Npz)
		} else {
			None
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Npy => "npy",
			Self::Npz => "npz",
		}
	}
}
