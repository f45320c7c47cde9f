use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use half::f16;
use ndarray::{ArrayD, IxDyn, ShapeBuilder};
use num_complex::Complex;
use npyz::{DType, NpyFile, Order};
use zip::ZipArchive;

use crate::field::desc::absolute_path;
use crate::field::{Array, Container, Element, ElementType, FieldError, FileDesc, Result};

/// Header summary of one stored array.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberInfo {
	/// Npz member name without the `.npy` suffix; `None` for a bare `.npy` file.
	pub name: Option<String>,
	/// Stored element type.
	pub element_type: ElementType,
	/// Stored shape.
	pub shape: Vec<usize>,
	/// Whether data is stored column-major.
	pub fortran_order: bool,
}

/// Header summary of a container file.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerInfo {
	/// Absolute container path.
	pub path: PathBuf,
	/// Container format.
	pub container: Container,
	/// Stored arrays in archive order.
	pub members: Vec<MemberInfo>,
}

/// Load the array a descriptor points at.
///
/// The file is opened exactly once; the handle is released on return.
pub fn load_array(desc: &FileDesc) -> Result<Array> {
	let (path, container, file) = open_container(&desc.path)?;
	tracing::debug!(path = %path.display(), container = container.as_str(), key = ?desc.member_key(), "loading array file");

	let array = match container {
		Container::Npy => decode_npy(io::BufReader::new(file), &path)?,
		Container::Npz => {
			let mut archive = ZipArchive::new(io::BufReader::new(file)).map_err(|err| malformed(&path, err))?;
			let names = member_names(&mut archive, &path)?;
			let index = match desc.member_key() {
				Some(key) => names.iter().position(|name| member_matches(name, key)).ok_or_else(|| FieldError::KeyNotFound {
					key: key.to_owned(),
					path: path.clone(),
				})?,
				None if names.is_empty() => return Err(FieldError::EmptyArchive { path }),
				None => 0,
			};
			let member = archive.by_index(index).map_err(|err| malformed(&path, err))?;
			decode_npy(member, &path)?
		}
	};

	tracing::debug!(element_type = %array.element_type(), shape = ?array.shape(), "loaded array file");
	Ok(array)
}

/// Read container headers without loading array data.
pub fn inspect(path: &Path) -> Result<ContainerInfo> {
	let (path, container, file) = open_container(path)?;

	let members = match container {
		Container::Npy => vec![read_member_info(io::BufReader::new(file), None, &path)?],
		Container::Npz => {
			let mut archive = ZipArchive::new(io::BufReader::new(file)).map_err(|err| malformed(&path, err))?;
			let names = member_names(&mut archive, &path)?;
			let mut members = Vec::with_capacity(names.len());
			for (index, name) in names.into_iter().enumerate() {
				let member = archive.by_index(index).map_err(|err| malformed(&path, err))?;
				let name = name.strip_suffix(".npy").map(str::to_owned).unwrap_or(name);
				members.push(read_member_info(member, Some(name), &path)?);
			}
			members
		}
	};

	Ok(ContainerInfo { path, container, members })
}

fn open_container(path: &Path) -> Result<(PathBuf, Container, File)> {
	let container = Container::from_path(path).ok_or_else(|| FieldError::UnsupportedExtension { path: path.to_path_buf() })?;
	let path = absolute_path(path)?;

	let file = match File::open(&path) {
		Ok(file) => file,
		Err(err) if matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
			return Err(FieldError::PathNotFound { path });
		}
		Err(err) => return Err(err.into()),
	};
	if !file.metadata()?.is_file() {
		return Err(FieldError::NotAFile { path });
	}

	Ok((path, container, file))
}

fn member_names<R: Read + io::Seek>(archive: &mut ZipArchive<R>, path: &Path) -> Result<Vec<String>> {
	let mut names = Vec::with_capacity(archive.len());
	for index in 0..archive.len() {
		let entry = archive.by_index_raw(index).map_err(|err| malformed(path, err))?;
		names.push(entry.name().to_owned());
	}
	Ok(names)
}

fn member_matches(name: &str, key: &str) -> bool {
	name == key || name.strip_suffix(".npy") == Some(key)
}

struct Header {
	element_type: ElementType,
	shape: Vec<usize>,
	fortran_order: bool,
}

impl Header {
	fn read<R: Read>(npy: &NpyFile<R>, path: &Path) -> Result<Self> {
		let element_type = match npy.dtype() {
			DType::Plain(type_str) => ElementType::from_descr(&type_str.to_string())?,
			other => return Err(FieldError::UnsupportedDescr { descr: other.descr() }),
		};
		let shape = npy
			.shape()
			.iter()
			.map(|&dim| usize::try_from(dim).map_err(|err| malformed(path, err)))
			.collect::<Result<Vec<_>>>()?;

		Ok(Self {
			element_type,
			shape,
			fortran_order: matches!(npy.order(), Order::Fortran),
		})
	}
}

fn read_member_info<R: Read>(reader: R, name: Option<String>, path: &Path) -> Result<MemberInfo> {
	let npy = NpyFile::new(reader).map_err(|err| malformed(path, err))?;
	let Header {
		element_type,
		shape,
		fortran_order,
	} = Header::read(&npy, path)?;
	Ok(MemberInfo {
		name,
		element_type,
		shape,
		fortran_order,
	})
}

fn decode_npy<R: Read>(reader: R, path: &Path) -> Result<Array> {
	let npy = NpyFile::new(reader).map_err(|err| malformed(path, err))?;
	let header = Header::read(&npy, path)?;

	match header.element_type.ensure_available()? {
		ElementType::Bool => read_data::<bool, R>(npy, &header, path),
		ElementType::Int8 => read_data::<i8, R>(npy, &header, path),
		ElementType::Int16 => read_data::<i16, R>(npy, &header, path),
		ElementType::Int32 => read_data::<i32, R>(npy, &header, path),
		ElementType::Int64 => read_data::<i64, R>(npy, &header, path),
		ElementType::UInt8 => read_data::<u8, R>(npy, &header, path),
		ElementType::UInt16 => read_data::<u16, R>(npy, &header, path),
		ElementType::UInt32 => read_data::<u32, R>(npy, &header, path),
		ElementType::UInt64 => read_data::<u64, R>(npy, &header, path),
		ElementType::Float16 => read_data::<f16, R>(npy, &header, path),
		ElementType::Float32 => read_data::<f32, R>(npy, &header, path),
		ElementType::Float64 => read_data::<f64, R>(npy, &header, path),
		ElementType::Complex64 => read_data::<Complex<f32>, R>(npy, &header, path),
		ElementType::Complex128 => read_data::<Complex<f64>, R>(npy, &header, path),
		unavailable @ (ElementType::Float128 | ElementType::Complex256) => Err(FieldError::UnsupportedElementType { name: unavailable.name() }),
	}
}

fn read_data<T: Element, R: Read>(npy: NpyFile<R>, header: &Header, path: &Path) -> Result<Array> {
	let data: Vec<T> = npy.into_vec().map_err(|err| malformed(path, err))?;
	let dim = IxDyn(&header.shape);
	let array = if header.fortran_order {
		ArrayD::from_shape_vec(dim.f(), data)
	} else {
		ArrayD::from_shape_vec(dim, data)
	};
	array.map(T::wrap).map_err(|err| malformed(path, err))
}

fn malformed(path: &Path, err: impl std::fmt::Display) -> FieldError {
	FieldError::Malformed {
		path: path.to_path_buf(),
		reason: err.to_string(),
	}
}
