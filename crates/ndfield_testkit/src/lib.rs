//! Shared test helpers: `.npy` payloads written through npyz, `.npz` archives and scratch dirs.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use npyz::{AutoSerialize, DType, Order, Serialize, TypeStr, WriteOptions, WriterBuilder};
use tempfile::TempDir;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Encode row-major `values` of `shape` as an npy payload with the native descriptor.
pub fn npy_from<T: AutoSerialize>(shape: &[usize], values: &[T]) -> Vec<u8> {
	write_npy(T::default_dtype(), Order::C, shape, values)
}

/// Encode `values` under an explicit descriptor such as `>i4`, in the given memory order.
pub fn npy_with<T: Serialize>(descr: &str, order: Order, shape: &[usize], values: &[T]) -> Vec<u8> {
	let type_str: TypeStr = descr.parse().expect("valid npy descriptor");
	write_npy(DType::Plain(type_str), order, shape, values)
}

fn write_npy<T: Serialize>(dtype: DType, order: Order, shape: &[usize], values: &[T]) -> Vec<u8> {
	let shape: Vec<u64> = shape.iter().map(|&dim| dim as u64).collect();
	let mut out = Vec::new();
	let mut writer = WriteOptions::new()
		.dtype(dtype)
		.shape(&shape)
		.order(order)
		.writer(&mut out)
		.begin_nd()
		.expect("begin npy payload");
	for value in values {
		writer.push(value).expect("write npy element");
	}
	writer.finish().expect("finish npy payload");
	out
}

/// Row-major `n x n` identity matrix as float64 npy bytes.
pub fn eye_f64(n: usize) -> Vec<u8> {
	let values: Vec<f64> = (0..n * n).map(|index| if index / n == index % n { 1.0 } else { 0.0 }).collect();
	npy_from(&[n, n], &values)
}

/// Npy payload whose descriptor no writer accepts, e.g. `<U1` or `<f16`.
///
/// The header is copied from a valid one-element `u8` payload with the descriptor swapped in;
/// `data` follows verbatim.
pub fn npy_with_foreign_descr(descr: &str, data: &[u8]) -> Vec<u8> {
	let template = npy_from(&[1], &[0_u8]);
	let header_len = usize::from(u16::from_le_bytes([template[8], template[9]]));
	let header = std::str::from_utf8(&template[10..10 + header_len]).expect("npy header is ascii");
	let swapped = header.replacen("'|u1'", &format!("'{descr}'"), 1);

	// shorten the space padding so the data offset stays 64-aligned
	let grown = swapped.len() - header.len();
	let trimmed = format!("{}\n", swapped.trim_end_matches('\n').strip_suffix(&" ".repeat(grown)).expect("header has padding"));

	let mut out = template[..8].to_vec();
	out.extend_from_slice(&(trimmed.len() as u16).to_le_bytes());
	out.extend_from_slice(trimmed.as_bytes());
	out.extend_from_slice(data);
	out
}

/// Fresh scratch directory removed on drop.
pub fn scratch_dir() -> TempDir {
	tempfile::tempdir().expect("create scratch directory")
}

/// Write raw bytes to `dir/name`.
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
	let path = dir.join(name);
	fs::write(&path, bytes).expect("write fixture file");
	path
}

/// Write an npz archive whose members are stored in the given order.
///
/// Member names are used verbatim, so callers add the `.npy` suffix themselves.
pub fn write_npz(dir: &Path, name: &str, members: &[(&str, Vec<u8>)]) -> PathBuf {
	write_npz_with(dir, name, members, CompressionMethod::Stored)
}

/// Write an npz archive with deflated members, as `savez_compressed` does.
pub fn write_npz_compressed(dir: &Path, name: &str, members: &[(&str, Vec<u8>)]) -> PathBuf {
	write_npz_with(dir, name, members, CompressionMethod::Deflated)
}

fn write_npz_with(dir: &Path, name: &str, members: &[(&str, Vec<u8>)], method: CompressionMethod) -> PathBuf {
	let path = dir.join(name);
	let file = File::create(&path).expect("create npz fixture");
	let mut writer = ZipWriter::new(file);
	let options = SimpleFileOptions::default().compression_method(method);

	for (member, bytes) in members {
		writer.start_file(*member, options).expect("start npz member");
		writer.write_all(bytes).expect("write npz member");
	}
	writer.finish().expect("finish npz fixture");
	path
}
