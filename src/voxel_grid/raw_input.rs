use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::voxel_grid::error::{Result, VoxelError};
use crate::voxel_grid::grid::GridDims;

/// Unsigned 8-bit samples loaded from a headerless raw volume
#[derive(Debug, Clone)]
pub struct VoxelGrid {
	pub dims: GridDims,  // Dimensions the caller expected
	pub data: Vec<u8>,   // Samples actually read, at most dims.total_voxels()
}

impl VoxelGrid {
	/// Number of samples the dimensions call for
	pub fn expected_voxels(&self) -> usize {
		self.dims.total_voxels()
	}

	/// True when the file held at least the expected number of samples
	pub fn is_complete(&self) -> bool {
		self.data.len() == self.expected_voxels()
	}

	/// How many samples short of the expected count the read came up
	pub fn shortfall(&self) -> usize {
		self.expected_voxels().saturating_sub(self.data.len())
	}
}

/// Read up to `dims.total_voxels()` bytes from `path`.
/// A short file is not an error; trailing bytes past the expected count are ignored.
pub fn read_raw_u8(path: &Path, dims: GridDims) -> Result<VoxelGrid> {
	if !path.exists() {
		return Err(VoxelError::FileNotFound(path.to_path_buf()));
	}

	let expected = dims.total_voxels();
	let file = File::open(path)?;
	// Never reserve more than the file can supply
	let on_disk = usize::try_from(file.metadata()?.len()).unwrap_or(usize::MAX);
	let mut data = Vec::with_capacity(expected.min(on_disk));
	BufReader::new(file)
		.take(expected as u64)
		.read_to_end(&mut data)?;

	Ok(VoxelGrid { dims, data })
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::TempDir;

	fn dims_2x2x2() -> GridDims {
		GridDims::new(2, 2, 2).unwrap()
	}

	#[test]
	fn test_missing_file() {
		let temp_dir = TempDir::new().expect("failed to create temp dir");
		let path = temp_dir.path().join("absent.raw");
		let err = read_raw_u8(&path, dims_2x2x2()).unwrap_err();
		assert!(matches!(err, VoxelError::FileNotFound(p) if p == path));
	}

	#[test]
	fn test_exact_read() {
		let temp_dir = TempDir::new().expect("failed to create temp dir");
		let path = temp_dir.path().join("full.raw");
		fs::write(&path, [1u8, 2, 3, 4, 5, 6, 7, 8]).unwrap();

		let grid = read_raw_u8(&path, dims_2x2x2()).unwrap();
		assert!(grid.is_complete());
		assert_eq!(grid.data, vec![1, 2, 3, 4, 5, 6, 7, 8]);
	}

	#[test]
	fn test_short_read_keeps_what_was_there() {
		let temp_dir = TempDir::new().expect("failed to create temp dir");
		let path = temp_dir.path().join("short.raw");
		fs::write(&path, [9u8, 9, 9]).unwrap();

		let grid = read_raw_u8(&path, dims_2x2x2()).unwrap();
		assert!(!grid.is_complete());
		assert_eq!(grid.data.len(), 3);
		assert_eq!(grid.shortfall(), 5);
	}

	#[test]
	fn test_huge_dims_only_reserve_file_size() {
		let temp_dir = TempDir::new().expect("failed to create temp dir");
		let path = temp_dir.path().join("tiny.raw");
		fs::write(&path, [1u8, 2, 3]).unwrap();

		let dims = GridDims::new(100_000, 100_000, 10_000).unwrap();
		let grid = read_raw_u8(&path, dims).unwrap();
		assert_eq!(grid.data, vec![1, 2, 3]);
		assert!(grid.data.capacity() < 1024);
		assert_eq!(grid.shortfall(), 100_000 * 100_000 * 10_000 - 3);
	}

	#[test]
	fn test_long_file_truncated_to_expected() {
		let temp_dir = TempDir::new().expect("failed to create temp dir");
		let path = temp_dir.path().join("long.raw");
		fs::write(&path, vec![7u8; 20]).unwrap();

		let grid = read_raw_u8(&path, dims_2x2x2()).unwrap();
		assert!(grid.is_complete());
		assert_eq!(grid.data.len(), 8);
	}
}
