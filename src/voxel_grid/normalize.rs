use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::voxel_grid::raw_input::VoxelGrid;

/// Suffix appended to the input stem to name the converter output
pub const NORMALIZED_SUFFIX: &str = "_normalized.float32";

/// Map each byte to `b / 255.0`, so 0 -> 0.0 and 255 -> 1.0
pub fn normalize_u8(data: &[u8]) -> Vec<f32> {
	data.iter().map(|&b| b as f32 / 255.0).collect()
}

impl VoxelGrid {
	/// Normalized copy of the samples that were actually read
	pub fn normalize(&self) -> Vec<f32> {
		normalize_u8(&self.data)
	}
}

/// Replace the final extension of `input` with `_normalized.float32`
pub fn normalized_output_path(input: &Path) -> PathBuf {
	let mut name: OsString = input.file_stem().map(OsString::from).unwrap_or_default();
	name.push(NORMALIZED_SUFFIX);
	input.with_file_name(name)
}
