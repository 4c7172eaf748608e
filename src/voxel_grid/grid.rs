use crate::voxel_grid::error::{Result, VoxelError};

/// Voxel counts along each axis of a dense 3D grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
	pub len_i: usize,  // Number of voxels along I (x)
	pub len_j: usize,  // Number of voxels along J (y)
	pub len_k: usize,  // Number of voxels along K (z)
}

impl GridDims {
	/// Dimensions of the fixed-size volumes the converter expects
	pub const DEFAULT_RAW: GridDims = GridDims { len_i: 64, len_j: 64, len_k: 64 };

	/// Largest voxel count whose f32 buffer still fits in an allocation
	pub const MAX_VOXELS: usize = isize::MAX as usize / std::mem::size_of::<f32>();

	/// Create dimensions, rejecting any zero-length axis and any product
	/// too large to index or allocate, so `total_voxels` never overflows
	pub fn new(len_i: usize, len_j: usize, len_k: usize) -> Result<Self> {
		if len_i == 0 || len_j == 0 || len_k == 0 {
			return Err(VoxelError::EmptyDims { len_i, len_j, len_k });
		}
		match len_i.checked_mul(len_j).and_then(|ij| ij.checked_mul(len_k)) {
			Some(total) if total <= Self::MAX_VOXELS => Ok(Self { len_i, len_j, len_k }),
			_ => Err(VoxelError::TooManyVoxels { len_i, len_j, len_k }),
		}
	}

	/// Total number of voxels IxJxK
	#[inline]
	pub fn total_voxels(&self) -> usize {
		self.len_i * self.len_j * self.len_k
	}

	/// Convert (i, j, k) to a linear index, I-major so K varies fastest
	#[inline]
	pub fn ijk_to_index(&self, i: usize, j: usize, k: usize) -> usize {
		(i * self.len_j + j) * self.len_k + k
	}

	/// Convert a linear index back to (i, j, k)
	#[inline]
	pub fn index_to_ijk(&self, index: usize) -> (usize, usize, usize) {
		let k = index % self.len_k;
		let j = (index / self.len_k) % self.len_j;
		let i = index / (self.len_j * self.len_k);
		(i, j, k)
	}
}

impl std::fmt::Display for GridDims {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}x{}x{}", self.len_i, self.len_j, self.len_k)
	}
}

/// Parse a single positive axis length from the command line
pub fn parse_dim(arg: &str) -> std::result::Result<usize, String> {
	let value: usize = arg
		.trim()
		.parse()
		.map_err(|_| format!("`{}` is not a non-negative integer", arg))?;
	if value == 0 {
		return Err("dimension must be at least 1".to_string());
	}
	Ok(value)
}
