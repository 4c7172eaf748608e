use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, transforming or saving voxel buffers
#[derive(Debug, Error)]
pub enum VoxelError {
	#[error("File not found: {}", .0.display())]
	FileNotFound(PathBuf),

	#[error("grid dimensions must be positive, got {len_i} x {len_j} x {len_k}")]
	EmptyDims { len_i: usize, len_j: usize, len_k: usize },

	#[error("grid {len_i} x {len_j} x {len_k} holds too many voxels to allocate")]
	TooManyVoxels { len_i: usize, len_j: usize, len_k: usize },

	#[error(transparent)]
	Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, VoxelError>;
