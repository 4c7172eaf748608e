use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::voxel_grid::error::Result;

/// Save `values` as a headerless float32 array and report save time.
///
/// Values are written in the host's native byte order as IEEE 754 single
/// precision, 4 bytes each, with no padding. Consumers must know the element
/// count and the writer's endianness out of band.
pub fn write_f32_raw(path: &Path, values: &[f32]) -> Result<()> {
	let start_time = Instant::now();

	let mut file = BufWriter::new(File::create(path)?);
	file.write_all(bytemuck::cast_slice(values))?;
	file.flush()?;

	let elapsed_time = start_time.elapsed();
	info!(
		"Float32 file saved: {} ({} values, {:.3} seconds)",
		path.display(),
		values.len(),
		elapsed_time.as_secs_f64()
	);
	Ok(())
}

/// Load a headerless native-endian float32 array; a trailing partial value is dropped
pub fn read_f32_raw(path: &Path) -> Result<Vec<f32>> {
	let bytes = fs::read(path)?;
	Ok(bytes
		.chunks_exact(4)
		.map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
		.collect())
}
