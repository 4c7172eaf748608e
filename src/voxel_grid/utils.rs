use std::mem::size_of;

use log::info;

/// Format large numbers with KB, MB, GB, TB suffixes
pub fn format_bytes(bytes: usize) -> String {
	const KB: usize = 1024;
	const MB: usize = KB * 1024;
	const GB: usize = MB * 1024;
	const TB: usize = GB * 1024;

	if bytes >= TB {
		format!("{:.2} TB", bytes as f64 / TB as f64)
	} else if bytes >= GB {
		format!("{:.2} GB", bytes as f64 / GB as f64)
	} else if bytes >= MB {
		format!("{:.2} MB", bytes as f64 / MB as f64)
	} else if bytes >= KB {
		format!("{:.2} KB", bytes as f64 / KB as f64)
	} else {
		format!("{} bytes", bytes)
	}
}

/// Log the element count and memory footprint of an in-memory buffer
pub fn report_buffer<T>(label: &str, data: &[T]) {
	let bytes = data.len() * size_of::<T>();
	info!(
		"{}: {:e} elements x {} = {}",
		label,
		data.len() as f64,
		format_bytes(size_of::<T>()),
		format_bytes(bytes)
	);
}

/// Range and mean of a float buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
	pub min: f32,
	pub max: f32,
	pub mean: f64,
	pub count: usize,
	pub min_index: usize,  // First position holding `min`
	pub max_index: usize,  // First position holding `max`
}

impl FieldStats {
	/// Compute stats over `values`; `None` for an empty slice
	pub fn from_slice(values: &[f32]) -> Option<Self> {
		if values.is_empty() {
			return None;
		}
		let mut min = f32::MAX;
		let mut max = f32::MIN;
		let mut min_index = 0;
		let mut max_index = 0;
		let mut sum = 0.0_f64;
		for (index, &v) in values.iter().enumerate() {
			if v < min {
				min = v;
				min_index = index;
			}
			if v > max {
				max = v;
				max_index = index;
			}
			sum += v as f64;
		}
		Some(Self {
			min,
			max,
			mean: sum / values.len() as f64,
			count: values.len(),
			min_index,
			max_index,
		})
	}
}

impl std::fmt::Display for FieldStats {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"n={} min={:.6} max={:.6} mean={:.6}",
			self.count, self.min, self.max, self.mean
		)
	}
}
