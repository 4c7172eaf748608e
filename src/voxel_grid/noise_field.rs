use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::voxel_grid::grid::GridDims;

/// Upper bound (exclusive) of the random origin shift
const MAX_OFFSET: u32 = 10_000;

/// Parameters of the multi-octave Perlin field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
	pub scale: f64,        // Grid-to-noise coordinate factor
	pub octaves: usize,
	pub persistence: f64,  // Amplitude falloff per octave
	pub lacunarity: f64,   // Frequency growth per octave
	pub seed: u32,
}

impl Default for NoiseParams {
	fn default() -> Self {
		Self {
			scale: 0.1,
			octaves: 4,
			persistence: 0.5,
			lacunarity: 2.0,
			seed: 0,
		}
	}
}

/// Integer origin shift in [0, 10000) drawn from an RNG seeded with `seed`
pub fn coordinate_offset(seed: u32) -> f64 {
	let mut rng = Pcg64Mcg::seed_from_u64(seed as u64);
	rng.random_range(0..MAX_OFFSET) as f64
}

/// Dense 3D scalar field sampled from fractal Perlin noise
pub struct NoiseField {
	dims: GridDims,
	params: NoiseParams,
	offset: f64,
	noise: Fbm<Perlin>,
}

impl NoiseField {
	pub fn new(dims: GridDims, params: NoiseParams) -> Self {
		let noise = Fbm::<Perlin>::new(params.seed)
			.set_octaves(params.octaves)
			.set_frequency(1.0)
			.set_persistence(params.persistence)
			.set_lacunarity(params.lacunarity);
		let offset = coordinate_offset(params.seed);
		debug!("Noise origin offset for seed {}: {}", params.seed, offset);

		Self { dims, params, offset, noise }
	}

	pub fn dims(&self) -> GridDims {
		self.dims
	}

	pub fn params(&self) -> &NoiseParams {
		&self.params
	}

	pub fn offset(&self) -> f64 {
		self.offset
	}

	/// Noise value at integer cell (i, j, k)
	#[inline]
	pub fn sample(&self, i: usize, j: usize, k: usize) -> f32 {
		let scale = self.params.scale;
		let point = [
			i as f64 * scale + self.offset,
			j as f64 * scale + self.offset,
			k as f64 * scale + self.offset,
		];
		self.noise.get(point) as f32
	}

	/// Evaluate every cell without progress output
	#[cfg(test)]
	pub fn generate(&self) -> Vec<f32> {
		self.generate_with_progress(&ProgressBar::hidden())
	}

	/// Evaluate every cell in I-major order, ticking `pb` once per I slice
	pub fn generate_with_progress(&self, pb: &ProgressBar) -> Vec<f32> {
		let dims = self.dims;
		let mut data = Vec::with_capacity(dims.total_voxels());

		pb.set_length(dims.len_i as u64);
		for i in 0..dims.len_i {
			for j in 0..dims.len_j {
				for k in 0..dims.len_k {
					data.push(self.sample(i, j, k));
				}
			}
			pb.inc(1);
		}
		pb.finish_with_message("Noise generation complete!");

		data
	}
}

/// Progress bar styled for slice-by-slice generation
pub fn slice_progress_bar(len_i: usize) -> ProgressBar {
	let pb = ProgressBar::new(len_i as u64);
	let style = ProgressStyle::default_bar()
		.template("Generating slices: [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
		.map(|style| style.progress_chars("#>-"))
		.unwrap_or_else(|_| ProgressStyle::default_bar());
	pb.set_style(style);
	pb
}
