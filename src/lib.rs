pub mod voxel_grid {
	pub mod error;
	pub mod info;
	pub mod grid;
	pub mod utils;
	pub mod raw_input;
	pub mod normalize;
	pub mod float_output;
	pub mod noise_field;
}
