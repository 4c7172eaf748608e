//! Generate a 3D fractal Perlin noise field as raw float32 values.
//!
//! Usage: generate <X> <Y> <Z> <OUTPUT_PATH> [OPTIONS]
//!
//! Output is X*Y*Z native-endian float32 values, X-major (Z varies fastest).

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::info;

use voxel_float_tools::voxel_grid::float_output::write_f32_raw;
use voxel_float_tools::voxel_grid::grid::{parse_dim, GridDims};
use voxel_float_tools::voxel_grid::info as program_info;
use voxel_float_tools::voxel_grid::noise_field::{slice_progress_bar, NoiseField, NoiseParams};
use voxel_float_tools::voxel_grid::utils::{report_buffer, FieldStats};

#[derive(Parser, Debug)]
#[command(version, about = "Write a 3D Perlin noise field as raw float32")]
struct Cli {
	/// Voxels along X
	#[arg(value_parser = parse_dim)]
	x: usize,

	/// Voxels along Y
	#[arg(value_parser = parse_dim)]
	y: usize,

	/// Voxels along Z
	#[arg(value_parser = parse_dim)]
	z: usize,

	/// Destination file (overwritten)
	output_path: PathBuf,

	/// Grid-to-noise coordinate scale
	#[arg(long, default_value_t = 0.1)]
	scale: f64,

	/// Number of noise octaves summed
	#[arg(long, default_value_t = 4)]
	octaves: usize,

	/// Amplitude falloff per octave
	#[arg(long, default_value_t = 0.5)]
	persistence: f64,

	/// Frequency growth per octave
	#[arg(long, default_value_t = 2.0)]
	lacunarity: f64,

	/// Seed for the noise lattice and origin offset
	#[arg(long, default_value_t = 0)]
	seed: u32,
}

impl Cli {
	fn params(&self) -> NoiseParams {
		NoiseParams {
			scale: self.scale,
			octaves: self.octaves,
			persistence: self.persistence,
			lacunarity: self.lacunarity,
			seed: self.seed,
		}
	}
}

fn run(cli: &Cli) -> Result<()> {
	// Each axis is already positive; this rejects products that overflow
	let dims = GridDims::new(cli.x, cli.y, cli.z)
		.context("grid dimensions rejected")?;
	let field = NoiseField::new(dims, cli.params());
	info!(
		"Generating {} field with {:?} (origin offset {})",
		field.dims(),
		field.params(),
		field.offset()
	);

	let start_time = Instant::now();
	let pb = slice_progress_bar(dims.len_i);
	let data = field.generate_with_progress(&pb);
	info!("Generation Time: {:.3} seconds", start_time.elapsed().as_secs_f64());

	report_buffer("Noise field", &data);
	if let Some(stats) = FieldStats::from_slice(&data) {
		info!("Noise data: {}", stats);
		info!(
			"Min at {:?}, max at {:?}",
			dims.index_to_ijk(stats.min_index),
			dims.index_to_ijk(stats.max_index)
		);
	}

	write_f32_raw(&cli.output_path, &data)
		.with_context(|| format!("failed to write {}", cli.output_path.display()))?;

	info!(
		"[Done] Saved 3D Perlin noise ({}x{}x{}) to {}",
		dims.len_i,
		dims.len_j,
		dims.len_k,
		cli.output_path.display()
	);
	Ok(())
}

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(e) => {
			let _ = e.print();
			// A wrong argument count only prints usage; bad values still fail
			let usage_only = matches!(
				e.kind(),
				ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
			);
			return if e.use_stderr() && !usage_only { ExitCode::FAILURE } else { ExitCode::SUCCESS };
		}
	};

	program_info::init_logging();
	program_info::print_compile_info();

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{:#}", e);
			ExitCode::FAILURE
		}
	}
}
