//! Convert a raw uint8 volume into normalized float32 samples.
//!
//! Usage: convert <RAW_FILE> [--dims I J K]
//!
//! Writes `<RAW_FILE without extension>_normalized.float32` next to the input.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use voxel_float_tools::voxel_grid::float_output::write_f32_raw;
use voxel_float_tools::voxel_grid::grid::{parse_dim, GridDims};
use voxel_float_tools::voxel_grid::info as program_info;
use voxel_float_tools::voxel_grid::normalize::normalized_output_path;
use voxel_float_tools::voxel_grid::raw_input::read_raw_u8;
use voxel_float_tools::voxel_grid::utils::{report_buffer, FieldStats};

#[derive(Parser, Debug)]
#[command(version, about = "Rescale a raw uint8 volume to float32 values in [0, 1]")]
struct Cli {
	/// Headerless file of unsigned 8-bit voxel samples
	raw_file: PathBuf,

	/// Expected volume dimensions
	#[arg(
		long,
		num_args = 3,
		value_names = ["I", "J", "K"],
		value_parser = parse_dim,
		default_values_t = [
			GridDims::DEFAULT_RAW.len_i,
			GridDims::DEFAULT_RAW.len_j,
			GridDims::DEFAULT_RAW.len_k,
		]
	)]
	dims: Vec<usize>,
}

fn run(cli: &Cli) -> Result<()> {
	let dims = GridDims::new(cli.dims[0], cli.dims[1], cli.dims[2])?;

	let grid = read_raw_u8(&cli.raw_file, dims)?;
	if !grid.is_complete() {
		warn!(
			"Expected {} voxels, but got {} ({} short)",
			grid.expected_voxels(),
			grid.data.len(),
			grid.shortfall()
		);
	}
	info!("Loaded {} voxels ({}) from {}", grid.data.len(), dims, cli.raw_file.display());
	report_buffer("Raw samples", &grid.data);

	let normalized = grid.normalize();
	if let Some(stats) = FieldStats::from_slice(&normalized) {
		info!("Normalized data: {}", stats);
	}

	let out_path = normalized_output_path(&cli.raw_file);
	write_f32_raw(&out_path, &normalized)
		.with_context(|| format!("failed to write {}", out_path.display()))?;

	info!("Converted (normalized) file saved to: {}", out_path.display());
	Ok(())
}

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(e) => {
			let _ = e.print();
			return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
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
