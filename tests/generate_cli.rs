use std::fs;
use std::process::Command;

use tempfile::TempDir;
use voxel_float_tools::voxel_grid::float_output::read_f32_raw;

fn generate() -> Command {
	Command::new(env!("CARGO_BIN_EXE_generate"))
}

#[test]
fn test_two_cubed_writes_eight_values() {
	let temp_dir = TempDir::new().expect("failed to create temp dir");
	let output = temp_dir.path().join("out.float32");

	let status = generate()
		.args(["2", "2", "2"])
		.arg(&output)
		.status()
		.expect("failed to run generate");
	assert!(status.success());
	assert_eq!(fs::metadata(&output).unwrap().len(), 8 * 4);
}

#[test]
fn test_element_count_matches_dims() {
	let temp_dir = TempDir::new().expect("failed to create temp dir");
	let output = temp_dir.path().join("field.float32");

	let status = generate()
		.args(["3", "5", "7"])
		.arg(&output)
		.status()
		.expect("failed to run generate");
	assert!(status.success());
	let values = read_f32_raw(&output).unwrap();
	assert_eq!(values.len(), 105);
	assert!(values.iter().all(|v| v.is_finite()));
}

#[test]
fn test_repeated_runs_are_bit_identical() {
	let temp_dir = TempDir::new().expect("failed to create temp dir");
	let first = temp_dir.path().join("a.float32");
	let second = temp_dir.path().join("b.float32");

	for path in [&first, &second] {
		let status = generate()
			.args(["6", "6", "6"])
			.arg(path)
			.status()
			.expect("failed to run generate");
		assert!(status.success());
	}
	assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_seed_changes_field() {
	let temp_dir = TempDir::new().expect("failed to create temp dir");
	let first = temp_dir.path().join("seed0.float32");
	let second = temp_dir.path().join("seed7.float32");

	for (path, seed) in [(&first, "0"), (&second, "7")] {
		let status = generate()
			.args(["4", "4", "4"])
			.arg(path)
			.args(["--seed", seed])
			.status()
			.expect("failed to run generate");
		assert!(status.success());
	}
	assert_ne!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_three_arguments_prints_usage_and_writes_nothing() {
	let temp_dir = TempDir::new().expect("failed to create temp dir");

	let out = generate()
		.current_dir(temp_dir.path())
		.args(["2", "2", "2"])
		.output()
		.expect("failed to run generate");
	assert!(out.status.success());
	assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
	assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_five_arguments_prints_usage_and_writes_nothing() {
	let temp_dir = TempDir::new().expect("failed to create temp dir");

	let out = generate()
		.current_dir(temp_dir.path())
		.args(["2", "2", "2", "a.float32", "b.float32"])
		.output()
		.expect("failed to run generate");
	assert!(out.status.success());
	assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
	assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_overflowing_dimensions_fail_without_output() {
	let temp_dir = TempDir::new().expect("failed to create temp dir");
	let output = temp_dir.path().join("huge.float32");

	let out = generate()
		.args(["4294967296", "4294967296", "2"])
		.arg(&output)
		.output()
		.expect("failed to run generate");
	assert_eq!(out.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&out.stderr).contains("too many voxels"));
	assert!(!output.exists());
}

#[test]
fn test_non_integer_dimension_is_usage_error() {
	let temp_dir = TempDir::new().expect("failed to create temp dir");
	let output = temp_dir.path().join("bad.float32");

	for dims in [["2", "x", "2"], ["2", "2.5", "2"], ["0", "2", "2"]] {
		let out = generate()
			.args(dims)
			.arg(&output)
			.output()
			.expect("failed to run generate");
		assert_eq!(out.status.code(), Some(1));
		assert!(!output.exists());
	}
}
