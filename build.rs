use std::process::Command;

/// Run `date` with the given format, falling back to "unknown" off-unix.
fn date_with_format(format: &str) -> String {
	Command::new("date")
	.arg(format)
	.output()
	.ok()
	.filter(|output| output.status.success())
	.map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
	.unwrap_or_else(|| "unknown".to_string())
}

fn main() {
	println!("cargo:rustc-env=COMPILE_DATE={}", date_with_format("+%Y-%m-%d"));
	println!("cargo:rustc-env=COMPILE_TIME={}", date_with_format("+%H:%M:%S"));
	println!("cargo:rerun-if-changed=build.rs");
}
