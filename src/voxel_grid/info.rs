use std::env;
use std::sync::Once;

/// Initialize `env_logger` at `info` unless RUST_LOG says otherwise
pub fn init_logging() {
	static INIT_LOGGING_ONCE: Once = Once::new();
	INIT_LOGGING_ONCE.call_once(|| {
		env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.format_timestamp_millis()
		.init();
	});
}

/// Print compilation information (only prints once)
pub fn print_compile_info() {
	static PRINT_COMPILE_ONCE: Once = Once::new();
	PRINT_COMPILE_ONCE.call_once(|| {
		let program_name = env::current_exe()
		.ok()
		.as_ref()
		.and_then(|path| path.file_stem())
		.and_then(|name| name.to_str())
		.unwrap_or("Unknown Program")
		.to_string();

		eprintln!("Program: {} ({})", program_name, env!("CARGO_PKG_NAME"));
		eprintln!(
			"Compiled on: {} at {}",
			env!("COMPILE_DATE"),
					 env!("COMPILE_TIME")
		);
		eprintln!("Version: {}\n", env!("CARGO_PKG_VERSION"));
	});
}
