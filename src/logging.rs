//! Diagnostic output for the command-line frontend.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an [`EnvFilter`] directive; takes precedence over `--verbose`.
pub const LOG_ENV: &str = "APPLEDOC_LOG";

/// Filter applied when [`LOG_ENV`] is unset or invalid.
pub fn default_directive(verbose: bool) -> &'static str {
	if verbose { "debug" } else { "info" }
}

/// Install a global subscriber writing to stderr, keeping stdout for rendered output.
///
/// Calling this more than once is harmless; later calls leave the first subscriber in place.
pub fn init(verbose: bool) {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
