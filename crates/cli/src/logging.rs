use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_LEVEL: &str = "warn";

/// Installs the global subscriber. Logs always go to stderr; stdout carries
/// command output and the native messaging stream.
pub fn init_logging(verbose: u8, configured: Option<&str>) {
	let filter = EnvFilter::try_new(level_directive(verbose, configured)).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(std::io::stderr)
				.with_ansi(std::io::stderr().is_terminal())
				.with_target(false),
		)
		.try_init();
}

/// `-v` → info, `-vv` → debug; otherwise the configured level
/// (`debug|info|warn|warning|error`, any case), defaulting to warn.
pub fn level_directive(verbose: u8, configured: Option<&str>) -> &'static str {
	match verbose {
		0 => configured.and_then(parse_level).unwrap_or(DEFAULT_LEVEL),
		1 => "info",
		_ => "debug",
	}
}

fn parse_level(value: &str) -> Option<&'static str> {
	match value.trim().to_ascii_lowercase().as_str() {
		"debug" => Some("debug"),
		"info" => Some("info"),
		"warn" | "warning" => Some("warn"),
		"error" => Some("error"),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_beats_configuration() {
		assert_eq!(level_directive(1, Some("error")), "info");
		assert_eq!(level_directive(3, None), "debug");
	}

	#[test]
	fn configured_level_is_parsed_leniently() {
		assert_eq!(level_directive(0, Some("WARNING")), "warn");
		assert_eq!(level_directive(0, Some("Debug")), "debug");
		assert_eq!(level_directive(0, Some("verbose")), "warn");
		assert_eq!(level_directive(0, None), "warn");
	}
}
