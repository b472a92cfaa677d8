use clap::Parser;
use c8yop_cli::cli::Cli;
use c8yop_cli::config::Settings;
use c8yop_cli::{commands, logging};
use tracing::{error, warn};

/// Exit status when a lookup matched nothing.
const EXIT_NOTHING_FOUND: i32 = 2;

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	let settings = Settings::from_env();
	logging::init_logging(cli.verbose, settings.log_level.as_deref());

	if cli.no_color() {
		colored::control::set_override(false);
	}

	if let Err(err) = commands::dispatch(cli, settings).await {
		if err.is_nothing_found() {
			warn!(target = "c8y-session-1password", error = %err, "nothing found");
			std::process::exit(EXIT_NOTHING_FOUND);
		}
		error!(target = "c8y-session-1password", error = %err, "command failed");
		std::process::exit(1);
	}
}
