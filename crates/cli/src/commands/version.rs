use std::io::Write;

use colored::Colorize;

use crate::error::Result;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const COMMIT: &str = match option_env!("C8YOP_BUILD_COMMIT") {
	Some(commit) => commit,
	None => "none",
};

const BUILT: &str = match option_env!("C8YOP_BUILD_DATE") {
	Some(date) => date,
	None => "unknown",
};

pub fn run(out: &mut dyn Write) -> Result<()> {
	writeln!(out, "{} version {}", "c8y-session-1password".bold(), VERSION.green())?;
	writeln!(out, "Commit: {}", COMMIT.dimmed())?;
	writeln!(out, "Built: {}", BUILT.dimmed())?;
	Ok(())
}
