//! Rendering of a selected session.

mod format;

use std::io::Write;

use c8yop::mask::masked;
use c8yop::{Locator, Session};

pub use format::OutputFormat;

use crate::error::Result;

/// Renders `session` in `format`. JSON output masks secrets unless `reveal`.
pub fn render(session: &Session, format: OutputFormat, reveal: bool) -> Result<String> {
	match format {
		OutputFormat::Json => Ok(serde_json::to_string_pretty(&masked(session, reveal))?),
		OutputFormat::Uri => Ok(Locator::target_uri(session)?),
	}
}

pub fn write_session(out: &mut dyn Write, session: &Session, format: OutputFormat, reveal: bool) -> Result<()> {
	let rendered = render(session, format, reveal)?;
	writeln!(out, "{rendered}")?;
	out.flush()?;
	Ok(())
}
