use clap::ValueEnum;

/// Output format of the selected session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// Pretty-printed session JSON (default)
	#[default]
	Json,
	/// `op://vault/item` reference with a `target_url` parameter
	Uri,
}
