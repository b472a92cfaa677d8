use thiserror::Error;

use crate::native::FrameError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error("invalid URI: {0}")]
	InvalidUri(#[source] c8yop::Error),

	#[error(transparent)]
	Session(#[from] c8yop::Error),

	#[error(transparent)]
	Runtime(#[from] c8yop_runtime::RuntimeError),

	#[error("native messaging stream failed: {0}")]
	Frame(#[from] FrameError),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl CliError {
	/// `true` when a lookup matched nothing (as opposed to failing).
	pub fn is_nothing_found(&self) -> bool {
		matches!(self, CliError::Session(err) if err.is_nothing_found())
	}
}
