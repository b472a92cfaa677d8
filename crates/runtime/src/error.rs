use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
	#[error("could not find 'op' (1Password CLI). Check if it is installed on your machine")]
	NotInstalled,

	#[error("not signed in to 1Password. Please run 'op signin' first")]
	NotSignedIn,

	#[error("failed to run `{command}`: {source}")]
	Spawn {
		command: String,
		#[source]
		source: std::io::Error,
	},

	#[error("`{command}` failed ({status}): {stderr}")]
	CommandFailed { command: String, status: String, stderr: String },

	#[error("failed to parse output of `{command}`: {source}")]
	Decode {
		command: String,
		#[source]
		source: serde_json::Error,
	},

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl From<RuntimeError> for c8yop::Error {
	fn from(err: RuntimeError) -> Self {
		c8yop::Error::Backend(err.to_string())
	}
}
