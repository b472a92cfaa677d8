use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("invalid op:// URI format: {0}")]
	InvalidLocator(String),

	#[error("no sessions found matching vaults: {vaults:?} and tags: {tags:?}")]
	NoSessions { vaults: Vec<String>, tags: Vec<String> },

	#[error("no sessions found matching filter: {0}")]
	NoMatch(String),

	#[error("Vault '{0}' not found")]
	VaultNotFound(String),

	#[error("item '{item}' not found in any of the specified vaults [{vaults}]: {reason}")]
	ItemNotFound { item: String, vaults: String, reason: String },

	#[error("no valid session found for item '{0}'")]
	NoSessionForItem(String),

	#[error("missing vault or item ID for URI output")]
	MissingUriParts,

	#[error("{0}")]
	Backend(String),

	#[error("invalid TOTP secret: {0}")]
	Totp(String),

	#[error("picker failed: {0}")]
	Picker(String),
}

impl Error {
	/// Lookup-empty conditions are reported as "nothing found", not as failures.
	pub fn is_nothing_found(&self) -> bool {
		matches!(self, Error::NoSessions { .. } | Error::NoMatch(_))
	}
}
