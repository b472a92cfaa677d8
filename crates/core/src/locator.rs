//! `op://vault/item` locator URIs.

use std::fmt;
use std::str::FromStr;

use c8yop_protocol::Session;

use crate::error::{Error, Result};

const SCHEME: &str = "op://";
const TARGET_URL_QUERY: &str = "?target_url=";

/// A vault/item reference in `op://{vault}/{item}` form.
///
/// The vault part may be a display name or a vault id; the item part may be an
/// item id or title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
	pub vault: String,
	pub item: String,
}

impl Locator {
	pub fn new(vault: impl Into<String>, item: impl Into<String>) -> Self {
		Self {
			vault: vault.into(),
			item: item.into(),
		}
	}

	/// Parses `op://vault/item`. A trailing `?target_url=…` is dropped so URIs
	/// printed by [`Locator::target_uri`] parse back to the same item; any
	/// other `?` belongs to the item.
	pub fn parse(uri: &str) -> Result<Self> {
		let path = uri.strip_prefix(SCHEME).ok_or_else(|| Error::InvalidLocator(uri.to_string()))?;
		let path = path.split_once(TARGET_URL_QUERY).map_or(path, |(path, _)| path);

		let (vault, item) = path
			.split_once('/')
			.ok_or_else(|| Error::InvalidLocator(format!("expected op://vault/item, got {uri}")))?;

		if vault.is_empty() {
			return Err(Error::InvalidLocator(format!("vault cannot be empty, got {uri}")));
		}
		if item.is_empty() {
			return Err(Error::InvalidLocator(format!("item cannot be empty, got {uri}")));
		}

		Ok(Self::new(vault, item))
	}

	/// Builds the machine-oriented output URI of `session`:
	/// `op://{vaultId}/{itemId}` plus a percent-encoded `target_url` when the
	/// session has a host.
	pub fn target_uri(session: &Session) -> Result<String> {
		if session.vault_id.is_empty() || session.item_id.is_empty() {
			return Err(Error::MissingUriParts);
		}

		let mut uri = Locator::new(&session.vault_id, &session.item_id).to_string();
		if !session.host.is_empty() {
			uri.push_str(TARGET_URL_QUERY);
			uri.push_str(&urlencoding::encode(&session.host));
		}
		Ok(uri)
	}
}

impl fmt::Display for Locator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{SCHEME}{}/{}", self.vault, self.item)
	}
}

impl FromStr for Locator {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}
