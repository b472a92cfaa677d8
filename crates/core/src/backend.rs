use async_trait::async_trait;
use c8yop_protocol::{VaultItem, VaultSummary};

use crate::error::Result;

/// Filter for [`VaultBackend::list_items`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuery {
	/// Restrict to one vault id. `None` lists every accessible vault.
	pub vault_id: Option<String>,
	/// Items must carry at least one of these tags. Empty means no tag filter.
	pub tags: Vec<String>,
}

/// Source of vault data.
///
/// Items returned by `list_items` are fully detailed (fields, URLs and tags
/// populated).
#[async_trait]
pub trait VaultBackend: Send + Sync {
	async fn list_vaults(&self) -> Result<Vec<VaultSummary>>;

	/// Lists detailed login items matching `query`.
	async fn list_items(&self, query: &ItemQuery) -> Result<Vec<VaultItem>>;

	/// Fetches one item by id or title, optionally scoped to a vault id or name.
	async fn get_item(&self, vault: Option<&str>, item: &str) -> Result<VaultItem>;

	/// Verifies (and if needed triggers) authentication with the vault.
	async fn sign_in(&self) -> Result<()>;
}
