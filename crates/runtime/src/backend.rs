use async_trait::async_trait;
use c8yop::{ItemQuery, VaultBackend};
use c8yop_protocol::{VaultItem, VaultSummary};

use crate::op::OpCli;

#[async_trait]
impl VaultBackend for OpCli {
	async fn list_vaults(&self) -> c8yop::Result<Vec<VaultSummary>> {
		Ok(self.vault_list().await?)
	}

	async fn list_items(&self, query: &ItemQuery) -> c8yop::Result<Vec<VaultItem>> {
		Ok(self.item_list(query).await?)
	}

	async fn get_item(&self, vault: Option<&str>, item: &str) -> c8yop::Result<VaultItem> {
		Ok(self.item_get(vault, item).await?)
	}

	async fn sign_in(&self) -> c8yop::Result<()> {
		Ok(self.signin().await?)
	}
}
