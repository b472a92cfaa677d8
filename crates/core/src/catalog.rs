//! Multi-vault session listing over a [`VaultBackend`].

use std::collections::HashMap;

use c8yop_protocol::{Session, VaultSummary};
use tracing::{debug, warn};

use crate::backend::{ItemQuery, VaultBackend};
use crate::error::{Error, Result};
use crate::synth::{has_any_tag, normalize_display_url, sessions_for_item};
use crate::urls::is_eligible;

const VAULT_ID_LEN: usize = 26;

/// Returns `true` when `value` looks like a vault id (26 ASCII alphanumerics)
/// rather than a display name.
pub fn is_vault_id(value: &str) -> bool {
	value.len() == VAULT_ID_LEN && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Builds session batches from one or more vaults.
pub struct SessionCatalog<'a, B: VaultBackend + ?Sized> {
	backend: &'a B,
	tags: Vec<String>,
}

impl<'a, B: VaultBackend + ?Sized> SessionCatalog<'a, B> {
	/// `tags` restricts listed items and the tags carried by each session.
	pub fn new(backend: &'a B, tags: Vec<String>) -> Self {
		Self { backend, tags }
	}

	/// Lists sessions from `vaults` (ids or names) in the given order, or from
	/// every vault when the list is empty. The batch is sorted by normalized
	/// host.
	///
	/// With several vaults a failing vault is logged and skipped; a single
	/// vault's failure is returned.
	pub async fn list(&self, vaults: &[String]) -> Result<Vec<Session>> {
		let directory = VaultDirectory::load(self.backend).await;
		let mut sessions = Vec::new();

		if vaults.is_empty() {
			sessions = self.list_from_vault(None, &directory).await?;
		} else {
			for vault in vaults {
				match self.list_from_vault(Some(vault), &directory).await {
					Ok(found) => sessions.extend(found),
					Err(err) if vaults.len() > 1 => warn!(vault = %vault, error = %err, "failed to search vault"),
					Err(err) => return Err(err),
				}
			}
		}

		sessions.sort_by(|a, b| normalize_display_url(&a.host).cmp(normalize_display_url(&b.host)));
		debug!(sessions = sessions.len(), vaults = vaults.len(), "listing completed");
		Ok(sessions)
	}

	async fn list_from_vault(&self, vault: Option<&str>, directory: &VaultDirectory) -> Result<Vec<Session>> {
		let vault_id = vault.map(|name| directory.resolve(name)).transpose()?;
		let query = ItemQuery {
			vault_id,
			tags: self.tags.clone(),
		};

		let items = self.backend.list_items(&query).await?;
		let names = directory.names();

		let mut sessions = Vec::new();
		for item in &items {
			if !is_eligible(item) {
				continue;
			}
			if !self.tags.is_empty() && !has_any_tag(&item.tags, &self.tags) {
				debug!(item_id = %item.id, required = ?self.tags, tags = ?item.tags, "item skipped: missing required tags");
				continue;
			}
			sessions.extend(sessions_for_item(item, &names, &self.tags));
		}

		debug!(vault = vault.unwrap_or("*"), items = items.len(), sessions = sessions.len(), "vault searched");
		Ok(sessions)
	}

	/// Fetches one item by id or title and returns its first session.
	///
	/// `vaults` are tried in order; an empty list lets the backend search every
	/// vault.
	pub async fn get_item(&self, vaults: &[String], item: &str) -> Result<Session> {
		if vaults.is_empty() {
			return self.get_from_vault(None, item).await;
		}

		let mut last_err = None;
		for vault in vaults {
			match self.get_from_vault(Some(vault), item).await {
				Ok(session) => return Ok(session),
				Err(err) => {
					debug!(vault = %vault, item, error = %err, "item not found in vault");
					last_err = Some(err);
				}
			}
		}

		Err(Error::ItemNotFound {
			item: item.to_string(),
			vaults: vaults.join(", "),
			reason: last_err.map(|err| err.to_string()).unwrap_or_default(),
		})
	}

	async fn get_from_vault(&self, vault: Option<&str>, item: &str) -> Result<Session> {
		let found = self.backend.get_item(vault, item).await?;
		let directory = VaultDirectory::load(self.backend).await;

		sessions_for_item(&found, &directory.names(), &self.tags)
			.into_iter()
			.next()
			.ok_or_else(|| Error::NoSessionForItem(item.to_string()))
	}
}

/// Vault listing used for name resolution and display names.
struct VaultDirectory {
	vaults: Vec<VaultSummary>,
	load_error: Option<String>,
}

impl VaultDirectory {
	async fn load<B: VaultBackend + ?Sized>(backend: &B) -> Self {
		match backend.list_vaults().await {
			Ok(vaults) => Self { vaults, load_error: None },
			Err(err) => {
				warn!(error = %err, "failed to list vaults");
				Self {
					vaults: Vec::new(),
					load_error: Some(err.to_string()),
				}
			}
		}
	}

	/// Maps a vault id or name to a vault id. An exact (case-insensitive) name
	/// beats a substring match; ties go to listing order.
	fn resolve(&self, vault: &str) -> Result<String> {
		if is_vault_id(vault) {
			return Ok(vault.to_string());
		}
		if let Some(err) = &self.load_error {
			return Err(Error::Backend(err.clone()));
		}

		let wanted = vault.to_lowercase();
		let found = self
			.vaults
			.iter()
			.find(|v| v.name.to_lowercase() == wanted)
			.or_else(|| self.vaults.iter().find(|v| v.name.to_lowercase().contains(&wanted)));

		match found {
			Some(summary) => {
				debug!(vault, vault_id = %summary.id, vault_name = %summary.name, "vault resolved");
				Ok(summary.id.clone())
			}
			None => Err(Error::VaultNotFound(vault.to_string())),
		}
	}

	fn names(&self) -> HashMap<String, String> {
		self.vaults.iter().map(|v| (v.id.clone(), v.name.clone())).collect()
	}
}
