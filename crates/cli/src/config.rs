//! Process-wide defaults from the environment.
//!
//! Each setting reads a primary variable and falls back to a legacy one:
//!
//! | setting   | primary           | fallback     |
//! |-----------|-------------------|--------------|
//! | vaults    | `C8YOP_VAULT`     | `CYOP_VAULT` |
//! | tags      | `C8YOP_TAGS`      | `CYOP_TAGS`  |
//! | item      | `C8YOP_ITEM`      | `CYOP_ITEM`  |
//! | log level | `C8YOP_LOG_LEVEL` | `LOG_LEVEL`  |

/// Tag applied when no tags are configured anywhere.
pub const DEFAULT_TAG: &str = "c8y";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
	pub vaults: Vec<String>,
	pub tags: Vec<String>,
	pub item: Option<String>,
	pub log_level: Option<String>,
}

impl Settings {
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds settings from an arbitrary variable lookup.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let read = |primary: &str, fallback: &str| {
			lookup(primary)
				.filter(|value| !value.trim().is_empty())
				.or_else(|| lookup(fallback).filter(|value| !value.trim().is_empty()))
		};

		Self {
			vaults: read("C8YOP_VAULT", "CYOP_VAULT").map(|v| split_list(&v)).unwrap_or_default(),
			tags: read("C8YOP_TAGS", "CYOP_TAGS").map(|v| split_list(&v)).unwrap_or_default(),
			item: read("C8YOP_ITEM", "CYOP_ITEM").map(|v| v.trim().to_string()),
			log_level: read("C8YOP_LOG_LEVEL", "LOG_LEVEL"),
		}
	}

	/// Requested vaults (comma lists allowed), else the configured ones.
	/// Empty means every vault.
	pub fn effective_vaults(&self, requested: &[String]) -> Vec<String> {
		let requested = split_all(requested);
		if requested.is_empty() { self.vaults.clone() } else { requested }
	}

	/// Requested tags, else the configured ones, else [`DEFAULT_TAG`].
	pub fn effective_tags(&self, requested: &[String]) -> Vec<String> {
		let requested = split_all(requested);
		if !requested.is_empty() {
			requested
		} else if !self.tags.is_empty() {
			self.tags.clone()
		} else {
			vec![DEFAULT_TAG.to_string()]
		}
	}
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
	value.split(',').map(str::trim).filter(|entry| !entry.is_empty()).map(String::from).collect()
}

fn split_all(values: &[String]) -> Vec<String> {
	values.iter().flat_map(|value| split_list(value)).collect()
}
