//! Item shapes as printed by `op item get --format json`.

use serde::{Deserialize, Serialize};

/// Category value carried by login items.
pub const LOGIN_CATEGORY: &str = "LOGIN";

/// Reference to the vault owning an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultRef {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub name: String,
}

/// Entry of `op vault list --format json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultSummary {
	pub id: String,
	#[serde(default)]
	pub name: String,
}

/// A credential record from the vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultItem {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub category: String,
	#[serde(default)]
	pub vault: VaultRef,
	#[serde(default)]
	pub fields: Vec<ItemField>,
	#[serde(default)]
	pub urls: Vec<ItemUrl>,
	#[serde(default)]
	pub tags: Vec<String>,
}

/// A field of an item, built-in (username, password) or custom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemField {
	#[serde(default)]
	pub id: String,
	#[serde(default, rename = "type")]
	pub field_type: String,
	#[serde(default)]
	pub purpose: String,
	#[serde(default)]
	pub label: String,
	#[serde(default)]
	pub value: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub totp: Option<TotpDetails>,
}

/// One-time-password details nested in an `OTP` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpDetails {
	#[serde(default)]
	pub secret: String,
}

/// Entry of an item's structured URL list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUrl {
	#[serde(default)]
	pub label: String,
	#[serde(default)]
	pub primary: bool,
	#[serde(default)]
	pub href: String,
}
