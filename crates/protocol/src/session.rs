use serde::{Deserialize, Serialize};

/// An endpoint-specific credential record derived from one vault item and one
/// of its URLs.
///
/// This is the JSON object consumed by go-c8y-cli and the browser extension.
/// Empty fields are omitted rather than emitted as `null` or `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub session_uri: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub name: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub host: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub username: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub password: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub tenant: String,
	/// Last computed one-time code.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub totp: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub totp_secret: String,

	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub item_id: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub item_name: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub vault_id: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub vault_name: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
}
