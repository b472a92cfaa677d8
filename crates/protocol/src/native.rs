//! Native messaging envelopes exchanged with the browser extension.

use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Request `type` that triggers a sign-in check instead of a session query.
pub const TEST_AUTH_TYPE: &str = "test_auth";

/// Raw request envelope as sent by the extension.
///
/// Every member is optional and `null` is accepted wherever a value is.
/// Decode it once with [`NativeRequest::into_command`] and dispatch on the
/// resulting [`NativeCommand`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeRequest {
	#[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vaults: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tags: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub search: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub reveal: Option<bool>,
}

/// A decoded request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeCommand {
	/// Check (and if needed trigger) vault authentication.
	TestAuth,
	/// Look up sessions for the given vaults, tags and search text.
	Query(SessionQuery),
}

/// Parameters of a session query. Empty lists mean "use the configured default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionQuery {
	pub vaults: Vec<String>,
	pub tags: Vec<String>,
	pub search: String,
	pub reveal: bool,
}

impl NativeRequest {
	/// Decodes a frame body into a command.
	pub fn decode(body: &[u8]) -> serde_json::Result<NativeCommand> {
		let request: NativeRequest = serde_json::from_slice(body)?;
		Ok(request.into_command())
	}

	pub fn into_command(self) -> NativeCommand {
		if self.kind.as_deref() == Some(TEST_AUTH_TYPE) {
			return NativeCommand::TestAuth;
		}

		NativeCommand::Query(SessionQuery {
			vaults: self.vaults.unwrap_or_default(),
			tags: self.tags.unwrap_or_default(),
			search: self.search.unwrap_or_default(),
			reveal: self.reveal.unwrap_or(false),
		})
	}
}

/// Typed reply envelopes, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyEnvelope {
	AuthResult {
		success: bool,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		error: Option<String>,
	},
	Error {
		error: String,
	},
}

/// Any reply written back to the extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NativeReply {
	Session(Box<Session>),
	Sessions(Vec<Session>),
	Envelope(ReplyEnvelope),
}

impl NativeReply {
	pub fn error(message: impl Into<String>) -> Self {
		NativeReply::Envelope(ReplyEnvelope::Error { error: message.into() })
	}

	pub fn auth_result(outcome: Result<(), String>) -> Self {
		let (success, error) = match outcome {
			Ok(()) => (true, None),
			Err(err) => (false, Some(err)),
		};
		NativeReply::Envelope(ReplyEnvelope::AuthResult { success, error })
	}
}
