use c8yop::mask::masked;
use c8yop::select::{matching_sessions, populate_from_source};
use c8yop::{PickerMetadata, SessionCatalog, VaultBackend};
use c8yop_protocol::{NativeCommand, NativeReply, NativeRequest, SessionQuery};
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

use super::framing::{FrameError, read_frame, write_json_frame};
use crate::config::Settings;

/// Dispatches native messaging requests against a vault backend.
pub struct NativeHost<'a, B: VaultBackend + ?Sized> {
	backend: &'a B,
	settings: &'a Settings,
}

impl<'a, B: VaultBackend + ?Sized> NativeHost<'a, B> {
	pub fn new(backend: &'a B, settings: &'a Settings) -> Self {
		Self { backend, settings }
	}

	/// Reads, answers and repeats until the peer closes the stream. Returns an
	/// error only when the stream itself breaks.
	pub async fn serve<R, W>(&self, reader: &mut R, writer: &mut W) -> Result<(), FrameError>
	where
		R: AsyncRead + Unpin,
		W: AsyncWrite + Unpin,
	{
		while let Some(body) = read_frame(reader).await? {
			let reply = self.dispatch(&body).await;
			write_json_frame(writer, &reply).await?;
		}
		Ok(())
	}

	/// Answers one frame body. Never fails: problems become error replies.
	pub async fn dispatch(&self, body: &[u8]) -> NativeReply {
		let command = match NativeRequest::decode(body) {
			Ok(command) => command,
			Err(err) => {
				debug!(error = %err, body = %String::from_utf8_lossy(body), "failed to parse request");
				return NativeReply::error(format!("Invalid JSON: {err}"));
			}
		};

		match command {
			NativeCommand::TestAuth => {
				debug!("handling test_auth request");
				NativeReply::auth_result(self.backend.sign_in().await.map_err(|err| err.to_string()))
			}
			NativeCommand::Query(query) => self.query(query).await.unwrap_or_else(|err| {
				debug!(error = %err, "request failed");
				NativeReply::error(err.to_string())
			}),
		}
	}

	async fn query(&self, query: SessionQuery) -> c8yop::Result<NativeReply> {
		let vaults = self.settings.effective_vaults(&query.vaults);
		let tags = self.settings.effective_tags(&query.tags);
		debug!(?vaults, ?tags, search = %query.search, "effective request");

		let batch = SessionCatalog::new(self.backend, tags.clone()).list(&vaults).await?;
		let meta = PickerMetadata {
			vaults,
			tags,
			filter: query.search,
			no_color: true,
		};

		let mut sessions: Vec<_> = matching_sessions(&batch, &meta)?
			.into_iter()
			.map(|mut session| {
				populate_from_source(&mut session, &batch);
				masked(&session, query.reveal)
			})
			.collect();

		if sessions.len() == 1 {
			let session = sessions.remove(0);
			return Ok(NativeReply::Session(Box::new(session)));
		}
		Ok(NativeReply::Sessions(sessions))
	}
}
