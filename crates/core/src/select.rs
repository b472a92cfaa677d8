//! Free-text filtering and the session selection rule.
//!
//! Selection works on a batch of sessions from one listing:
//!
//! 1. an empty batch is [`Error::NoSessions`]
//! 2. the filter narrows the batch; nothing left is [`Error::NoMatch`]
//! 3. exactly one match is chosen without asking
//! 4. several matches go to a [`Picker`]; declining is [`Selection::Cancelled`]
//!
//! The chosen session is then completed from the unfiltered batch.

use c8yop_protocol::Session;
use tracing::debug;

use crate::error::{Error, Result};
use crate::totp;

/// Context shown alongside the candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerMetadata {
	pub vaults: Vec<String>,
	pub tags: Vec<String>,
	pub filter: String,
	pub no_color: bool,
}

/// Interactive chooser.
pub trait Picker {
	/// Returns the index of the chosen session, or `None` when the user
	/// declines.
	fn pick(&mut self, sessions: &[Session], meta: &PickerMetadata) -> Result<Option<usize>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
	Chosen(Box<Session>),
	Cancelled,
}

/// Keeps sessions whose name, item title or host contains `filter`,
/// ignoring case. An empty filter keeps everything.
pub fn filter_sessions(sessions: &[Session], filter: &str) -> Vec<Session> {
	if filter.is_empty() {
		return sessions.to_vec();
	}

	sessions.iter().filter(|session| session_matches(session, filter)).cloned().collect()
}

/// Case-insensitive substring test over name, item title and host.
pub fn session_matches(session: &Session, filter: &str) -> bool {
	let needle = filter.to_lowercase();
	[&session.name, &session.item_name, &session.host]
		.iter()
		.any(|value| value.to_lowercase().contains(&needle))
}

/// Applies the filter in `meta` to a non-empty batch.
pub fn matching_sessions(batch: &[Session], meta: &PickerMetadata) -> Result<Vec<Session>> {
	if batch.is_empty() {
		return Err(Error::NoSessions {
			vaults: meta.vaults.clone(),
			tags: meta.tags.clone(),
		});
	}

	let matches = filter_sessions(batch, &meta.filter);
	if matches.is_empty() {
		return Err(Error::NoMatch(meta.filter.clone()));
	}
	Ok(matches)
}

/// Runs the full selection rule over `batch`.
pub fn select_session(batch: &[Session], meta: &PickerMetadata, picker: &mut dyn Picker) -> Result<Selection> {
	let matches = matching_sessions(batch, meta)?;
	debug!(total = batch.len(), matched = matches.len(), filter = %meta.filter, "sessions filtered");

	if let [only] = matches.as_slice() {
		return Ok(chosen(only.clone(), batch));
	}

	pick_from(&matches, batch, meta, picker)
}

/// Always asks the picker, even for a single candidate. The filter is not
/// applied.
pub fn pick_session(batch: &[Session], meta: &PickerMetadata, picker: &mut dyn Picker) -> Result<Selection> {
	if batch.is_empty() {
		return Err(Error::NoSessions {
			vaults: meta.vaults.clone(),
			tags: meta.tags.clone(),
		});
	}
	pick_from(batch, batch, meta, picker)
}

fn pick_from(candidates: &[Session], batch: &[Session], meta: &PickerMetadata, picker: &mut dyn Picker) -> Result<Selection> {
	let Some(index) = picker.pick(candidates, meta)? else {
		return Ok(Selection::Cancelled);
	};

	let session = candidates
		.get(index)
		.cloned()
		.ok_or_else(|| Error::Picker(format!("index {index} out of range for {} sessions", candidates.len())))?;
	Ok(chosen(session, batch))
}

fn chosen(mut session: Session, batch: &[Session]) -> Selection {
	populate_from_source(&mut session, batch);
	Selection::Chosen(Box::new(session))
}

/// Copies the password from the batch entry with the same item id and
/// computes a fresh TOTP code.
pub fn populate_from_source(target: &mut Session, source: &[Session]) {
	if let Some(origin) = source.iter().find(|s| s.item_id == target.item_id) {
		target.password = origin.password.clone();
		if target.totp_secret.is_empty() {
			target.totp_secret = origin.totp_secret.clone();
		}
	}
	populate_totp(target);
}

/// Fills `session.totp` from its secret. A secret that cannot be used leaves
/// the code empty.
pub fn populate_totp(session: &mut Session) {
	if session.totp_secret.is_empty() {
		return;
	}
	match totp::current_code(&session.totp_secret) {
		Ok(code) => session.totp = code,
		Err(err) => debug!(item_id = %session.item_id, error = %err, "totp not generated"),
	}
}
