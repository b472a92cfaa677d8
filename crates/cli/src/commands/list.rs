use std::io::Write;

use c8yop::select::pick_session;
use c8yop::{Picker, Selection, SessionCatalog, VaultBackend};
use tracing::info;

use super::SelectArgs;
use crate::error::Result;
use crate::output::{OutputFormat, write_session};

/// Always opens the picker over the whole vault/tag batch and prints the
/// choice as JSON. The free-text filter is not applied.
pub async fn run(args: &SelectArgs, backend: &dyn VaultBackend, picker: &mut dyn Picker, out: &mut dyn Write) -> Result<()> {
	let batch = SessionCatalog::new(backend, args.tags.clone()).list(&args.vaults).await?;

	match pick_session(&batch, &args.metadata(), picker)? {
		Selection::Chosen(session) => write_session(out, &session, OutputFormat::Json, args.reveal),
		Selection::Cancelled => {
			info!("selection cancelled");
			Ok(())
		}
	}
}
