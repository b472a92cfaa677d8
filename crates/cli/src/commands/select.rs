use std::io::Write;

use c8yop::select::{populate_totp, select_session};
use c8yop::{Locator, Picker, PickerMetadata, Selection, SessionCatalog, VaultBackend};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::{CliError, Result};
use crate::output::{OutputFormat, write_session};

/// Effective inputs of a session lookup after flags, `--uri` and the
/// environment are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectArgs {
	pub vaults: Vec<String>,
	pub tags: Vec<String>,
	pub item: Option<String>,
	pub filter: String,
	pub format: OutputFormat,
	pub reveal: bool,
	pub no_color: bool,
}

impl SelectArgs {
	/// Flags win over `--uri`, which wins over the environment.
	pub fn resolve(cli: &Cli, settings: &Settings) -> Result<Self> {
		let located = cli.uri.as_deref().map(Locator::parse).transpose().map_err(CliError::InvalidUri)?;

		let vault = cli.vault.clone().or_else(|| located.as_ref().map(|uri| uri.vault.clone()));
		let item = cli
			.item
			.clone()
			.or_else(|| located.map(|uri| uri.item))
			.or_else(|| settings.item.clone())
			.filter(|item| !item.trim().is_empty());

		Ok(Self {
			vaults: settings.effective_vaults(vault.as_slice()),
			tags: settings.effective_tags(cli.tags.as_slice()),
			item,
			filter: cli.filter.clone().unwrap_or_default(),
			format: cli.output,
			reveal: cli.reveal,
			no_color: cli.no_color(),
		})
	}

	pub fn metadata(&self) -> PickerMetadata {
		PickerMetadata {
			vaults: self.vaults.clone(),
			tags: self.tags.clone(),
			filter: self.filter.clone(),
			no_color: self.no_color,
		}
	}
}

/// Prints the requested item's session, or selects one from the listing.
pub async fn run(args: &SelectArgs, backend: &dyn VaultBackend, picker: &mut dyn Picker, out: &mut dyn Write) -> Result<()> {
	let catalog = SessionCatalog::new(backend, args.tags.clone());

	if let Some(item) = &args.item {
		debug!(item = %item, vaults = ?args.vaults, "fetching item directly");
		let mut session = catalog.get_item(&args.vaults, item).await?;
		populate_totp(&mut session);
		return write_session(out, &session, args.format, args.reveal);
	}

	let batch = catalog.list(&args.vaults).await?;
	match select_session(&batch, &args.metadata(), picker)? {
		Selection::Chosen(session) => write_session(out, &session, args.format, args.reveal),
		Selection::Cancelled => {
			info!("selection cancelled");
			Ok(())
		}
	}
}
