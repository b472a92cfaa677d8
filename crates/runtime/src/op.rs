//! Driver for the 1Password CLI.
//!
//! Every call spawns `op` with stdin closed (the bulk pipeline excepted) and
//! captures its output; nothing `op` prints reaches this process's stdout.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;

use c8yop::ItemQuery;
use c8yop_protocol::{VaultItem, VaultSummary};
use serde::de::DeserializeOwned;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{Result, RuntimeError};

const OP_PROGRAM: &str = "op";
const LOGIN_CATEGORY_ARG: &str = "Login";
const BULK_GET_ARGS: [&str; 5] = ["item", "get", "-", "--format", "json"];

/// Handle on a located (and usually signed-in) `op` binary.
#[derive(Debug, Clone)]
pub struct OpCli {
	program: PathBuf,
}

impl OpCli {
	/// Finds `op` on `PATH`.
	pub fn locate() -> Result<Self> {
		let program = which::which(OP_PROGRAM).map_err(|_| RuntimeError::NotInstalled)?;
		debug!(program = %program.display(), "op located");
		Ok(Self { program })
	}

	/// Locates `op` and verifies there is a signed-in account.
	pub async fn connect() -> Result<Self> {
		let cli = Self::locate()?;
		cli.ensure_signed_in().await?;
		Ok(cli)
	}

	/// Uses `program` instead of looking up `op`.
	pub fn with_program(program: impl Into<PathBuf>) -> Self {
		Self { program: program.into() }
	}

	/// `op account get`
	pub async fn ensure_signed_in(&self) -> Result<()> {
		match self.output(&["account", "get"]).await {
			Ok(_) => Ok(()),
			Err(RuntimeError::CommandFailed { stderr, .. }) => {
				debug!(stderr = %stderr, "no signed-in account");
				Err(RuntimeError::NotSignedIn)
			}
			Err(err) => Err(err),
		}
	}

	/// `op signin`, output captured.
	pub async fn signin(&self) -> Result<()> {
		let stdout = self.output(&["signin"]).await?;
		debug!(output = %String::from_utf8_lossy(&stdout).trim(), "op signin completed");
		Ok(())
	}

	/// `op vault list`
	pub async fn vault_list(&self) -> Result<Vec<VaultSummary>> {
		self.run_json(&["vault", "list", "--format", "json"]).await
	}

	/// Lists login items and fetches their details.
	///
	/// Several items are fetched in one `op item list | op item get -`
	/// pipeline, falling back to one `op item get` per item when the pipeline
	/// fails. Items whose details cannot be fetched individually are skipped.
	pub async fn item_list(&self, query: &ItemQuery) -> Result<Vec<VaultItem>> {
		let list_args = list_args(query);
		let list_args: Vec<&str> = list_args.iter().map(String::as_str).collect();
		let listed: Vec<VaultItem> = self.run_json(&list_args).await?;

		match listed.len() {
			0 => Ok(Vec::new()),
			1 => Ok(self.get_each(&listed).await),
			count => {
				debug!(count, "using bulk fetch");
				match self.bulk_get(&list_args).await {
					Ok(items) => Ok(items),
					Err(err) => {
						warn!(error = %err, "bulk fetch failed, falling back to individual fetches");
						Ok(self.get_each(&listed).await)
					}
				}
			}
		}
	}

	/// `op item get ITEM [--vault VAULT]`
	pub async fn item_get(&self, vault: Option<&str>, item: &str) -> Result<VaultItem> {
		let mut args = vec!["item", "get", item, "--format", "json"];
		if let Some(vault) = vault {
			args.extend(["--vault", vault]);
		}
		self.run_json(&args).await
	}

	async fn get_each(&self, listed: &[VaultItem]) -> Vec<VaultItem> {
		let mut items = Vec::with_capacity(listed.len());
		for summary in listed {
			match self.run_json(&["item", "get", summary.id.as_str(), "--format", "json"]).await {
				Ok(item) => items.push(item),
				Err(err) => warn!(item_id = %summary.id, error = %err, "failed to get item details"),
			}
		}
		items
	}

	async fn bulk_get(&self, list_args: &[&str]) -> Result<Vec<VaultItem>> {
		let command = format!("{} | {}", describe(list_args), describe(&BULK_GET_ARGS));
		let start = Instant::now();
		debug!(command = %command, "op command");

		let mut list = Command::new(&self.program)
			.args(list_args)
			.stdin(Stdio::null())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped())
			.kill_on_drop(true)
			.spawn()
			.map_err(|source| RuntimeError::Spawn {
				command: command.clone(),
				source,
			})?;

		let pipe: Stdio = list
			.stdout
			.take()
			.ok_or_else(|| std::io::Error::other("list output not captured"))?
			.try_into()?;

		// Both children run together so the list's stderr is drained while
		// the get consumes its stdout.
		let get = Command::new(&self.program)
			.args(BULK_GET_ARGS)
			.stdin(pipe)
			.kill_on_drop(true)
			.output();
		let (get, list) = tokio::join!(get, list.wait_with_output());
		let get = get.map_err(|source| RuntimeError::Spawn {
			command: command.clone(),
			source,
		})?;
		let list = list?;

		debug!(command = %command, duration_ms = start.elapsed().as_millis() as u64, "op command completed");

		for output in [&get, &list] {
			if !output.status.success() {
				return Err(RuntimeError::CommandFailed {
					command,
					status: output.status.to_string(),
					stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
				});
			}
		}

		Ok(decode_stream(&get.stdout))
	}

	async fn run_json<T: DeserializeOwned>(&self, args: &[&str]) -> Result<T> {
		let stdout = self.output(args).await?;
		serde_json::from_slice(&stdout).map_err(|source| RuntimeError::Decode {
			command: describe(args),
			source,
		})
	}

	async fn output(&self, args: &[&str]) -> Result<Vec<u8>> {
		let command = describe(args);
		let start = Instant::now();
		debug!(command = %command, "op command");

		let output = Command::new(&self.program)
			.args(args)
			.stdin(Stdio::null())
			.kill_on_drop(true)
			.output()
			.await
			.map_err(|source| RuntimeError::Spawn {
				command: command.clone(),
				source,
			})?;

		debug!(command = %command, duration_ms = start.elapsed().as_millis() as u64, "op command completed");

		if !output.status.success() {
			return Err(RuntimeError::CommandFailed {
				command,
				status: output.status.to_string(),
				stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			});
		}
		Ok(output.stdout)
	}
}

fn list_args(query: &ItemQuery) -> Vec<String> {
	let mut args: Vec<String> = ["item", "list", "--format", "json", "--categories", LOGIN_CATEGORY_ARG]
		.into_iter()
		.map(String::from)
		.collect();

	if let Some(vault_id) = &query.vault_id {
		args.push("--vault".into());
		args.push(vault_id.clone());
	}
	for tag in &query.tags {
		args.push("--tags".into());
		args.push(tag.clone());
	}
	args
}

/// Parses concatenated JSON objects. Decoding stops at the first malformed
/// object; everything before it is kept.
fn decode_stream(bytes: &[u8]) -> Vec<VaultItem> {
	let mut items = Vec::new();
	for next in serde_json::Deserializer::from_slice(bytes).into_iter::<VaultItem>() {
		match next {
			Ok(item) => items.push(item),
			Err(err) => {
				warn!(error = %err, parsed = items.len(), "failed to parse item in bulk output");
				break;
			}
		}
	}
	items
}

fn describe(args: &[&str]) -> String {
	let mut command = OP_PROGRAM.to_string();
	for arg in args {
		command.push(' ');
		command.push_str(arg);
	}
	command
}
