use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

const LONG_ABOUT: &str = "\
Smart go-c8y-cli session picker from 1Password vaults

A filter matching exactly one session returns it directly; several matches open
an interactive picker. Items with several URLs yield one session per URL.

Passwords, TOTP codes and TOTP secrets are masked unless --reveal is given.

When stdin is not a terminal the program runs as a browser native messaging
host instead (length-prefixed JSON on stdin/stdout).

Environment:
  C8YOP_VAULT      default vault(s), comma separated (fallback: CYOP_VAULT)
  C8YOP_TAGS       default tags, comma separated (fallback: CYOP_TAGS, then \"c8y\")
  C8YOP_ITEM       default item id or name (fallback: CYOP_ITEM)
  C8YOP_LOG_LEVEL  debug, info, warn or error (fallback: LOG_LEVEL, default warn)";

#[derive(Parser, Debug)]
#[command(name = "c8y-session-1password")]
#[command(about = "go-c8y-cli 1Password session selector")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Vault name(s) or id(s), comma separated
	#[arg(long, global = true, value_name = "VAULTS")]
	pub vault: Option<String>,

	/// Item id or name to fetch directly
	#[arg(long, value_name = "ITEM")]
	pub item: Option<String>,

	/// Item to fetch directly, as op://vault/item
	#[arg(long, value_name = "URI")]
	pub uri: Option<String>,

	/// Tags to filter by, comma separated
	#[arg(long, global = true, value_name = "TAGS")]
	pub tags: Option<String>,

	/// Output format
	#[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
	pub output: OutputFormat,

	/// Show passwords and TOTP values in the output
	#[arg(long, global = true)]
	pub reveal: bool,

	/// Disable colored output
	#[arg(long = "no-color", global = true)]
	pub no_color: bool,

	#[arg(long = "noColor", global = true, hide = true)]
	pub no_color_compat: bool,

	#[arg(long = "loginType", global = true, hide = true, value_name = "TYPE")]
	pub login_type: Option<String>,

	#[arg(long, global = true, hide = true)]
	pub clear: bool,

	/// Free-text filter over session name, item title and host
	pub filter: Option<String>,

	#[command(subcommand)]
	pub command: Option<Commands>,
}

impl Cli {
	pub fn no_color(&self) -> bool {
		self.no_color || self.no_color_compat
	}
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
	/// Interactive session picker (always prompts)
	List,
	/// Print version information
	Version,
}
