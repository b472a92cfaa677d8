mod list;
mod select;
mod version;

use std::io::{self, IsTerminal};

use c8yop_runtime::OpCli;

use crate::cli::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::native;
use crate::picker::TuiPicker;

pub use select::SelectArgs;

/// Routes the parsed command line. Without a subcommand a non-terminal stdin
/// switches to native messaging.
pub async fn dispatch(cli: Cli, settings: Settings) -> Result<()> {
	match cli.command {
		Some(Commands::Version) => version::run(&mut io::stdout()),
		Some(Commands::List) => {
			let args = SelectArgs::resolve(&cli, &settings)?;
			let backend = OpCli::connect().await?;
			list::run(&args, &backend, &mut TuiPicker, &mut io::stdout()).await
		}
		None if !io::stdin().is_terminal() => native::run(&settings).await,
		None => {
			let args = SelectArgs::resolve(&cli, &settings)?;
			let backend = OpCli::connect().await?;
			select::run(&args, &backend, &mut TuiPicker, &mut io::stdout()).await
		}
	}
}
