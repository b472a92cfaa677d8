//! Browser native messaging host.
//!
//! Chrome-style framing on stdin/stdout: every message is a 4-byte
//! little-endian length followed by that many bytes of UTF-8 JSON. Requests
//! are answered strictly one at a time; a request that cannot be served gets
//! an error reply and the loop keeps going. Only a broken stream ends it.

mod framing;
mod handler;


pub use framing::{FrameError, MAX_FRAME_LEN, read_frame, write_frame, write_json_frame};
pub use handler::NativeHost;

use c8yop_runtime::OpCli;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::Result;

/// Serves native messaging requests on stdin/stdout until the peer closes the
/// stream.
pub async fn run(settings: &Settings) -> Result<()> {
	debug!("starting native messaging host");

	let backend = OpCli::locate().unwrap_or_else(|err| {
		warn!(error = %err, "op not located, requests will fail until it is installed");
		OpCli::with_program("op")
	});

	let host = NativeHost::new(&backend, settings);
	let mut stdin = tokio::io::stdin();
	let mut stdout = tokio::io::stdout();
	host.serve(&mut stdin, &mut stdout).await?;

	debug!("native messaging peer closed the connection");
	Ok(())
}
