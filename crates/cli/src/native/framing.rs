use serde::Serialize;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Largest accepted request body (1 MiB).
pub const MAX_FRAME_LEN: u32 = 1024 * 1024;

const HEADER_LEN: usize = 4;

/// Stream-level failures. All of them end the message loop.
#[derive(Debug, Error)]
pub enum FrameError {
	#[error("incomplete length header: got {0} bytes, expected 4")]
	TruncatedHeader(usize),

	#[error("invalid message length: {0}")]
	InvalidLength(u32),

	#[error("incomplete message: got {got} bytes, expected {expected}")]
	TruncatedBody { got: usize, expected: u32 },

	#[error("reply too large: {0} bytes")]
	ReplyTooLarge(usize),

	#[error("failed to encode reply: {0}")]
	Encode(#[from] serde_json::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Reads one frame body. `Ok(None)` means the peer closed the stream cleanly
/// before sending another header.
///
/// The length is validated before any body byte is read.
pub async fn read_frame<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Option<Vec<u8>>, FrameError> {
	let mut header = [0u8; HEADER_LEN];
	match read_full(reader, &mut header).await? {
		0 => return Ok(None),
		HEADER_LEN => {}
		got => return Err(FrameError::TruncatedHeader(got)),
	}

	let len = u32::from_le_bytes(header);
	debug!(length = len, "received message length");
	if len == 0 || len > MAX_FRAME_LEN {
		return Err(FrameError::InvalidLength(len));
	}

	let mut body = vec![0u8; len as usize];
	let got = read_full(reader, &mut body).await?;
	if got != body.len() {
		return Err(FrameError::TruncatedBody { got, expected: len });
	}
	Ok(Some(body))
}

/// Writes `body` with its length prefix and flushes.
pub async fn write_frame<W: AsyncWrite + Unpin>(writer: &mut W, body: &[u8]) -> Result<(), FrameError> {
	let len = u32::try_from(body.len()).map_err(|_| FrameError::ReplyTooLarge(body.len()))?;
	writer.write_all(&len.to_le_bytes()).await?;
	writer.write_all(body).await?;
	writer.flush().await?;
	Ok(())
}

pub async fn write_json_frame<W: AsyncWrite + Unpin, T: Serialize>(writer: &mut W, value: &T) -> Result<(), FrameError> {
	let body = serde_json::to_vec(value)?;
	write_frame(writer, &body).await
}

/// Fills `buf` unless the stream ends first; returns the bytes read.
async fn read_full<R: AsyncRead + Unpin>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
	let mut filled = 0;
	while filled < buf.len() {
		match reader.read(&mut buf[filled..]).await? {
			0 => break,
			n => filled += n,
		}
	}
	Ok(filled)
}
