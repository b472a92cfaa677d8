//! Time-based one-time codes (RFC 6238, SHA-1, 6 digits, 30 s step).

use std::time::{SystemTime, UNIX_EPOCH};

use totp_rs::{Algorithm, Secret, TOTP};

use crate::error::{Error, Result};

const DIGITS: usize = 6;
const STEP: u64 = 30;
/// Codes with fewer seconds than this left in their window are skipped.
const MIN_REMAINING: u64 = 5;

const OTPAUTH_SCHEME: &str = "otpauth://";

/// Generates the code valid at `unix_seconds`.
///
/// `secret` is base32 (spaces, lowercase and padding tolerated) or an
/// `otpauth://` URI carrying a `secret` parameter.
pub fn code_at(secret: &str, unix_seconds: u64) -> Result<String> {
	let bytes = decode_secret(secret)?;
	let totp = TOTP::new_unchecked(Algorithm::SHA1, DIGITS, 1, STEP, bytes);
	Ok(totp.generate(unix_seconds))
}

/// Generates the code to hand out now. Close to the end of a window the next
/// window's code is returned so it stays valid long enough to be used.
pub fn current_code(secret: &str) -> Result<String> {
	let now = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map_err(|err| Error::Totp(err.to_string()))?
		.as_secs();
	code_at(secret, lookahead_time(now))
}

/// Shifts `now` into the next window when fewer than five seconds remain.
pub fn lookahead_time(now: u64) -> u64 {
	if STEP - now % STEP < MIN_REMAINING { now + STEP } else { now }
}

fn decode_secret(secret: &str) -> Result<Vec<u8>> {
	let raw = if secret.trim_start().starts_with(OTPAUTH_SCHEME) {
		otpauth_secret(secret.trim())?
	} else {
		secret.to_string()
	};

	let normalized: String = raw.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_ascii_uppercase();
	let normalized = normalized.trim_end_matches('=');
	if normalized.is_empty() {
		return Err(Error::Totp("secret is empty".into()));
	}

	Secret::Encoded(normalized.to_string()).to_bytes().map_err(|err| Error::Totp(err.to_string()))
}

fn otpauth_secret(uri: &str) -> Result<String> {
	let query = uri.split_once('?').map(|(_, query)| query).unwrap_or_default();
	let value = query
		.split('&')
		.filter_map(|pair| pair.split_once('='))
		.find(|(key, _)| key.eq_ignore_ascii_case("secret"))
		.map(|(_, value)| value)
		.ok_or_else(|| Error::Totp("otpauth URI has no secret parameter".into()))?;

	urlencoding::decode(value).map(|v| v.into_owned()).map_err(|err| Error::Totp(err.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	// base32("12345678901234567890")
	const RFC_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

	#[test]
	fn matches_rfc6238_vectors() {
		assert_eq!(code_at(RFC_SECRET, 59).unwrap(), "287082");
		assert_eq!(code_at(RFC_SECRET, 1_111_111_109).unwrap(), "081804");
		assert_eq!(code_at(RFC_SECRET, 1_234_567_890).unwrap(), "005924");
	}

	#[test]
	fn tolerates_formatting_noise() {
		let noisy = "gezd gnbv gy3t qojq gezd gnbv gy3t qojq";
		assert_eq!(code_at(noisy, 59).unwrap(), "287082");
	}

	#[test]
	fn accepts_otpauth_uris() {
		let uri = format!("otpauth://totp/Example:admin?secret={RFC_SECRET}&issuer=Example");
		assert_eq!(code_at(&uri, 59).unwrap(), "287082");
		assert!(code_at("otpauth://totp/Example?issuer=x", 59).is_err());
	}

	#[test]
	fn rejects_invalid_secrets() {
		assert!(matches!(code_at("", 59), Err(Error::Totp(_))));
		assert!(matches!(code_at("not base32!", 59), Err(Error::Totp(_))));
	}

	#[test]
	fn looks_ahead_near_window_end() {
		assert_eq!(lookahead_time(0), 0);
		assert_eq!(lookahead_time(25), 25);
		assert_eq!(lookahead_time(26), 56);
		assert_eq!(lookahead_time(29), 59);
		assert_eq!(lookahead_time(30), 30);
	}

	#[test]
	fn current_code_has_six_digits() {
		let code = current_code(RFC_SECRET).unwrap();
		assert_eq!(code.len(), 6);
		assert!(code.chars().all(|c| c.is_ascii_digit()));
	}
}
