use c8yop_protocol::Session;

/// Placeholder written over secrets in unrevealed output.
pub const REDACTED: &str = "***";

/// Returns a copy of `session` with password, TOTP code and TOTP secret
/// replaced by [`REDACTED`] unless `reveal` is set. Empty fields stay empty.
pub fn masked(session: &Session, reveal: bool) -> Session {
	let mut out = session.clone();
	if reveal {
		return out;
	}

	for secret in [&mut out.password, &mut out.totp, &mut out.totp_secret] {
		if !secret.is_empty() {
			*secret = REDACTED.to_string();
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn session() -> Session {
		Session {
			name: "Prod".into(),
			username: "admin".into(),
			password: "s3cret".into(),
			totp: "123456".into(),
			totp_secret: "JBSWY3DPEHPK3PXP".into(),
			..Default::default()
		}
	}

	#[test]
	fn masks_secrets_without_touching_the_source() {
		let source = session();
		let out = masked(&source, false);

		assert_eq!(out.password, REDACTED);
		assert_eq!(out.totp, REDACTED);
		assert_eq!(out.totp_secret, REDACTED);
		assert_eq!(out.username, "admin");
		assert_eq!(source, session());
	}

	#[test]
	fn empty_secrets_stay_empty() {
		let out = masked(
			&Session {
				password: "x".into(),
				..Default::default()
			},
			false,
		);
		assert_eq!(out.password, REDACTED);
		assert!(out.totp.is_empty());
		assert!(out.totp_secret.is_empty());
	}

	#[test]
	fn reveal_returns_an_identical_copy() {
		assert_eq!(masked(&session(), true), session());
	}
}
