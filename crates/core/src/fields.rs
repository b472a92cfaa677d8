//! Credential extraction from an item's field list.

use c8yop_protocol::ItemField;

/// Field id of the built-in username field.
pub const USERNAME_FIELD_ID: &str = "username";
/// Field id of the built-in password field.
pub const PASSWORD_FIELD_ID: &str = "password";
/// Field type of one-time-password fields.
pub const OTP_FIELD_TYPE: &str = "OTP";

const TENANT_LABEL_PREFIX: &str = "tenant";

/// Credentials pulled out of an item. Missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
	pub username: String,
	pub password: String,
	pub totp_secret: String,
	pub tenant: String,
}

/// Scans `fields` once, in order, then applies the `tenant/username` split.
pub fn extract_fields(fields: &[ItemField]) -> ExtractedFields {
	let mut out = ExtractedFields::default();

	for field in fields {
		match field.id.as_str() {
			USERNAME_FIELD_ID => out.username = field.value.clone(),
			PASSWORD_FIELD_ID => out.password = field.value.clone(),
			_ => {}
		}

		if field.field_type == OTP_FIELD_TYPE {
			out.totp_secret = field.totp.as_ref().map(|totp| totp.secret.clone()).unwrap_or_default();
		}

		if out.tenant.is_empty() && is_tenant_label(&field.label) && !field.value.trim().is_empty() {
			out.tenant = field.value.clone();
		}
	}

	if let Some((tenant, username)) = out.username.split_once('/') {
		if out.tenant.is_empty() {
			out.tenant = tenant.to_string();
		}
		out.username = username.to_string();
	}

	out
}

fn is_tenant_label(label: &str) -> bool {
	label
		.get(..TENANT_LABEL_PREFIX.len())
		.is_some_and(|prefix| prefix.eq_ignore_ascii_case(TENANT_LABEL_PREFIX))
}
