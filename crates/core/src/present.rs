//! Text shown by interactive pickers.

use c8yop_protocol::Session;

use crate::select::PickerMetadata;
use crate::synth::normalize_display_url;

/// Picker row title: the normalized host, or the session name when there is no
/// host.
pub fn display_title(session: &Session) -> String {
	let host = normalize_display_url(&session.host);
	if host.is_empty() { session.name.clone() } else { host.to_string() }
}

/// Picker row description, e.g. `Username=admin, Tenant=t1, Tags=c8y | uri=op://Employee/abc`.
pub fn display_description(session: &Session) -> String {
	let mut out = format!("Username={}", session.username);
	if !session.tenant.is_empty() {
		out.push_str(&format!(", Tenant={}", session.tenant));
	}
	if !session.tags.is_empty() {
		out.push_str(&format!(", Tags={}", session.tags.join(",")));
	}
	out.push_str(&format!(" | uri={}", session.session_uri));
	out
}

/// Picker heading: session count, vault scope, tags and filter.
pub fn picker_heading(count: usize, meta: &PickerMetadata) -> String {
	let mut parts = vec![format!("Sessions ({count})")];

	parts.push(match meta.vaults.as_slice() {
		[] => "All Vaults".to_string(),
		[vault] => format!("Vault: {vault}"),
		vaults => format!("Vaults: {}", vaults.join(", ")),
	});

	match meta.tags.as_slice() {
		[] => {}
		[tag] => parts.push(format!("Tag: {tag}")),
		tags => parts.push(format!("Tags: {}", tags.join(", "))),
	}

	if !meta.filter.is_empty() {
		parts.push(format!("Filter: {}", meta.filter));
	}

	parts.join(" • ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn title_prefers_normalized_host() {
		let mut session = Session {
			name: "Prod".into(),
			host: "https://prod.example.com/".into(),
			..Default::default()
		};
		assert_eq!(display_title(&session), "prod.example.com");

		session.host.clear();
		assert_eq!(display_title(&session), "Prod");
	}

	#[test]
	fn description_lists_optional_parts() {
		let mut session = Session {
			username: "admin".into(),
			session_uri: "op://Employee/abc".into(),
			..Default::default()
		};
		assert_eq!(display_description(&session), "Username=admin | uri=op://Employee/abc");

		session.tenant = "t1".into();
		session.tags = vec!["c8y".into(), "prod".into()];
		assert_eq!(display_description(&session), "Username=admin, Tenant=t1, Tags=c8y,prod | uri=op://Employee/abc");
	}

	#[test]
	fn heading_describes_scope() {
		let meta = PickerMetadata {
			vaults: vec!["Employee".into()],
			tags: vec!["c8y".into()],
			filter: "prod".into(),
			..Default::default()
		};
		assert_eq!(picker_heading(3, &meta), "Sessions (3) • Vault: Employee • Tag: c8y • Filter: prod");

		let meta = PickerMetadata {
			vaults: vec!["A".into(), "B".into()],
			tags: vec!["c8y".into(), "prod".into()],
			..Default::default()
		};
		assert_eq!(picker_heading(2, &meta), "Sessions (2) • Vaults: A, B • Tags: c8y, prod");

		assert_eq!(picker_heading(0, &PickerMetadata::default()), "Sessions (0) • All Vaults");
	}
}
