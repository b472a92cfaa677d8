//! Vault item to session fan-out.
//!
//! One item with `T` collected URLs becomes `T` sessions (or a single
//! URL-less session when `T == 0`). Every session of an item shares the same
//! locator URI; the display name and host carry the disambiguation.

use std::collections::HashMap;

use c8yop_protocol::{Session, VaultItem};

use crate::fields::{ExtractedFields, extract_fields};
use crate::locator::Locator;
use crate::urls::{UrlSource, collect_urls};

/// Longest hostname token kept verbatim in a session name.
const MAX_HOSTNAME_TOKEN: usize = 20;
const ELLIPSIS: &str = "...";
const GENERIC_URL_LABEL: &str = "website";

/// Synthesizes the sessions of one item.
///
/// `urls` must already be in collector order (primary first). `vault_name` is
/// the resolved display name used in the locator; when empty the vault id is
/// used instead. `requested_tags` restricts the tags carried by each session
/// but never drops the item.
pub fn synthesize(item: &VaultItem, fields: &ExtractedFields, urls: &[UrlSource], vault_name: &str, requested_tags: &[String]) -> Vec<Session> {
	let vault = if vault_name.is_empty() { item.vault.id.as_str() } else { vault_name };
	let session_uri = Locator::new(vault, &item.id).to_string();
	let tags = filter_tags(&item.tags, requested_tags);

	let template = Session {
		session_uri,
		name: item.title.clone(),
		username: fields.username.clone(),
		password: fields.password.clone(),
		tenant: fields.tenant.clone(),
		totp_secret: fields.totp_secret.clone(),
		item_id: item.id.clone(),
		item_name: item.title.clone(),
		vault_id: item.vault.id.clone(),
		vault_name: vault.to_string(),
		tags,
		..Default::default()
	};

	if urls.is_empty() {
		return vec![template];
	}

	let names = session_names(&item.title, urls);
	urls.iter()
		.zip(names)
		.map(|(source, name)| Session {
			name,
			host: source.url.clone(),
			..template.clone()
		})
		.collect()
}

/// Extracts, collects and synthesizes in one step.
///
/// `vault_names` maps vault ids to display names; the item's own vault name is
/// used when its id is not in the map.
pub fn sessions_for_item(item: &VaultItem, vault_names: &HashMap<String, String>, requested_tags: &[String]) -> Vec<Session> {
	let vault_name = vault_names.get(&item.vault.id).map(String::as_str).unwrap_or(&item.vault.name);
	let fields = extract_fields(&item.fields);
	let urls = collect_urls(item);
	synthesize(item, &fields, &urls, vault_name, requested_tags)
}

fn session_names(title: &str, urls: &[UrlSource]) -> Vec<String> {
	let total = urls.len();
	if total == 1 {
		return vec![title.to_string()];
	}

	let mut label_counts: HashMap<&str, usize> = HashMap::new();
	for source in urls {
		*label_counts.entry(source.label.as_str()).or_default() += 1;
	}

	let mut names: Vec<String> = urls
		.iter()
		.enumerate()
		.map(|(index, source)| {
			let label = source.label.as_str();
			if label_counts.get(label).copied().unwrap_or(0) > 1 {
				let hostname = short_hostname(&source.url);
				if source.primary {
					format!("{title} ({hostname} - Primary)")
				} else {
					format!("{title} ({hostname})")
				}
			} else if !label.is_empty() && !label.eq_ignore_ascii_case(GENERIC_URL_LABEL) {
				format!("{title} ({label})")
			} else if source.primary {
				format!("{title} (Primary)")
			} else {
				format!("{title} (URL {})", index + 1)
			}
		})
		.collect();

	// Hostname tokens can coincide (same first DNS label on two domains).
	let mut name_counts: HashMap<String, usize> = HashMap::new();
	for name in &names {
		*name_counts.entry(name.clone()).or_default() += 1;
	}
	for (index, name) in names.iter_mut().enumerate() {
		if name_counts.get(name.as_str()).copied().unwrap_or(0) > 1 {
			name.push_str(&format!(" (URL {})", index + 1));
		}
	}

	names
}

/// Derives a short token from `url`: scheme and path stripped, first DNS
/// label kept.
///
/// Tokens longer than 20 characters are shortened to their first two
/// hyphen-separated parts, or truncated with an ellipsis when they have no
/// hyphen.
pub fn short_hostname(url: &str) -> String {
	let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
	let host = without_scheme.split('/').next().unwrap_or_default();
	let token = host.split('.').next().unwrap_or_default();

	if token.chars().count() <= MAX_HOSTNAME_TOKEN {
		return token.to_string();
	}

	if token.contains('-') {
		return token.splitn(3, '-').take(2).collect::<Vec<_>>().join("-");
	}

	let mut truncated: String = token.chars().take(MAX_HOSTNAME_TOKEN).collect();
	truncated.push_str(ELLIPSIS);
	truncated
}

/// Returns the item tags matching `requested` (case-insensitively), keeping
/// the item's casing and order. No requested tags means all item tags.
pub fn filter_tags(item_tags: &[String], requested: &[String]) -> Vec<String> {
	if requested.is_empty() {
		return item_tags.to_vec();
	}
	item_tags.iter().filter(|tag| requested.iter().any(|wanted| tags_equal(tag, wanted))).cloned().collect()
}

/// Returns `true` when any of `item_tags` matches any of `requested`.
pub fn has_any_tag(item_tags: &[String], requested: &[String]) -> bool {
	item_tags.iter().any(|tag| requested.iter().any(|wanted| tags_equal(tag, wanted)))
}

fn tags_equal(a: &str, b: &str) -> bool {
	a.to_lowercase() == b.to_lowercase()
}

/// Strips the scheme and one trailing slash for display and ordering.
pub fn normalize_display_url(url: &str) -> &str {
	let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
	rest.strip_suffix('/').unwrap_or(rest)
}
