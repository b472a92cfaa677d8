//! Endpoint URL collection and item eligibility.

use c8yop_protocol::{ItemField, LOGIN_CATEGORY, VaultItem};
use tracing::debug;

/// Where a collected URL was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlOrigin {
	/// The item's structured URL list.
	Structured,
	/// A custom field holding a URL.
	Field,
}

/// A candidate endpoint URL of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSource {
	pub url: String,
	pub label: String,
	pub primary: bool,
	pub origin: UrlOrigin,
}

/// Returns `true` when `field` holds an endpoint URL.
///
/// The value must be non-blank and either the label is `website`/`url`
/// (any case) or the field type is exactly `URL`.
pub fn is_url_field(field: &ItemField) -> bool {
	if field.value.trim().is_empty() {
		return false;
	}
	field.label.eq_ignore_ascii_case("website") || field.label.eq_ignore_ascii_case("url") || field.field_type == "URL"
}

/// Collects every URL of `item`, primary entries first.
///
/// Structured URLs come before field URLs; the sort is stable so discovery
/// order is kept within the primary and non-primary partitions. Duplicated
/// values are kept.
pub fn collect_urls(item: &VaultItem) -> Vec<UrlSource> {
	let mut urls: Vec<UrlSource> = item
		.urls
		.iter()
		.map(|url| UrlSource {
			url: url.href.clone(),
			label: url.label.clone(),
			primary: url.primary,
			origin: UrlOrigin::Structured,
		})
		.chain(item.fields.iter().filter(|field| is_url_field(field)).map(|field| UrlSource {
			url: field.value.clone(),
			label: field.label.clone(),
			primary: false,
			origin: UrlOrigin::Field,
		}))
		.collect();

	urls.sort_by_key(|url| !url.primary);
	urls
}

/// Returns `true` when `item` may be synthesized into sessions: it must be a
/// login and expose at least one URL.
pub fn is_eligible(item: &VaultItem) -> bool {
	if item.category != LOGIN_CATEGORY {
		debug!(item_id = %item.id, category = %item.category, "item skipped: not a login");
		return false;
	}

	if !item.urls.is_empty() {
		return true;
	}

	let url_fields = item.fields.iter().filter(|field| is_url_field(field)).count();
	if url_fields == 0 {
		debug!(item_id = %item.id, "item skipped: no urls found");
		return false;
	}

	true
}
