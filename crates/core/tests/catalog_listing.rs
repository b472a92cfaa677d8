use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use c8yop::{Error, ItemQuery, Result, SessionCatalog, VaultBackend};
use c8yop_protocol::{ItemField, ItemUrl, VaultItem, VaultRef, VaultSummary};

const EMPLOYEE_ID: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaa";
const SHARED_ID: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbb";

#[derive(Default)]
struct FakeBackend {
	vaults: Vec<VaultSummary>,
	items: HashMap<String, Vec<VaultItem>>,
	failing_vaults: Vec<String>,
	queries: Mutex<Vec<ItemQuery>>,
}

#[async_trait]
impl VaultBackend for FakeBackend {
	async fn list_vaults(&self) -> Result<Vec<VaultSummary>> {
		Ok(self.vaults.clone())
	}

	async fn list_items(&self, query: &ItemQuery) -> Result<Vec<VaultItem>> {
		self.queries.lock().unwrap().push(query.clone());

		match &query.vault_id {
			Some(id) if self.failing_vaults.contains(id) => Err(Error::Backend(format!("vault {id} unreachable"))),
			Some(id) => Ok(self.items.get(id).cloned().unwrap_or_default()),
			None => Ok(self.items.values().flatten().cloned().collect()),
		}
	}

	async fn get_item(&self, vault: Option<&str>, item: &str) -> Result<VaultItem> {
		self.items
			.iter()
			.filter(|(id, _)| vault.is_none_or(|v| self.vault_matches(id, v)))
			.flat_map(|(_, items)| items)
			.find(|candidate| candidate.id == item || candidate.title == item)
			.cloned()
			.ok_or_else(|| Error::Backend(format!("\"{item}\" isn't an item")))
	}

	async fn sign_in(&self) -> Result<()> {
		Ok(())
	}
}

impl FakeBackend {
	fn vault_matches(&self, id: &str, wanted: &str) -> bool {
		id == wanted || self.vaults.iter().any(|v| v.id == id && v.name == wanted)
	}
}

fn login(id: &str, title: &str, vault_id: &str, tags: &[&str], urls: &[(&str, &str, bool)]) -> VaultItem {
	VaultItem {
		id: id.into(),
		title: title.into(),
		category: "LOGIN".into(),
		vault: VaultRef {
			id: vault_id.into(),
			name: String::new(),
		},
		fields: vec![
			ItemField {
				id: "username".into(),
				value: "t100/admin".into(),
				..Default::default()
			},
			ItemField {
				id: "password".into(),
				value: format!("pw-{id}"),
				..Default::default()
			},
		],
		urls: urls
			.iter()
			.map(|(href, label, primary)| ItemUrl {
				href: (*href).into(),
				label: (*label).into(),
				primary: *primary,
			})
			.collect(),
		tags: tags.iter().map(|t| (*t).into()).collect(),
	}
}

fn backend() -> FakeBackend {
	let mut items = HashMap::new();
	items.insert(
		EMPLOYEE_ID.to_string(),
		vec![
			login("i1", "Zeta", EMPLOYEE_ID, &["c8y"], &[("https://zeta.example.com/", "", true)]),
			login(
				"i2",
				"Multi",
				EMPLOYEE_ID,
				&["C8Y", "prod"],
				&[("https://b.example.com", "Staging", false), ("https://a.example.com", "Production", true)],
			),
			login("i3", "Untagged", EMPLOYEE_ID, &["other"], &[("https://untagged.example.com", "", false)]),
			VaultItem {
				category: "PASSWORD".into(),
				..login("i4", "Not a login", EMPLOYEE_ID, &["c8y"], &[("https://x.example.com", "", false)])
			},
			login("i5", "No urls", EMPLOYEE_ID, &["c8y"], &[]),
		],
	);
	items.insert(
		SHARED_ID.to_string(),
		vec![login("i6", "Shared", SHARED_ID, &["c8y"], &[("http://m.example.com", "", false)])],
	);

	FakeBackend {
		vaults: vec![
			VaultSummary {
				id: EMPLOYEE_ID.into(),
				name: "Employee".into(),
			},
			VaultSummary {
				id: SHARED_ID.into(),
				name: "Shared".into(),
			},
		],
		items,
		..Default::default()
	}
}

fn tags(values: &[&str]) -> Vec<String> {
	values.iter().map(|v| (*v).into()).collect()
}

#[tokio::test]
async fn lists_eligible_tagged_items_sorted_by_host() {
	let backend = backend();
	let catalog = SessionCatalog::new(&backend, tags(&["c8y"]));

	let sessions = catalog.list(&tags(&["Employee"])).await.unwrap();
	let hosts: Vec<_> = sessions.iter().map(|s| s.host.as_str()).collect();
	assert_eq!(hosts, ["https://a.example.com", "https://b.example.com", "https://zeta.example.com/"]);

	let multi = &sessions[0];
	assert_eq!(multi.name, "Multi (Production)");
	assert_eq!(multi.session_uri, "op://Employee/i2");
	assert_eq!(multi.vault_name, "Employee");
	assert_eq!(multi.tenant, "t100");
	assert_eq!(multi.username, "admin");
	assert_eq!(multi.tags, ["C8Y"]);

	let queries = backend.queries.lock().unwrap();
	assert_eq!(queries[0].vault_id.as_deref(), Some(EMPLOYEE_ID));
	assert_eq!(queries[0].tags, ["c8y"]);
}

#[tokio::test]
async fn no_vaults_searches_everything() {
	let backend = backend();
	let catalog = SessionCatalog::new(&backend, tags(&["c8y"]));

	let sessions = catalog.list(&[]).await.unwrap();
	assert_eq!(sessions.len(), 4);
	assert_eq!(sessions[0].host, "https://a.example.com");
	assert_eq!(sessions[2].host, "http://m.example.com");
	assert!(backend.queries.lock().unwrap()[0].vault_id.is_none());
}

#[tokio::test]
async fn vault_names_resolve_to_ids() {
	let backend = backend();
	let catalog = SessionCatalog::new(&backend, tags(&["c8y"]));

	let sessions = catalog.list(&tags(&["shared"])).await.unwrap();
	assert_eq!(sessions.len(), 1);
	assert_eq!(sessions[0].session_uri, "op://Shared/i6");
}

#[tokio::test]
async fn unknown_single_vault_fails() {
	let backend = backend();
	let catalog = SessionCatalog::new(&backend, tags(&["c8y"]));

	let err = catalog.list(&tags(&["Private"])).await.unwrap_err();
	assert_eq!(err.to_string(), "Vault 'Private' not found");
	assert!(backend.queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failing_vault_is_skipped_when_several_are_requested() {
	let mut backend = backend();
	backend.failing_vaults.push(EMPLOYEE_ID.into());
	let catalog = SessionCatalog::new(&backend, tags(&["c8y"]));

	let sessions = catalog.list(&tags(&["Employee", "Private", "Shared"])).await.unwrap();
	assert_eq!(sessions.len(), 1);
	assert_eq!(sessions[0].item_id, "i6");
}

#[tokio::test]
async fn failing_single_vault_is_fatal() {
	let mut backend = backend();
	backend.failing_vaults.push(EMPLOYEE_ID.into());
	let catalog = SessionCatalog::new(&backend, tags(&["c8y"]));

	let err = catalog.list(&tags(&[EMPLOYEE_ID])).await.unwrap_err();
	assert!(matches!(err, Error::Backend(_)));
}

#[tokio::test]
async fn get_item_returns_first_session_with_all_tags_filtered() {
	let backend = backend();
	let catalog = SessionCatalog::new(&backend, tags(&["prod"]));

	let session = catalog.get_item(&[], "Multi").await.unwrap();
	assert_eq!(session.item_id, "i2");
	assert_eq!(session.host, "https://a.example.com");
	assert_eq!(session.password, "pw-i2");
	assert_eq!(session.tags, ["prod"]);
}

#[tokio::test]
async fn get_item_tries_vaults_in_order() {
	let backend = backend();
	let catalog = SessionCatalog::new(&backend, tags(&["c8y"]));

	let session = catalog.get_item(&tags(&["Employee", "Shared"]), "i6").await.unwrap();
	assert_eq!(session.vault_id, SHARED_ID);

	let err = catalog.get_item(&tags(&["Employee", "Shared"]), "missing").await.unwrap_err();
	assert!(matches!(&err, Error::ItemNotFound { vaults, .. } if vaults == "Employee, Shared"));
	assert!(err.to_string().contains("isn't an item"));
}

#[tokio::test]
async fn item_without_urls_still_yields_a_session() {
	let backend = backend();
	let catalog = SessionCatalog::new(&backend, tags(&["c8y"]));

	let session = catalog.get_item(&[], "i5").await.unwrap();
	assert_eq!(session.name, "No urls");
	assert!(session.host.is_empty());
}
