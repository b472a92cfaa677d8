//! Session synthesis engine for 1Password-backed Cumulocity sessions.
//!
//! A vault item may describe several reachable endpoints. This crate turns
//! items into one [`Session`] per endpoint and decides which session a caller
//! gets:
//!
//! - [`fields`] - username, password, TOTP secret and tenant extraction
//! - [`urls`] - endpoint URL collection and item eligibility
//! - [`synth`] - the item to session fan-out, naming and tag filtering
//! - [`select`] - free-text filtering and the auto-select/interactive rule
//! - [`catalog`] - multi-vault listing over a [`VaultBackend`]
//! - [`locator`] - `op://vault/item` locator URIs
//! - [`mask`] - secret masking for output
//! - [`totp`] - one-time codes

pub mod backend;
pub mod catalog;
pub mod error;
pub mod fields;
pub mod locator;
pub mod mask;
pub mod present;
pub mod select;
pub mod synth;
pub mod totp;
pub mod urls;

pub use backend::{ItemQuery, VaultBackend};
pub use c8yop_protocol::{Session, VaultItem};
pub use catalog::SessionCatalog;
pub use error::{Error, Result};
pub use locator::Locator;
pub use select::{Picker, PickerMetadata, Selection};
