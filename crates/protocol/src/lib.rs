//! Wire types for the session bridge.
//!
//! This crate contains the serde-serializable types exchanged with the
//! outside world: the item JSON printed by the 1Password CLI (`op`), the
//! session objects printed to go-c8y-cli, and the native messaging envelopes
//! exchanged with the browser extension.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * 1:1 with the wire: Field names match what `op` and the extension emit
//! * Stable: Changes only when a wire format changes
//!
//! Session synthesis, filtering and masking are built on top of these types
//! in `c8yop`.

pub mod item;
pub mod native;
pub mod session;

pub use item::*;
pub use native::*;
pub use session::*;
