//! Process driver for the 1Password CLI (`op`).
//!
//! [`OpCli`] is created once per process with [`OpCli::connect`] (or
//! [`OpCli::locate`] when the sign-in check is deferred) and then reused for
//! every lookup. It implements [`c8yop::VaultBackend`].

mod backend;
pub mod error;
pub mod op;

pub use error::{Result, RuntimeError};
pub use op::OpCli;
