pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod native;
pub mod output;
pub mod picker;
