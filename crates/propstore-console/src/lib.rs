//! Line-oriented command console for the propstore registry.
//!
//! The console reads one command per line, dispatches it to a
//! [`Registry`](propstore_registry::Registry), and writes a one-line
//! response. It owns the text splitting; the registry owns validation.
//!
//! # Modules
//!
//! - [`command`] — Parsing input lines into [`Command`]s
//! - [`console`] — The [`Console`] loop
//! - [`config`] — [`ConsoleConfig`], loadable from TOML
//! - [`error`] — [`ConsoleError`]

pub mod command;
pub mod config;
pub mod console;
pub mod error;

pub use command::{split_assignment, split_command, Command, ParseError, Target};
pub use config::{ConsoleConfig, SeedProperty};
pub use console::{Console, Flow};
pub use error::{ConsoleError, ConsoleResult};
