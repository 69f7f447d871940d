//! The propstore property registry.
//!
//! This crate owns the mapping from property names to typed
//! [`Property`](propstore_types::Property) values. Names are unique and
//! non-empty, and a property's kind is fixed when it is defined: later writes
//! may change the value but never the kind.
//!
//! # Architecture
//!
//! - **Definition** creates a property with the default value of an explicit
//!   kind, or of a kind inferred from a text sample.
//! - **Writes** go through the stored property's own validation, so a failed
//!   write leaves the registry untouched.
//! - **Dumps** iterate properties ordered by name.
//! - **Persistence** is a pluggable hook; the default backend does nothing and
//!   always succeeds.
//!
//! # Modules
//!
//! - [`error`] — Error types for registry operations
//! - [`infer`] — Kind inference from raw text samples
//! - [`persist`] — The [`Persistence`] trait and [`NullPersistence`]
//! - [`registry`] — The [`Registry`] itself

pub mod error;
pub mod infer;
pub mod persist;
pub mod registry;

pub use error::{RegistryError, Result};
pub use infer::{infer_kind, looks_numeric};
pub use persist::{NullPersistence, Persistence};
pub use registry::{Registry, RegistrySnapshot};
