//! The property registry.
//!
//! [`Registry`] stores properties in a `BTreeMap` keyed by name, so full
//! dumps come out ordered by name. It exclusively owns every [`Property`]:
//! callers only ever see borrows, and removing an entry drops it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

use propstore_types::{Primitive, PrimitiveKind, Property};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{RegistryError, Result};
use crate::infer::infer_kind;
use crate::persist::{NullPersistence, Persistence};

/// Serializable copy of a registry's name and properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub name: String,
    pub properties: BTreeMap<String, Property>,
}

/// A named collection of typed properties.
///
/// Every fallible operation (definition, `get`, `set`, `set_text`,
/// `delete`, save and load) clears the registry's last-error on entry and
/// records the failure message if it fails. Failed operations never change
/// the stored properties.
///
/// The last-error lives in a `RefCell` so that read-only operations can
/// clear it; a registry is meant for one caller at a time.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    name: String,
    properties: BTreeMap<String, Property>,
    last_error: RefCell<Option<String>>,
}

impl Registry {
    /// Create an empty registry with a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Rebuild a registry from a snapshot.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Self {
        Self {
            name: snapshot.name,
            properties: snapshot.properties,
            last_error: RefCell::new(None),
        }
    }

    /// The registry's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The message of the most recent failed operation, if the last
    /// operation failed.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    // ---- Definition ----

    /// Define `name` as a new property of `kind` holding the kind's default.
    pub fn define(&mut self, name: &str, kind: PrimitiveKind) -> Result<()> {
        self.clear_error();
        let result = self.check_new_name(name).map(|()| {
            self.properties.insert(name.to_string(), Property::new(kind));
            debug!(name, %kind, "property defined");
        });
        self.record(result)
    }

    /// Define `name` with a kind inferred from `sample` and store the sample.
    ///
    /// Returns the inferred kind. If the sample does not parse as that kind
    /// nothing is defined.
    pub fn define_inferred(&mut self, name: &str, sample: &str) -> Result<PrimitiveKind> {
        self.clear_error();
        let result = self.check_new_name(name).and_then(|()| {
            let kind = infer_kind(sample);
            let property = Property::parse_as(kind, sample)?;
            self.properties.insert(name.to_string(), property);
            debug!(name, %kind, "property defined by inference");
            Ok(kind)
        });
        self.record(result)
    }

    /// Define each `(name, kind)` pair, skipping the ones that fail.
    ///
    /// Returns the number of properties defined.
    pub fn seed<I, S>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (S, PrimitiveKind)>,
        S: AsRef<str>,
    {
        let mut defined = 0;
        for (name, kind) in entries {
            let name = name.as_ref();
            match self.define(name, kind) {
                Ok(()) => defined += 1,
                Err(e) => warn!(name, %kind, error = %e, "skipping seed property"),
            }
        }
        defined
    }

    // ---- Lookup ----

    /// Returns `true` if `name` is defined. Does not touch the last-error.
    pub fn is_defined(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Borrow the property stored under `name`.
    pub fn get(&self, name: &str) -> Result<&Property> {
        self.clear_error();
        let result = self.properties.get(name).ok_or_else(|| RegistryError::NotDefined {
            name: name.to_string(),
        });
        self.record(result)
    }

    /// Number of defined properties.
    pub fn count(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no properties are defined.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over `(name, property)` pairs ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// One `name = value` line per property, ordered by name.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    // ---- Mutation ----

    /// Copy `source`'s value into the property stored under `name`.
    ///
    /// Fails if the name is empty or undefined, if there is no source, or if
    /// the source's kind differs from the stored kind.
    pub fn set(&mut self, name: &str, source: Option<&Property>) -> Result<()> {
        self.clear_error();
        let result = self.copy_into(name, source);
        self.record(result)
    }

    /// Parse `text` as the stored property's kind and store it.
    pub fn set_text(&mut self, name: &str, text: &str) -> Result<()> {
        self.clear_error();
        let result = self.parse_into(name, text);
        self.record(result)
    }

    /// Remove the property stored under `name`.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        self.clear_error();
        let result = match self.properties.remove(name) {
            Some(_) => {
                debug!(name, "property deleted");
                Ok(())
            }
            None => Err(RegistryError::NotDefined {
                name: name.to_string(),
            }),
        };
        self.record(result)
    }

    /// Replace this registry's name and content with copies of `other`'s.
    pub fn assign_from(&mut self, other: &Registry) {
        self.clear_error();
        self.properties.clear();
        self.name = other.name.clone();
        self.properties = other.properties.clone();
        debug!(name = %self.name, count = self.properties.len(), "registry replaced");
    }

    /// Serializable copy of the registry's name and properties.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            name: self.name.clone(),
            properties: self.properties.clone(),
        }
    }

    // ---- Typed accessors ----

    /// The value stored under `name` as `T`, or `None` if the name is
    /// undefined or holds another kind.
    pub fn get_as<T: Primitive>(&self, name: &str) -> Option<T> {
        self.get(name).ok().and_then(|p| p.value::<T>())
    }

    /// Store `value` under `name`; the stored kind must be `T::KIND`.
    pub fn set_as<T: Primitive>(&mut self, name: &str, value: T) -> Result<()> {
        self.set(name, Some(&Property::from_value(value)))
    }

    pub fn get_text(&self, name: &str) -> Option<String> {
        self.get_as(name)
    }

    pub fn get_i32(&self, name: &str) -> Option<i32> {
        self.get_as(name)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get_as(name)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get_as(name)
    }

    pub fn set_text_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.set_as(name, value.into())
    }

    pub fn set_i32(&mut self, name: &str, value: i32) -> Result<()> {
        self.set_as(name, value)
    }

    pub fn set_i64(&mut self, name: &str, value: i64) -> Result<()> {
        self.set_as(name, value)
    }

    pub fn set_f64(&mut self, name: &str, value: f64) -> Result<()> {
        self.set_as(name, value)
    }

    // ---- Persistence ----

    /// Save through the default backend, which always succeeds.
    pub fn save(&self) -> Result<()> {
        self.save_with(&NullPersistence)
    }

    /// Load through the default backend, which always succeeds.
    pub fn load(&mut self) -> Result<()> {
        self.load_with(&NullPersistence)
    }

    pub fn save_with(&self, backend: &dyn Persistence) -> Result<()> {
        self.clear_error();
        let result = backend.save(self);
        self.record(result)
    }

    pub fn load_with(&mut self, backend: &dyn Persistence) -> Result<()> {
        self.clear_error();
        let result = backend.load(self);
        self.record(result)
    }

    // ---- Internals ----

    fn check_new_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.properties.contains_key(name) {
            return Err(RegistryError::AlreadyDefined {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn stored_mut(&mut self, name: &str) -> Result<&mut Property> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        self.properties
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotDefined {
                name: name.to_string(),
            })
    }

    fn copy_into(&mut self, name: &str, source: Option<&Property>) -> Result<()> {
        let stored = self.stored_mut(name)?;
        let source = source.ok_or_else(|| RegistryError::NullValue {
            name: name.to_string(),
        })?;
        if source.kind() != stored.kind() {
            return Err(RegistryError::TypeMismatch {
                name: name.to_string(),
                expected: stored.kind(),
                actual: source.kind(),
            });
        }
        stored.copy_from(source)?;
        debug!(name, value = %stored, "property set");
        Ok(())
    }

    fn parse_into(&mut self, name: &str, text: &str) -> Result<()> {
        let kind = self.stored_mut(name)?.kind();
        let scratch = Property::parse_as(kind, text)?;
        self.copy_into(name, Some(&scratch))
    }

    fn clear_error(&self) {
        self.last_error.borrow_mut().take();
    }

    fn record<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            debug!(registry = %self.name, error = %e, "registry operation rejected");
            *self.last_error.borrow_mut() = Some(e.to_string());
        }
        result
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, property) in &self.properties {
            writeln!(f, "{name} = {property}")?;
        }
        Ok(())
    }
}
