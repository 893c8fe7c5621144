//! Name-keyed sample registry.
//!
//! Accumulate-then-query: records are registered once at setup time and
//! the registry is read-only afterwards. The job-splitting tool looks
//! entries up by name, one at a time.

use std::collections::BTreeMap;

use cg_core::{Error, Result};

use crate::record::SampleRecord;

/// Registry of analysis samples, keyed by unique sample name.
#[derive(Debug, Clone, Default)]
pub struct SampleRegistry {
    samples: BTreeMap<String, SampleRecord>,
}

impl SampleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under `name`.
    ///
    /// The record is validated first; a name collision fails with
    /// [`Error::DuplicateKey`] and leaves the registry unchanged.
    pub fn register(&mut self, name: impl Into<String>, record: SampleRecord) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::Validation("sample name is empty".to_string()));
        }
        record.validate()?;
        if self.samples.contains_key(&name) {
            return Err(Error::DuplicateKey(name));
        }
        self.samples.insert(name, record);
        Ok(())
    }

    /// Record registered under `name`.
    pub fn get(&self, name: &str) -> Result<&SampleRecord> {
        self.samples.get(name).ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// True if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.samples.contains_key(name)
    }

    /// Read-only snapshot of all entries, ordered by name.
    pub fn all(&self) -> &BTreeMap<String, SampleRecord> {
        &self.samples
    }

    /// Number of registered samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
