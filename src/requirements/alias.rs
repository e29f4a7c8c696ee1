//! Alias table for capability names.
//!
//! Some extensions are reported by the runtime under a different name than
//! the one used in the required table (`opcache` is listed as
//! `Zend OPcache`). The table groups names that refer to the same
//! capability; every name in a group is an alias of every other.

use std::collections::HashMap;

use super::capability::canonical_name;

/// Alias groups shipped with extcheck.
pub const BUILTIN_ALIAS_GROUPS: &[&[&str]] = &[&["opcache", "zend opcache"]];

/// Data-driven mapping from a canonical name to its equivalent names.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, Vec<String>>,
}

impl AliasTable {
    /// An empty table (no aliases).
    pub fn new() -> Self {
        Self::default()
    }

    /// The table with the built-in alias groups.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for group in BUILTIN_ALIAS_GROUPS {
            table.add_group(group.iter().copied());
        }
        table
    }

    /// Register a group of equivalent names.
    ///
    /// Names are canonicalized. Groups sharing a name are not merged: each
    /// name only gains the members of the groups it was listed in.
    pub fn add_group<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut group: Vec<String> = Vec::new();
        for name in names {
            let name = canonical_name(name.as_ref());
            if !name.is_empty() && !group.contains(&name) {
                group.push(name);
            }
        }

        for name in &group {
            let entry = self.aliases.entry(name.clone()).or_default();
            for other in &group {
                if other != name && !entry.contains(other) {
                    entry.push(other.clone());
                }
            }
        }
    }

    /// Builder form of [`add_group`](Self::add_group).
    pub fn with_group<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_group(names);
        self
    }

    /// Aliases registered for `name` (not including `name` itself).
    pub fn aliases_of(&self, name: &str) -> &[String] {
        self.aliases
            .get(&canonical_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The canonical name followed by each of its aliases.
    pub fn candidates(&self, name: &str) -> Vec<String> {
        let canonical = canonical_name(name);
        let mut candidates = vec![canonical.clone()];
        if let Some(aliases) = self.aliases.get(&canonical) {
            candidates.extend(aliases.iter().cloned());
        }
        candidates
    }

    /// Number of names that have at least one alias.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether the table has no aliases.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
