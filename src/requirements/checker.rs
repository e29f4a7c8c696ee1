//! Capability reconciliation.
//!
//! The [`CapabilityChecker`] compares a required list against an
//! [`EnvironmentSnapshot`]. It performs no I/O: the snapshot is taken once
//! by the caller and passed in, so the checker can be exercised without a
//! PHP installation.

use std::collections::HashSet;

use tracing::debug;

use crate::environment::{series, EnvironmentSnapshot};
use crate::requirements::alias::AliasTable;
use crate::requirements::capability::{canonical_name, RequiredCapability};
use crate::requirements::status::{CapabilityStatus, CheckOutcome, ReconciliationResult};

/// Checks required capabilities against one set of available names.
pub struct CapabilityChecker<'a> {
    aliases: &'a AliasTable,
    available: HashSet<String>,
    version_id: u32,
}

impl<'a> CapabilityChecker<'a> {
    /// Create a checker for an environment snapshot.
    pub fn new(snapshot: &EnvironmentSnapshot, aliases: &'a AliasTable) -> Self {
        Self::from_parts(snapshot.extensions(), snapshot.version_id(), aliases)
    }

    /// Create a checker from raw available names and a version id.
    pub fn from_parts<I, S>(available: I, version_id: u32, aliases: &'a AliasTable) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let available = available
            .into_iter()
            .map(|name| canonical_name(name.as_ref()))
            .collect();
        Self {
            aliases,
            available,
            version_id,
        }
    }

    /// The first candidate name (canonical form, then aliases) present in
    /// the available set.
    pub fn lookup(&self, name: &str) -> Option<String> {
        self.aliases
            .candidates(name)
            .into_iter()
            .find(|candidate| self.available.contains(candidate))
    }

    /// Whether `name` or one of its aliases is available.
    pub fn is_available(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Reconcile the required list, preserving its order.
    ///
    /// Entries whose activation condition excludes the current version are
    /// recorded as skipped and appear in neither partition. Duplicates are
    /// checked independently.
    pub fn check(&self, required: &[RequiredCapability]) -> ReconciliationResult {
        let mut outcomes = Vec::with_capacity(required.len());
        let mut skipped = Vec::new();

        for entry in required {
            if !entry.applies_to(self.version_id) {
                debug!(
                    "Skipping '{}': not applicable to PHP {} ({})",
                    entry.name(),
                    series(self.version_id),
                    self.version_id
                );
                skipped.push(entry.name().to_string());
                continue;
            }

            let canonical = canonical_name(entry.name());
            let outcome = match self.lookup(entry.name()) {
                Some(matched) => {
                    if matched != canonical {
                        debug!("'{}' found under alias '{}'", entry.name(), matched);
                    }
                    CheckOutcome {
                        name: entry.name().to_string(),
                        status: CapabilityStatus::Found,
                        matched_as: (matched != canonical).then_some(matched),
                    }
                }
                None => CheckOutcome {
                    name: entry.name().to_string(),
                    status: CapabilityStatus::Missing,
                    matched_as: None,
                },
            };
            outcomes.push(outcome);
        }

        ReconciliationResult::new(outcomes, skipped)
    }
}

/// Reconcile `required` against a snapshot in one call.
pub fn reconcile(
    required: &[RequiredCapability],
    snapshot: &EnvironmentSnapshot,
    aliases: &AliasTable,
) -> ReconciliationResult {
    CapabilityChecker::new(snapshot, aliases).check(required)
}
