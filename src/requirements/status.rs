//! Reconciliation result types.
//!
//! Each checked entry produces a [`CheckOutcome`]. The ordered list of
//! outcomes is the single source for both partitions, so `found` and
//! `missing` always reproduce the checked list exactly and never overlap.

use serde::Serialize;

/// Whether a required capability was found in the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityStatus {
    /// Present under its own name or one of its aliases.
    Found,
    /// Absent.
    Missing,
}

impl CapabilityStatus {
    /// Whether this is [`CapabilityStatus::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, CapabilityStatus::Found)
    }
}

/// The result of checking one required entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// The required name as written in the table.
    pub name: String,
    /// Found or missing.
    pub status: CapabilityStatus,
    /// The available name that satisfied the entry, when it differs from
    /// the canonical required name (an alias hit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_as: Option<String>,
}

/// Outcome of reconciling a required list against an available set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationResult {
    outcomes: Vec<CheckOutcome>,
    skipped: Vec<String>,
}

impl ReconciliationResult {
    /// Build a result from ordered outcomes and the names dropped by
    /// their activation condition.
    pub fn new(outcomes: Vec<CheckOutcome>, skipped: Vec<String>) -> Self {
        Self { outcomes, skipped }
    }

    /// Every checked entry, in input order.
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Names that were checked (after conditional filtering), in order.
    pub fn required(&self) -> Vec<&str> {
        self.outcomes.iter().map(|o| o.name.as_str()).collect()
    }

    /// Names found, in input order.
    pub fn found(&self) -> Vec<&str> {
        self.names_with(CapabilityStatus::Found)
    }

    /// Names missing, in input order.
    pub fn missing(&self) -> Vec<&str> {
        self.names_with(CapabilityStatus::Missing)
    }

    /// Names excluded by their activation condition.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Number of entries checked.
    pub fn required_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of entries found.
    pub fn found_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_found()).count()
    }

    /// Number of entries missing.
    pub fn missing_count(&self) -> usize {
        self.required_count() - self.found_count()
    }

    /// Whether nothing is missing.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.status.is_found())
    }

    /// Process exit code for CI gating: 0 on success, 1 if anything is missing.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    fn names_with(&self, status: CapabilityStatus) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.status == status)
            .map(|o| o.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, status: CapabilityStatus) -> CheckOutcome {
        CheckOutcome {
            name: name.to_string(),
            status,
            matched_as: None,
        }
    }

    #[test]
    fn empty_result_is_success() {
        let result = ReconciliationResult::default();
        assert!(result.is_success());
        assert_eq!(result.exit_code(), 0);
        assert_eq!(result.required_count(), 0);
        assert_eq!(result.found_count(), 0);
        assert_eq!(result.missing_count(), 0);
    }

    #[test]
    fn partitions_preserve_order() {
        let result = ReconciliationResult::new(
            vec![
                outcome("curl", CapabilityStatus::Found),
                outcome("imap", CapabilityStatus::Missing),
                outcome("gd", CapabilityStatus::Found),
                outcome("xsl", CapabilityStatus::Missing),
            ],
            vec![],
        );
        assert_eq!(result.found(), vec!["curl", "gd"]);
        assert_eq!(result.missing(), vec!["imap", "xsl"]);
        assert_eq!(result.required(), vec!["curl", "imap", "gd", "xsl"]);
        assert_eq!(result.missing_count(), 2);
    }

    #[test]
    fn any_missing_fails() {
        let result = ReconciliationResult::new(
            vec![
                outcome("curl", CapabilityStatus::Found),
                outcome("imap", CapabilityStatus::Missing),
            ],
            vec![],
        );
        assert!(!result.is_success());
        assert_eq!(result.exit_code(), 1);
    }

    #[test]
    fn skipped_entries_are_not_counted() {
        let result = ReconciliationResult::new(
            vec![outcome("curl", CapabilityStatus::Found)],
            vec!["imap".to_string()],
        );
        assert_eq!(result.required_count(), 1);
        assert_eq!(result.skipped(), ["imap".to_string()]);
        assert!(result.is_success());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&CapabilityStatus::Missing).unwrap();
        assert_eq!(json, "\"missing\"");
    }
}
