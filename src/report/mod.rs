//! Reconciliation report formatters.
//!
//! This module renders a [`ReconciliationResult`] either as the
//! line-oriented human report or as JSON for tooling.

pub mod human;
pub mod json;

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::environment::EnvironmentSnapshot;
use crate::requirements::ReconciliationResult;

/// Output format for the extension report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Line-oriented report for people and CI logs.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// A reconciliation together with the snapshot it was computed from.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionReport<'a> {
    pub snapshot: &'a EnvironmentSnapshot,
    pub result: &'a ReconciliationResult,
}

impl<'a> ExtensionReport<'a> {
    /// Pair a result with its snapshot.
    pub fn new(snapshot: &'a EnvironmentSnapshot, result: &'a ReconciliationResult) -> Self {
        Self { snapshot, result }
    }
}

/// Trait for formatting an extension report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &ExtensionReport<'_>, writer: &mut W)
        -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
