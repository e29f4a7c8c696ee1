//! Required capability definitions.
//!
//! A [`RequiredCapability`] names an extension the runtime must provide,
//! optionally gated on the runtime's numeric version identifier.

use std::fmt;

/// Canonical form of a capability name: trimmed and lowercased.
///
/// Both required names and the names reported by the runtime go through
/// this before they are compared.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Half-open range `[min, max)` over a runtime version identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    min: u32,
    max: u32,
}

impl VersionRange {
    /// Create a range covering `min` up to, but not including, `max`.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Range covering every release of one `major.minor` series in
    /// `PHP_VERSION_ID` form (e.g. `minor_series(8, 3)` is `[80300, 80400)`).
    pub const fn minor_series(major: u32, minor: u32) -> Self {
        let min = major * 10_000 + minor * 100;
        Self::new(min, min + 100)
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound (exclusive).
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether `version_id` falls inside the range.
    pub fn contains(&self, version_id: u32) -> bool {
        self.min <= version_id && version_id < self.max
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

/// A capability the runtime must provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequiredCapability {
    /// Always checked.
    Unconditional(String),

    /// Checked only when the runtime version lies inside `range`.
    ConditionalOn { name: String, range: VersionRange },
}

impl RequiredCapability {
    /// An entry that is always checked.
    pub fn always(name: impl Into<String>) -> Self {
        Self::Unconditional(name.into())
    }

    /// An entry checked only for runtime versions inside `range`.
    pub fn when(name: impl Into<String>, range: VersionRange) -> Self {
        Self::ConditionalOn {
            name: name.into(),
            range,
        }
    }

    /// The name as written in the table (original casing).
    pub fn name(&self) -> &str {
        match self {
            Self::Unconditional(name) => name,
            Self::ConditionalOn { name, .. } => name,
        }
    }

    /// Whether this entry applies to a runtime with the given version id.
    pub fn applies_to(&self, version_id: u32) -> bool {
        match self {
            Self::Unconditional(_) => true,
            Self::ConditionalOn { range, .. } => range.contains(version_id),
        }
    }
}

impl From<&str> for RequiredCapability {
    fn from(name: &str) -> Self {
        Self::always(name)
    }
}
