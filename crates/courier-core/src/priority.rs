//! Package priority classification shared across all courier crates.
//!
//! Exactly two levels exist.  Dispatch processes the urgent batch before the
//! normal batch; [`Priority::ALL`] fixes that order so every consumer agrees
//! on it.

/// How soon a package must go out.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    /// Delivered in the first batch of a dispatch pass.
    Urgent,
    /// Delivered after all urgent packages.
    Normal,
}

impl Priority {
    /// All priorities in dispatch order (urgent first).
    pub const ALL: [Priority; 2] = [Priority::Urgent, Priority::Normal];

    /// Human-readable label, useful for CSV column values and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::Normal => "normal",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
