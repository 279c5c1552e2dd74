//! Severity band value objects and band table resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scored range mapped to a human-readable label and display color.
///
/// Bounds are inclusive on both ends: a total equal to `min` or `max`
/// belongs to the band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBand {
    pub min: u32,
    pub max: u32,
    pub label: String,
    pub color: String,
}

impl SeverityBand {
    /// Creates a new severity band.
    pub fn new(min: u32, max: u32, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            min,
            max,
            label: label.into(),
            color: color.into(),
        }
    }

    /// Checks if a total score falls inside this band.
    pub fn contains(&self, total: u32) -> bool {
        total >= self.min && total <= self.max
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}-{}]", self.label, self.min, self.max)
    }
}

/// An ordered sequence of severity bands.
///
/// Resolution scans bands in listed order and returns the first band
/// containing the score, so overlapping bands resolve deterministically
/// to the earlier entry. The same table type serves survey totals and
/// per-question scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandTable(Vec<SeverityBand>);

impl BandTable {
    /// Creates a band table from an ordered sequence of bands.
    pub fn new(bands: Vec<SeverityBand>) -> Self {
        Self(bands)
    }

    /// Resolves a score to the first band containing it, in listed order.
    ///
    /// Returns `None` when no band covers the score; callers treat that as
    /// a template configuration defect, never as an "Unknown" fallback.
    pub fn resolve(&self, total: u32) -> Option<&SeverityBand> {
        self.0.iter().find(|band| band.contains(total))
    }

    /// Returns the bands in listed order.
    pub fn bands(&self) -> &[SeverityBand] {
        &self.0
    }

    /// Returns the number of bands.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the table has no bands.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
