//! Engine configuration.

use serde::{Deserialize, Serialize};

/// How files are partitioned into addressable segments for paginated reads
/// and range edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Granularity {
    /// One segment per line.
    Line,
    /// Fixed-size groups of `size` lines.
    Page { size: usize },
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::Line
    }
}

/// Engine-wide settings, supplied by the host at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub granularity: Granularity,
}
