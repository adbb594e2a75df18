//! Segment partitioning and bounded range replacement.
//!
//! A file's line sequence is split into ordered, contiguous segments: one
//! per line, or fixed-size pages of lines. `replace_range` recomputes the
//! whole content in memory, so a rejected range can never leave a file
//! partially edited — the caller performs exactly one write with the
//! returned string.

use hull_core::{EngineError, Granularity};

/// Splits content into segments and applies bounded replacements.
#[derive(Debug, Clone, Copy)]
pub struct SegmentEditor {
    granularity: Granularity,
}

impl SegmentEditor {
    pub fn new(granularity: Granularity) -> Self {
        Self { granularity }
    }

    fn lines_per_segment(&self) -> usize {
        match self.granularity {
            Granularity::Line => 1,
            Granularity::Page { size } => size.max(1),
        }
    }

    /// Partition `content` into ordered segments. Concatenating the result
    /// reproduces the content byte-for-byte.
    pub fn segments(&self, content: &str) -> Vec<String> {
        content
            .split_inclusive('\n')
            .collect::<Vec<_>>()
            .chunks(self.lines_per_segment())
            .map(|chunk| chunk.concat())
            .collect()
    }

    /// Replace segments `[start, end]` (inclusive, zero-based) of `content`
    /// with exactly one occurrence of `replacement`, returning the updated
    /// content. `name` identifies the file in error messages.
    pub fn replace_range(
        &self,
        name: &str,
        content: &str,
        start: i64,
        end: i64,
        replacement: &str,
    ) -> Result<String, EngineError> {
        if start < 0 || start > end {
            return Err(EngineError::Range(format!(
                "Invalid segment range [{start}, {end}] for file `{name}`."
            )));
        }
        let segments = self.segments(content);
        if end as usize >= segments.len() {
            return Err(EngineError::Range(format!(
                "Invalid segment range [{start}, {end}] for file `{name}` with {} segments.",
                segments.len()
            )));
        }

        let (start, end) = (start as usize, end as usize);
        let mut updated = String::with_capacity(content.len() + replacement.len());
        for (index, segment) in segments.iter().enumerate() {
            if index < start || index > end {
                updated.push_str(segment);
            } else if index == start {
                updated.push_str(replacement);
                updated.push('\n');
            }
        }
        Ok(updated)
    }
}
