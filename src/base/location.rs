//! Language-service coordinates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A location in source text as reported by the language service.
///
/// Lines are 1-indexed, columns are 0-indexed and the end is exclusive.
/// This is NOT the editor's coordinate space: convert through
/// [`LocationTranslator`](crate::ide::LocationTranslator) exactly once
/// before handing a location to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceLocation {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl SourceLocation {
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        debug_assert!(start_line >= 1 && end_line >= 1, "source lines are 1-indexed");
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Check whether a 1-indexed line / 0-indexed column falls inside this location.
    pub fn contains(&self, line: u32, column: u32) -> bool {
        let after_start =
            line > self.start_line || (line == self.start_line && column >= self.start_column);
        let before_end =
            line < self.end_line || (line == self.end_line && column <= self.end_column);
        after_start && before_end
    }
}
