//! Language-service locations to editor ranges.
//!
//! The language service counts lines from 1, the editor from 0. Columns are
//! 0-indexed on both sides. Every location coming back from the language
//! service goes through [`LocationTranslator`] exactly once; translating an
//! already translated range shifts it a line up.

use crate::base::{EditorRange, Position, SourceLocation};

/// Builds the editor's range value from translated endpoints.
pub type RangeFactory = fn(Position, Position) -> EditorRange;

/// Converts [`SourceLocation`]s into editor coordinates.
#[derive(Clone, Copy)]
pub struct LocationTranslator {
    make_range: RangeFactory,
}

impl std::fmt::Debug for LocationTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationTranslator").finish_non_exhaustive()
    }
}

impl Default for LocationTranslator {
    fn default() -> Self {
        Self::new(EditorRange::new)
    }
}

impl LocationTranslator {
    /// Create a translator that builds ranges with `make_range`.
    pub fn new(make_range: RangeFactory) -> Self {
        Self { make_range }
    }

    pub fn to_editor_range(&self, location: SourceLocation) -> EditorRange {
        (self.make_range)(Self::start(location), Self::end(location))
    }

    /// The editor position of the start of `location`.
    pub fn to_editor_position(&self, location: SourceLocation) -> Position {
        Self::start(location)
    }

    fn start(location: SourceLocation) -> Position {
        Position::new(location.start_line.saturating_sub(1), location.start_column)
    }

    fn end(location: SourceLocation) -> Position {
        Position::new(location.end_line.saturating_sub(1), location.end_column)
    }
}
