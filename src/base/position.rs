/// Editor-side coordinates.
///
/// Everything in this file is 0-indexed in both rows and columns, matching
/// the editor widget. Locations reported by the language service live in
/// [`SourceLocation`](super::SourceLocation) and must be translated first.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cursor position in the editor (0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Shift the column by `offset`, clamping at the start of the line.
    pub fn offset_column(self, offset: i32) -> Self {
        let column = (i64::from(self.column) + i64::from(offset)).max(0);
        Self {
            row: self.row,
            column: u32::try_from(column).unwrap_or(u32::MAX),
        }
    }
}

/// A range of editor text (0-indexed, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditorRange {
    pub start: Position,
    pub end: Position,
}

impl EditorRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a range from row/column coordinates
    pub fn from_coords(start_row: u32, start_column: u32, end_row: u32, end_column: u32) -> Self {
        Self {
            start: Position::new(start_row, start_column),
            end: Position::new(end_row, end_column),
        }
    }

    /// Check if a position falls within this range
    pub fn contains(&self, position: Position) -> bool {
        if position.row < self.start.row || position.row > self.end.row {
            return false;
        }
        if position.row == self.start.row && position.column < self.start.column {
            return false;
        }
        if position.row == self.end.row && position.column > self.end.column {
            return false;
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Pointer coordinates of a click, in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
