//! Foundation types for scope-lens.
//!
//! This module provides the coordinate types every other layer speaks:
//! - [`Position`], [`EditorRange`] - 0-indexed editor coordinates
//! - [`SourceLocation`] - 1-indexed line / 0-indexed column locations reported by the language service
//! - [`ScreenPoint`] - pixel coordinates of a pointer event
//! - [`LanguageLevel`] - the active dialect of the teaching language
//! - [`LineIndex`] - byte offset to line/column conversion
//!
//! This module has NO dependencies on other scope-lens modules.

mod level;
mod line_index;
mod location;
mod position;

pub use level::LanguageLevel;
pub use line_index::{LineCol, LineIndex};
pub use location::SourceLocation;
pub use position::{EditorRange, Position, ScreenPoint};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
