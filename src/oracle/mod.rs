//! Contracts of the two external services navigation is built on.
//!
//! - [`LanguageService`] parses source text and answers binding queries.
//!   Its locations are 1-indexed in lines.
//! - [`EditorHost`] is the editor widget: tokens, cursor, selection,
//!   navigation and markers, all 0-indexed.
//!
//! Nothing in this module knows how either side is implemented.

mod token;

pub use token::{Token, TokenKind};

use crate::base::{EditorRange, LanguageLevel, Position, SourceLocation};

/// Where a name is defined, as reported by the language service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Definition {
    pub location: SourceLocation,
}

/// Parsing and scope analysis of the teaching language.
pub trait LanguageService {
    /// Parsed representation of one snapshot of source text.
    type Program;
    /// A program with its scopes resolved.
    type ScopedProgram;
    /// Opaque external-library context forwarded to scope analysis.
    type External: Default;

    /// Strict parse. `None` when the text is not a valid program.
    fn parse(&self, source: &str, level: LanguageLevel) -> Option<Self::Program>;

    /// Error-tolerant parse used when [`parse`](Self::parse) fails.
    fn loose_parse(&self, source: &str, level: LanguageLevel) -> Option<Self::Program>;

    fn compute_scopes(
        &self,
        program: Self::Program,
        external: &Self::External,
    ) -> Option<Self::ScopedProgram>;

    /// Definition of `name` visible at a 1-indexed line and 0-indexed column.
    fn find_definition(
        &self,
        name: &str,
        line: u32,
        column: u32,
        scoped: &Self::ScopedProgram,
    ) -> Option<Definition>;

    /// Every occurrence of the binding `name` refers to at a 1-indexed line
    /// and 0-indexed column.
    fn find_all_occurrences(
        &self,
        name: &str,
        line: u32,
        column: u32,
        program: &Self::Program,
    ) -> Option<Vec<SourceLocation>>;
}

/// Opaque handle of a marker registered with the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerHandle(pub u64);

/// How the editor paints a marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerStyle {
    /// Paint only the covered characters.
    #[default]
    Text,
    /// Paint every covered line edge to edge.
    FullLine,
}

impl MarkerStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerStyle::Text => "text",
            MarkerStyle::FullLine => "fullLine",
        }
    }
}

/// The editor widget.
pub trait EditorHost {
    /// The token covering `column` on `row`, if any.
    fn token_at(&self, row: u32, column: u32) -> Option<Token>;

    fn cursor_position(&self) -> Position;

    /// Add a range to the selection without dropping existing ranges.
    fn add_selection_range(&mut self, range: EditorRange);

    fn navigate_to(&mut self, row: u32, column: u32);

    fn add_marker(&mut self, range: EditorRange, class: &str, style: MarkerStyle) -> MarkerHandle;

    fn remove_marker(&mut self, handle: MarkerHandle);

    fn focus(&mut self);
}
