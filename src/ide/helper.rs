//! Find a variable's definition by name.
//!
//! A small panel next to the editor: the user types a name, asks for its
//! definition as seen from the cursor, and reads the outcome in a console.
//! Only the strict parse is used here, so malformed code is reported as such
//! instead of being recovered.

use std::collections::VecDeque;

use crate::base::{LanguageLevel, Position};
use crate::oracle::{EditorHost, LanguageService};

use super::translate::LocationTranslator;

pub const NOT_WELL_FORMED: &str = "Code is not well formed.";
pub const NOT_FOUND: &str = "Variable not found.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionFinder {
    query: String,
    /// Newest message first.
    console: VecDeque<String>,
    minimized: bool,
}

impl DefinitionFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn console(&self) -> impl Iterator<Item = &str> {
        self.console.iter().map(String::as_str)
    }

    /// The console as displayed, one message per line.
    pub fn console_text(&self) -> String {
        self.console().collect::<Vec<_>>().join("\n")
    }

    pub fn clear_console(&mut self) {
        self.console.clear();
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    /// Look up the current query at the editor's cursor and jump to its
    /// definition. Returns the editor position jumped to.
    pub fn find<L, E>(
        &mut self,
        language: &L,
        translator: LocationTranslator,
        editor: &mut E,
        source: &str,
        level: LanguageLevel,
        external: &L::External,
    ) -> Option<Position>
    where
        L: LanguageService + ?Sized,
        E: EditorHost + ?Sized,
    {
        let cursor = editor.cursor_position();
        self.log(format!(
            "Searching code for variable {} at (row, col): ({}, {})",
            self.query,
            cursor.row + 1,
            cursor.column
        ));

        let Some(scoped) = language
            .parse(source, level)
            .and_then(|program| language.compute_scopes(program, external))
        else {
            self.log(NOT_WELL_FORMED.to_string());
            return None;
        };

        let Some(definition) =
            language.find_definition(&self.query, cursor.row + 1, cursor.column, &scoped)
        else {
            self.log(NOT_FOUND.to_string());
            return None;
        };

        let location = definition.location;
        self.log(format!(
            "{} found at line {}, col {}",
            self.query, location.start_line, location.start_column
        ));

        let target = translator.to_editor_position(location);
        editor.navigate_to(target.row, target.column);
        Some(target)
    }

    fn log(&mut self, message: String) {
        tracing::debug!("[HELPER] {}", message);
        self.console.push_front(message);
    }
}
