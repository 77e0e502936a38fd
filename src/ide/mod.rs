//! Cursor-driven navigation features.
//!
//! Everything here talks to the outside world only through the
//! [`LanguageService`](crate::oracle::LanguageService) and
//! [`EditorHost`](crate::oracle::EditorHost) traits.
//!
//! ## Request flow
//!
//! ```text
//! cursor ─▶ candidates ─▶ snapshot ─▶ language service ─▶ translate ─▶ editor
//! ```
//!
//! - [`resolve_candidates`] picks identifier tokens around the cursor
//! - [`snapshot`] parses the text as it is right now
//! - [`LocationTranslator`] turns 1-indexed lines into editor rows
//! - [`SymbolActions`] runs select-all-occurrences and go-to-definition
//! - [`HighlightManager`] keeps occurrence markers in sync with the cursor
//! - [`ContextMenu`] is the modifier-click action menu
//! - [`Navigator`] wires all of the above to one editor
//! - [`DefinitionFinder`] looks a typed-in name up from the cursor

mod actions;
mod candidates;
mod config;
mod helper;
mod highlight;
mod menu;
mod navigator;
mod snapshot;
mod translate;

pub use actions::{SymbolActions, SymbolQuery};
pub use candidates::{CURSOR_ONLY_OFFSETS, DEFAULT_OFFSETS, resolve_candidates};
pub use config::{DEFAULT_HIGHLIGHT_DELAY, DEFAULT_MARKER_CLASS, HighlightConfig, NavigatorConfig};
pub use helper::{DefinitionFinder, NOT_FOUND, NOT_WELL_FORMED};
pub use highlight::HighlightManager;
pub use menu::{
    ContextMenu, EMPTY_MENU_LABEL, Invocation, MenuEntry, MenuEvent, MenuItem, MenuState, MenuView,
};
pub use navigator::{Dispatched, IdeAction, Navigator, default_menu_items};
pub use snapshot::snapshot;
pub use translate::{LocationTranslator, RangeFactory};
