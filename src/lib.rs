//! # scope-lens
//!
//! Cursor-to-symbol resolution for a teaching-language code editor:
//! select every occurrence of a name, jump to its definition, and keep
//! occurrence highlights in sync with the cursor.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Symbol actions, highlighting, action menu, definition finder
//!   ↓
//! editor    → HeadlessEditor, an in-memory EditorHost
//!   ↓
//! lang      → Reference language service: logos lexer, parser, scopes
//!   ↓
//! oracle    → LanguageService and EditorHost traits, editor tokens
//!   ↓
//! base      → Primitives (Position, EditorRange, SourceLocation, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → oracle → lang → editor → ide)
// ============================================================================

/// Foundation types: coordinates, language level, line index
pub mod base;

/// Contracts of the language service and the editor widget
pub mod oracle;

/// Reference language service for the teaching language
pub mod lang;

/// Headless editor host
pub mod editor;

/// Navigation features built on the oracle traits
pub mod ide;

// Re-export foundation types
pub use base::{EditorRange, LanguageLevel, LineIndex, Position, ScreenPoint, SourceLocation};

// Re-export the contracts
pub use oracle::{
    Definition, EditorHost, LanguageService, MarkerHandle, MarkerStyle, Token, TokenKind,
};

// Re-export the entry points
pub use editor::HeadlessEditor;
pub use ide::{IdeAction, Navigator, NavigatorConfig};
pub use lang::{ExternalLibrary, SourceLanguage};
