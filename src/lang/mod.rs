//! Reference language service for the teaching language.
//!
//! A JavaScript subset organised in chapters: chapter 1 and 2 programs are
//! purely functional (`const`, `function`, arrow functions), chapter 3
//! adds `let`, reassignment and loops.
//!
//! ## Pipeline
//!
//! ```text
//! source text → lexer (logos) → parser (strict | loose) → Program
//!                                                 ↓
//!                              ScopeTable (+ ExternalLibrary) → ScopedProgram
//! ```

mod lexer;
mod parser;
mod scope;
mod service;
mod syntax_kind;

pub use lexer::{Lexeme, Lexer, tokenize};
pub use parser::{
    DeclarationKind, MUTATION_CHAPTER, NameRef, NameRole, ParseError, ParseMode, Program, Scope,
    ScopeId, ScopeKind, parse,
};
pub use scope::{Binding, BindingId, ExternalLibrary, ScopeError, ScopeTable, ScopedProgram};
pub use service::SourceLanguage;
pub use syntax_kind::SyntaxKind;
