//! Structural parser for the teaching language.
//!
//! The parser does not build an expression tree. It recovers exactly what
//! navigation needs: which identifier lexemes declare a name, which ones
//! refer to a name, and the nesting of lexical scopes they live in.
//!
//! Two modes share one implementation:
//! - [`ParseMode::Strict`] rejects anything the active chapter does not allow
//! - [`ParseMode::Loose`] skips malformed constructs and keeps going
//!
//! Unbalanced delimiters are fatal in both modes: without them the scope
//! structure cannot be recovered.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::lexer::{Lexeme, tokenize};
use super::syntax_kind::SyntaxKind;
use crate::base::{LanguageLevel, LineCol, LineIndex, SourceLocation};

/// First chapter in which `let`, reassignment and loops are available.
pub const MUTATION_CHAPTER: u8 = 3;

/// Errors that stop a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input no lexer rule matches.
    #[error("invalid token `{text}` at offset {offset}")]
    InvalidToken { text: String, offset: u32 },

    /// A closing delimiter without an opener.
    #[error("unexpected `{text}` at offset {offset}")]
    UnexpectedCloser { text: String, offset: u32 },

    /// A closing delimiter that does not match the innermost opener.
    #[error("expected `{expected}` but found `{found}` at offset {offset}")]
    MismatchedDelimiter {
        expected: &'static str,
        found: String,
        offset: u32,
    },

    /// An opener still open at end of input.
    #[error("unclosed `{text}` at offset {offset}")]
    UnclosedDelimiter { text: String, offset: u32 },

    /// A declaration missing its name, parameter list or body.
    #[error("malformed {construct} at offset {offset}")]
    MalformedDeclaration {
        construct: &'static str,
        offset: u32,
    },

    /// A construct the active chapter does not include.
    #[error("{construct} is not allowed in chapter {chapter} (offset {offset})")]
    NotInChapter {
        construct: &'static str,
        chapter: u8,
        offset: u32,
    },
}

impl ParseError {
    /// Delimiter errors leave no scope structure to recover.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ParseError::UnexpectedCloser { .. }
                | ParseError::MismatchedDelimiter { .. }
                | ParseError::UnclosedDelimiter { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Strict,
    Loose,
}

/// Index of a scope inside a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(pub u32);

impl ScopeId {
    pub const ROOT: ScopeId = ScopeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Program,
    Function,
    Block,
}

/// A lexical scope and the source text it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    pub kind: ScopeKind,
    pub range: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Const,
    Let,
    Function,
    Parameter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameRole {
    Declaration(DeclarationKind),
    Reference,
}

/// An identifier lexeme that names a binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRef {
    pub name: SmolStr,
    pub range: TextRange,
    pub role: NameRole,
    /// Scope the name is declared in, or the innermost scope of a reference.
    pub scope: ScopeId,
}

impl NameRef {
    pub fn is_declaration(&self) -> bool {
        matches!(self.role, NameRole::Declaration(_))
    }
}

/// The parsed representation of one snapshot of source text.
#[derive(Debug, Clone)]
pub struct Program {
    source: String,
    line_index: LineIndex,
    level: LanguageLevel,
    scopes: Vec<Scope>,
    names: Vec<NameRef>,
}

impl Program {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn level(&self) -> LanguageLevel {
        self.level
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    /// All declaration and reference lexemes, in source order.
    pub fn names(&self) -> &[NameRef] {
        &self.names
    }

    /// Convert a byte range into a 1-indexed [`SourceLocation`].
    pub fn location(&self, range: TextRange) -> SourceLocation {
        let start = self.line_index.line_col(&self.source, range.start());
        let end = self.line_index.line_col(&self.source, range.end());
        SourceLocation::new(start.line + 1, start.col, end.line + 1, end.col)
    }

    /// Convert a 1-indexed line and 0-indexed column into a byte offset.
    pub fn offset_at(&self, line: u32, column: u32) -> Option<TextSize> {
        let line = line.checked_sub(1)?;
        self.line_index
            .offset(&self.source, LineCol { line, col: column })
    }

    /// The innermost scope whose span contains `offset`.
    ///
    /// A scope closed by `}` or `)` ends before its closer's right edge; an
    /// expression-bodied arrow still owns the offset right after its last
    /// token.
    pub fn scope_at(&self, offset: TextSize) -> ScopeId {
        self.scopes
            .iter()
            .enumerate()
            .filter(|(_, scope)| self.scope_contains(scope, offset))
            .max_by_key(|(i, scope)| (scope.range.start(), *i))
            .map(|(i, _)| ScopeId(i as u32))
            .unwrap_or(ScopeId::ROOT)
    }

    fn scope_contains(&self, scope: &Scope, offset: TextSize) -> bool {
        if scope.range.contains(offset) {
            return true;
        }
        if offset != scope.range.end() {
            return false;
        }
        let closed = self
            .source
            .get(..usize::from(offset))
            .is_some_and(|head| head.ends_with(['}', ')', ']']));
        !closed
    }
}

/// Parse `source` at the given language level.
pub fn parse(source: &str, level: LanguageLevel, mode: ParseMode) -> Result<Program, ParseError> {
    let lexemes = tokenize(source);

    let mut significant = Vec::with_capacity(lexemes.len());
    for lexeme in lexemes {
        if lexeme.kind.is_trivia() {
            continue;
        }
        if lexeme.kind == SyntaxKind::Error {
            if mode == ParseMode::Strict {
                return Err(ParseError::InvalidToken {
                    text: lexeme.text.to_string(),
                    offset: lexeme.range.start().into(),
                });
            }
            continue;
        }
        significant.push(lexeme);
    }

    let matching = match_delimiters(&significant)?;

    let mut parser = Parser {
        tokens: significant,
        matching,
        mode,
        level,
        scopes: vec![Scope {
            parent: None,
            kind: ScopeKind::Program,
            range: TextRange::up_to(TextSize::of(source)),
        }],
        stack: vec![(ScopeId::ROOT, usize::MAX)],
        names: Vec::new(),
        function_bodies: FxHashSet::default(),
    };
    parser.run()?;

    Ok(Program {
        source: source.to_string(),
        line_index: LineIndex::new(source),
        level,
        scopes: parser.scopes,
        names: parser.names,
    })
}

/// Pair every opening delimiter with its closer.
fn match_delimiters(tokens: &[Lexeme<'_>]) -> Result<Vec<Option<usize>>, ParseError> {
    let mut matching = vec![None; tokens.len()];
    let mut open: Vec<usize> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.kind.is_opening_delimiter() {
            open.push(i);
        } else if token.kind.is_closing_delimiter() {
            let Some(opener) = open.pop() else {
                return Err(ParseError::UnexpectedCloser {
                    text: token.text.to_string(),
                    offset: token.range.start().into(),
                });
            };
            let expected = tokens[opener].kind.closing_pair();
            if expected != Some(token.kind) {
                return Err(ParseError::MismatchedDelimiter {
                    expected: closer_text(tokens[opener].kind),
                    found: token.text.to_string(),
                    offset: token.range.start().into(),
                });
            }
            matching[opener] = Some(i);
            matching[i] = Some(opener);
        }
    }

    if let Some(&opener) = open.last() {
        return Err(ParseError::UnclosedDelimiter {
            text: tokens[opener].text.to_string(),
            offset: tokens[opener].range.start().into(),
        });
    }

    Ok(matching)
}

fn closer_text(opener: SyntaxKind) -> &'static str {
    match opener {
        SyntaxKind::LParen => ")",
        SyntaxKind::LBrace => "}",
        _ => "]",
    }
}

struct Parser<'a> {
    tokens: Vec<Lexeme<'a>>,
    matching: Vec<Option<usize>>,
    mode: ParseMode,
    level: LanguageLevel,
    scopes: Vec<Scope>,
    /// Open scopes with the index of their last token.
    stack: Vec<(ScopeId, usize)>,
    names: Vec<NameRef>,
    /// `{` tokens that belong to a function scope rather than opening a block.
    function_bodies: FxHashSet<usize>,
}

impl<'a> Parser<'a> {
    fn run(&mut self) -> Result<(), ParseError> {
        let mut i = 0;
        while i < self.tokens.len() {
            self.close_scopes(i);
            i = self.step(i)?;
        }
        Ok(())
    }

    /// Handle the token at `i` and return the index of the next token to visit.
    fn step(&mut self, i: usize) -> Result<usize, ParseError> {
        let kind = self.tokens[i].kind;
        match kind {
            SyntaxKind::ConstKw | SyntaxKind::LetKw => self.declaration(i),
            SyntaxKind::FunctionKw => self.function(i),
            SyntaxKind::ForKw | SyntaxKind::WhileKw => self.loop_header(i),
            SyntaxKind::LParen if self.is_arrow_parameter_list(i) => self.arrow_with_list(i),
            SyntaxKind::LBrace => {
                if !self.function_bodies.contains(&i) {
                    let end = self.matching_index(i);
                    self.open_scope(ScopeKind::Block, i, end);
                }
                Ok(i + 1)
            }
            SyntaxKind::Ident => self.identifier(i),
            _ => Ok(i + 1),
        }
    }

    fn declaration(&mut self, i: usize) -> Result<usize, ParseError> {
        let (kind, construct) = if self.tokens[i].kind == SyntaxKind::LetKw {
            (DeclarationKind::Let, "let declaration")
        } else {
            (DeclarationKind::Const, "constant declaration")
        };

        if kind == DeclarationKind::Let {
            self.require_chapter(i, "let")?;
        }

        if self.kind_at(i + 1) != Some(SyntaxKind::Ident) {
            self.malformed(i, construct)?;
            return Ok(i + 1);
        }

        self.declare(i + 1, kind);
        Ok(i + 2)
    }

    fn function(&mut self, i: usize) -> Result<usize, ParseError> {
        let mut k = i + 1;
        let name = if self.kind_at(k) == Some(SyntaxKind::Ident) {
            k += 1;
            Some(k - 1)
        } else {
            None
        };

        if self.kind_at(k) != Some(SyntaxKind::LParen) {
            self.malformed(i, "function declaration")?;
            return Ok(i + 1);
        }
        let close = self.matching_index(k);
        let params = self.parameter_list(k, close, "function parameters")?;

        let end = if self.kind_at(close + 1) == Some(SyntaxKind::LBrace) {
            self.function_bodies.insert(close + 1);
            self.matching_index(close + 1)
        } else {
            self.malformed(i, "function body")?;
            close
        };

        if let Some(name) = name {
            self.declare(name, DeclarationKind::Function);
        }
        self.open_scope(ScopeKind::Function, k, end);
        for param in params {
            self.declare(param, DeclarationKind::Parameter);
        }
        Ok(close + 1)
    }

    fn loop_header(&mut self, i: usize) -> Result<usize, ParseError> {
        let construct = if self.tokens[i].kind == SyntaxKind::ForKw {
            "for loop"
        } else {
            "while loop"
        };
        self.require_chapter(i, construct)?;

        if self.tokens[i].kind == SyntaxKind::ForKw && self.kind_at(i + 1) == Some(SyntaxKind::LParen)
        {
            // The loop variable lives in a scope spanning header and body.
            let close = self.matching_index(i + 1);
            let end = if self.kind_at(close + 1) == Some(SyntaxKind::LBrace) {
                self.matching_index(close + 1)
            } else {
                close
            };
            self.open_scope(ScopeKind::Block, i + 1, end);
            return Ok(i + 2);
        }
        Ok(i + 1)
    }

    fn is_arrow_parameter_list(&self, i: usize) -> bool {
        let close = self.matching_index(i);
        self.kind_at(close + 1) == Some(SyntaxKind::FatArrow)
    }

    /// `(a, b) => body`
    fn arrow_with_list(&mut self, i: usize) -> Result<usize, ParseError> {
        let close = self.matching_index(i);
        let params = self.parameter_list(i, close, "arrow function parameters")?;
        let end = self.arrow_body_end(i, close + 2)?;
        self.open_scope(ScopeKind::Function, i, end);
        for param in params {
            self.declare(param, DeclarationKind::Parameter);
        }
        Ok(close + 2)
    }

    fn identifier(&mut self, i: usize) -> Result<usize, ParseError> {
        let prev = i.checked_sub(1).and_then(|p| self.kind_at(p));
        let next = self.kind_at(i + 1);

        // `x => body`
        if next == Some(SyntaxKind::FatArrow) && prev != Some(SyntaxKind::Dot) {
            let end = self.arrow_body_end(i, i + 2)?;
            self.open_scope(ScopeKind::Function, i, end);
            self.declare(i, DeclarationKind::Parameter);
            return Ok(i + 2);
        }

        // Property access `obj.name`
        if prev == Some(SyntaxKind::Dot) {
            return Ok(i + 1);
        }

        // Object literal key `{ name: value }`
        if next == Some(SyntaxKind::Colon)
            && matches!(prev, Some(SyntaxKind::LBrace) | Some(SyntaxKind::Comma))
        {
            return Ok(i + 1);
        }

        if next == Some(SyntaxKind::Eq) {
            self.require_chapter(i, "assignment")?;
        }

        self.reference(i);
        Ok(i + 1)
    }

    /// Collect parameter identifiers between `open` and `close`.
    fn parameter_list(
        &self,
        open: usize,
        close: usize,
        construct: &'static str,
    ) -> Result<Vec<usize>, ParseError> {
        let mut params = Vec::new();
        let mut expect_name = true;
        for k in open + 1..close {
            match (self.tokens[k].kind, expect_name) {
                (SyntaxKind::Ident, true) => {
                    params.push(k);
                    expect_name = false;
                }
                (SyntaxKind::Comma, false) => expect_name = true,
                _ => self.malformed(k, construct)?,
            }
        }
        Ok(params)
    }

    /// Index of the last token of an arrow body starting at `body`.
    fn arrow_body_end(&mut self, arrow_start: usize, body: usize) -> Result<usize, ParseError> {
        let last = self.tokens.len() - 1;
        if body > last {
            self.malformed(arrow_start, "arrow function")?;
            return Ok(last.max(arrow_start));
        }

        if self.tokens[body].kind == SyntaxKind::LBrace {
            self.function_bodies.insert(body);
            return Ok(self.matching_index(body));
        }

        let mut k = body;
        while k <= last {
            let kind = self.tokens[k].kind;
            if kind.is_opening_delimiter() {
                k = self.matching_index(k) + 1;
                continue;
            }
            if kind.is_closing_delimiter()
                || kind == SyntaxKind::Semicolon
                || kind == SyntaxKind::Comma
            {
                return Ok(k.saturating_sub(1).max(body));
            }
            k += 1;
        }
        Ok(last)
    }

    fn open_scope(&mut self, kind: ScopeKind, start: usize, end: usize) {
        let end = end.max(start);
        let range = TextRange::new(
            self.tokens[start].range.start(),
            self.tokens[end].range.end(),
        );
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            parent: Some(self.current_scope()),
            kind,
            range,
        });
        self.stack.push((id, end));
    }

    fn close_scopes(&mut self, i: usize) {
        while let Some(&(_, end)) = self.stack.last() {
            if end >= i {
                break;
            }
            self.stack.pop();
        }
    }

    fn current_scope(&self) -> ScopeId {
        self.stack.last().map_or(ScopeId::ROOT, |&(id, _)| id)
    }

    fn declare(&mut self, i: usize, kind: DeclarationKind) {
        self.push_name(i, NameRole::Declaration(kind));
    }

    fn reference(&mut self, i: usize) {
        self.push_name(i, NameRole::Reference);
    }

    fn push_name(&mut self, i: usize, role: NameRole) {
        let token = &self.tokens[i];
        self.names.push(NameRef {
            name: SmolStr::new(token.text),
            range: token.range,
            role,
            scope: self.current_scope(),
        });
    }

    fn require_chapter(&self, i: usize, construct: &'static str) -> Result<(), ParseError> {
        if self.mode == ParseMode::Strict && self.level.chapter() < MUTATION_CHAPTER {
            return Err(ParseError::NotInChapter {
                construct,
                chapter: self.level.chapter(),
                offset: self.tokens[i].range.start().into(),
            });
        }
        Ok(())
    }

    fn malformed(&self, i: usize, construct: &'static str) -> Result<(), ParseError> {
        if self.mode == ParseMode::Strict {
            return Err(ParseError::MalformedDeclaration {
                construct,
                offset: self.tokens[i].range.start().into(),
            });
        }
        Ok(())
    }

    fn kind_at(&self, i: usize) -> Option<SyntaxKind> {
        self.tokens.get(i).map(|t| t.kind)
    }

    /// Delimiters are balanced by the time the walk starts.
    fn matching_index(&self, i: usize) -> usize {
        self.matching.get(i).copied().flatten().unwrap_or(i)
    }
}
