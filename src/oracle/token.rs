use smol_str::SmolStr;

/// Token types as the editor's highlighting mode names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Parameter,
    FunctionName,
    StorageType,
    Keyword,
    Numeric,
    Language,
    String,
    Comment,
    Operator,
    Punctuation,
    LParen,
    RParen,
    Text,
}

impl TokenKind {
    /// Token kinds that can name a binding.
    pub const NAMEABLE: &'static [TokenKind] = &[
        TokenKind::Identifier,
        TokenKind::Parameter,
        TokenKind::FunctionName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Parameter => "variable.parameter",
            TokenKind::FunctionName => "entity.name.function",
            TokenKind::StorageType => "storage.type",
            TokenKind::Keyword => "keyword",
            TokenKind::Numeric => "constant.numeric",
            TokenKind::Language => "constant.language",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Operator => "keyword.operator",
            TokenKind::Punctuation => "punctuation.operator",
            TokenKind::LParen => "paren.lparen",
            TokenKind::RParen => "paren.rparen",
            TokenKind::Text => "text",
        }
    }

    pub fn is_nameable(self) -> bool {
        Self::NAMEABLE.contains(&self)
    }
}

/// A token of one editor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: SmolStr,
    /// Column of the first character.
    pub start: u32,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<SmolStr>, start: u32) -> Self {
        Self {
            kind,
            value: value.into(),
            start,
        }
    }

    /// Column just past the last character.
    pub fn end(&self) -> u32 {
        self.start + self.value.chars().count() as u32
    }

    /// Whether a cursor at `column` touches this token.
    ///
    /// Both boundaries count, so a cursor between two tokens covers both.
    pub fn covers(&self, column: u32) -> bool {
        self.start <= column && column <= self.end()
    }
}
