//! Токены для SQL лексера sqllex
//!
//! Определяет позицию в исходном тексте, классифицированный токен и
//! фиксированные наборы ключевых слов и символов пунктуации.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Позиция в исходном тексте
///
/// Строки нумеруются с 1, колонки с 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Позиция начала исходного текста
    pub fn start() -> Self {
        Self::new(1, 0)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Вид токена
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Keyword,
    Symbol,
    Identifier,
    String,
    Numeric,
    /// Зарезервирован, активные сканеры его не порождают
    Boolean,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Numeric => "NUMERIC",
            TokenKind::Boolean => "BOOLEAN",
        };
        write!(f, "{}", name)
    }
}

/// Токен с позицией и значением
///
/// Два токена равны, если совпадают значение и вид. Позиция нужна только
/// для диагностики и в сравнении не участвует.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub location: Location,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind, location: Location) -> Self {
        Self {
            value: value.into(),
            kind,
            location,
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.kind == other.kind
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}') at {}", self.kind, self.value, self.location)
    }
}

/// Зарезервированные слова SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Select,
    From,
    As,
    Table,
    Create,
    Insert,
    Into,
    Values,
    Int,
    Text,
    Where,
}

impl Keyword {
    /// Ключевые слова, участвующие в сопоставлении по умолчанию.
    /// `as` и `int` объявлены, но сюда не входят.
    pub const ACTIVE: [Keyword; 9] = [
        Keyword::Select,
        Keyword::Insert,
        Keyword::Values,
        Keyword::Table,
        Keyword::Create,
        Keyword::Where,
        Keyword::From,
        Keyword::Into,
        Keyword::Text,
    ];

    /// Каноническое написание
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Select => "select",
            Keyword::From => "from",
            Keyword::As => "as",
            Keyword::Table => "table",
            Keyword::Create => "create",
            Keyword::Insert => "insert",
            Keyword::Into => "into",
            Keyword::Values => "values",
            Keyword::Int => "int",
            Keyword::Text => "text",
            Keyword::Where => "where",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Символы пунктуации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Semicolon,
    Asterisk,
    Comma,
    LeftParen,
    RightParen,
    Concat,
}

impl Symbol {
    /// Символы, участвующие в сопоставлении по умолчанию (без `||`)
    pub const ACTIVE: [Symbol; 5] = [
        Symbol::Comma,
        Symbol::LeftParen,
        Symbol::RightParen,
        Symbol::Semicolon,
        Symbol::Asterisk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Semicolon => ";",
            Symbol::Asterisk => "*",
            Symbol::Comma => ",",
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
            Symbol::Concat => "||",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
