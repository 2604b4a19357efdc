//! sqllex - лексический анализатор для небольшого диалекта SQL
//!
//! Преобразует исходный текст в плоскую упорядоченную последовательность
//! классифицированных токенов для последующего парсера. Типы AST описывают
//! модель данных, которую будет строить парсер.

pub mod cli;
pub mod common;
pub mod parser;

pub use common::error::{Error, LexError, Result};
pub use parser::{lex, Lexer, Location, Token, TokenKind};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
