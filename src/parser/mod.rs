//! Лексический анализатор SQL для sqllex

pub mod ast;
pub mod cursor;
pub mod lexer;
pub mod matching;
pub mod scanners;
pub mod token;


// Переэкспортируем основные типы
pub use ast::*;
pub use cursor::Cursor;
pub use lexer::{lex, Lexer};
pub use token::{Keyword, Location, Symbol, Token, TokenKind};
