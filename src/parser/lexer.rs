//! Лексический анализатор SQL для sqllex
//!
//! Преобразует входной SQL текст в последовательность токенов для дальнейшего парсинга.
//! На каждой позиции сканеры пробуются в фиксированном порядке: ключевое слово,
//! символ, строка, число, идентификатор. Первый успешный сканер определяет новую
//! позицию; если не подошел ни один, проход завершается ошибкой.

use crate::common::config::LexerConfig;
use crate::common::error::{LexError, Result};
use crate::parser::cursor::Cursor;
use crate::parser::scanners::{
    scan_identifier, scan_keyword, scan_numeric, scan_string, scan_symbol, Scanned,
};
use crate::parser::token::Token;

/// Лексический анализатор SQL
///
/// Не хранит состояния прохода, поэтому один экземпляр можно использовать
/// из нескольких потоков одновременно.
#[derive(Debug, Clone)]
pub struct Lexer {
    /// Ключевые слова в каноническом написании
    keywords: Vec<&'static str>,
    /// Символы пунктуации
    symbols: Vec<&'static str>,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    /// Создает лексер с наборами ключевых слов и символов по умолчанию
    pub fn new() -> Self {
        Self::from_sets(&LexerConfig::default())
    }

    /// Создает лексер по конфигурации
    pub fn with_config(config: &LexerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_sets(config))
    }

    fn from_sets(config: &LexerConfig) -> Self {
        Self {
            keywords: config.keywords.iter().map(|k| k.as_str()).collect(),
            symbols: config.symbols.iter().map(|s| s.as_str()).collect(),
        }
    }

    /// Возвращает все токены из входного текста
    pub fn tokenize(&self, source: &str) -> std::result::Result<Vec<Token>, LexError> {
        let bytes = source.as_bytes();
        let mut tokens: Vec<Token> = Vec::new();
        let mut cur = Cursor::start();

        while !cur.is_at_end(bytes) {
            let Some((token, next)) = self.scan_at(source, cur) else {
                let after = tokens.last().map(|t| t.value.clone());
                let err = LexError::unlexable(cur.location.line, cur.location.column, after);
                log::debug!("Лексический анализ прерван: {}", err);
                return Err(err);
            };

            debug_assert!(next.pointer > cur.pointer);
            cur = next;

            if let Some(token) = token {
                log::trace!("{}", token);
                tokens.push(token);
            }
        }

        log::debug!("Прочитано токенов: {}", tokens.len());
        Ok(tokens)
    }

    /// Пробует сканеры по порядку; первый успешный побеждает
    fn scan_at(&self, source: &str, cur: Cursor) -> Option<Scanned> {
        scan_keyword(source, cur, &self.keywords)
            .or_else(|| scan_symbol(source, cur, &self.symbols))
            .or_else(|| scan_string(source, cur))
            .or_else(|| scan_numeric(source, cur))
            .or_else(|| scan_identifier(source, cur))
    }
}

/// Разбирает текст на токены с наборами по умолчанию
pub fn lex(source: &str) -> std::result::Result<Vec<Token>, LexError> {
    Lexer::new().tokenize(source)
}
