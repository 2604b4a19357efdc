//! Сканеры лексического анализатора
//!
//! Каждый сканер получает исходный текст и копию курсора. При успехе он
//! возвращает токен (или `None` для пропущенного пробела) и новый курсор,
//! при неудаче возвращает `None`, и драйвер пробует следующий сканер.

use crate::parser::cursor::Cursor;
use crate::parser::matching::{longest_match, scan_delimited};
use crate::parser::token::{Token, TokenKind};

/// Результат успешного сканирования
pub type Scanned = (Option<Token>, Cursor);

/// Ключевые слова
pub fn scan_keyword(source: &str, ic: Cursor, keywords: &[&'static str]) -> Option<Scanned> {
    scan_longest(source, ic, keywords, TokenKind::Keyword)
}

/// Пробелы (пропускаются без токена) и символы пунктуации
pub fn scan_symbol(source: &str, ic: Cursor, symbols: &[&'static str]) -> Option<Scanned> {
    let bytes = source.as_bytes();
    let byte = ic.peek(bytes)?;

    match byte {
        b' ' | b'\t' | b'\n' => Some((None, ic.advance(byte))),
        _ => scan_longest(source, ic, symbols, TokenKind::Symbol),
    }
}

fn scan_longest(
    source: &str,
    ic: Cursor,
    options: &[&'static str],
    kind: TokenKind,
) -> Option<Scanned> {
    let matched = longest_match(source, ic, options)?;
    let cur = ic.advance_by(source.as_bytes(), matched.len());
    Some((Some(Token::new(matched, kind, ic.location)), cur))
}

/// Строковые литералы в одинарных кавычках
pub fn scan_string(source: &str, ic: Cursor) -> Option<Scanned> {
    let (token, cur) = scan_delimited(source, ic, b'\'')?;
    Some((Some(token), cur))
}

/// Числовые литералы: целые, десятичные и с экспонентой
pub fn scan_numeric(source: &str, ic: Cursor) -> Option<Scanned> {
    let bytes = source.as_bytes();
    let mut cur = ic;
    let mut period_found = false;
    let mut exp_marker_found = false;

    while let Some(byte) = cur.peek(bytes) {
        let is_digit = byte.is_ascii_digit();
        let is_period = byte == b'.';
        let is_exp_marker = byte == b'e';

        // Литерал начинается с цифры или точки
        if cur.pointer == ic.pointer {
            if !is_digit && !is_period {
                return None;
            }
            period_found = is_period;
            cur = cur.advance(byte);
            continue;
        }

        if is_period {
            if period_found {
                return None;
            }
            period_found = true;
            cur = cur.advance(byte);
            continue;
        }

        if is_exp_marker {
            if exp_marker_found {
                return None;
            }
            // После экспоненты точка недопустима
            period_found = true;
            exp_marker_found = true;

            if cur.pointer == bytes.len() - 1 {
                return None;
            }
            cur = cur.advance(byte);

            if let Some(sign @ (b'+' | b'-')) = cur.peek(bytes) {
                cur = cur.advance(sign);
            }
            continue;
        }

        if !is_digit {
            break;
        }
        cur = cur.advance(byte);
    }

    if cur.pointer == ic.pointer {
        return None;
    }

    let token = Token::new(
        &source[ic.pointer..cur.pointer],
        TokenKind::Numeric,
        ic.location,
    );
    Some((Some(token), cur))
}

/// Идентификаторы: в двойных кавычках (с учетом регистра) или простые
/// (приводятся к нижнему регистру)
pub fn scan_identifier(source: &str, ic: Cursor) -> Option<Scanned> {
    if let Some((mut token, cur)) = scan_delimited(source, ic, b'"') {
        token.kind = TokenKind::Identifier;
        return Some((Some(token), cur));
    }

    let bytes = source.as_bytes();
    let first = ic.peek(bytes)?;
    if !first.is_ascii_alphabetic() {
        return None;
    }

    let mut cur = ic.advance(first);
    while let Some(byte) = cur.peek(bytes) {
        if byte.is_ascii_alphanumeric() || byte == b'$' || byte == b'_' {
            cur = cur.advance(byte);
        } else {
            break;
        }
    }

    let value = source[ic.pointer..cur.pointer].to_ascii_lowercase();
    Some((Some(Token::new(value, TokenKind::Identifier, ic.location)), cur))
}
