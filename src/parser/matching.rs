//! Примитивы сопоставления, общие для сканеров
//!
//! `longest_match` выбирает самое длинное из литеральных слов-кандидатов,
//! `scan_delimited` читает область, ограниченную кавычкой.

use crate::parser::cursor::Cursor;
use crate::parser::token::{Token, TokenKind};

/// Находит самый длинный кандидат, совпадающий с текстом начиная с `ic`.
///
/// Сравнение без учета регистра: байты исходного текста приводятся к
/// нижнему регистру, кандидаты должны быть заданы в нижнем регистре.
/// Кандидат, совпавший полностью, остается в игре, пока не станет ясно,
/// что более длинный кандидат с тем же префиксом не совпадет
/// (`int` против `into`). Чтение прекращается, когда выбыли все кандидаты.
pub fn longest_match(source: &str, ic: Cursor, options: &[&'static str]) -> Option<&'static str> {
    let bytes = source.as_bytes();
    let mut value: Vec<u8> = Vec::new();
    let mut eliminated = vec![false; options.len()];
    let mut remaining = options.len();
    let mut best: Option<&'static str> = None;
    let mut pointer = ic.pointer;

    while remaining > 0 && pointer < bytes.len() {
        value.push(bytes[pointer].to_ascii_lowercase());
        pointer += 1;

        for (i, option) in options.iter().enumerate() {
            if eliminated[i] {
                continue;
            }

            let candidate = option.as_bytes();
            if candidate == value.as_slice() {
                if option.len() > best.map_or(0, str::len) {
                    best = Some(*option);
                }
                continue;
            }

            if value.len() > candidate.len() || !candidate.starts_with(&value) {
                eliminated[i] = true;
                remaining -= 1;
            }
        }
    }

    best
}

/// Читает область, ограниченную байтом `delimiter`.
///
/// Удвоенный разделитель внутри области означает один литеральный
/// разделитель в значении (экранирование в стиле SQL, не обратной чертой).
/// Без закрывающего разделителя до конца текста совпадения нет, и курсор
/// вызывающей стороны остается на открывающем разделителе.
pub fn scan_delimited(source: &str, ic: Cursor, delimiter: u8) -> Option<(Token, Cursor)> {
    let bytes = source.as_bytes();
    if ic.peek(bytes) != Some(delimiter) {
        return None;
    }

    let mut cur = ic.advance(delimiter);
    let mut value = String::new();
    let mut segment_start = cur.pointer;

    while let Some(byte) = cur.peek(bytes) {
        if byte != delimiter {
            cur = cur.advance(byte);
            continue;
        }

        value.push_str(&source[segment_start..cur.pointer]);

        if bytes.get(cur.pointer + 1) == Some(&delimiter) {
            value.push(char::from(delimiter));
            cur = cur.advance(delimiter).advance(delimiter);
            segment_start = cur.pointer;
            continue;
        }

        let token = Token::new(value, TokenKind::String, ic.location);
        return Some((token, cur.advance(delimiter)));
    }

    None
}
