//! Курсор лексического анализатора
//!
//! Курсор является значением: каждый сканер получает копию и возвращает
//! новую, не изменяя курсор вызывающей стороны.

use crate::parser::token::Location;

/// Текущая позиция сканирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Смещение в байтах от начала исходного текста
    pub pointer: usize,
    /// Строка и колонка для диагностики
    pub location: Location,
}

impl Cursor {
    /// Курсор в начале исходного текста
    pub fn start() -> Self {
        Self {
            pointer: 0,
            location: Location::start(),
        }
    }

    /// Возвращает курсор, сдвинутый за байт `byte`.
    ///
    /// Перевод строки увеличивает номер строки и сбрасывает колонку.
    /// Байты продолжения UTF-8 колонку не сдвигают, поэтому колонка
    /// считается в символах.
    #[must_use]
    pub fn advance(self, byte: u8) -> Self {
        let mut location = self.location;
        if byte == b'\n' {
            location.line += 1;
            location.column = 0;
        } else if !is_utf8_continuation(byte) {
            location.column += 1;
        }

        Self {
            pointer: self.pointer + 1,
            location,
        }
    }

    /// Возвращает курсор, сдвинутый за `len` байт исходного текста
    #[must_use]
    pub fn advance_by(self, source: &[u8], len: usize) -> Self {
        source[self.pointer..self.pointer + len]
            .iter()
            .fold(self, |cursor, &byte| cursor.advance(byte))
    }

    /// Текущий байт или `None` в конце текста
    pub fn peek(&self, source: &[u8]) -> Option<u8> {
        source.get(self.pointer).copied()
    }

    pub fn is_at_end(&self, source: &[u8]) -> bool {
        self.pointer >= source.len()
    }
}

fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}
