//! Обработка ошибок для sqllex

use thiserror::Error;

/// Ошибка лексического анализа
///
/// Лексер работает по принципу "всё или ничего": первый нераспознанный байт
/// прерывает проход, и последовательность токенов не возвращается.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Ни один из сканеров не распознал текущую позицию
    #[error("Unable to lex token{}, at {line}:{column}", after_hint(.after))]
    UnlexableToken {
        /// Строка первого неразобранного байта (с 1)
        line: usize,
        /// Колонка первого неразобранного байта (с 0)
        column: usize,
        /// Значение последнего успешно прочитанного токена
        after: Option<String>,
    },
}

fn after_hint(after: &Option<String>) -> String {
    match after {
        Some(value) => format!(" after {}", value),
        None => String::new(),
    }
}

impl LexError {
    /// Создает ошибку нераспознанного токена
    pub fn unlexable(line: usize, column: usize, after: Option<String>) -> Self {
        Self::UnlexableToken {
            line,
            column,
            after,
        }
    }

    /// Человекочитаемое сообщение
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn line(&self) -> usize {
        match self {
            Self::UnlexableToken { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            Self::UnlexableToken { column, .. } => *column,
        }
    }

    /// Значение токена, предшествующего месту ошибки
    pub fn previous(&self) -> Option<&str> {
        match self {
            Self::UnlexableToken { after, .. } => after.as_deref(),
        }
    }
}

/// Основной тип ошибки для sqllex
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка лексического анализа
    #[error("Lexing error: {0}")]
    Lex(#[from] LexError),

    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для sqllex
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
