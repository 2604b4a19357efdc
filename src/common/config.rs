//! Конфигурация для sqllex
//!
//! Наборы ключевых слов и символов, с которыми работает лексер, задаются
//! явным перечислением, а не выводятся из объявленных вариантов.

use crate::common::error::{Error, Result};
use crate::parser::token::{Keyword, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Основная конфигурация
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Настройки лексера
    pub lexer: LexerConfig,
    /// Настройки логирования
    pub logging: LoggingConfig,
}

/// Конфигурация лексера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Ключевые слова, участвующие в сопоставлении
    pub keywords: Vec<Keyword>,
    /// Символы пунктуации, участвующие в сопоставлении
    pub symbols: Vec<Symbol>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            keywords: Keyword::ACTIVE.to_vec(),
            symbols: Symbol::ACTIVE.to_vec(),
        }
    }
}

impl LexerConfig {
    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for keyword in &self.keywords {
            if !seen.insert(keyword.as_str()) {
                return Err(Error::configuration(format!(
                    "Duplicate keyword in lexer config: {}",
                    keyword
                )));
            }
        }

        let mut seen = HashSet::new();
        for symbol in &self.symbols {
            if !seen.insert(symbol.as_str()) {
                return Err(Error::configuration(format!(
                    "Duplicate symbol in lexer config: {}",
                    symbol
                )));
            }
        }

        Ok(())
    }
}

/// Конфигурация логирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень логирования
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl Config {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::configuration(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Применяет переменные окружения поверх текущей конфигурации
    pub fn apply_env(mut self) -> Result<Self> {
        if let Ok(level) = std::env::var("SQLLEX_LOG_LEVEL") {
            self.logging.level = level;
        }
        self.validate()?;
        Ok(self)
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        self.lexer.validate()?;

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}
