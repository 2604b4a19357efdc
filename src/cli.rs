//! CLI интерфейс для sqllex
//!
//! Тонкий слой над лексером: читает SQL из аргумента, файла или стандартного
//! ввода и печатает полученные токены.

use crate::common::{Config, Result};
use crate::parser::{Lexer, Token};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

/// sqllex - лексический анализатор SQL
#[derive(Parser, Debug)]
#[command(name = "sqllex")]
#[command(about = "sqllex - tokenizes SQL source text")]
#[command(version)]
pub struct Cli {
    /// Файл с SQL текстом (по умолчанию читается стандартный ввод)
    #[arg(value_name = "FILE", conflicts_with = "query")]
    pub file: Option<PathBuf>,

    /// SQL текст прямо в командной строке
    #[arg(short, long, value_name = "SQL")]
    pub query: Option<String>,

    /// Формат вывода
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Формат вывода токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Одна строка на токен: позиция, вид, значение
    Table,
    /// JSON массив токенов
    Json,
}

impl Cli {
    /// Загружает конфигурацию с учетом переменных окружения и аргументов
    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        let mut config = config.apply_env()?;
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
            config.validate()?;
        }

        Ok(config)
    }

    /// Читает исходный текст
    pub fn read_source(&self) -> Result<String> {
        if let Some(query) = &self.query {
            return Ok(query.clone());
        }

        match &self.file {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut source = String::new();
                std::io::stdin().read_to_string(&mut source)?;
                Ok(source)
            }
        }
    }

    /// Разбирает текст на токены и форматирует результат
    pub fn run(&self, config: &Config) -> Result<String> {
        let source = self.read_source()?;
        let lexer = Lexer::with_config(&config.lexer)?;
        let tokens = lexer.tokenize(&source)?;
        render(&tokens, self.format)
    }
}

/// Форматирует токены для вывода
pub fn render(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
        OutputFormat::Table => Ok(tokens
            .iter()
            .map(|token| {
                format!(
                    "{:<8} {:<10} {}",
                    token.location.to_string(),
                    token.kind.to_string(),
                    token.value
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
