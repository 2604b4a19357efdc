//! Абстрактное синтаксическое дерево SQL для sqllex
//!
//! Модель данных, которую будет наполнять парсер. Сам лексер эти типы не
//! строит.

use crate::parser::token::Token;
use serde::{Deserialize, Serialize};

/// Дерево разбора: упорядоченный список операторов
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ast {
    pub statements: Vec<Statement>,
}

/// Оператор SQL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// SELECT запрос
    Select(SelectStatement),
    /// CREATE TABLE операция
    CreateTable(CreateTableStatement),
    /// INSERT операция
    Insert(InsertStatement),
}

/// Вид оператора без данных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    Select,
    CreateTable,
    Insert,
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Select(_) => StatementKind::Select,
            Statement::CreateTable(_) => StatementKind::CreateTable,
            Statement::Insert(_) => StatementKind::Insert,
        }
    }
}

/// Выражение
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Литерал или имя колонки
    Literal(Token),
}

/// SELECT: список выражений и таблица
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
    pub items: Vec<Expression>,
    pub from: Token,
}

/// CREATE TABLE: имя таблицы и определения колонок
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableStatement {
    pub name: Token,
    pub columns: Vec<ColumnDefinition>,
}

/// Определение колонки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: Token,
    pub datatype: Token,
}

/// INSERT: имя таблицы и список вставляемых значений
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStatement {
    pub table: Token,
    pub values: Vec<Expression>,
}
