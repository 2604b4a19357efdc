//! Разбор целых SQL скриптов через публичный API

use super::common::{join_tokens, pairs};
use sqllex::common::Config;
use sqllex::parser::{
    Ast, ColumnDefinition, CreateTableStatement, Expression, InsertStatement, Keyword,
    SelectStatement, Statement, StatementKind,
};
use sqllex::{lex, Lexer, Location, Token, TokenKind};
use tempfile::TempDir;

const SCRIPT: &str = "CREATE TABLE users (id text, name text);\n\
                      INSERT INTO users VALUES (1, 'O''Brien');\n\
                      SELECT id, \"Name\" FROM users;\n";

#[test]
fn test_multi_statement_script() {
    let tokens = lex(SCRIPT).unwrap();

    assert_eq!(tokens.len(), 28);
    assert_eq!(tokens[0].location, Location::new(1, 0));
    assert_eq!(tokens[11].value, "insert");
    assert_eq!(tokens[11].location, Location::new(2, 0));
    assert_eq!(tokens[18].kind, TokenKind::String);
    assert_eq!(tokens[18].value, "O'Brien");
    assert_eq!(tokens[21].value, "select");
    assert_eq!(tokens[21].location, Location::new(3, 0));
    assert_eq!(tokens[24].kind, TokenKind::Identifier);
    assert_eq!(tokens[24].value, "Name");

    let statement_ends = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Symbol && t.value == ";")
        .count();
    assert_eq!(statement_ends, 3);
}

#[test]
fn test_relexing_joined_tokens_is_stable() {
    let tokens = lex(SCRIPT).unwrap();
    let relexed = lex(&join_tokens(&tokens)).unwrap();

    assert_eq!(pairs(&relexed), pairs(&tokens));
}

#[test]
fn test_error_points_at_failing_byte() {
    let err = lex("select a,\n  b = 1").unwrap_err();

    assert_eq!(err.line(), 2);
    assert_eq!(err.column(), 4);
    assert_eq!(err.previous(), Some("b"));
    assert!(err.message().contains("2:4"));
}

#[test]
fn test_lexer_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sqllex.toml");
    std::fs::write(
        &path,
        "[lexer]\nkeywords = [\"select\", \"from\", \"as\"]\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(
        config.lexer.keywords,
        vec![Keyword::Select, Keyword::From, Keyword::As]
    );

    let lexer = Lexer::with_config(&config.lexer).unwrap();
    let tokens = lexer.tokenize("select x as y from t").unwrap();
    assert_eq!(tokens[2].kind, TokenKind::Keyword);
    assert_eq!(tokens[2].value, "as");

    // Без явной настройки `as` остается идентификатором
    let tokens = lex("select x as y from t").unwrap();
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

/// Строит AST вручную из токенов, как это будет делать парсер
#[test]
fn test_ast_from_tokens() {
    let create = lex("create table users (id text)").unwrap();
    let insert = lex("insert into users values ('a')").unwrap();
    let select = lex("select id from users").unwrap();

    let ast = Ast {
        statements: vec![
            Statement::CreateTable(CreateTableStatement {
                name: create[2].clone(),
                columns: vec![ColumnDefinition {
                    name: create[4].clone(),
                    datatype: create[5].clone(),
                }],
            }),
            Statement::Insert(InsertStatement {
                table: insert[2].clone(),
                values: vec![Expression::Literal(insert[5].clone())],
            }),
            Statement::Select(SelectStatement {
                items: vec![Expression::Literal(select[1].clone())],
                from: select[3].clone(),
            }),
        ],
    };

    let kinds: Vec<StatementKind> = ast.statements.iter().map(Statement::kind).collect();
    assert_eq!(
        kinds,
        vec![
            StatementKind::CreateTable,
            StatementKind::Insert,
            StatementKind::Select
        ]
    );

    match &ast.statements[1] {
        Statement::Insert(stmt) => {
            assert_eq!(stmt.table.value, "users");
            assert_eq!(
                stmt.values,
                vec![Expression::Literal(Token::new(
                    "a",
                    TokenKind::String,
                    Location::start()
                ))]
            );
        }
        other => panic!("unexpected statement: {:?}", other),
    }

    let json = serde_json::to_string(&ast).unwrap();
    let decoded: Ast = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, ast);
}
