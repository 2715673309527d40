// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod create;
mod drop;
mod expr;
mod insert;
mod select;

use mpcdb_type::{
	diagnostic::sql::{parse_error, unsupported},
	return_error,
};
use tracing::instrument;

use crate::{
	Result,
	ast::Statement,
	token::{Keyword, Token, tokenize},
};

/// Tokenizes and parses `sql` into one statement per `;`-separated part.
#[instrument(name = "sql::parse", level = "trace", skip(sql))]
pub fn parse(sql: &str) -> Result<Vec<Statement>> {
	let tokens = tokenize(sql)?;
	let mut parser = Parser::new(tokens);
	parser.parse()
}

/// Deepest nesting of parentheses and unary signs an expression may have.
const MAX_DEPTH: usize = 128;

struct Parser {
	tokens: Vec<Token>,
	position: usize,
	depth: usize,
}

impl Parser {
	fn new(tokens: Vec<Token>) -> Self {
		Self {
			tokens,
			position: 0,
			depth: 0,
		}
	}

	/// Runs `f` one nesting level deeper, failing once `MAX_DEPTH` is reached.
	fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
		if self.depth >= MAX_DEPTH {
			return_error!(parse_error("expression nested too deeply"));
		}
		self.depth += 1;
		let result = f(self);
		self.depth -= 1;
		result
	}

	fn parse(&mut self) -> Result<Vec<Statement>> {
		let mut result = Vec::with_capacity(4);
		loop {
			while self.consume_if(&Token::Semicolon) {}
			if self.is_eof() {
				break;
			}
			result.push(self.parse_statement()?);
			if !self.is_eof() {
				self.expect(&Token::Semicolon)?;
			}
		}
		if result.is_empty() {
			return_error!(parse_error("empty statement"));
		}
		Ok(result)
	}

	fn parse_statement(&mut self) -> Result<Statement> {
		match self.peek() {
			Some(Token::Keyword(Keyword::Create)) => self.parse_create(),
			Some(Token::Keyword(Keyword::Drop)) => self.parse_drop(),
			Some(Token::Keyword(Keyword::Insert)) => self.parse_insert(),
			Some(Token::Keyword(Keyword::Select)) => self.parse_select(),
			Some(Token::Keyword(Keyword::Update)) => return_error!(unsupported("UPDATE statement")),
			Some(Token::Keyword(Keyword::Delete)) => return_error!(unsupported("DELETE statement")),
			other => return_error!(parse_error(format!("expected a statement, found {}", describe(other)))),
		}
	}

	fn is_eof(&self) -> bool {
		self.position >= self.tokens.len()
	}

	fn peek(&self) -> Option<&Token> {
		self.tokens.get(self.position)
	}

	fn advance(&mut self) -> Result<Token> {
		match self.tokens.get(self.position) {
			Some(token) => {
				let token = token.clone();
				self.position += 1;
				Ok(token)
			}
			None => return_error!(parse_error("unexpected end of input")),
		}
	}

	fn expect(&mut self, expected: &Token) -> Result<()> {
		if self.peek() != Some(expected) {
			return_error!(parse_error(format!(
				"expected {}, found {}",
				describe(Some(expected)),
				describe(self.peek())
			)));
		}
		self.position += 1;
		Ok(())
	}

	fn expect_keyword(&mut self, keyword: Keyword) -> Result<()> {
		self.expect(&Token::Keyword(keyword))
	}

	fn consume_if(&mut self, expected: &Token) -> bool {
		if self.peek() == Some(expected) {
			self.position += 1;
			true
		} else {
			false
		}
	}

	fn consume_keyword_if(&mut self, keyword: Keyword) -> bool {
		self.consume_if(&Token::Keyword(keyword))
	}

	fn peek_keyword(&self) -> Option<Keyword> {
		match self.peek() {
			Some(Token::Keyword(keyword)) => Some(*keyword),
			_ => None,
		}
	}

	fn ident(&mut self, what: &str) -> Result<String> {
		match self.peek() {
			Some(Token::Ident(name)) => {
				let name = name.clone();
				self.position += 1;
				Ok(name)
			}
			other => return_error!(parse_error(format!("expected {}, found {}", what, describe(other)))),
		}
	}

	/// Parses `item (, item)*`.
	fn comma_separated<T>(&mut self, mut item: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
		let mut items = vec![item(self)?];
		while self.consume_if(&Token::Comma) {
			items.push(item(self)?);
		}
		Ok(items)
	}
}

fn describe(token: Option<&Token>) -> String {
	match token {
		None => "end of input".to_string(),
		Some(Token::Keyword(keyword)) => format!("`{}`", format!("{:?}", keyword).to_ascii_uppercase()),
		Some(Token::Ident(name)) => format!("identifier `{}`", name),
		Some(Token::Integer(n)) => format!("`{}`", n),
		Some(Token::Float(f)) => format!("`{}`", f),
		Some(Token::StringLit(s)) => format!("'{}'", s),
		Some(other) => {
			let symbol = match other {
				Token::Asterisk => "*",
				Token::Comma => ",",
				Token::Dot => ".",
				Token::Semicolon => ";",
				Token::OpenParen => "(",
				Token::CloseParen => ")",
				Token::Plus => "+",
				Token::Minus => "-",
				Token::Slash => "/",
				Token::Percent => "%",
				Token::Eq => "=",
				Token::NotEq => "<>",
				Token::Lt => "<",
				Token::Gt => ">",
				Token::LtEq => "<=",
				Token::GtEq => ">=",
				_ => "?",
			};
			format!("`{}`", symbol)
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		ast::{Expr, OrderByItem, SelectItem, Statement},
		parse,
	};

	#[test]
	fn test_multiple_statements() {
		let statements = parse("drop table a; drop table b;").unwrap();
		assert_eq!(statements.len(), 2);
		assert!(matches!(&statements[1], Statement::DropTable(drop) if drop.name == "b"));
	}

	#[test]
	fn test_missing_separator() {
		let err = parse("drop table a drop table b").unwrap_err();
		assert_eq!(err.code, "SQL_002");
	}

	#[test]
	fn test_empty_input() {
		assert_eq!(parse("").unwrap_err().code, "SQL_002");
		assert_eq!(parse(" ; ;").unwrap_err().code, "SQL_002");
	}

	#[test]
	fn test_unsupported_statements() {
		assert_eq!(parse("update t set a = 1").unwrap_err().code, "SQL_003");
		assert_eq!(parse("delete from t").unwrap_err().code, "SQL_003");
	}

	#[test]
	fn test_garbage() {
		let err = parse("hello world").unwrap_err();
		assert_eq!(err.code, "SQL_002");
		assert!(err.message.contains("identifier `hello`"));
	}

	#[test]
	fn test_select_order_by() {
		let statements = parse("SELECT a, b FROM t ORDER BY b DESC, a").unwrap();
		let Statement::Select(select) = &statements[0] else {
			panic!("expected select");
		};
		assert_eq!(
			select.items,
			vec![SelectItem::Expr(Expr::Column("a".into())), SelectItem::Expr(Expr::Column("b".into()))]
		);
		assert_eq!(
			select.order_by,
			vec![
				OrderByItem {
					expr: Expr::Column("b".into()),
					asc: false,
				},
				OrderByItem {
					expr: Expr::Column("a".into()),
					asc: true,
				},
			]
		);
	}
}
