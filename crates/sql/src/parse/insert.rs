// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::{diagnostic::sql::unsupported, return_error};

use crate::{
	Result,
	ast::{InsertStatement, Statement},
	parse::Parser,
	token::{Keyword, Token},
};

impl Parser {
	pub(crate) fn parse_insert(&mut self) -> Result<Statement> {
		self.expect_keyword(Keyword::Insert)?;
		self.expect_keyword(Keyword::Into)?;
		let table = self.ident("table name")?;

		let columns = if self.consume_if(&Token::OpenParen) {
			let columns = self.comma_separated(|parser| parser.ident("column name"))?;
			self.expect(&Token::CloseParen)?;
			Some(columns)
		} else {
			None
		};

		self.expect_keyword(Keyword::Values)?;
		self.expect(&Token::OpenParen)?;
		let values = self.comma_separated(Parser::parse_expr)?;
		self.expect(&Token::CloseParen)?;

		if self.peek() == Some(&Token::Comma) {
			return_error!(unsupported("multi-row VALUES list"));
		}

		Ok(Statement::Insert(InsertStatement {
			table,
			columns,
			values,
		}))
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		ast::{Expr, InsertStatement, Statement},
		parse,
	};

	#[test]
	fn test_insert_all_columns() {
		let statements = parse("INSERT INTO t VALUES (1, -2)").unwrap();
		assert_eq!(
			statements[0],
			Statement::Insert(InsertStatement {
				table: "t".into(),
				columns: None,
				values: vec![Expr::Integer(1), Expr::Neg(Box::new(Expr::Integer(2)))],
			})
		);
	}

	#[test]
	fn test_insert_named_columns() {
		let statements = parse("insert into t (b, a) values (3, 1);").unwrap();
		let Statement::Insert(insert) = &statements[0] else {
			panic!("expected insert");
		};
		assert_eq!(insert.columns, Some(vec!["b".to_string(), "a".to_string()]));
		assert_eq!(insert.values, vec![Expr::Integer(3), Expr::Integer(1)]);
	}

	#[test]
	fn test_insert_multi_row_unsupported() {
		assert_eq!(parse("insert into t values (1), (2)").unwrap_err().code, "SQL_003");
	}

	#[test]
	fn test_insert_missing_values() {
		assert_eq!(parse("insert into t (a)").unwrap_err().code, "SQL_002");
	}
}
