// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::{
	diagnostic::sql::{parse_error, unsupported},
	return_error,
};

use crate::{
	Result,
	ast::{ColumnDef, CreateTableStatement, SqlType, Statement},
	parse::{Parser, describe},
	token::{Keyword, Token},
};

impl Parser {
	pub(crate) fn parse_create(&mut self) -> Result<Statement> {
		self.expect_keyword(Keyword::Create)?;
		match self.peek_keyword() {
			Some(Keyword::Table) => {}
			Some(Keyword::Database) => return_error!(unsupported("CREATE DATABASE inside a statement list")),
			Some(Keyword::Index) => return_error!(unsupported("CREATE INDEX statement")),
			_ => return_error!(parse_error(format!("expected `TABLE`, found {}", describe(self.peek())))),
		}
		self.advance()?;

		let name = self.ident("table name")?;
		self.expect(&Token::OpenParen)?;
		if self.peek() == Some(&Token::CloseParen) {
			return_error!(parse_error(format!("table `{}` needs at least one column", name)));
		}
		let columns = self.comma_separated(Parser::parse_column_def)?;
		self.expect(&Token::CloseParen)?;

		Ok(Statement::CreateTable(CreateTableStatement {
			name,
			columns,
		}))
	}

	fn parse_column_def(&mut self) -> Result<ColumnDef> {
		if self.peek_keyword() == Some(Keyword::Primary) {
			return_error!(unsupported("table constraint"));
		}
		let name = self.ident("column name")?;
		let type_name = self.ident("column type")?;
		let argument = if self.consume_if(&Token::OpenParen) {
			let argument = match self.advance()? {
				Token::Integer(n) => n,
				other => return_error!(parse_error(format!(
					"expected a type argument, found {}",
					describe(Some(&other))
				))),
			};
			self.expect(&Token::CloseParen)?;
			Some(argument)
		} else {
			None
		};

		if matches!(self.peek_keyword(), Some(Keyword::Primary | Keyword::Not | Keyword::Null)) {
			return_error!(unsupported("column constraint"));
		}

		Ok(ColumnDef {
			name,
			ty: SqlType {
				name: type_name,
				argument,
			},
		})
	}
}
