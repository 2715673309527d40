// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::{
	diagnostic::sql::{parse_error, unsupported},
	return_error,
};

use crate::{
	Result,
	ast::{DropTableStatement, Statement},
	parse::{Parser, describe},
	token::Keyword,
};

impl Parser {
	pub(crate) fn parse_drop(&mut self) -> Result<Statement> {
		self.expect_keyword(Keyword::Drop)?;
		match self.peek_keyword() {
			Some(Keyword::Table) => {}
			Some(Keyword::Database) => return_error!(unsupported("DROP DATABASE inside a statement list")),
			_ => return_error!(parse_error(format!("expected `TABLE`, found {}", describe(self.peek())))),
		}
		self.advance()?;
		let name = self.ident("table name")?;
		Ok(Statement::DropTable(DropTableStatement {
			name,
		}))
	}
}

#[cfg(test)]
mod tests {
	use crate::{ast::Statement, parse};

	#[test]
	fn test_drop_table() {
		let statements = parse("DROP TABLE people;").unwrap();
		assert!(matches!(&statements[0], Statement::DropTable(drop) if drop.name == "people"));
	}

	#[test]
	fn test_drop_without_name() {
		assert_eq!(parse("drop table").unwrap_err().code, "SQL_002");
	}

	#[test]
	fn test_drop_view() {
		assert_eq!(parse("drop view v").unwrap_err().code, "SQL_002");
	}
}
