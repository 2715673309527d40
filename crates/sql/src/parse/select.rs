// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::{diagnostic::sql::unsupported, return_error};

use crate::{
	Result,
	ast::{OrderByItem, SelectItem, SelectStatement, Statement},
	parse::Parser,
	token::{Keyword, Token},
};

impl Parser {
	pub(crate) fn parse_select(&mut self) -> Result<Statement> {
		self.expect_keyword(Keyword::Select)?;
		let items = self.comma_separated(Parser::parse_select_item)?;

		self.expect_keyword(Keyword::From)?;
		let from = self.ident("table name")?;
		if self.peek() == Some(&Token::Comma) || self.peek_keyword() == Some(Keyword::Join) {
			return_error!(unsupported("join"));
		}

		match self.peek_keyword() {
			Some(Keyword::Where) => return_error!(unsupported("WHERE clause")),
			Some(Keyword::Group) => return_error!(unsupported("GROUP BY clause")),
			Some(Keyword::Limit) => return_error!(unsupported("LIMIT clause")),
			_ => {}
		}

		let order_by = if self.consume_keyword_if(Keyword::Order) {
			self.expect_keyword(Keyword::By)?;
			self.comma_separated(Parser::parse_order_by_item)?
		} else {
			Vec::new()
		};

		if self.peek_keyword() == Some(Keyword::Limit) {
			return_error!(unsupported("LIMIT clause"));
		}

		Ok(Statement::Select(SelectStatement {
			items,
			from,
			order_by,
		}))
	}

	fn parse_select_item(&mut self) -> Result<SelectItem> {
		if self.consume_if(&Token::Asterisk) {
			return Ok(SelectItem::Wildcard);
		}
		Ok(SelectItem::Expr(self.parse_expr()?))
	}

	fn parse_order_by_item(&mut self) -> Result<OrderByItem> {
		let expr = self.parse_expr()?;
		let asc = if self.consume_keyword_if(Keyword::Desc) {
			false
		} else {
			self.consume_keyword_if(Keyword::Asc);
			true
		};
		Ok(OrderByItem {
			expr,
			asc,
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		ast::{Expr, SelectItem, Statement},
		parse,
	};

	#[test]
	fn test_select_star() {
		let statements = parse("select * from t").unwrap();
		let Statement::Select(select) = &statements[0] else {
			panic!("expected select");
		};
		assert_eq!(select.items, vec![SelectItem::Wildcard]);
		assert_eq!(select.from, "t");
		assert!(select.order_by.is_empty());
	}

	#[test]
	fn test_select_explicit_asc() {
		let statements = parse("select a from t order by a asc").unwrap();
		let Statement::Select(select) = &statements[0] else {
			panic!("expected select");
		};
		assert!(select.order_by[0].asc);
		assert_eq!(select.order_by[0].expr, Expr::Column("a".into()));
	}

	#[test]
	fn test_select_non_column_item() {
		let statements = parse("select 1 + a from t").unwrap();
		let Statement::Select(select) = &statements[0] else {
			panic!("expected select");
		};
		assert!(matches!(select.items[0], SelectItem::Expr(Expr::Binary { .. })));
	}

	#[test]
	fn test_select_unsupported_clauses() {
		assert_eq!(parse("select a from t where a = 1").unwrap_err().code, "SQL_003");
		assert_eq!(parse("select a from t, u").unwrap_err().code, "SQL_003");
		assert_eq!(parse("select a from t order by a limit 1").unwrap_err().code, "SQL_003");
	}

	#[test]
	fn test_select_without_from() {
		assert_eq!(parse("select 1").unwrap_err().code, "SQL_002");
	}
}
