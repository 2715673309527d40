// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::{
	diagnostic::sql::{parse_error, unsupported},
	return_error,
};

use crate::{
	Result,
	ast::{BinaryOp, Expr},
	parse::{Parser, describe},
	token::{Keyword, Token},
};

impl Parser {
	pub(crate) fn parse_expr(&mut self) -> Result<Expr> {
		let mut left = self.parse_term()?;
		loop {
			let op = match self.peek() {
				Some(Token::Plus) => BinaryOp::Add,
				Some(Token::Minus) => BinaryOp::Sub,
				_ => return Ok(left),
			};
			self.position += 1;
			let right = self.parse_term()?;
			left = Expr::Binary {
				op,
				left: Box::new(left),
				right: Box::new(right),
			};
		}
	}

	fn parse_term(&mut self) -> Result<Expr> {
		let mut left = self.parse_unary()?;
		loop {
			let op = match self.peek() {
				Some(Token::Asterisk) => BinaryOp::Mul,
				Some(Token::Slash) => BinaryOp::Div,
				Some(Token::Percent) => BinaryOp::Rem,
				_ => return Ok(left),
			};
			self.position += 1;
			let right = self.parse_unary()?;
			left = Expr::Binary {
				op,
				left: Box::new(left),
				right: Box::new(right),
			};
		}
	}

	fn parse_unary(&mut self) -> Result<Expr> {
		if self.consume_if(&Token::Minus) {
			let inner = self.nested(Self::parse_unary)?;
			return Ok(Expr::Neg(Box::new(inner)));
		}
		if self.consume_if(&Token::Plus) {
			return self.nested(Self::parse_unary);
		}
		self.parse_primary()
	}

	fn parse_primary(&mut self) -> Result<Expr> {
		let expr = match self.advance()? {
			Token::Integer(n) => Expr::Integer(n),
			Token::Float(f) => Expr::Float(f),
			Token::StringLit(s) => Expr::String(s),
			Token::Keyword(Keyword::True) => Expr::Bool(true),
			Token::Keyword(Keyword::False) => Expr::Bool(false),
			Token::Keyword(Keyword::Null) => Expr::Null,
			Token::Ident(name) => {
				if self.peek() == Some(&Token::Dot) {
					return_error!(unsupported("qualified column reference"));
				}
				if self.peek() == Some(&Token::OpenParen) {
					return_error!(unsupported(format!("function call `{}`", name)));
				}
				Expr::Column(name)
			}
			Token::OpenParen => {
				let inner = self.nested(Self::parse_expr)?;
				self.expect(&Token::CloseParen)?;
				inner
			}
			other => {
				return_error!(parse_error(format!("expected an expression, found {}", describe(Some(&other)))))
			}
		};
		Ok(expr)
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		ast::{BinaryOp, Expr, Statement},
		parse,
	};

	fn values(sql: &str) -> Vec<Expr> {
		match parse(sql).unwrap().remove(0) {
			Statement::Insert(insert) => insert.values,
			other => panic!("expected insert, got {:?}", other),
		}
	}

	#[test]
	fn test_literals() {
		assert_eq!(
			values("insert into t values (1, 2.5, 'x', true, false, null)"),
			vec![
				Expr::Integer(1),
				Expr::Float(2.5),
				Expr::String("x".into()),
				Expr::Bool(true),
				Expr::Bool(false),
				Expr::Null,
			]
		);
	}

	#[test]
	fn test_negation() {
		assert_eq!(values("insert into t values (-5)"), vec![Expr::Neg(Box::new(Expr::Integer(5)))]);
		assert_eq!(
			values("insert into t values (- -5)"),
			vec![Expr::Neg(Box::new(Expr::Neg(Box::new(Expr::Integer(5)))))]
		);
	}

	#[test]
	fn test_double_dash_is_a_comment() {
		assert_eq!(parse("insert into t values (--5)").unwrap_err().code, "SQL_002");
	}

	#[test]
	fn test_precedence() {
		assert_eq!(
			values("insert into t values (1 + 2 * 3)"),
			vec![Expr::Binary {
				op: BinaryOp::Add,
				left: Box::new(Expr::Integer(1)),
				right: Box::new(Expr::Binary {
					op: BinaryOp::Mul,
					left: Box::new(Expr::Integer(2)),
					right: Box::new(Expr::Integer(3)),
				}),
			}]
		);
	}

	#[test]
	fn test_parenthesized() {
		assert_eq!(values("insert into t values ((7))"), vec![Expr::Integer(7)]);
	}

	#[test]
	fn test_nesting_limit() {
		let ok = format!("insert into t values ({}7{})", "(".repeat(100), ")".repeat(100));
		assert_eq!(values(&ok), vec![Expr::Integer(7)]);

		let parens = format!("select {}a{} from t", "(".repeat(100_000), ")".repeat(100_000));
		let err = parse(&parens).unwrap_err();
		assert_eq!(err.code, "SQL_002");
		assert!(err.message.contains("nested too deeply"), "{}", err.message);

		let signs = format!("insert into t values ({}5)", "- ".repeat(100_000));
		assert_eq!(parse(&signs).unwrap_err().code, "SQL_002");
	}

	#[test]
	fn test_function_call_unsupported() {
		assert_eq!(parse("select count(a) from t").unwrap_err().code, "SQL_003");
	}
}
