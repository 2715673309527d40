// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	CreateTable(CreateTableStatement),
	DropTable(DropTableStatement),
	Insert(InsertStatement),
	Select(SelectStatement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
	pub name: String,
	pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
	pub name: String,
	pub ty: SqlType,
}

/// A declared column type as written, e.g. `INT` or `INT(16)`. Mapping to a
/// storable type happens when the table is created.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlType {
	pub name: String,
	pub argument: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropTableStatement {
	pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
	pub table: String,
	pub columns: Option<Vec<String>>,
	pub values: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
	pub items: Vec<SelectItem>,
	pub from: String,
	pub order_by: Vec<OrderByItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
	Wildcard,
	Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByItem {
	pub expr: Expr,
	pub asc: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
	Integer(u64),
	Float(f64),
	String(String),
	Bool(bool),
	Null,
	Column(String),
	Neg(Box<Expr>),
	Binary {
		op: BinaryOp,
		left: Box<Expr>,
		right: Box<Expr>,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
	Add,
	Sub,
	Mul,
	Div,
	Rem,
}

impl Expr {
	pub fn column_name(&self) -> Option<&str> {
		match self {
			Expr::Column(name) => Some(name),
			_ => None,
		}
	}
}
