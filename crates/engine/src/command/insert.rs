// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_catalog::Record;
use mpcdb_network::Transport;
use mpcdb_secret::SecretEngine;
use mpcdb_sql::ast::{Expr, InsertStatement};
use mpcdb_type::{
	FieldType,
	diagnostic::{
		catalog::{column_not_found, table_not_found},
		value::{arity_mismatch, unsupported_value, value_out_of_range},
	},
	error, return_error,
};
use tracing::{debug, instrument};

use crate::{Message, Result, session::Session};

impl<E: SecretEngine, T: Transport> Session<E, T> {
	/// Validates the literal values, then deals one share per schema column.
	/// Columns left out of the statement are inserted as zero.
	#[instrument(name = "engine::table::insert", level = "debug", skip(self, statement), fields(table = %statement.table))]
	pub(crate) fn insert(&mut self, statement: InsertStatement) -> Result<String> {
		let database = self.catalog.current()?;
		let Some(table) = database.table(&statement.table) else {
			return_error!(table_not_found(&statement.table));
		};
		let schema = table.schema().clone();

		let columns = statement.columns.unwrap_or_else(|| schema.fields.clone());
		if columns.len() != statement.values.len() {
			return_error!(arity_mismatch(columns.len(), statement.values.len()));
		}

		let mut supplied: Vec<Option<i64>> = vec![None; schema.len()];
		for (column, expr) in columns.iter().zip(&statement.values) {
			let Some(idx) = schema.index_of(column) else {
				return_error!(column_not_found(&schema.name, column));
			};
			let ty = schema.types[idx];
			let value = literal(column, expr, ty)?;
			supplied[idx].get_or_insert(value);
		}

		self.broadcast(&Message::Insert {
			name: schema.name.clone(),
		})?;
		for (ty, value) in schema.types.iter().zip(supplied) {
			self.engine.share(*ty, value.unwrap_or(0))?;
		}
		self.collect_acks()?;

		Ok(format!("Record inserted into `{}`.", schema.name))
	}

	pub(crate) fn apply_insert(&mut self, name: &str) -> Result<()> {
		let Some(table) = self.catalog.current_mut()?.table_mut(name) else {
			return_error!(table_not_found(name));
		};

		let mut row = table.new_row();
		let schema = row.schema().clone();
		for (field, ty) in schema.fields.iter().zip(&schema.types) {
			let value = self.engine.share(*ty, 0)?;
			row.add_field(field, value)?;
		}
		table.insert(row)?;
		debug!(table = name, rows = table.rows().len(), "row stored");
		Ok(())
	}
}

/// Accepts an integer literal, optionally negated once, that fits `ty`.
fn literal(column: &str, expr: &Expr, ty: FieldType) -> Result<i64> {
	let value = match expr {
		Expr::Integer(n) => *n as i128,
		Expr::Neg(inner) => match inner.as_ref() {
			Expr::Integer(n) => -(*n as i128),
			_ => return_error!(unsupported_value(column)),
		},
		_ => return_error!(unsupported_value(column)),
	};

	let (min, max) = ty.range();
	if value < min as i128 || value > max as i128 {
		return_error!(value_out_of_range(column, value, ty));
	}
	i64::try_from(value).map_err(|_| error!(value_out_of_range(column, value, ty)))
}

#[cfg(test)]
mod tests {
	use mpcdb_sql::ast::Expr;
	use mpcdb_type::FieldType;

	use super::literal;

	fn neg(n: u64) -> Expr {
		Expr::Neg(Box::new(Expr::Integer(n)))
	}

	#[test]
	fn test_bounds() {
		assert_eq!(literal("a", &Expr::Integer(127), FieldType::Int8).unwrap(), 127);
		assert_eq!(literal("a", &neg(128), FieldType::Int8).unwrap(), -128);
		assert_eq!(literal("a", &Expr::Integer(1), FieldType::Bit).unwrap(), 1);
		assert_eq!(literal("a", &neg(1 << 63), FieldType::Int64).unwrap(), i64::MIN);
		assert_eq!(literal("a", &Expr::Integer(i64::MAX as u64), FieldType::Int64).unwrap(), i64::MAX);
	}

	#[test]
	fn test_out_of_range() {
		for (expr, ty) in [
			(Expr::Integer(128), FieldType::Int8),
			(neg(129), FieldType::Int8),
			(Expr::Integer(2), FieldType::Bit),
			(neg(1), FieldType::Bit),
			(Expr::Integer(1 << 63), FieldType::Int64),
			(Expr::Integer(u64::MAX), FieldType::Int32),
		] {
			let err = literal("a", &expr, ty).unwrap_err();
			assert_eq!(err.code, "VALUE_003", "{:?} {}", expr, ty);
			assert_eq!(err.message, "Inserted parameters out of range.");
		}
	}

	#[test]
	fn test_unsupported_literals() {
		for expr in [
			Expr::String("x".into()),
			Expr::Float(1.5),
			Expr::Null,
			Expr::Bool(true),
			Expr::Column("b".into()),
			Expr::Neg(Box::new(neg(1))),
		] {
			assert_eq!(literal("a", &expr, FieldType::Int32).unwrap_err().code, "VALUE_002");
		}
	}
}
