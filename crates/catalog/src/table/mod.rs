// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use mpcdb_secret::{SecretBit, SecretValue};
use mpcdb_type::{FieldType, diagnostic::catalog::row_shape_mismatch, return_error};
use tracing::instrument;

use crate::{Record, Result, Row, Schema, Snapshot};

/// A schema plus its append-only rows.
#[derive(Debug, Clone)]
pub struct Table {
	schema: Arc<Schema>,
	rows: Vec<Row>,
}

impl Table {
	pub(crate) fn new(schema: Schema) -> Self {
		Self {
			schema: Arc::new(schema),
			rows: Vec::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.schema.name
	}

	pub fn schema(&self) -> &Arc<Schema> {
		&self.schema
	}

	pub fn fields(&self) -> &[String] {
		&self.schema.fields
	}

	pub fn types(&self) -> &[FieldType] {
		&self.schema.types
	}

	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	/// An empty row bound to this table's schema.
	pub fn new_row(&self) -> Row {
		Row::new(self.schema.clone())
	}

	#[instrument(name = "catalog::table::insert", level = "trace", skip(self, row), fields(table = %self.schema.name))]
	pub fn insert(&mut self, row: Row) -> Result<()> {
		if **row.schema() != *self.schema || !row.is_complete() {
			let actual: Vec<FieldType> = row.values().iter().map(SecretValue::ty).collect();
			return_error!(row_shape_mismatch(&self.schema.name, &self.schema.types, &actual));
		}
		self.rows.push(row);
		Ok(())
	}

	/// One freshly detached snapshot per stored row, each stamped with
	/// `valid`.
	#[instrument(name = "catalog::table::select_all", level = "trace", skip(self, valid), fields(table = %self.schema.name))]
	pub fn select_all(&self, valid: SecretBit) -> Vec<Snapshot> {
		self.rows.iter().map(|row| row.to_snapshot(valid)).collect()
	}
}

#[cfg(test)]
mod tests {
	use mpcdb_secret::{SecretBit, SecretValue};
	use mpcdb_type::FieldType;

	use crate::{Record, Row, test_utils::{schema, table, zero_row}};

	#[test]
	fn test_insert_and_select_all() {
		let mut table = table("t", &[("a", FieldType::Int32), ("b", FieldType::Int8)]);
		table.insert(zero_row(&table)).unwrap();
		table.insert(zero_row(&table)).unwrap();

		let snapshots = table.select_all(SecretBit::zero());
		assert_eq!(snapshots.len(), 2);
		for snapshot in &snapshots {
			assert_eq!(snapshot.names(), table.fields());
			assert_eq!(snapshot.types(), table.types());
			assert!(!snapshot.is_padding());
		}
	}

	#[test]
	fn test_select_all_is_recomputed() {
		let mut table = table("t", &[("a", FieldType::Int32)]);
		assert!(table.select_all(SecretBit::zero()).is_empty());
		table.insert(zero_row(&table)).unwrap();
		assert_eq!(table.select_all(SecretBit::zero()).len(), 1);
	}

	#[test]
	fn test_insert_incomplete_row() {
		let mut table = table("t", &[("a", FieldType::Int32), ("b", FieldType::Int8)]);
		let mut row = table.new_row();
		row.add_field("a", SecretValue::zero(FieldType::Int32)).unwrap();

		let err = table.insert(row).unwrap_err();
		assert_eq!(err.code, "CA_007");
		assert!(table.rows().is_empty());
	}

	#[test]
	fn test_insert_foreign_schema() {
		let mut table = table("t", &[("a", FieldType::Int32)]);
		let mut row = Row::new(schema("other", &[("a", FieldType::Int64)]));
		row.add_field("a", SecretValue::zero(FieldType::Int64)).unwrap();

		let err = table.insert(row).unwrap_err();
		assert_eq!(err.code, "CA_007");
	}
}
