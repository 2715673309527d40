// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use mpcdb_secret::{SecretBit, SecretValue};
use mpcdb_type::{FieldType, diagnostic::catalog::row_shape_mismatch, return_error};

use crate::{Record, Result, Schema, Snapshot};

/// A persisted row. Column names and types come from the owning table's
/// schema.
#[derive(Debug, Clone)]
pub struct Row {
	schema: Arc<Schema>,
	values: Vec<SecretValue>,
}

impl Row {
	pub fn new(schema: Arc<Schema>) -> Self {
		let capacity = schema.len();
		Self {
			schema,
			values: Vec::with_capacity(capacity),
		}
	}

	pub fn schema(&self) -> &Arc<Schema> {
		&self.schema
	}

	pub fn is_complete(&self) -> bool {
		self.values.len() == self.schema.len()
	}

	/// Detaches the row, stamping the copy with `valid`.
	pub fn to_snapshot(&self, valid: SecretBit) -> Snapshot {
		Snapshot::from_parts(
			self.schema.fields.clone(),
			self.schema.types.clone(),
			self.values.clone(),
			valid,
		)
	}

	fn value_types(&self) -> Vec<FieldType> {
		self.values.iter().map(SecretValue::ty).collect()
	}
}

impl Record for Row {
	fn values(&self) -> &[SecretValue] {
		&self.values
	}

	fn add_field(&mut self, name: &str, value: SecretValue) -> Result<()> {
		let idx = self.values.len();
		let expected_name = self.schema.fields.get(idx).map(String::as_str);
		let expected_type = self.schema.type_of(idx);
		if expected_name != Some(name) || expected_type != Some(value.ty()) {
			let mut actual = self.value_types();
			actual.push(value.ty());
			return_error!(row_shape_mismatch(&self.schema.name, &self.schema.types, &actual));
		}
		self.values.push(value);
		Ok(())
	}

	fn type_of(&self, idx: usize) -> Option<FieldType> {
		self.schema.type_of(idx)
	}

	fn index_of(&self, name: &str) -> Option<usize> {
		self.schema.index_of(name)
	}
}

#[cfg(test)]
mod tests {
	use mpcdb_secret::{SecretBit, SecretValue};
	use mpcdb_type::FieldType;

	use super::Row;
	use crate::{Record, test_utils::schema};

	#[test]
	fn test_add_field_in_schema_order() {
		let mut row = Row::new(schema("t", &[("a", FieldType::Int32), ("b", FieldType::Bit)]));
		row.add_field("a", SecretValue::zero(FieldType::Int32)).unwrap();
		assert!(!row.is_complete());
		row.add_field("b", SecretValue::zero(FieldType::Bit)).unwrap();
		assert!(row.is_complete());
		assert_eq!(row.index_of("b"), Some(1));
		assert_eq!(row.type_of(1), Some(FieldType::Bit));
	}

	#[test]
	fn test_add_field_wrong_type() {
		let mut row = Row::new(schema("t", &[("a", FieldType::Int32)]));
		let err = row.add_field("a", SecretValue::zero(FieldType::Int8)).unwrap_err();
		assert_eq!(err.code, "CA_007");
		assert!(row.is_empty());
	}

	#[test]
	fn test_add_field_past_schema() {
		let mut row = Row::new(schema("t", &[("a", FieldType::Int8)]));
		row.add_field("a", SecretValue::zero(FieldType::Int8)).unwrap();
		let err = row.add_field("b", SecretValue::zero(FieldType::Int8)).unwrap_err();
		assert_eq!(err.code, "CA_007");
	}

	#[test]
	fn test_to_snapshot_copies_metadata() {
		let mut row = Row::new(schema("t", &[("a", FieldType::Int16), ("b", FieldType::Int64)]));
		row.add_field("a", SecretValue::zero(FieldType::Int16)).unwrap();
		row.add_field("b", SecretValue::zero(FieldType::Int64)).unwrap();

		let snapshot = row.to_snapshot(SecretBit::zero());
		assert_eq!(snapshot.names(), &["a".to_string(), "b".to_string()]);
		assert_eq!(snapshot.index_of("b"), Some(1));
		assert_eq!(snapshot.type_of(0), Some(FieldType::Int16));
		assert!(!snapshot.is_padding());
	}
}
