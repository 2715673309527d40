// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::FieldType;

/// Name and ordered columns of a table. Shared by the table and every row it
/// owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
	pub name: String,
	pub fields: Vec<String>,
	pub types: Vec<FieldType>,
}

impl Schema {
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.fields.iter().position(|field| field == name)
	}

	pub fn type_of(&self, idx: usize) -> Option<FieldType> {
		self.types.get(idx).copied()
	}
}
