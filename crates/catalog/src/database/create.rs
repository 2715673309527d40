// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use mpcdb_type::{
	FieldType,
	diagnostic::catalog::{duplicate_column, table_already_exists},
	return_error,
};
use tracing::instrument;

use crate::{Database, Result, Schema, Table};

#[derive(Debug, Clone, PartialEq)]
pub struct TableToCreate {
	pub name: String,
	pub fields: Vec<(String, FieldType)>,
}

impl Database {
	#[instrument(name = "catalog::table::create", level = "debug", skip(self, to_create), fields(table = %to_create.name))]
	pub fn create_table(&mut self, to_create: TableToCreate) -> Result<&Table> {
		if self.tables.contains_key(&to_create.name) {
			return_error!(table_already_exists(&to_create.name));
		}

		let mut seen = HashSet::new();
		for (field, _) in &to_create.fields {
			if !seen.insert(field.as_str()) {
				return_error!(duplicate_column(&to_create.name, field));
			}
		}

		let (fields, types): (Vec<String>, Vec<FieldType>) = to_create.fields.into_iter().unzip();
		let schema = Schema {
			name: to_create.name.clone(),
			fields,
			types,
		};
		let table: &Table = self.tables.entry(to_create.name).or_insert(Table::new(schema));
		Ok(table)
	}
}
