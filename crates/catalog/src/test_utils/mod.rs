// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use mpcdb_secret::SecretValue;
use mpcdb_type::FieldType;

use crate::{Database, Record, Row, Schema, Table, TableToCreate};

pub fn schema(name: &str, fields: &[(&str, FieldType)]) -> Arc<Schema> {
	Arc::new(Schema {
		name: name.to_string(),
		fields: fields.iter().map(|(field, _)| field.to_string()).collect(),
		types: fields.iter().map(|(_, ty)| *ty).collect(),
	})
}

pub fn table_to_create(name: &str, fields: &[(&str, FieldType)]) -> TableToCreate {
	TableToCreate {
		name: name.to_string(),
		fields: fields.iter().map(|(field, ty)| (field.to_string(), *ty)).collect(),
	}
}

pub fn table(name: &str, fields: &[(&str, FieldType)]) -> Table {
	let mut database = Database::new("test_database");
	database.create_table(table_to_create(name, fields)).unwrap();
	database.drop_table(name).unwrap()
}

/// A complete row of zero shares for `table`.
pub fn zero_row(table: &Table) -> Row {
	let mut row = table.new_row();
	for (field, ty) in table.fields().iter().zip(table.types()) {
		row.add_field(field, SecretValue::zero(*ty)).unwrap();
	}
	row
}
