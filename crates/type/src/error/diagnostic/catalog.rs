// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{FieldType, error::diagnostic::Diagnostic};

pub fn database_already_exists(database: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_001".to_string(),
		statement: None,
		message: format!("Database `{}` already exists.", database),
		label: Some("duplicate database definition".to_string()),
		help: Some("choose a different name or drop the existing database first".to_string()),
		notes: vec![],
	}
}

pub fn database_not_found(database: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_002".to_string(),
		statement: None,
		message: format!("Database `{}` does not exist.", database),
		label: Some("unknown database reference".to_string()),
		help: Some("ensure the database exists or create it first using `CREATE DATABASE`".to_string()),
		notes: vec![],
	}
}

pub fn table_already_exists(table: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_003".to_string(),
		statement: None,
		message: format!("Table `{}` already exists.", table),
		label: Some("duplicate table definition".to_string()),
		help: Some("choose a different name or drop the existing table first".to_string()),
		notes: vec![],
	}
}

pub fn table_not_found(table: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_004".to_string(),
		statement: None,
		message: format!("Table `{}` does not exist.", table),
		label: Some("unknown table reference".to_string()),
		help: Some("ensure the table exists or create it first using `CREATE TABLE`".to_string()),
		notes: vec![],
	}
}

pub fn column_not_found(table: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_005".to_string(),
		statement: None,
		message: format!("Table `{}` does not have field `{}`.", table, column),
		label: Some("unknown column reference".to_string()),
		help: Some("check for typos or list the table's columns".to_string()),
		notes: vec![],
	}
}

pub fn no_database_selected() -> Diagnostic {
	Diagnostic {
		code: "CA_006".to_string(),
		statement: None,
		message: "No database selected.".to_string(),
		label: None,
		help: Some("select a database with `USE <name>` first".to_string()),
		notes: vec![],
	}
}

pub fn row_shape_mismatch(table: &str, expected: &[FieldType], actual: &[FieldType]) -> Diagnostic {
	Diagnostic {
		code: "CA_007".to_string(),
		statement: None,
		message: format!(
			"Row does not match the schema of table `{}`: expected {} field(s), got {}.",
			table,
			expected.len(),
			actual.len()
		),
		label: Some("persisted rows must match their table's schema exactly".to_string()),
		help: None,
		notes: vec![
			format!("schema types: {:?}", expected),
			format!("row types: {:?}", actual),
		],
	}
}

pub fn unsupported_column_type(column: &str, declared: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_008".to_string(),
		statement: None,
		message: format!("Unsupported data type `{}` for field `{}`.", declared, column),
		label: Some("only boolean and fixed-width integer columns can be secret-shared".to_string()),
		help: Some("use BOOLEAN, TINYINT, SMALLINT, INT or BIGINT (or INT(8|16|32|64))".to_string()),
		notes: vec![],
	}
}

pub fn duplicate_column(table: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_009".to_string(),
		statement: None,
		message: format!("Field `{}` is declared more than once in table `{}`.", column, table),
		label: Some("duplicate column definition".to_string()),
		help: Some("every column of a table needs a unique name".to_string()),
		notes: vec![],
	}
}
