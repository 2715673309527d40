// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn tokenize_error(message: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "SQL_001".to_string(),
		statement: None,
		message: format!("Syntax error: {}.", message.into()),
		label: Some("the command could not be tokenized".to_string()),
		help: None,
		notes: vec![],
	}
}

pub fn parse_error(message: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "SQL_002".to_string(),
		statement: None,
		message: format!("Syntax error: {}.", message.into()),
		label: Some("the statement could not be parsed".to_string()),
		help: None,
		notes: vec![],
	}
}

pub fn unsupported(what: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "SQL_003".to_string(),
		statement: None,
		message: format!("Unsupported {}.", what.into()),
		label: Some("structurally valid but not supported by this store".to_string()),
		help: Some(
			"supported statements: CREATE/DROP TABLE, INSERT INTO ... VALUES, SELECT ... FROM ... [ORDER BY]"
				.to_string(),
		),
		notes: vec![],
	}
}

pub fn missing_database_name() -> Diagnostic {
	Diagnostic {
		code: "SQL_004".to_string(),
		statement: None,
		message: "Syntax error: Missing database name.".to_string(),
		label: None,
		help: Some("e.g. `CREATE DATABASE shop;`".to_string()),
		notes: vec![],
	}
}

pub fn trailing_characters_after_database_name() -> Diagnostic {
	Diagnostic {
		code: "SQL_004".to_string(),
		statement: None,
		message: "Syntax error: Invalid characters after database name.".to_string(),
		label: None,
		help: Some("a database command takes exactly one name, optionally followed by `;`".to_string()),
		notes: vec![],
	}
}
